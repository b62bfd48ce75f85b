use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

/// Persisted application configuration.
///
/// Every known field is optional so a payload may carry only the keys it
/// wants to change. Keys the app does not know about are kept in `extra`
/// and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../src/bindings/")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub hotkey: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub display_window_hotkey: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub writing_hotkey: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub always_show_icons: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub hide_the_icon_in_the_dock: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub configured: Option<bool>,

    /// Keys the app does not know. Left out of the generated TS type; the
    /// frontend reads them through the parsed settings object.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl Config {
    /// Parse a config payload. Anything other than a JSON object is rejected.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Whether the first-run setup has been completed
    pub fn is_configured(&self) -> bool {
        self.configured.unwrap_or(false)
    }

    /// Overlay `self` on top of `old`.
    ///
    /// Fields set in `self` win; unset fields fall back to `old`. Extra keys
    /// set to `null` in `self` are ignored.
    pub fn merge(self, old: Config) -> Config {
        let mut extra = old.extra;
        for (key, value) in self.extra {
            if !value.is_null() {
                extra.insert(key, value);
            }
        }

        Config {
            hotkey: self.hotkey.or(old.hotkey),
            display_window_hotkey: self.display_window_hotkey.or(old.display_window_hotkey),
            writing_hotkey: self.writing_hotkey.or(old.writing_hotkey),
            always_show_icons: self.always_show_icons.or(old.always_show_icons),
            hide_the_icon_in_the_dock: self
                .hide_the_icon_in_the_dock
                .or(old.hide_the_icon_in_the_dock),
            configured: self.configured.or(old.configured),
            extra,
        }
    }
}
