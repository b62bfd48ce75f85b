use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::Config;

/// Event channel for config changes
pub const CONFIG_UPDATED: &str = "config://updated";

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export, export_to = "../../src/bindings/")]
pub enum AppEvent {
    #[serde(rename = "config://updated")]
    ConfigUpdated(Config),
}

impl AppEvent {
    /// Channel name the event is emitted on
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::ConfigUpdated(_) => CONFIG_UPDATED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_name_matches_channel() {
        let event = AppEvent::ConfigUpdated(Config::default());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], event.name());
        assert_eq!(json["payload"], serde_json::json!({}));
    }
}
