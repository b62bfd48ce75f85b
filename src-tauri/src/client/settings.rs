use serde_json::{Map, Value};

use super::bindings::ConfigCommands;
use crate::shared::error::{AppError, AppResult};

/// Parsed settings blob.
///
/// Holds whatever JSON the command returned. In practice it is an object of
/// string keys to arbitrary values, but no schema is enforced on read.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings(Value);

impl Settings {
    /// Top-level value for `key`; `None` when missing or when the blob is not an object
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// `true` only when the `configured` key holds boolean `true`
    pub fn is_configured(&self) -> bool {
        self.get("configured").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Fetch the config string and parse it. Nothing is cached; every call
/// goes back through the binding.
pub async fn get_settings(commands: &dyn ConfigCommands) -> AppResult<Settings> {
    let content = commands.get_config_content().await?;
    let value = serde_json::from_str(&content).map_err(|e| AppError::Parse(e.to_string()))?;
    Ok(Settings(value))
}
