//! Application error type shared by the store, the commands and the client
//!
//! All variants carry a message string and serialize as `{ type, message }`
//! so the frontend receives a structured rejection over IPC.

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "type", content = "message")]
#[ts(export, export_to = "../../src/bindings/")]
pub enum AppError {
    /// Reading or writing the config file failed
    #[error("I/O Error: {0}")]
    Io(String),

    /// Content was not valid JSON
    #[error("Parse Error: {0}")]
    Parse(String),

    /// Valid JSON that does not describe a config object
    #[error("Validation Error: {0}")]
    Validation(String),

    /// The command binding itself failed (transport, missing state, host error)
    #[error("Command Error: {0}")]
    Command(String),

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => AppError::Validation(err.to_string()),
            serde_json::error::Category::Io => AppError::Io(err.to_string()),
            _ => AppError::Parse(err.to_string()),
        }
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Unknown(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Unknown(err.to_string())
    }
}

// Helper for Tauri Result
pub type AppResult<T> = Result<T, AppError>;
