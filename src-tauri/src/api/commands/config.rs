//! Config command module
//!
//! Backs the frontend's `getConfigContent` / `updateConfig` bindings.

use log::debug;
use tauri::{AppHandle, State};

use crate::config::ConfigStore;
use crate::shared::emit::emit_event;
use crate::shared::error::AppResult;

/// Raw JSON content of the config file
#[tauri::command]
pub async fn get_config_content(store: State<'_, ConfigStore>) -> AppResult<String> {
    store.read_content().await
}

/// Merge a JSON-encoded partial config into the stored one
#[tauri::command]
pub async fn update_config(
    app_handle: AppHandle,
    store: State<'_, ConfigStore>,
    config_content: String,
) -> AppResult<()> {
    debug!("update_config payload: {}", config_content);
    store
        .update_and_notify(&config_content, |event| emit_event(&app_handle, event))
        .await
        .map(|_| ())
}

/// Force the next read to go back to disk
#[tauri::command]
pub fn clear_config_cache(store: State<'_, ConfigStore>) {
    store.clear_cache();
}
