use log::error;
use tauri::{AppHandle, Emitter};

use super::events::AppEvent;

/// Emit an application event to all windows
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    let result = match &event {
        AppEvent::ConfigUpdated(config) => app.emit(event.name(), config),
    };

    if let Err(e) = result {
        error!("Failed to emit {}: {}", event.name(), e);
    }
}
