pub mod client;
pub mod config;
pub mod shared;

#[cfg(feature = "desktop")]
mod api;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use log::{error, info, warn};
    use tauri::Manager;

    use crate::config::ConfigStore;

    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            let store = ConfigStore::open_default()?;
            info!("Config file: {}", store.path().display());
            app.manage(store);

            // Warm the cache off the main thread; a bad file only matters once read
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let store = handle.state::<ConfigStore>();
                match store.load().await {
                    Ok(config) => info!("✅ Config loaded (configured: {})", config.is_configured()),
                    Err(e) => warn!("Failed to load config: {}", e),
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::commands::config::get_config_content,
            api::commands::config::update_config,
            api::commands::config::clear_config_cache,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            error!("FATAL: Failed to start Tauri application: {}", e);
            eprintln!("FATAL: Failed to start Tauri application: {}", e);
            std::process::exit(1);
        });
}
