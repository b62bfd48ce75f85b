use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::BaseDirs;
use log::{debug, error, info, warn};
use tokio::fs;

use super::model::Config;
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;

/// Directory name of the app inside the user's config directory
pub const CONFIG_DIR_NAME: &str = "recorder.wcw.apps.wcw-recorder";

/// File holding the serialized [`Config`]
pub const CONFIG_FILE_NAME: &str = "config.json";

const EMPTY_CONFIG: &str = "{}";

/// File-backed JSON config store with a read-through cache.
///
/// `update` runs read-merge-write under an async lock, so concurrent
/// updates never drop each other's fields. The file is only ever replaced
/// by rename, so unlocked readers never observe a partial write.
pub struct ConfigStore {
    path: PathBuf,
    cache: Mutex<Option<Config>>,
    write_lock: tokio::sync::Mutex<()>,
}

impl ConfigStore {
    /// Store backed by an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Store at `<user config dir>/recorder.wcw.apps.wcw-recorder/config.json`
    pub fn open_default() -> AppResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> AppResult<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| AppError::Io("Failed to determine config directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file content. A missing file is created as `{}`.
    pub async fn read_content(&self) -> AppResult<String> {
        self.ensure_parent_dir().await?;
        debug!("get config from path: {}", self.path.display());

        if let Some(content) = self.read_file().await? {
            return Ok(content);
        }

        let _guard = self.write_lock.lock().await;
        self.read_or_create().await
    }

    /// Parsed config, served from the cache when warm
    pub async fn load(&self) -> AppResult<Config> {
        if let Some(config) = self.cached() {
            return Ok(config);
        }

        let content = self.read_content().await?;
        let config = parse_stored(&content)?;

        self.set_cache(Some(config.clone()));
        Ok(config)
    }

    /// Merge a JSON payload over the stored config and persist the result.
    ///
    /// Returns the merged config. An invalid payload leaves the file untouched.
    pub async fn update(&self, config_content: &str) -> AppResult<Config> {
        let incoming = Config::from_json(config_content).map_err(|e| {
            warn!("Rejected config update: {}", e);
            AppError::from(e)
        })?;

        self.ensure_parent_dir().await?;
        let _guard = self.write_lock.lock().await;

        // Re-read under the lock so a concurrent writer's fields are kept
        let current = parse_stored(&self.read_or_create().await?)?;
        let merged = incoming.merge(current);

        let content = serde_json::to_string(&merged)
            .map_err(|e| AppError::Unknown(format!("Failed to serialize config: {}", e)))?;
        self.replace_file(&content).await?;
        self.set_cache(Some(merged.clone()));

        info!("Config updated at {}", self.path.display());
        Ok(merged)
    }

    /// Like [`ConfigStore::update`], handing the resulting event to `notify` on success
    pub async fn update_and_notify<F>(&self, config_content: &str, notify: F) -> AppResult<Config>
    where
        F: FnOnce(AppEvent),
    {
        let merged = self.update(config_content).await?;
        notify(AppEvent::ConfigUpdated(merged.clone()));
        Ok(merged)
    }

    /// Drop the cached config; the next `load` re-reads the file
    pub fn clear_cache(&self) {
        self.set_cache(None);
    }

    async fn read_file(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(format!("Failed to read config file: {}", e))),
        }
    }

    // Caller holds `write_lock`
    async fn read_or_create(&self) -> AppResult<String> {
        if let Some(content) = self.read_file().await? {
            return Ok(content);
        }

        info!("No config file yet, creating {}", self.path.display());
        self.replace_file(EMPTY_CONFIG).await?;
        Ok(EMPTY_CONFIG.to_string())
    }

    /// Write to a sibling temp file, then rename over the config.
    /// Readers see the old or the new content, never a partial file.
    async fn replace_file(&self, content: &str) -> AppResult<()> {
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content)
            .await
            .map_err(|e| AppError::Io(format!("Failed to write config file: {}", e)))?;

        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to replace config file: {}", e)))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| CONFIG_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent_dir(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }
        Ok(())
    }

    fn cached(&self) -> Option<Config> {
        match self.cache.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => {
                warn!("[ConfigStore] Cache mutex poisoned, recovering...");
                poisoned.into_inner().clone()
            }
        }
    }

    fn set_cache(&self, config: Option<Config>) {
        let mut guard = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("[ConfigStore] Cache mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        };
        *guard = config;
    }
}

fn parse_stored(content: &str) -> AppResult<Config> {
    Config::from_json(content).map_err(|e| {
        error!("get config failed: {}", e);
        AppError::from(e)
    })
}
