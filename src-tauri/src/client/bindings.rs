use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ConfigStore;
use crate::shared::error::AppResult;

/// The config commands as the frontend sees them.
///
/// Mirrors the generated `getConfigContent` / `updateConfig` bindings. Callers
/// treat an implementation as an opaque RPC endpoint.
#[async_trait]
pub trait ConfigCommands: Send + Sync {
    /// JSON-encoded config string
    async fn get_config_content(&self) -> AppResult<String>;

    /// Persist a JSON-encoded config payload
    async fn update_config(&self, config_content: String) -> AppResult<()>;
}

/// Calls straight into a [`ConfigStore`] in the same process
#[derive(Clone)]
pub struct LocalCommands {
    store: Arc<ConfigStore>,
}

impl LocalCommands {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }
}

#[async_trait]
impl ConfigCommands for LocalCommands {
    async fn get_config_content(&self) -> AppResult<String> {
        self.store.read_content().await
    }

    async fn update_config(&self, config_content: String) -> AppResult<()> {
        self.store.update(&config_content).await.map(|_| ())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_commands_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let commands = LocalCommands::new(Arc::new(ConfigStore::new(dir.path().join("config.json"))));

        assert_eq!(commands.get_config_content().await.unwrap(), "{}");

        commands
            .update_config(r#"{"hotkey":"Alt+R"}"#.to_string())
            .await
            .unwrap();

        assert_eq!(commands.get_config_content().await.unwrap(), r#"{"hotkey":"Alt+R"}"#);
        assert_eq!(commands.store().load().await.unwrap().hotkey.as_deref(), Some("Alt+R"));
    }
}
