use std::sync::Arc;

use log::debug;
use serde_json::json;

use super::bindings::ConfigCommands;
use crate::shared::error::AppResult;

/// First-run setup screen
pub struct SetupScreen {
    commands: Arc<dyn ConfigCommands>,
}

impl SetupScreen {
    pub fn new(commands: Arc<dyn ConfigCommands>) -> Self {
        Self { commands }
    }

    /// Button handler: marks the app as configured.
    ///
    /// Each press is an independent call; failures are returned to the caller.
    pub async fn greet(&self) -> AppResult<()> {
        let payload = json!({ "configured": true }).to_string();
        debug!("greet -> update_config({})", payload);
        self.commands.update_config(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::bindings::testing::ScriptedCommands;
    use crate::client::{get_settings, LocalCommands};
    use crate::config::ConfigStore;
    use crate::shared::error::AppError;

    #[tokio::test]
    async fn test_greet_sends_exactly_one_configured_payload() {
        let commands = Arc::new(ScriptedCommands::returning("{}"));
        let screen = SetupScreen::new(commands.clone());

        screen.greet().await.unwrap();

        assert_eq!(commands.recorded(), vec![r#"{"configured":true}"#.to_string()]);
    }

    #[tokio::test]
    async fn test_greet_rejects_when_command_rejects() {
        let commands = Arc::new(ScriptedCommands::failing(AppError::Io("read-only".to_string())));
        let screen = SetupScreen::new(commands.clone());

        let err = screen.greet().await.unwrap_err();

        assert_eq!(err, AppError::Io("read-only".to_string()));
        assert_eq!(commands.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_presses_are_not_deduplicated() {
        let commands = Arc::new(ScriptedCommands::returning("{}"));
        let screen = SetupScreen::new(commands.clone());

        let (a, b, c) = tokio::join!(screen.greet(), screen.greet(), screen.greet());
        a.unwrap();
        b.unwrap();
        c.unwrap();

        assert_eq!(commands.recorded().len(), 3);
    }

    #[tokio::test]
    async fn test_greet_then_read_reports_configured() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"theme":"dark","configured":false}"#).unwrap();
        let commands = Arc::new(LocalCommands::new(Arc::new(ConfigStore::new(
            dir.path().join("config.json"),
        ))));

        assert!(!get_settings(&*commands).await.unwrap().is_configured());

        SetupScreen::new(commands.clone()).greet().await.unwrap();

        let settings = get_settings(&*commands).await.unwrap();
        assert!(settings.is_configured());
        assert_eq!(settings.get("theme"), Some(&serde_json::json!("dark")));
    }
}
