//! Configuration management for the tarefas application.
//!
//! One JSON file in the platform data directory holds the application
//! settings. Today that is a single optional module: the remote task
//! server. `read()` returns defaults when no file exists so the binary
//! runs without setup (commands that need the server report it cleanly),
//! and `init()` provides the interactive wizard driven by the `init`
//! subcommand.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Remote task-server connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task service API, e.g. `https://tasks.example.com`.
    pub api_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Task server connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default (empty) configuration when no file exists;
    /// a file that exists but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration with pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Existing values are offered as defaults so re-running `init` only
    /// updates what the user changes.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let default = config.server.clone().unwrap_or(ServerConfig { api_url: "".to_string() });
        msg_print!(Message::ConfigModuleServer);
        config.server = Some(ServerConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
        });

        Ok(config)
    }

    /// Returns the server settings, or a setup hint when unconfigured.
    pub fn server(&self) -> Result<ServerConfig> {
        self.server.clone().ok_or_else(|| msg_error_anyhow!(Message::ConfigNotFound))
    }
}
