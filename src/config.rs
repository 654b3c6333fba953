//! Application configuration management.
//!
//! Holds the backend endpoint, API key, and the user id whose dashboard is
//! loaded. Stored at `~/.config/lifeboard/config.json`; any field can be
//! overridden through the `LIFEBOARD_*` environment variables.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "lifeboard";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub user_id: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Environment variables win over file contents.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("LIFEBOARD_API_URL") {
            self.api_url = Some(url);
        }
        if let Ok(key) = std::env::var("LIFEBOARD_API_KEY") {
            self.api_key = Some(key);
        }
        if let Ok(user) = std::env::var("LIFEBOARD_USER_ID") {
            self.user_id = Some(user);
        }
        self
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
