//! Configuration management for hookcard CLI
//!
//! Stores the webhook URL and card settings in ~/.config/hookcard/config.toml

use anyhow::{Context, Result};
use hookcard_integration_dingtalk::DingtalkConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "hookcard";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the stored webhook URL
pub const WEBHOOK_URL_ENV: &str = "HOOKCARD_WEBHOOK_URL";

/// CLI Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// DingTalk robot webhook URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub dingtalk: DingtalkConfig,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn set_webhook_url(&mut self, url: String) {
        self.webhook_url = Some(url);
    }

    pub fn set_title(&mut self, title: String) {
        self.dingtalk.title = title;
    }

    /// Pick the webhook URL: explicit flag, then environment, then config
    pub fn resolve_webhook_url(&self, flag: Option<String>, env: Option<String>) -> Option<String> {
        let non_empty = |url: &String| !url.is_empty();
        flag.filter(non_empty)
            .or(env.filter(non_empty))
            .or_else(|| self.webhook_url.clone().filter(non_empty))
    }
}
