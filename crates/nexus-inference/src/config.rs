//! AI service configuration.
//!
//! A single JSON record holding the Gemini API key and model choice,
//! read at startup and rewritten whenever the user updates the key.
//! Resolution order: `NEXUS_CONFIG_PATH` file → default config path →
//! environment variables. An absent or empty key means AI features report
//! "not configured" instead of attempting a call.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use nexus_core::defaults;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

fn default_model() -> String {
    defaults::GEN_MODEL.to_string()
}

/// The persisted configuration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Gemini API key; `None` or empty means AI features are unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Generation model name.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

impl AiConfig {
    /// Resolve the config file location: `NEXUS_CONFIG_PATH` wins, else the
    /// platform config directory.
    pub fn default_config_path() -> PathBuf {
        if let Ok(path) = env::var(defaults::ENV_CONFIG_PATH) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(defaults::APP_DIR)
            .join(defaults::CONFIG_FILE)
    }

    /// Load from the default path, falling back to environment variables
    /// when no config file exists.
    pub fn load() -> ConfigResult<Self> {
        let path = Self::default_config_path();

        if path.exists() {
            info!(path = %path.display(), "loading AI config");
            Self::from_file(&path)
        } else {
            debug!(path = %path.display(), "config file not found, using environment");
            Ok(Self::from_env())
        }
    }

    /// Load from a JSON file, with environment variables taking precedence
    /// over file values.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: AiConfig = serde_json::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Build purely from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(key) = env::var(defaults::ENV_API_KEY) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(model) = env::var(defaults::ENV_GEN_MODEL) {
            if !model.is_empty() {
                self.model = model;
            }
        }
    }

    /// Persist to the given path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "AI config saved");
        Ok(())
    }

    /// Persist to the default config path.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Whether a usable API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Key for display: everything masked except the last few characters.
    /// Returns `None` when no key is configured.
    pub fn masked_key(&self) -> Option<String> {
        let key = self.api_key.as_deref().filter(|k| !k.is_empty())?;
        let chars: Vec<char> = key.chars().collect();
        let visible = defaults::KEY_MASK_VISIBLE.min(chars.len());
        let tail: String = chars[chars.len() - visible..].iter().collect();
        Some(format!("{}{}", "*".repeat(chars.len() - visible), tail))
    }
}
