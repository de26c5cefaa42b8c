//! Field editor configuration persistence
//!
//! Stores settings in `~/.config/fieldedit/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::date_format::DateFormatSetting;
use crate::field::DEFAULT_FIELD_PREFIX;

/// Field whose successful save reloads the page by default
pub const DEFAULT_RELOAD_FIELD: &str = "category";

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEditConfig {
    /// URL of the field-modification endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// UI-only prefix stripped from field keys
    #[serde(default = "default_field_prefix")]
    pub field_prefix: String,

    /// Server field names whose save reloads the page
    #[serde(default = "default_reload_fields")]
    pub reload_fields: Vec<String>,

    /// Date display order (`auto` probes the locale)
    #[serde(default)]
    pub date_format: DateFormatSetting,
}

fn default_endpoint() -> String {
    "http://localhost:8080/api/modify_field".to_string()
}

fn default_field_prefix() -> String {
    DEFAULT_FIELD_PREFIX.to_string()
}

fn default_reload_fields() -> Vec<String> {
    vec![DEFAULT_RELOAD_FIELD.to_string()]
}

impl Default for FieldEditConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            field_prefix: default_field_prefix(),
            reload_fields: default_reload_fields(),
            date_format: DateFormatSetting::default(),
        }
    }
}

impl FieldEditConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
