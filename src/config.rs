use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::export::EXPORT_FILE_NAME;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "EFRAME_FIGURE_CONFIG";

/// Result type for config loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Startup settings. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid visible and snapping on at startup
    pub show_grid: bool,
    pub export_dir: PathBuf,
    pub export_file_name: String,
    /// Text in exported PNGs is only drawn when fonts are available
    pub load_system_fonts: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            export_dir: PathBuf::from("."),
            export_file_name: EXPORT_FILE_NAME.to_owned(),
            load_system_fonts: true,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        Self::load(&path).unwrap_or_else(|err| {
            log::warn!("Ignoring config {}: {err}", path.display());
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{ "show_grid": false }"#).unwrap();
        assert!(!config.show_grid);
        assert_eq!(config.export_file_name, "figure.png");
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert!(config.load_system_fonts);
    }

    #[test]
    fn test_malformed_json() {
        let result = EditorConfig::from_json("{ show_grid: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = EditorConfig::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
