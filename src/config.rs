use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::map::MapProvider;

/// Top-level configuration for geophoto.
///
/// Controls which map service located images link to and how coordinates
/// are printed.
///
/// # Loading
///
/// ```rust,no_run
/// use geophoto::config::Config;
/// use geophoto::map::MapProvider;
///
/// // From a JSON file
/// let config = Config::load(Some("config.json".as_ref())).unwrap();
///
/// // Or use defaults and customize
/// let mut config = Config::default();
/// config.map.provider = MapProvider::Google;
/// config.output.precision = 4;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Map link settings.
    #[serde(default)]
    pub map: MapConfig,
    /// Display settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Map service and zoom level used for links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub provider: MapProvider,
    /// Zoom level, clamped to 1–19 when the URL is built.
    pub zoom: u8,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places used when printing coordinates.
    pub precision: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            provider: MapProvider::OpenStreetMap,
            zoom: 15,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

impl Config {
    /// Resolve the config file path — same directory as the executable.
    pub fn config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe().context("Failed to get executable path")?;
        let exe_dir = exe_path
            .parent()
            .context("Failed to get executable directory")?;
        Ok(exe_dir.join("config.json"))
    }

    /// Load config from the given path, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            log::warn!(
                "Config file not found at {}. Using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the given path, or to the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;
        log::info!("Config saved to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.map.provider, MapProvider::OpenStreetMap);
        assert_eq!(config.map.zoom, 15);
        assert_eq!(config.output.precision, 6);
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.json"))).unwrap();
        assert_eq!(config.map.zoom, 15);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.map.provider = MapProvider::Google;
        config.map.zoom = 12;
        config.output.precision = 3;
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.map.provider, MapProvider::Google);
        assert_eq!(loaded.map.zoom, 12);
        assert_eq!(loaded.output.precision, 3);
    }

    #[test]
    fn load_partial_file_fills_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "map": { "provider": "google", "zoom": 10 } }"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.map.provider, MapProvider::Google);
        assert_eq!(config.output.precision, 6);
    }

    #[test]
    fn load_invalid_json_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
