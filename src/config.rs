use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::todo::DEFAULT_SEED_COUNT;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Number of placeholder tasks the list starts with
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_seed_count() -> usize {
    DEFAULT_SEED_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            seed_count: default_seed_count(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Read config from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Apply command line overrides on top of file values.
    pub fn with_overrides(mut self, seed_count: Option<usize>, theme: Option<String>) -> Self {
        if let Some(seed_count) = seed_count {
            self.seed_count = seed_count;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.seed_count, 2500);
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
        theme = "dark"
        seed_count = 10
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.seed_count, 10);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(r#"theme = "light""#).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.seed_count, DEFAULT_SEED_COUNT);
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.seed_count, DEFAULT_SEED_COUNT);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "seed_count = 3\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.seed_count, 3);
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn test_load_from_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "seed_count = \"many\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(0), Some("dark".to_string()));
        assert_eq!(config.seed_count, 0);
        assert_eq!(config.theme, "dark");

        let untouched = Config::default().with_overrides(None, None);
        assert_eq!(untouched.seed_count, DEFAULT_SEED_COUNT);
        assert_eq!(untouched.theme, "default");
    }
}
