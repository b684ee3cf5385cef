//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Settings for the default `run` command
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Inputs for the greeting and factorial demo
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct DemoConfig {
    /// Name passed to the greeting
    #[serde(default = "default_name")]
    pub name: String,

    /// Argument passed to the factorial
    #[serde(default = "default_factorial_input")]
    pub factorial_input: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            factorial_input: default_factorial_input(),
        }
    }
}

fn default_name() -> String {
    "World".to_string()
}

fn default_factorial_input() -> i64 {
    5
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
            tracing::info!("No config file at {}, using defaults", path.display());
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit path, which must be a regular file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file '{}' does not exist",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(Error::Config(format!(
                "config path '{}' is not a file",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        tracing::info!("Loaded config from {}", path.display());
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.demo.name, "World");
        assert_eq!(config.demo.factorial_input, 5);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_section() {
        let config = Config::parse("[demo]\nname = \"Ferris\"\n").unwrap();
        assert_eq!(config.demo.name, "Ferris");
        assert_eq!(config.demo.factorial_input, 5);
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let config = Config::parse("[other]\nkey = 1\n\n[demo]\nfactorial_input = 7\n").unwrap();
        assert_eq!(config.demo.factorial_input, 7);
    }

    #[test]
    fn test_invalid_type_is_parse_error() {
        let err = Config::parse("[demo]\nfactorial_input = \"five\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path()).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, Error::Config(_)));
        assert!(msg.contains("is not a file"), "{msg}");
        assert!(!msg.contains("does not exist"), "{msg}");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[demo]\nname = \"Rust\"\nfactorial_input = 3\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.demo.name, "Rust");
        assert_eq!(config.demo.factorial_input, 3);
    }
}
