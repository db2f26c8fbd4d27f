use crate::error::{RelcheckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for relcheck.
///
/// Controls which file is watched, where release branches are pushed, and
/// how they are named.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,
}

fn default_version_file() -> String {
    "VERSION".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Created branches are prefixed so long-lived release branches are
/// recognizable (e.g. "rel-2.0"); the emitted version_branch output stays
/// the bare series.
fn default_branch_prefix() -> String {
    "rel-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            remote: default_remote(),
            branch_prefix: default_branch_prefix(),
        }
    }
}

impl Config {
    /// Full name of the release branch for a series (e.g. "2.0" -> "rel-2.0")
    pub fn branch_name(&self, series: &str) -> String {
        format!("{}{}", self.branch_prefix, series)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relcheck.toml` in current directory
/// 3. `.relcheck.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./relcheck.toml").exists() {
        fs::read_to_string("./relcheck.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".relcheck.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| RelcheckError::config(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version_file, "VERSION");
        assert_eq!(config.remote, "origin");
        assert_eq!(config.branch_prefix, "rel-");
    }

    #[test]
    fn test_branch_name() {
        let config = Config::default();
        assert_eq!(config.branch_name("2.0"), "rel-2.0");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(r#"remote = "upstream""#).unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.version_file, "VERSION");
        assert_eq!(config.branch_prefix, "rel-");
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            version_file = "upf/VERSION"
            remote = "github"
            branch_prefix = "release-"
            "#,
        )
        .unwrap();
        assert_eq!(config.version_file, "upf/VERSION");
        assert_eq!(config.branch_name("1.4"), "release-1.4");
    }
}
