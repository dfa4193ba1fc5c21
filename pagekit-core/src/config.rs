//! Configuration for the pagekit workspace
//!
//! Loaded from `~/.pagekit/config.toml` when it exists, otherwise defaults.
//! Environment variables override file values:
//!
//! - `DATABASE_URL`
//! - `PAGEKIT_MAX_CONNECTIONS`
//! - `PAGEKIT_BIND`
//! - `PAGEKIT_CONFIG` (alternate config file path)

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;
use crate::models::DEFAULT_PAGE_SIZE;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {var}")]
    Env { var: &'static str, value: String },

    #[error("invalid config value for {field}: {value} (must be at least 1)")]
    Invalid { field: &'static str, value: u32 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagekitConfig {
    pub database: DatabaseConfig,
    pub server: ServerSection,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/pagekit".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when a request does not specify one
    pub default_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagekitConfig {
    /// Load config from the default path (if present) and apply env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Config file path: `$PAGEKIT_CONFIG` or `~/.pagekit/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("PAGEKIT_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pagekit/config.toml")
    }

    /// Parse and validate a config file without env overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no request or pool could work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.default_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "pagination.default_page_size",
                value: 0,
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                field: "database.max_connections",
                value: 0,
            });
        }
        Ok(())
    }

    /// Apply overrides from a variable lookup (the process env in `load`).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(value) = lookup("PAGEKIT_MAX_CONNECTIONS") {
            self.database.max_connections = value
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Env {
                    var: "PAGEKIT_MAX_CONNECTIONS",
                    value,
                })?;
        }
        if let Some(value) = lookup("PAGEKIT_BIND") {
            self.server.bind = value.parse().map_err(|_| ConfigError::Env {
                var: "PAGEKIT_BIND",
                value,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = PagekitConfig::default();
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.server.bind.port(), 3030);
        assert_eq!(config.pagination.default_page_size, 10);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [database]
            url = "postgres://db/shop"

            [pagination]
            default_page_size = 25
            "#
        )
        .unwrap();

        let config = PagekitConfig::load_from(file.path()).unwrap();
        assert_eq!(config.database.url, "postgres://db/shop");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.pagination.default_page_size, 25);
        assert!(!config.server.cors_permissive);
    }

    #[test]
    fn invalid_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database\nurl = 1").unwrap();
        assert!(matches!(
            PagekitConfig::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn zero_sizes_in_file_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pagination]\ndefault_page_size = 0").unwrap();
        let err = PagekitConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "pagination.default_page_size", value: 0 }
        ));
        assert!(err.to_string().contains("must be at least 1"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nmax_connections = 0").unwrap();
        assert!(matches!(
            PagekitConfig::load_from(file.path()),
            Err(ConfigError::Invalid { field: "database.max_connections", .. })
        ));
    }

    #[test]
    fn env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_URL", "postgres://env/db"),
            ("PAGEKIT_MAX_CONNECTIONS", "12"),
            ("PAGEKIT_BIND", "0.0.0.0:8080"),
        ]);
        let mut config = PagekitConfig::default();
        config
            .apply_env(|var| env.get(var).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.database.url, "postgres://env/db");
        assert_eq!(config.database.max_connections, 12);
        assert_eq!(config.server.bind.port(), 8080);
    }

    #[test]
    fn bad_env_value() {
        let mut config = PagekitConfig::default();
        let err = config
            .apply_env(|var| (var == "PAGEKIT_MAX_CONNECTIONS").then(|| "0".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "PAGEKIT_MAX_CONNECTIONS", .. }));
    }
}
