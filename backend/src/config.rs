//! Server configuration file support and environment variable handling.
//!
//! Settings come from a TOML file (optional) and are then overridden by
//! environment variables:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! body_limit_bytes = 1048576
//! log_level = "info"
//!
//! [cors]
//! extra_origins = ["https://stats.example.com"]
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::fs;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "NUMSTATS_CONFIG";

/// Config file looked up in the working directory when `NUMSTATS_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "numstats.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

/// Listener and request handling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    /// Fallback filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit_bytes(),
            log_level: default_log_level(),
        }
    }
}

/// Cross-origin settings.
///
/// Loopback origins are always allowed; `extra_origins` lists further exact
/// origins (e.g. a deployed frontend).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorsSettings {
    #[serde(default)]
    pub extra_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_body_limit_bytes() -> usize {
    1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration the way the server binary does.
    ///
    /// 1. The file named by `NUMSTATS_CONFIG`, if set (must exist)
    /// 2. Otherwise `numstats.toml` in the current directory, if present
    /// 3. Otherwise built-in defaults
    ///
    /// Environment overrides are applied on top; see
    /// [`ServerConfig::apply_env_overrides`].
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override settings from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST`: bind address
    /// - `PORT`: bind port
    /// - `NUMSTATS_BODY_LIMIT`: maximum request body size in bytes
    /// - `NUMSTATS_LOG`: fallback log filter
    /// - `NUMSTATS_CORS_ORIGINS`: comma-separated extra allowed origins
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = parse_value("PORT", &port)?;
        }
        if let Ok(limit) = env::var("NUMSTATS_BODY_LIMIT") {
            self.server.body_limit_bytes = parse_value("NUMSTATS_BODY_LIMIT", &limit)?;
        }
        if let Ok(level) = env::var("NUMSTATS_LOG") {
            self.server.log_level = level;
        }
        if let Ok(origins) = env::var("NUMSTATS_CORS_ORIGINS") {
            self.cors.extra_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
        }
        Ok(())
    }

    /// Resolve the address to bind.
    ///
    /// Accepts IP literals (`0.0.0.0`, `::1`) and resolvable host names
    /// (`localhost`).
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.server.host.as_str();
        let port = self.server.port;

        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, port));
        }

        let invalid = |reason: String| ConfigError::InvalidValue {
            key: "host".to_string(),
            value: host.to_string(),
            reason,
        };

        (host, port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("no addresses resolved".to_string()))
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.body_limit_bytes, 1024 * 1024);
        assert_eq!(config.server.log_level, "info");
        assert!(config.cors.extra_origins.is_empty());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = ServerConfig::from_toml_str(
            r#"
            [server]
            port = 9090

            [cors]
            extra_origins = ["https://stats.example.com"]
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cors.extra_origins, vec!["https://stats.example.com"]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ServerConfig::from_toml_str("[server]\nport = \"eighty\"").is_err());
    }

    #[test]
    fn test_socket_addr_ipv4_and_ipv6() {
        let mut config = ServerConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 3000;
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );

        config.server.host = "::1".to_string();
        assert_eq!(
            config.socket_addr().unwrap(),
            "[::1]:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_parse_value_reports_key() {
        let err = parse_value::<u16>("PORT", "99999").unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(err.to_string().contains("99999"));
    }
}
