//! Server configuration types.
//!
//! `ServerConfig` represents the `config.toml` in the data directory that
//! controls the listen address and database location.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the chatapi server.
///
/// Loaded from `~/.chatapi/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port for the HTTP listener.
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite connection URL. When unset, a database file inside the data
    /// directory is used.
    #[serde(default)]
    pub database_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_server_config_deserialize_with_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_server_config_deserialize_partial() {
        let toml_str = r#"
port = 9000
database_url = "sqlite:///tmp/chats.db"
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url.as_deref(), Some("sqlite:///tmp/chats.db"));
    }
}
