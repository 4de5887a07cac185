//! Server configuration loader for chatapi.
//!
//! Reads `config.toml` from the data directory (`~/.chatapi/` in production)
//! and deserializes it into [`ServerConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::{Path, PathBuf};

use chatapi_types::config::ServerConfig;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `CHATAPI_DATA_DIR` environment variable
/// 2. `~/.chatapi`
/// 3. `./.chatapi`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHATAPI_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".chatapi");
    }

    PathBuf::from(".chatapi")
}

/// Load server configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_server_config(data_dir: &Path) -> ServerConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServerConfig::default()
        }
    }
}
