//! Configuration for the record registry.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Registry configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Seed fixture configuration
    #[serde(default)]
    pub seed: SeedConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// JSON fixture with the initial records (built-in seed if unset)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl ServerConfig {
    /// Socket address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address: {:?}", self.listen_addr))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    9090
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(config::Environment::default().separator("__"))
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(source)
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default()
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_source(env(&[])).unwrap();

        assert_eq!(config.server.listen_addr, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert!(config.seed.path.is_none());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_source(env(&[
            ("SERVER__PORT", "8080"),
            ("SEED__PATH", "/tmp/seed.json"),
            ("LOG__LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.seed.path, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        assert_eq!(
            server.socket_addr().unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
    }

    #[test]
    fn test_socket_addr_rejects_bad_listen_addr() {
        let server = ServerConfig {
            listen_addr: "localhost".into(),
            port: 9090,
        };

        let err = server.socket_addr().unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
