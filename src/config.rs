//! Application configuration loaded from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// Version reported by `/`, `/health` and `/stats`.
pub const API_VERSION: &str = "2.0.0";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment name shown to clients (`ENV`).
    #[serde(default = "default_env")]
    pub env: String,

    /// Listening port (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log filter directives (`RUST_LOG`); unset means the verbose default.
    #[serde(default)]
    pub rust_log: Option<String>,
}

fn default_env() -> String {
    "development".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            port: default_port(),
            rust_log: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Parse from an explicit set of variables instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.env, "development");
        assert_eq!(config.port, 8080);
        assert!(config.rust_log.is_none());
    }

    #[test]
    fn reads_log_filter() {
        let config = AppConfig::from_vars(vars(&[("RUST_LOG", "warn")])).unwrap();
        assert_eq!(config.rust_log.as_deref(), Some("warn"));
    }

    #[test]
    fn reads_env_and_port() {
        let config = AppConfig::from_vars(vars(&[("ENV", "production"), ("PORT", "9000")])).unwrap();
        assert_eq!(config.env, "production");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(AppConfig::from_vars(vars(&[("PORT", "eighty")])).is_err());
    }

    #[test]
    fn binds_all_interfaces() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }
}
