//! Runtime configuration for the profile store server.
//!
//! Values come from environment variables (a `.env` file is honoured), each
//! with a default suitable for running the app locally.

use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "farms.sqlite";

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (`FARMS_HOST`).
    pub host: String,
    /// TCP port (`FARMS_PORT`).
    pub port: u16,
    /// SQLite file backing the profile store (`FARMS_DB_PATH`).
    pub db_path: PathBuf,
    /// Open the default browser once the server is up (`FARMS_OPEN_BROWSER`).
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unparseable
    /// values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("FARMS_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = lookup("FARMS_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let db_path = lookup("FARMS_DB_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
            .into();

        let open_browser = lookup("FARMS_OPEN_BROWSER")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self {
            host,
            port,
            db_path,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("farms.sqlite"));
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides_and_ignores_garbage_port() {
        let config = config_from(&[
            ("FARMS_HOST", "0.0.0.0"),
            ("FARMS_PORT", "not-a-port"),
            ("FARMS_DB_PATH", "/tmp/profile.sqlite"),
            ("FARMS_OPEN_BROWSER", "false"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("/tmp/profile.sqlite"));
        assert!(!config.open_browser);
    }
}
