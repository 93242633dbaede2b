//! Server configuration, read from the environment.

use std::time::Duration;

use anyhow::{Context, Result, bail};

use userstore_file::StoreConfig;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3333";
const DEFAULT_STORE_PATH: &str = "users.json";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub store: StoreConfig,
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    ///
    /// - `BIND_ADDRESS` (default `0.0.0.0:3333`)
    /// - `USERSTORE_PATH` (default `users.json`)
    /// - `USERSTORE_PRETTY` (`1`/`true` to indent the file)
    /// - `REQUEST_TIMEOUT_SECS` (default 60)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let path = lookup("USERSTORE_PATH").unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());

        let pretty = match lookup("USERSTORE_PRETTY") {
            Some(value) => parse_flag(&value).context("Invalid USERSTORE_PRETTY")?,
            None => false,
        };

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .context("Invalid REQUEST_TIMEOUT_SECS")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_address,
            store: StoreConfig::new(path).pretty(pretty),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:3333");
        assert_eq!(config.store.path, PathBuf::from("users.json"));
        assert!(!config.store.pretty);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("USERSTORE_PATH", "/data/users.json"),
            ("USERSTORE_PRETTY", "true"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.store.path, PathBuf::from("/data/users.json"));
        assert!(config.store.pretty);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_from(&[("REQUEST_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("USERSTORE_PRETTY", "maybe")]).is_err());
    }
}
