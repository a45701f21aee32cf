use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_TIMELINE_START_YEAR: i32 = 2006;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub rust_log: String,
    /// Root directory served under `/assets`.
    pub assets_dir: PathBuf,
    /// Left edge of the header timeline.
    pub timeline_start_year: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            rust_log: "info".to_string(),
            assets_dir: PathBuf::from("public"),
            timeline_start_year: DEFAULT_TIMELINE_START_YEAR,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            bind_addr: match lookup("BIND_ADDR") {
                Some(v) => v.parse().context("BIND_ADDR must be a valid IP address")?,
                None => defaults.bind_addr,
            },
            port: match lookup("PORT") {
                Some(v) => v.parse().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            timeline_start_year: match lookup("TIMELINE_START_YEAR") {
                Some(v) => v
                    .parse()
                    .context("TIMELINE_START_YEAR must be a year like 2006")?,
                None => defaults.timeline_start_year,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeline_start_year, 2006);
        assert_eq!(config.assets_dir, PathBuf::from("public"));
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("BIND_ADDR", "127.0.0.1"),
            ("ASSETS_DIR", "/srv/folio"),
            ("TIMELINE_START_YEAR", "2010"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.assets_dir, PathBuf::from("/srv/folio"));
        assert_eq!(config.timeline_start_year, 2010);
    }

    #[test]
    fn test_bad_port_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
