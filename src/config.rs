use dotenvy;
use std::{env, path::PathBuf, str::FromStr};

use crate::error::ConfigError;

const ENV_FILE: &str = "rvrpapers.env";

pub const DEFAULT_ARXIV_API_BASE: &str = "http://export.arxiv.org/api/query?";
pub const DEFAULT_MAX_RESULTS: i32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_EDITION: &str = "verified";

#[derive(Debug, Clone, PartialEq)]
pub struct ArxivConfig {
    pub base_url: String,
    pub max_results: i32,
    pub timeout_secs: u64,
    pub probe: bool,
}

impl ArxivConfig {
    pub fn default() -> Self {
        ArxivConfig {
            base_url: String::from(DEFAULT_ARXIV_API_BASE),
            max_results: DEFAULT_MAX_RESULTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            probe: false,
        }
    }

    pub fn new(base_url: String, max_results: i32, timeout_secs: u64, probe: bool) -> Self {
        ArxivConfig {
            base_url,
            max_results,
            timeout_secs,
            probe
        }
    }

    fn from_vars<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("ARXIV_API_BASE")
            .unwrap_or_else(|| String::from(DEFAULT_ARXIV_API_BASE));
        let max_results = parse_or(lookup, "ARXIV_MAX_RESULTS", DEFAULT_MAX_RESULTS)?;
        let timeout_secs = parse_or(lookup, "ARXIV_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(invalid("ARXIV_TIMEOUT_SECS", "0"));
        }
        let probe = parse_or(lookup, "ARXIV_PROBE", false)?;
        Ok(Self::new(base_url, max_results, timeout_secs, probe))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub edition: String,
    pub catalog_path: Option<PathBuf>,
    pub arxiv: ArxivConfig,
}

impl Config {
    pub fn default() -> Self {
        Config {
            edition: String::from(DEFAULT_EDITION),
            catalog_path: None,
            arxiv: ArxivConfig::default()
        }
    }

    /// Reads `rvrpapers.env` when present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::from_filename(ENV_FILE).ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let edition = lookup("RVRPAPERS_EDITION")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_EDITION));
        let catalog_path = lookup("RVRPAPERS_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Ok(Config {
            edition,
            catalog_path,
            arxiv: ArxivConfig::from_vars(&lookup)?
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| invalid(key, &raw)),
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string()
    }
}
