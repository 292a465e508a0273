use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const API_URL: &str = "KEEPCUT_API_URL";
const CARD_API_URL: &str = "KEEPCUT_CARD_API_URL";
const DATA_DIR: &str = "KEEPCUT_DATA_DIR";
const HTTP_TIMEOUT_SECS: &str = "KEEPCUT_HTTP_TIMEOUT_SECS";
const PAGE_SIZE: &str = "KEEPCUT_PAGE_SIZE";

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_CARD_API_URL: &str = "https://api.scryfall.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("No data directory available, set KEEPCUT_DATA_DIR")]
    NoDataDir,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub card_api_url: String,
    pub data_dir: PathBuf,
    pub timeout: Duration,
    pub page_size: u32,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let data_dir = match lookup(DATA_DIR) {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("com", "keepcut", "keepcut")
                .ok_or(ConfigError::NoDataDir)?
                .data_local_dir()
                .to_path_buf(),
        };

        let timeout = match lookup(HTTP_TIMEOUT_SECS) {
            Some(value) => Duration::from_secs(positive(HTTP_TIMEOUT_SECS, value)?),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let page_size = match lookup(PAGE_SIZE) {
            Some(value) => u32::try_from(positive(PAGE_SIZE, value.clone())?)
                .map_err(|_| ConfigError::InvalidNumber { var: PAGE_SIZE, value })?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_url: trimmed_url(lookup(API_URL).unwrap_or_else(|| DEFAULT_API_URL.into())),
            card_api_url: trimmed_url(
                lookup(CARD_API_URL).unwrap_or_else(|| DEFAULT_CARD_API_URL.into()),
            ),
            data_dir,
            timeout,
            page_size,
        })
    }
}

fn positive(var: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}

fn trimmed_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
