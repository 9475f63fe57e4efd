//! Runtime configuration, resolved once at startup.
//!
//! Precedence: environment overrides, then `config.json` in the user config
//! directory, then defaults. The resolved values are injected into the API
//! client and services rather than read ambiently at call sites.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};

/// Default backend base URL for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

/// Default inbox polling interval in seconds.
const DEFAULT_POLL_SECS: u64 = 30;

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "TEMPMAIL_API_URL";

/// Environment variable overriding the session data directory.
pub const ENV_DATA_DIR: &str = "TEMPMAIL_DATA_DIR";

/// Optional on-disk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api_url: Option<String>,
    #[serde(default)]
    data_dir: Option<PathBuf>,
    #[serde(default)]
    poll_interval_secs: Option<u64>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API.
    pub base_url: Url,
    /// Directory holding the persisted session files.
    pub data_dir: PathBuf,
    /// Interval between inbox refreshes in watch mode.
    pub poll_interval: Duration,
}

impl Config {
    /// Resolves the configuration from environment, file, and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL does not parse or no
    /// data directory can be determined.
    pub fn load() -> Result<Self> {
        let file = read_file_config();

        let raw_url = env::var(ENV_API_URL)
            .ok()
            .or_else(|| file.api_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url)
            .map_err(|err| Error::Config(format!("invalid API URL {raw_url:?}: {err}")))?;

        let data_dir = env::var_os(ENV_DATA_DIR)
            .map(PathBuf::from)
            .or(file.data_dir)
            .or_else(|| dirs::data_dir().map(|dir| dir.join("tempmail")))
            .ok_or_else(|| Error::Config("no data directory available".to_string()))?;

        let poll_interval =
            Duration::from_secs(file.poll_interval_secs.unwrap_or(DEFAULT_POLL_SECS));

        debug!(%base_url, data_dir = %data_dir.display(), "configuration resolved");
        Ok(Self {
            base_url,
            data_dir,
            poll_interval,
        })
    }
}

/// Reads `config.json` from the user config directory; missing or
/// unparsable files fall back to defaults.
fn read_file_config() -> FileConfig {
    let Some(path) = dirs::config_dir().map(|dir| dir.join("tempmail").join("config.json")) else {
        return FileConfig::default();
    };
    match std::fs::read(&path) {
        Ok(raw) => serde_json::from_slice(&raw).unwrap_or_else(|err| {
            warn!("ignoring unparsable config {}: {err}", path.display());
            FileConfig::default()
        }),
        Err(_) => FileConfig::default(),
    }
}
