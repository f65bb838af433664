//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Fallback API endpoint for local development
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Environment variable overriding the API base URL
pub const API_BASE_URL_ENV: &str = "GANTRY_API_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Base URL of the backing API
    pub api_base_url: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("gantry.db"),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Configuration for this machine, honoring the environment override
    pub fn from_env() -> Self {
        let mut config = Self::new(Self::data_dir());
        if let Ok(value) = std::env::var(API_BASE_URL_ENV) {
            config.apply_base_url_override(&value);
        }
        config
    }

    /// Apply an externally supplied base URL, ignoring values that do not
    /// parse so a bad environment cannot keep the shell from starting
    pub fn apply_base_url_override(&mut self, value: &str) {
        match Url::parse(value) {
            Ok(_) => self.api_base_url = value.to_string(),
            Err(e) => {
                tracing::warn!(
                    value = %value,
                    error = %e,
                    "Ignoring invalid API base URL override"
                );
            }
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Gantry"))
            .unwrap_or_else(|| PathBuf::from(".gantry"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Simple dirs implementation for common directories
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
