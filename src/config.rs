//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any lookup runs.
//!
//! ## Optional Variables
//!
//! - `BREED_SOURCE` - Sub-breed source: `local` or `remote` (default: `local`)
//! - `DOG_API_BASE_URL` - Breed endpoint root (default: `https://dog.ceo/api/breed/`)
//! - `HTTP_TIMEOUT_SECONDS` - Per-request timeout for the remote source (default: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export BREED_SOURCE="remote"
//! export DOG_API_BASE_URL="https://dog.ceo/api/breed/"
//! ```

use crate::infrastructure::fetchers::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::env;
use std::time::Duration;

/// Where sub-breed lists come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BreedSource {
    /// In-memory stub, no network access
    Local,
    /// dog.ceo HTTP API
    Remote,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: BreedSource,
    pub dog_api_base_url: String,
    /// Total timeout for one request to the dog API, in seconds.
    pub http_timeout_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BREED_SOURCE` or `HTTP_TIMEOUT_SECONDS` is set to an
    /// unparseable value.
    pub fn from_env() -> Result<Self> {
        let source = match env::var("BREED_SOURCE") {
            Ok(value) => BreedSource::from_str(&value, true).map_err(|_| {
                anyhow::anyhow!("BREED_SOURCE must be 'local' or 'remote', got '{value}'")
            })?,
            Err(_) => BreedSource::Local,
        };

        let dog_api_base_url =
            env::var("DOG_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let http_timeout_seconds = match env::var("HTTP_TIMEOUT_SECONDS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("HTTP_TIMEOUT_SECONDS must be a number, got '{value}'"))?,
            Err(_) => 10,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            source,
            dog_api_base_url,
            http_timeout_seconds,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `dog_api_base_url` is not an http(s) URL
    /// - `http_timeout_seconds` is outside `1..=300`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.dog_api_base_url.starts_with("http://")
            && !self.dog_api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "DOG_API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.dog_api_base_url
            );
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 300 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        Ok(())
    }

    /// Request timeout for the remote source.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Breed source: {:?}", self.source);
        if self.source == BreedSource::Remote {
            tracing::info!("  Dog API: {}", self.dog_api_base_url);
            tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "BREED_SOURCE",
        "DOG_API_BASE_URL",
        "HTTP_TIMEOUT_SECONDS",
        "RUST_LOG",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            source: BreedSource::Remote,
            dog_api_base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout_seconds: 10,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.dog_api_base_url = "ftp://dog.ceo/api/breed/".to_string();
        assert!(config.validate().is_err());

        config.dog_api_base_url = "http://localhost:8080/".to_string();
        assert!(config.validate().is_ok());

        config.http_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.http_timeout_seconds = 301;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = load_from_env().unwrap();

        assert_eq!(config.source, BreedSource::Local);
        assert_eq!(config.dog_api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BREED_SOURCE", "REMOTE");
            env::set_var("DOG_API_BASE_URL", "http://127.0.0.1:9000/api/breed/");
            env::set_var("HTTP_TIMEOUT_SECONDS", "3");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.source, BreedSource::Remote);
        assert_eq!(config.dog_api_base_url, "http://127.0.0.1:9000/api/breed/");
        assert_eq!(config.http_timeout_seconds, 3);
        assert_eq!(config.log_format, "json");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BREED_SOURCE", "carrier-pigeon");
        }
        assert!(Config::from_env().is_err());

        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("HTTP_TIMEOUT_SECONDS", "soon");
        }
        assert!(Config::from_env().is_err());

        clear_env();
    }
}
