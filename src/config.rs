//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DATA_ROOT` - Root directory served by `/util/files` (default: `data`)
//! - `DISABLE_HTTPS_REDIRECT` - `true` or `1` turns HTTPS redirection off
//! - `HTTPS_PORT` - Port used in HTTPS redirects; redirection is skipped when unset
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 300, max: 3600)
//!
//! ```bash
//! export DATA_ROOT="/srv/test-data"
//! export DISABLE_HTTPS_REDIRECT=1
//! ```

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Default directory for `/util/files` when `DATA_ROOT` is unset or blank.
pub const DEFAULT_DATA_ROOT: &str = "data";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Root directory that `/util/files` is confined to.
    pub data_root: PathBuf,
    /// When true, plain HTTP requests are not redirected to HTTPS.
    pub disable_https_redirect: bool,
    /// Public HTTPS port used to build redirect locations.
    pub https_port: Option<u16>,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            disable_https_redirect: false,
            https_port: None,
            request_timeout_secs: 300,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let data_root = Self::load_data_root();

        let disable_https_redirect = env::var("DISABLE_HTTPS_REDIRECT")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let https_port = env::var("HTTPS_PORT")
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .context("HTTPS_PORT must be a valid port number")?;

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("REQUEST_TIMEOUT_SECS must be a positive integer")?
            .unwrap_or(300);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            data_root,
            disable_https_redirect,
            https_port,
            request_timeout_secs,
        })
    }

    /// Reads `DATA_ROOT`, falling back to [`DEFAULT_DATA_ROOT`] when unset or blank.
    fn load_data_root() -> PathBuf {
        match env::var("DATA_ROOT") {
            Ok(root) if !root.trim().is_empty() => PathBuf::from(root),
            _ => PathBuf::from(DEFAULT_DATA_ROOT),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `request_timeout_secs` is outside `1..=3600`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 3600 {
            anyhow::bail!(
                "REQUEST_TIMEOUT_SECS must be between 1 and 3600, got {}",
                self.request_timeout_secs
            );
        }

        if self.https_port == Some(0) {
            anyhow::bail!("HTTPS_PORT must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether plain HTTP requests get redirected to HTTPS.
    ///
    /// Redirection needs both the flag left on and a known HTTPS port.
    pub fn is_https_redirect_active(&self) -> bool {
        !self.disable_https_redirect && self.https_port.is_some()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Data root: {}", self.data_root.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);

        match (self.disable_https_redirect, self.https_port) {
            (true, _) => tracing::info!("  HTTPS redirect: disabled"),
            (false, Some(port)) => tracing::info!("  HTTPS redirect: enabled (port {})", port),
            (false, None) => {
                tracing::warn!("  HTTPS redirect: no HTTPS_PORT configured, requests are not redirected")
            }
        }
    }
}

/// Interprets a boolean-like environment value: `true` (any case) or `1`.
fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
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
