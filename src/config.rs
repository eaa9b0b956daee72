//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `GOOGLE_PLACES_API_KEY` - Provider credential. Never sent to clients.
//!
//! ## Cache Backend
//!
//! Either a full URL:
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! ```
//!
//! or individual components:
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! Without either, caching is disabled and every request reaches the provider.
//!
//! ## Optional Variables
//!
//! - `PLACES_BASE_URL` - Provider root (default: `https://maps.googleapis.com/maps/api/place`)
//! - `UPSTREAM_TIMEOUT_SECONDS` - Provider request timeout (default: 10, max: 120)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Provider credential from `GOOGLE_PLACES_API_KEY`. Must be non-empty.
    pub places_api_key: String,
    pub places_base_url: String,
    pub upstream_timeout_seconds: u64,
    pub redis_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GOOGLE_PLACES_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let places_api_key =
            env::var("GOOGLE_PLACES_API_KEY").context("GOOGLE_PLACES_API_KEY must be set")?;

        let places_base_url =
            env::var("PLACES_BASE_URL").unwrap_or_else(|_| DEFAULT_PLACES_BASE_URL.to_string());

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let redis_url = Self::load_redis_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            places_api_key,
            places_base_url,
            upstream_timeout_seconds,
            redis_url,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty()) {
            Some(pwd) => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            None => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the API key is empty
    /// - `places_base_url` is not an http(s) URL
    /// - `upstream_timeout_seconds` is outside 1..=120
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or the Redis URL is malformed
    pub fn validate(&self) -> Result<()> {
        if self.places_api_key.trim().is_empty() {
            anyhow::bail!("GOOGLE_PLACES_API_KEY must not be empty");
        }

        let base = url::Url::parse(&self.places_base_url).with_context(|| {
            format!(
                "PLACES_BASE_URL is not a valid URL: '{}'",
                self.places_base_url
            )
        })?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "PLACES_BASE_URL must use http or https, got '{}'",
                base.scheme()
            );
        }

        if self.upstream_timeout_seconds == 0 || self.upstream_timeout_seconds > 120 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.upstream_timeout_seconds
            );
        }

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

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(redis_url)
            );
        }

        Ok(())
    }

    /// Provider request timeout.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Places API: {}", self.places_base_url);
        tracing::info!("  Places API key: {}", mask_secret(&self.places_api_key));
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_seconds);

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Redis: {} (enabled)", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Redis: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("places_api_key", &mask_secret(&self.places_api_key))
            .field("places_base_url", &self.places_base_url)
            .field("upstream_timeout_seconds", &self.upstream_timeout_seconds)
            .field(
                "redis_url",
                &self.redis_url.as_deref().map(mask_connection_string),
            )
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Masks a secret, keeping only its last four characters when it is long enough.
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Masks sensitive information in connection strings for logging.
///
/// Replaces password with `***` in URLs like:
/// - `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
