//! Site configuration.
//!
//! The only external setting the site needs is the backend base URL; the
//! request timeout bounds how long a visitor can be left on "Sending...".
//!
//! The CLI resolves both from, highest first: command-line flags, the
//! environment (`STUDIO_BACKEND_URL`, `STUDIO_REQUEST_TIMEOUT_MS`), an
//! optional `studio.toml`, then defaults. The landing page captures
//! `STUDIO_BACKEND_URL` at build time instead.

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "STUDIO_BACKEND_URL";
/// Environment variable holding the request timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "STUDIO_REQUEST_TIMEOUT_MS";
/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "studio.toml";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Resolved settings handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Backend base URL without the `/api/contact` suffix. Empty means
    /// same-origin (browser only).
    pub backend_url: String,
    pub request_timeout: Duration,
}

impl SiteConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Same-origin configuration used by the browser build when no backend
    /// URL was baked in.
    pub fn same_origin() -> Self {
        Self::new("")
    }

    /// Full contact endpoint URL.
    pub fn contact_endpoint(&self) -> String {
        crate::transport::contact_endpoint(&self.backend_url)
    }

    /// Empty (same-origin) or an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.backend_url.as_str();
        if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBackendUrl(url.to_string()))
        }
    }
}

/// Parse a millisecond timeout. Zero is rejected: it would fail every
/// request before it starts.
pub fn parse_timeout_ms(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(feature = "cli")]
pub use file::{BackendSection, ConfigOverrides, FileConfig, resolve};

#[cfg(feature = "cli")]
mod file {
    use std::path::Path;

    use serde::Deserialize;
    use tracing::debug;

    use super::*;

    /// `studio.toml` contents.
    ///
    /// ```toml
    /// [backend]
    /// url = "https://api.gotech.solutions"
    /// timeout_ms = 10000
    /// ```
    #[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
    #[serde(default)]
    pub struct FileConfig {
        pub backend: BackendSection,
    }

    #[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
    #[serde(default)]
    pub struct BackendSection {
        pub url: Option<String>,
        pub timeout_ms: Option<u64>,
    }

    impl FileConfig {
        /// Load from `path`. A missing file is not an error.
        pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
            if !path.exists() {
                debug!(path = %path.display(), "no config file");
                return Ok(None);
            }
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
            Self::parse(&content, path).map(Some)
        }

        pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
            toml::from_str(content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    }

    /// Values given on the command line.
    #[derive(Debug, Default, Clone)]
    pub struct ConfigOverrides {
        pub backend_url: Option<String>,
        pub timeout_ms: Option<u64>,
    }

    /// Merge flags, environment (through `env`), file and defaults.
    ///
    /// `env` is a lookup function so callers and tests decide where the
    /// environment comes from.
    pub fn resolve(
        overrides: &ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
        file: Option<&FileConfig>,
    ) -> Result<SiteConfig, ConfigError> {
        let backend_url = overrides
            .backend_url
            .clone()
            .or_else(|| env(BACKEND_URL_ENV).filter(|v| !v.trim().is_empty()))
            .or_else(|| file.and_then(|f| f.backend.url.clone()))
            .map(|url| url.trim().to_string())
            .ok_or(ConfigError::MissingBackendUrl)?;

        let request_timeout = match overrides.timeout_ms {
            Some(ms) => parse_timeout_ms(&ms.to_string())?,
            None => match env(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
                Some(raw) => parse_timeout_ms(&raw)?,
                None => match file.and_then(|f| f.backend.timeout_ms) {
                    Some(ms) => parse_timeout_ms(&ms.to_string())?,
                    None => DEFAULT_REQUEST_TIMEOUT,
                },
            },
        };

        let config = SiteConfig {
            backend_url,
            request_timeout,
        };
        if config.backend_url.is_empty() {
            return Err(ConfigError::MissingBackendUrl);
        }
        config.validate()?;
        Ok(config)
    }
}
