//! Authoring tool configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::path::PathBuf;

use super::head::DEFAULT_SITE_ORIGIN;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Content document validated when no path is given on the command line
    /// Example: content/landing.json
    pub content_path: Option<PathBuf>,

    /// Scheme and host the page is served from, used for absolute Open Graph URLs
    /// Example: https://mindark.ai
    pub site_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            content_path: std::env::var_os("CONTENT_PATH").map(PathBuf::from),
            site_origin: std::env::var("SITE_ORIGIN").ok(),
        }
    }

    /// Check if a default content document is configured
    pub fn has_content_path(&self) -> bool {
        self.content_path.is_some()
    }

    /// Check if a site origin is configured
    pub fn has_site_origin(&self) -> bool {
        self.site_origin.as_ref().is_some_and(|origin| !origin.is_empty())
    }

    /// Configured origin without a trailing slash, or the production origin
    pub fn site_origin(&self) -> &str {
        self.site_origin
            .as_deref()
            .map(|origin| origin.trim_end_matches('/'))
            .filter(|origin| !origin.is_empty())
            .unwrap_or(DEFAULT_SITE_ORIGIN)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
