//! # API Client Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GOLDWOK_API_URL`, `GOLDWOK_RESTAURANT`)
//! 2. Explicit values passed by the embedder
//! 3. Defaults (this file)
//!
//! Read-only after construction; the client clones what it needs.

use std::time::Duration;

/// Default API root used in development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Restaurant slug appended to every request; the API is multi-tenant and
/// scopes menu, combos, and orders by it.
pub const DEFAULT_RESTAURANT: &str = "goldenchopsticks";

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API root, without a trailing slash.
    pub base_url: String,

    /// Restaurant slug sent as the `restaurant` query parameter.
    pub restaurant: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Configuration with explicit base URL and restaurant slug.
    pub fn new(base_url: impl Into<String>, restaurant: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            restaurant: restaurant.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("GOLDWOK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let restaurant =
            std::env::var("GOLDWOK_RESTAURANT").unwrap_or_else(|_| DEFAULT_RESTAURANT.to_string());
        ApiConfig::new(base_url, restaurant)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(DEFAULT_BASE_URL, DEFAULT_RESTAURANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.com/api/", "goldenchopsticks");
        assert_eq!(config.base_url, "https://api.example.com/api");
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.restaurant, DEFAULT_RESTAURANT);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
