// crates/placefinder-core/src/config.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "PLACEFINDER_API_URL";

/// Where the search backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Default config, with the base URL taken from `PLACEFINDER_API_URL`
    /// when set and non-blank.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::default(),
        }
    }

    /// Absolute URL of `path` on the backend.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let c = ClientConfig::new("http://api.local:8002/ ");
        assert_eq!(c.endpoint("/search"), "http://api.local:8002/search");
        assert_eq!(c.endpoint("health"), "http://api.local:8002/health");
    }

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ClientConfig::default().endpoint("health"), "http://localhost:8000/health");
    }
}
