use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the box score scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Site root; player hrefs are appended to this verbatim
    pub base_url: String,

    /// Path of the stats index page listing every player
    pub index_path: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Per-request timeout in seconds (None = wait indefinitely)
    pub request_timeout_secs: Option<u64>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.unrivaled.basketball".to_string(),
            index_path: "/stats/player".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ScraperConfig {
    /// Full URL of the stats index page
    pub fn index_url(&self) -> String {
        format!("{}{}", self.base_url, self.index_path)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index_url() {
        let config = ScraperConfig::default();
        assert_eq!(config.index_url(), "https://www.unrivaled.basketball/stats/player");
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = ScraperConfig { request_timeout_secs: Some(30), ..Default::default() };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }
}
