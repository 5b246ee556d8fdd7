use crate::error::ScrapeError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://quotes.toscrape.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("quotes/", env!("CARGO_PKG_VERSION"), " (quote listing scraper)");

/// Settings for one scrape run, threaded into the fetcher and paginator.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Site root; page URLs are built by joining `/page/<n>/` onto it.
    pub base_url: Url,
    /// Per-request timeout for the HTTP client.
    pub timeout: Duration,
    pub user_agent: String,
}

impl ScrapeConfig {
    pub fn new(base_url: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_parses() {
        let config = ScrapeConfig::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(config.base_url.host_str(), Some("quotes.toscrape.com"));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let err = ScrapeConfig::new("quotes.toscrape.com").unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidUrl(_)));
    }
}
