//! Gateway connection settings

use std::time::Duration;

use url::Url;

use embedform_core::{Error, Result};

/// Default widgets API endpoint
pub const DEFAULT_API_URL: &str = "https://widgets-api.localhost/";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the widgets API
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub api_url: Url,
    pub timeout: Duration,
}

impl GatewaySettings {
    /// Build settings for a given API endpoint, validating the URL once
    pub fn new(api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url).map_err(|_| Error::invalid_endpoint(api_url))?;
        Ok(Self {
            api_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read settings from the environment, falling back to defaults
    ///
    /// `EMBEDFORM_API_URL` overrides the endpoint.
    pub fn from_env() -> Result<Self> {
        match std::env::var("EMBEDFORM_API_URL") {
            Ok(url) => Self::new(&url),
            Err(_) => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve a path relative to the API endpoint
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.api_url
            .join(path)
            .map_err(|_| Error::invalid_endpoint(format!("{}{}", self.api_url, path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_rejects_invalid_url() {
        assert!(GatewaySettings::new("not a url").is_err());
    }

    #[test]
    fn test_settings_endpoint_join() {
        let settings = GatewaySettings::new("https://api.example.com/").unwrap();
        let url = settings.endpoint("widgets/save-form").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/widgets/save-form");
    }

    #[test]
    fn test_settings_with_timeout() {
        let settings = GatewaySettings::new("https://api.example.com/")
            .unwrap()
            .with_timeout(Duration::from_secs(3));
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }
}
