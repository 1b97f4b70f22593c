use std::{path::PathBuf, time::Duration};

use reqwest::Url;

use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.kaito.ai/api/v1/yaps";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOGO: &str = "yaps_logo.png";

/// Settings injected into `ScoreFetcher`.
#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    pub endpoint: String,
    pub timeout: Duration,
    /// Extra attempts after a transport failure. Zero means a single request.
    pub retries: u32,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        FetcherConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retries: 0,
        }
    }
}

impl FetcherConfig {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, retries: u32) -> Result<Self> {
        let config = FetcherConfig {
            endpoint: endpoint.into(),
            timeout,
            retries,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("endpoint '{}': {}", self.endpoint, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "endpoint '{}' must use http or https",
                self.endpoint
            )));
        }

        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }

        Ok(())
    }
}

/// Everything the application needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fetcher: FetcherConfig,
    pub logo: PathBuf,
}
