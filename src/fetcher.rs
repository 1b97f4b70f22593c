use reqwest::{blocking::Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    config::FetcherConfig,
    error::{Error as AppError, Result},
    record::{ScoreRecord, YapsPayload},
};

/// Why a lookup produced no record. Users only ever see a generic message,
/// the variants exist for logs and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("endpoint answered with status {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("response body is not a Yaps payload: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

/// Blocking client for the Yaps endpoint. Call it from a worker thread,
/// never from the UI thread.
pub struct ScoreFetcher {
    client: Client,
    config: FetcherConfig,
}

impl ScoreFetcher {
    pub fn new(config: FetcherConfig) -> Result<ScoreFetcher> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("unable to build http client: {}", e)))?;

        Ok(ScoreFetcher { client, config })
    }

    /// Looks up one username. The username is sent as given; trimming and
    /// emptiness checks belong to the caller.
    pub fn fetch(&self, username: &str) -> std::result::Result<ScoreRecord, FetchError> {
        let mut attempt = 0;

        loop {
            match self.fetch_once(username) {
                Err(e) if e.is_retryable() && attempt < self.config.retries => {
                    attempt += 1;
                    warn!(username, attempt, error = %e, "retrying yaps lookup");
                }
                Err(e) => {
                    warn!(username, error = %e, "yaps lookup failed");
                    return Err(e);
                }
                Ok(record) => return Ok(record),
            }
        }
    }

    fn fetch_once(&self, username: &str) -> std::result::Result<ScoreRecord, FetchError> {
        debug!(endpoint = %self.config.endpoint, username, "requesting yaps score");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("username", username)])
            .send()
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let payload: YapsPayload = response.json().map_err(FetchError::Decode)?;
        let record = ScoreRecord::from_payload(username, payload);

        debug!(
            username = record.username(),
            yaps_all = record.yaps_all(),
            yaps_l7d = record.yaps_l7d(),
            "received yaps score"
        );

        Ok(record)
    }
}
