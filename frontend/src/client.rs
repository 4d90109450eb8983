//! HTTP client for the scoring API.

use actix_web::rt::time::sleep;
use log::{debug, info, warn};
use premium_api::models::{ApplicantRecord, PredictionResponse, PremiumCategory, StatusMessage};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The service is down or still starting.
    #[error("could not connect to the scoring service: {0}")]
    Connect(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ClientError::Connect(err.to_string())
        } else {
            ClientError::Other(err.to_string())
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScoringClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScoringClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single attempt, no retry.
    pub async fn predict(&self, record: &ApplicantRecord) -> Result<PremiumCategory, ClientError> {
        let url = format!("{}/predict", self.base_url);
        debug!("POST {}", url);

        let resp = self.http.post(&url).json(record).send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let prediction: PredictionResponse = resp.json().await?;
        Ok(prediction.predicted_category)
    }

    pub async fn health(&self) -> Result<String, ClientError> {
        let url = format!("{}/", self.base_url);
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let status: StatusMessage = resp.json().await?;
        Ok(status.message)
    }

    /// Probes `health()` up to `attempts` times, doubling the pause after each
    /// failure. Returns whether the service answered.
    pub async fn wait_until_ready(&self, attempts: u32, initial_backoff: Duration) -> bool {
        let mut backoff = initial_backoff;

        for attempt in 1..=attempts {
            match self.health().await {
                Ok(message) => {
                    info!("Scoring service ready after {} attempt(s): {}", attempt, message);
                    return true;
                }
                Err(e) => {
                    warn!("Scoring service not ready ({}/{}): {}", attempt, attempts, e);
                    if attempt < attempts {
                        sleep(backoff).await;
                        backoff = backoff.saturating_mul(2);
                    }
                }
            }
        }

        false
    }
}
