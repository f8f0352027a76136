use crate::models::FeatureVector;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the scoring oracle
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("scoring request timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    RequestError(reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OracleError::Timeout
        } else {
            OracleError::RequestError(err)
        }
    }
}

/// Raw oracle output for one scored matchup
///
/// Label 1 means the red corner wins. The probability pair is
/// [P(blue wins), P(red wins)] in that fixed order; reversing it is the
/// classic integration bug this type's validation and the tests guard
/// against.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleScore {
    pub label: u8,
    pub probabilities: [f64; 2],
}

/// HTTP client for the external model-serving endpoint
///
/// The trained classifier lives behind this boundary; its weights are
/// never loaded here. The request timeout is the only slow-dependency
/// control: a timed-out or failed call surfaces once, with no retry.
pub struct ScoringClient {
    base_url: String,
    client: Client,
}

impl ScoringClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Score a feature vector
    pub async fn score(&self, features: &FeatureVector) -> Result<OracleScore, OracleError> {
        let url = format!("{}/score", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "features": features }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OracleError::ApiError(format!(
                "scoring request failed: {}",
                response.status()
            )));
        }

        let score: OracleScore = response
            .json()
            .await
            .map_err(|e| OracleError::InvalidResponse(e.to_string()))?;

        validate_score(&score)?;

        Ok(score)
    }

    /// Health check against the model-serving endpoint
    pub async fn health_check(&self) -> Result<bool, OracleError> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;

        Ok(response.status().is_success())
    }
}

/// Validate the oracle payload shape before it reaches the synthesizer
fn validate_score(score: &OracleScore) -> Result<(), OracleError> {
    if score.label > 1 {
        return Err(OracleError::InvalidResponse(format!(
            "label must be 0 or 1, got {}",
            score.label
        )));
    }

    let sum = score.probabilities[0] + score.probabilities[1];
    if (sum - 1.0).abs() > 1e-6 {
        return Err(OracleError::InvalidResponse(format!(
            "probabilities must sum to 1, got {}",
            sum
        )));
    }

    Ok(())
}
