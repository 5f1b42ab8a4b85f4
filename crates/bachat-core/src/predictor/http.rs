//! HTTP model-serving backend
//!
//! Client for a remote model server exposing the expense model. The server
//! owns the artifact; this backend only speaks the prediction wire format.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::features::EncodedFeatures;

use super::PredictorBackend;

/// HTTP predictor for a model-serving endpoint
///
/// Expects `POST {host}/predict` with the feature vector and a JSON
/// response carrying the predicted amount.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    http_client: Client,
    base_url: String,
    model: String,
}

/// Request to the model server
#[derive(Debug, Serialize)]
struct PredictRequest {
    features: [f64; 5],
}

/// Response from the model server
#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: f64,
}

#[derive(Debug, Deserialize)]
struct ModelInfoResponse {
    #[allow(dead_code)]
    model: String,
}

impl HttpPredictor {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: "expense-model".to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("BACHAT_MODEL_HOST").ok()?;
        Some(Self::new(&host))
    }
}

#[async_trait]
impl PredictorBackend for HttpPredictor {
    async fn predict(&self, features: &EncodedFeatures) -> Result<f64> {
        let url = format!("{}/predict", self.base_url);
        let request = PredictRequest {
            features: features.as_vector(),
        };

        debug!(url = %url, "Requesting expense prediction");

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: PredictResponse = response.json().await?;
        Ok(body.prediction.max(0.0))
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/model", self.base_url);
        match self.http_client.get(&url).send().await {
            Ok(resp) => resp
                .json::<ModelInfoResponse>()
                .await
                .map(|_| true)
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let predictor = HttpPredictor::new("http://localhost:8500/");
        assert_eq!(predictor.host(), "http://localhost:8500");
    }
}
