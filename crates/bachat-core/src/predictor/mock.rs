//! Mock backend for testing
//!
//! Provides configurable predictions without a trained artifact or a
//! running model server.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::features::EncodedFeatures;

use super::PredictorBackend;

/// Mock expense predictor
///
/// By default returns a plausible prediction derived from income. Can be
/// configured to return a fixed value, fail, or stall (for timeout tests).
#[derive(Debug, Clone, Default)]
pub struct MockPredictor {
    /// Fixed prediction; when unset, predicts 55% of income
    pub value: Option<f64>,
    /// Whether predict should fail
    pub failing: bool,
    /// Artificial delay before responding
    pub delay: Option<Duration>,
    /// Whether health_check should return true
    pub healthy: bool,
}

impl MockPredictor {
    /// Create a new mock predictor (healthy by default)
    pub fn new() -> Self {
        Self {
            value: None,
            failing: false,
            delay: None,
            healthy: true,
        }
    }

    /// Always predict the given value
    pub fn fixed(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::new()
        }
    }

    /// Fail every prediction
    pub fn failing() -> Self {
        Self {
            failing: true,
            healthy: false,
            ..Self::new()
        }
    }

    /// Stall for the given duration before answering
    pub fn stalled(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }
}

#[async_trait]
impl PredictorBackend for MockPredictor {
    async fn predict(&self, features: &EncodedFeatures) -> Result<f64> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(Error::PredictionUnavailable(
                "mock backend configured to fail".to_string(),
            ));
        }
        Ok(self.value.unwrap_or(features.income * 0.55))
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
