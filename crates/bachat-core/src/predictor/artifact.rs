//! In-process artifact-backed predictor
//!
//! Loads the persisted expense model (a linear regressor exported by the
//! training collaborator) and evaluates it locally. The artifact format is
//! owned by training; nothing outside this file inspects it.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::features::EncodedFeatures;

use super::PredictorBackend;

/// Artifact file name inside the artifacts directory
pub const MODEL_FILE: &str = "expense_model.json";

/// Persisted parameters of the trained expense regressor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseModelParams {
    /// Model identifier recorded by the training run
    pub name: String,
    pub intercept: f64,
    /// One coefficient per feature, in model feature order
    pub coefficients: [f64; 5],
}

/// Predictor that evaluates the loaded model in-process
#[derive(Debug, Clone)]
pub struct ArtifactPredictor {
    params: ExpenseModelParams,
    location: String,
}

impl ArtifactPredictor {
    /// Load the model artifact from the artifacts directory
    ///
    /// A missing or corrupt artifact means the engine must refuse to serve
    /// predictions; there is no fallback number.
    pub fn load(artifacts_dir: &Path) -> Result<Self> {
        let path = artifacts_dir.join(MODEL_FILE);
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            Error::Configuration(format!(
                "model artifact {} could not be read: {} (train the model first)",
                path.display(),
                e
            ))
        })?;
        let params: ExpenseModelParams = serde_json::from_str(&raw).map_err(|e| {
            Error::Configuration(format!(
                "model artifact {} is corrupt: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self {
            params,
            location: path.display().to_string(),
        })
    }

    /// Build from already-loaded parameters (used by tests)
    pub fn from_params(params: ExpenseModelParams) -> Self {
        Self {
            params,
            location: "memory".to_string(),
        }
    }
}

#[async_trait]
impl PredictorBackend for ArtifactPredictor {
    async fn predict(&self, features: &EncodedFeatures) -> Result<f64> {
        let x = features.as_vector();
        let mut y = self.params.intercept;
        for (coef, value) in self.params.coefficients.iter().zip(x.iter()) {
            y += coef * value;
        }
        // A linear model can extrapolate below zero on edge profiles;
        // predicted expenses are defined as non-negative.
        Ok(y.max(0.0))
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn model(&self) -> &str {
        &self.params.name
    }

    fn host(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ExpenseModelParams {
        ExpenseModelParams {
            name: "expense-linreg-v1".to_string(),
            intercept: 5_000.0,
            // Dominated by income share, small shifts for the rest
            coefficients: [50.0, 0.45, 300.0, -800.0, 1_500.0],
        }
    }

    #[tokio::test]
    async fn test_predict_is_linear_combination() {
        let predictor = ArtifactPredictor::from_params(params());
        let features = EncodedFeatures {
            age: 30.0,
            income: 60_000.0,
            occupation_code: 1,
            city_tier_code: 0,
            dependents: 2.0,
        };
        let expected = 5_000.0 + 50.0 * 30.0 + 0.45 * 60_000.0 + 300.0 + 3_000.0;
        let predicted = predictor.predict(&features).await.unwrap();
        assert!((predicted - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_predict_clamps_at_zero() {
        let predictor = ArtifactPredictor::from_params(ExpenseModelParams {
            name: "degenerate".to_string(),
            intercept: -100_000.0,
            coefficients: [0.0; 5],
        });
        let features = EncodedFeatures {
            age: 25.0,
            income: 20_000.0,
            occupation_code: 0,
            city_tier_code: 1,
            dependents: 0.0,
        };
        assert_eq!(predictor.predict(&features).await.unwrap(), 0.0);
    }

    #[test]
    fn test_load_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArtifactPredictor::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("train the model first"));
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MODEL_FILE),
            serde_json::to_string(&params()).unwrap(),
        )
        .unwrap();
        let predictor = ArtifactPredictor::load(dir.path()).unwrap();
        assert_eq!(predictor.model(), "expense-linreg-v1");
    }
}
