//! Pluggable expense-prediction backend abstraction
//!
//! This module provides a backend-agnostic interface to the trained expense
//! model. The model itself is an opaque artifact owned by the training
//! collaborator; the engine only needs `predict`.
//!
//! # Architecture
//!
//! - `PredictorBackend` trait: defines the prediction interface
//! - `PredictorClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `ArtifactPredictor`, `HttpPredictor`, `MockPredictor`
//!
//! # Configuration
//!
//! Environment variables:
//! - `BACHAT_MODEL_BACKEND`: Backend to use (artifact, http, mock). Default: artifact
//! - `BACHAT_MODEL_HOST`: Model-serving URL (required for http backend)

mod artifact;
mod http;
mod mock;

pub use artifact::{ArtifactPredictor, ExpenseModelParams, MODEL_FILE};
pub use http::HttpPredictor;
pub use mock::MockPredictor;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::features::EncodedFeatures;

/// Trait defining the interface to the trained expense model
///
/// Backends must be Send + Sync to allow use across async tasks. A backend
/// is loaded once at process start and treated as immutable afterwards.
#[async_trait]
pub trait PredictorBackend: Send + Sync {
    /// Predict monthly expenses from an encoded feature vector
    async fn predict(&self, features: &EncodedFeatures) -> Result<f64>;

    /// Check if the backend is available
    async fn health_check(&self) -> bool;

    /// Get the model name (for diagnostics)
    fn model(&self) -> &str;

    /// Get the host or artifact location (for logging)
    fn host(&self) -> &str;
}

/// Concrete predictor client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Debug, Clone)]
pub enum PredictorClient {
    /// In-process model loaded from a persisted artifact
    Artifact(ArtifactPredictor),
    /// Remote model-serving endpoint
    Http(HttpPredictor),
    /// Mock backend for testing
    Mock(MockPredictor),
}

impl PredictorClient {
    /// Create a predictor from environment variables and an artifact dir
    ///
    /// Checks `BACHAT_MODEL_BACKEND` to determine which backend to use:
    /// - `artifact` (default): loads `expense_model.json` from the artifact dir
    /// - `http`: uses `BACHAT_MODEL_HOST`
    /// - `mock`: deterministic backend for testing
    pub fn from_env(artifacts_dir: &Path) -> Result<Self> {
        let backend =
            std::env::var("BACHAT_MODEL_BACKEND").unwrap_or_else(|_| "artifact".to_string());

        match backend.to_lowercase().as_str() {
            "artifact" => ArtifactPredictor::load(artifacts_dir).map(PredictorClient::Artifact),
            "http" => {
                let host = std::env::var("BACHAT_MODEL_HOST").map_err(|_| {
                    crate::error::Error::Configuration(
                        "BACHAT_MODEL_HOST is required for the http backend".to_string(),
                    )
                })?;
                Ok(PredictorClient::Http(HttpPredictor::new(&host)))
            }
            "mock" => Ok(PredictorClient::Mock(MockPredictor::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown BACHAT_MODEL_BACKEND, falling back to artifact");
                ArtifactPredictor::load(artifacts_dir).map(PredictorClient::Artifact)
            }
        }
    }

    /// Create an artifact-backed predictor directly
    pub fn artifact(artifacts_dir: &Path) -> Result<Self> {
        ArtifactPredictor::load(artifacts_dir).map(PredictorClient::Artifact)
    }

    /// Create an HTTP predictor directly
    pub fn http(host: &str) -> Self {
        PredictorClient::Http(HttpPredictor::new(host))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        PredictorClient::Mock(MockPredictor::new())
    }
}

// Implement PredictorBackend for PredictorClient by delegating to the inner backend
#[async_trait]
impl PredictorBackend for PredictorClient {
    async fn predict(&self, features: &EncodedFeatures) -> Result<f64> {
        match self {
            PredictorClient::Artifact(b) => b.predict(features).await,
            PredictorClient::Http(b) => b.predict(features).await,
            PredictorClient::Mock(b) => b.predict(features).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            PredictorClient::Artifact(b) => b.health_check().await,
            PredictorClient::Http(b) => b.health_check().await,
            PredictorClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            PredictorClient::Artifact(b) => b.model(),
            PredictorClient::Http(b) => b.model(),
            PredictorClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            PredictorClient::Artifact(b) => b.host(),
            PredictorClient::Http(b) => b.host(),
            PredictorClient::Mock(b) => b.host(),
        }
    }
}
