//! Advisor - orchestrates validation, encoding, prediction, recommendation
//!
//! The advisor owns the loaded codecs and a predictor client, both injected
//! at construction and immutable afterwards. Every call is a pure function
//! of its inputs plus the frozen artifacts, so one advisor behind an `Arc`
//! serves any number of concurrent requests.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::artifacts::Artifacts;
use crate::error::{Error, Result};
use crate::features::encode;
use crate::predictor::{PredictorBackend, PredictorClient};
use crate::profile::UserProfile;
use crate::recommend::{recommend, BudgetPlan, ExpenseHealth};

/// Default budget for a single prediction call
pub const DEFAULT_PREDICTION_TIMEOUT: Duration = Duration::from_secs(10);

/// A full analysis result handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advice {
    pub profile: UserProfile,
    pub predicted_expenses: f64,
    pub plan: BudgetPlan,
    pub health: ExpenseHealth,
    pub generated_at: DateTime<Utc>,
}

/// The budget-decision engine
#[derive(Debug)]
pub struct Advisor {
    artifacts: Artifacts,
    predictor: PredictorClient,
    prediction_timeout: Duration,
}

impl Advisor {
    pub fn new(artifacts: Artifacts, predictor: PredictorClient) -> Self {
        Self {
            artifacts,
            predictor,
            prediction_timeout: DEFAULT_PREDICTION_TIMEOUT,
        }
    }

    /// Build an advisor from engine configuration (load-then-freeze)
    pub fn from_config(config: &crate::config::EngineConfig) -> Result<Self> {
        use crate::config::BackendKind;

        let artifacts = Artifacts::load(&config.artifacts_dir)?;
        let predictor = match config.backend {
            BackendKind::Artifact => PredictorClient::artifact(&config.artifacts_dir)?,
            BackendKind::Http => {
                let host = config.model_host.as_deref().ok_or_else(|| {
                    Error::Configuration(
                        "model_host is required for the http backend".to_string(),
                    )
                })?;
                PredictorClient::http(host)
            }
            BackendKind::Mock => PredictorClient::mock(),
        };

        Ok(Self::new(artifacts, predictor).with_timeout(config.prediction_timeout()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.prediction_timeout = timeout;
        self
    }

    /// Analyze a profile: validate, encode, predict, recommend
    ///
    /// Validation failures and prediction failures are per-request errors;
    /// neither leaves partial state behind. An unresponsive model backend
    /// is cut off by the timeout rather than hanging the request.
    pub async fn analyze(&self, profile: &UserProfile) -> Result<Advice> {
        profile.validate()?;

        let features = encode(
            profile,
            &self.artifacts.occupation_codec,
            &self.artifacts.city_tier_codec,
        );

        let predicted_expenses =
            match tokio::time::timeout(self.prediction_timeout, self.predictor.predict(&features))
                .await
            {
                Ok(Ok(value)) => value,
                Ok(Err(e)) => {
                    return Err(Error::PredictionUnavailable(format!(
                        "model backend failed: {}",
                        e
                    )))
                }
                Err(_) => {
                    return Err(Error::PredictionUnavailable(format!(
                        "model did not answer within {:?}",
                        self.prediction_timeout
                    )))
                }
            };

        debug!(
            predicted = predicted_expenses,
            income = profile.monthly_income,
            "Expense prediction complete"
        );

        let plan = recommend(profile, predicted_expenses)?;
        let health = plan.health();

        Ok(Advice {
            profile: profile.clone(),
            predicted_expenses: plan.predicted_expenses,
            plan,
            health,
            generated_at: Utc::now(),
        })
    }

    /// Check whether the prediction backend is reachable
    pub async fn health_check(&self) -> bool {
        self.predictor.health_check().await
    }

    /// Model name of the configured backend
    pub fn model(&self) -> &str {
        self.predictor.model()
    }

    /// Host or artifact location of the configured backend
    pub fn backend_host(&self) -> &str {
        self.predictor.host()
    }
}
