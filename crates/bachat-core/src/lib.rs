//! Bachat Core Library
//!
//! Shared functionality for the Bachat budget planning tool:
//! - User profile types and domain validation
//! - Categorical codecs loaded from training artifacts
//! - Feature encoding with unknown-category fallback
//! - Pluggable expense-prediction backends (artifact, HTTP, mock)
//! - Risk-tiered budget recommendation engine
//! - Advisor orchestration with prediction timeouts

pub mod advisor;
pub mod artifacts;
pub mod codec;
pub mod config;
pub mod error;
pub mod features;
pub mod predictor;
pub mod profile;
pub mod recommend;

pub use advisor::{Advice, Advisor, DEFAULT_PREDICTION_TIMEOUT};
pub use artifacts::{Artifacts, CITY_CODEC_FILE, OCCUPATION_CODEC_FILE};
pub use codec::LabelCodec;
pub use config::{BackendKind, EngineConfig};
pub use error::{Error, Result};
pub use features::{
    encode, EncodedFeatures, DEFAULT_CITY_TIER_CODE, DEFAULT_OCCUPATION_CODE,
};
pub use predictor::{
    ArtifactPredictor, ExpenseModelParams, HttpPredictor, MockPredictor, PredictorBackend,
    PredictorClient, MODEL_FILE,
};
pub use profile::{CityTier, Occupation, RiskAppetite, UserProfile};
pub use recommend::{
    base_allocation, recommend, Allocation, BudgetPlan, ExpenseHealth, SavingsCategory,
    SavingsTip, DISTRESS_MARKER, DISTRESS_RATIO, DISTRESS_SCALE,
};
