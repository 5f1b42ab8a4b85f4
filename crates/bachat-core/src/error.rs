//! Error types for Bachat

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Unknown category '{value}' for {codec} codec")]
    UnknownCategory { codec: String, value: String },

    #[error("Prediction unavailable: {0}")]
    PredictionUnavailable(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
