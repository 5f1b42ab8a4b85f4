//! Categorical label codecs
//!
//! A `LabelCodec` maps a named category (occupation, city tier) to the
//! integer code the expense model was trained with. The encoding is an
//! ordered class list persisted by the training collaborator; the code for
//! a class is its index in that list.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A categorical encoding learned at model-training time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelCodec {
    /// Codec name, used in diagnostics ("occupation", "city_tier")
    pub name: String,
    /// Ordered class list; code = index
    pub classes: Vec<String>,
}

impl LabelCodec {
    pub fn new(name: impl Into<String>, classes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            classes,
        }
    }

    /// Encode a category to its integer code
    ///
    /// A category the codec has never seen is a reportable condition; the
    /// feature encoder decides the recovery policy, not this lookup.
    pub fn encode(&self, category: &str) -> Result<i64> {
        self.classes
            .iter()
            .position(|c| c == category)
            .map(|i| i as i64)
            .ok_or_else(|| Error::UnknownCategory {
                codec: self.name.clone(),
                value: category.to_string(),
            })
    }

    /// Load a codec from its JSON artifact
    ///
    /// A missing or corrupt artifact means the model cannot be served.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "codec artifact {} could not be read: {} (train the model first)",
                path.display(),
                e
            ))
        })?;
        let codec: LabelCodec = serde_json::from_str(&raw).map_err(|e| {
            Error::Configuration(format!(
                "codec artifact {} is corrupt: {}",
                path.display(),
                e
            ))
        })?;
        if codec.classes.is_empty() {
            return Err(Error::Configuration(format!(
                "codec artifact {} has no classes",
                path.display()
            )));
        }
        Ok(codec)
    }
}
