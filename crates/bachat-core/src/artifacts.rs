//! Trained artifact loading
//!
//! The training collaborator persists three files into the artifacts
//! directory: the model parameters and one codec per categorical feature.
//! Everything here is loaded once at startup and frozen for the process
//! lifetime.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::codec::LabelCodec;
use crate::error::Result;

/// Occupation codec artifact file name
pub const OCCUPATION_CODEC_FILE: &str = "occupation_codec.json";

/// City-tier codec artifact file name
pub const CITY_CODEC_FILE: &str = "city_codec.json";

/// The loaded categorical codecs, immutable after load
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub occupation_codec: LabelCodec,
    pub city_tier_codec: LabelCodec,
    dir: PathBuf,
}

impl Artifacts {
    /// Load both codecs from the artifacts directory
    ///
    /// Fails with a `Configuration` error when either artifact is missing
    /// or corrupt; the engine must not serve predictions in that state.
    pub fn load(dir: &Path) -> Result<Self> {
        let occupation_codec = LabelCodec::load(&dir.join(OCCUPATION_CODEC_FILE))?;
        let city_tier_codec = LabelCodec::load(&dir.join(CITY_CODEC_FILE))?;

        info!(
            dir = %dir.display(),
            occupations = occupation_codec.classes.len(),
            city_tiers = city_tier_codec.classes.len(),
            "Loaded codec artifacts"
        );

        Ok(Self {
            occupation_codec,
            city_tier_codec,
            dir: dir.to_path_buf(),
        })
    }

    /// Build from in-memory codecs (used by tests)
    pub fn from_codecs(occupation_codec: LabelCodec, city_tier_codec: LabelCodec) -> Self {
        Self {
            occupation_codec,
            city_tier_codec,
            dir: PathBuf::from("memory"),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn write_codec(dir: &Path, file: &str, name: &str, classes: &[&str]) {
        let codec = LabelCodec::new(name, classes.iter().map(|c| c.to_string()).collect());
        std::fs::write(dir.join(file), serde_json::to_string(&codec).unwrap()).unwrap();
    }

    #[test]
    fn test_load_both_codecs() {
        let dir = tempfile::tempdir().unwrap();
        write_codec(
            dir.path(),
            OCCUPATION_CODEC_FILE,
            "occupation",
            &["Business", "Employee", "Student"],
        );
        write_codec(
            dir.path(),
            CITY_CODEC_FILE,
            "city_tier",
            &["Tier 1", "Tier 2", "Tier 3"],
        );

        let artifacts = Artifacts::load(dir.path()).unwrap();
        assert_eq!(artifacts.occupation_codec.encode("Employee").unwrap(), 1);
        assert_eq!(artifacts.city_tier_codec.encode("Tier 3").unwrap(), 2);
    }

    #[test]
    fn test_missing_codec_refuses_to_load() {
        let dir = tempfile::tempdir().unwrap();
        write_codec(dir.path(), OCCUPATION_CODEC_FILE, "occupation", &["Employee"]);
        // city codec absent
        let err = Artifacts::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
