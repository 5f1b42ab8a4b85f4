//! Feature encoding for the expense model
//!
//! Maps a raw profile into the fixed-shape numeric vector the prediction
//! model expects. The feature order is a contract with the model's
//! training-time layout and must never be reordered independently of it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::codec::LabelCodec;
use crate::profile::UserProfile;

/// Code substituted when an occupation is unknown to the codec
pub const DEFAULT_OCCUPATION_CODE: i64 = 0;

/// Code substituted when a city tier is unknown to the codec
pub const DEFAULT_CITY_TIER_CODE: i64 = 1;

/// Encoded feature vector, in model order:
/// [age, income, occupation_code, city_tier_code, dependents]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedFeatures {
    pub age: f64,
    pub income: f64,
    pub occupation_code: i64,
    pub city_tier_code: i64,
    pub dependents: f64,
}

impl EncodedFeatures {
    /// The vector in the exact order the model was trained with
    pub fn as_vector(&self) -> [f64; 5] {
        [
            self.age,
            self.income,
            self.occupation_code as f64,
            self.city_tier_code as f64,
            self.dependents,
        ]
    }
}

/// Encode a profile using the trained codecs
///
/// An unknown category must not block the user: it falls back to a fixed
/// default code and the prediction proceeds. The miss is logged for
/// diagnostics but never surfaced as a failure.
pub fn encode(
    profile: &UserProfile,
    occupation_codec: &LabelCodec,
    city_tier_codec: &LabelCodec,
) -> EncodedFeatures {
    let occupation_code = occupation_codec
        .encode(profile.occupation.as_str())
        .unwrap_or_else(|e| {
            warn!(
                error = %e,
                fallback = DEFAULT_OCCUPATION_CODE,
                "Unknown occupation, using default code"
            );
            DEFAULT_OCCUPATION_CODE
        });

    let city_tier_code = city_tier_codec
        .encode(profile.city_tier.as_str())
        .unwrap_or_else(|e| {
            warn!(
                error = %e,
                fallback = DEFAULT_CITY_TIER_CODE,
                "Unknown city tier, using default code"
            );
            DEFAULT_CITY_TIER_CODE
        });

    EncodedFeatures {
        age: profile.age as f64,
        income: profile.monthly_income,
        occupation_code,
        city_tier_code,
        dependents: profile.dependents as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CityTier, Occupation, RiskAppetite};

    fn profile() -> UserProfile {
        UserProfile {
            age: 28,
            monthly_income: 75_000.0,
            occupation: Occupation::Professional,
            city_tier: CityTier::Tier2,
            dependents: 2,
            risk_appetite: RiskAppetite::Medium,
        }
    }

    fn codecs() -> (LabelCodec, LabelCodec) {
        (
            LabelCodec::new(
                "occupation",
                vec![
                    "Business".into(),
                    "Employee".into(),
                    "Professional".into(),
                    "Retired".into(),
                    "Student".into(),
                ],
            ),
            LabelCodec::new(
                "city_tier",
                vec!["Tier 1".into(), "Tier 2".into(), "Tier 3".into()],
            ),
        )
    }

    #[test]
    fn test_feature_order_is_fixed() {
        let (occ, city) = codecs();
        let features = encode(&profile(), &occ, &city);
        assert_eq!(features.as_vector(), [28.0, 75_000.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_unknown_occupation_falls_back() {
        // Codec trained without "Professional"
        let occ = LabelCodec::new("occupation", vec!["Employee".into(), "Student".into()]);
        let (_, city) = codecs();
        let features = encode(&profile(), &occ, &city);
        assert_eq!(features.occupation_code, DEFAULT_OCCUPATION_CODE);
        // Other features unaffected
        assert_eq!(features.city_tier_code, 1);
    }

    #[test]
    fn test_unknown_city_tier_falls_back() {
        let (occ, _) = codecs();
        let city = LabelCodec::new("city_tier", vec!["Metro".into()]);
        let features = encode(&profile(), &occ, &city);
        assert_eq!(features.city_tier_code, DEFAULT_CITY_TIER_CODE);
        assert_eq!(features.occupation_code, 2);
    }
}
