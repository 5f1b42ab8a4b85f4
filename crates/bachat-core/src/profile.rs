//! User profile types and validation

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Valid age range for a profile
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 18..=65;

/// Maximum number of dependents
pub const MAX_DEPENDENTS: u8 = 5;

/// Occupation categories known to the expense model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    Employee,
    Business,
    Professional,
    Student,
    Retired,
}

impl Occupation {
    /// Category label as seen by the codec (matches training data)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Business => "Business",
            Self::Professional => "Professional",
            Self::Student => "Student",
            Self::Retired => "Retired",
        }
    }
}

impl std::str::FromStr for Occupation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "employee" => Ok(Self::Employee),
            "business" => Ok(Self::Business),
            "professional" => Ok(Self::Professional),
            "student" => Ok(Self::Student),
            "retired" => Ok(Self::Retired),
            _ => Err(format!("Unknown occupation: {}", s)),
        }
    }
}

impl std::fmt::Display for Occupation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// City tier classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityTier {
    #[serde(rename = "tier1")]
    Tier1,
    #[serde(rename = "tier2")]
    Tier2,
    #[serde(rename = "tier3")]
    Tier3,
}

impl CityTier {
    /// Category label as seen by the codec (matches training data)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tier1 => "Tier 1",
            Self::Tier2 => "Tier 2",
            Self::Tier3 => "Tier 3",
        }
    }
}

impl std::str::FromStr for CityTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "").as_str() {
            "tier1" | "1" => Ok(Self::Tier1),
            "tier2" | "2" => Ok(Self::Tier2),
            "tier3" | "3" => Ok(Self::Tier3),
            _ => Err(format!("Unknown city tier: {}", s)),
        }
    }
}

impl std::fmt::Display for CityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-declared tolerance for investment volatility
///
/// Parsing is lenient: anything outside the three declared tiers maps to
/// `Other`, which the recommender routes to the Standard strategy. A bad
/// risk string is never a request failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RiskAppetite {
    Low,
    #[default]
    Medium,
    High,
    Other,
}

impl RiskAppetite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Other => "other",
        }
    }
}

impl From<&str> for RiskAppetite {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Other,
        }
    }
}

impl From<String> for RiskAppetite {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::fmt::Display for RiskAppetite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user's financial profile, constructed once per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years, 18..=65
    pub age: u32,
    /// Monthly income, strictly positive
    pub monthly_income: f64,
    pub occupation: Occupation,
    pub city_tier: CityTier,
    /// Number of dependents, 0..=5
    pub dependents: u8,
    /// Defaults to Medium when absent
    #[serde(default)]
    pub risk_appetite: RiskAppetite,
}

impl UserProfile {
    /// Check domain constraints before the profile reaches the engine
    ///
    /// Income must be validated here: the expense ratio divides by it, and
    /// a zero or negative income must never reach that division.
    pub fn validate(&self) -> Result<()> {
        if !AGE_RANGE.contains(&self.age) {
            return Err(Error::InvalidProfile(format!(
                "age must be between {} and {}, got {}",
                AGE_RANGE.start(),
                AGE_RANGE.end(),
                self.age
            )));
        }
        if !self.monthly_income.is_finite() || self.monthly_income <= 0.0 {
            return Err(Error::InvalidProfile(format!(
                "monthly income must be positive, got {}",
                self.monthly_income
            )));
        }
        if self.dependents > MAX_DEPENDENTS {
            return Err(Error::InvalidProfile(format!(
                "dependents must be at most {}, got {}",
                MAX_DEPENDENTS, self.dependents
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn profile() -> UserProfile {
        UserProfile {
            age: 28,
            monthly_income: 75_000.0,
            occupation: Occupation::Employee,
            city_tier: CityTier::Tier1,
            dependents: 0,
            risk_appetite: RiskAppetite::Medium,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_zero_income_rejected() {
        let mut p = profile();
        p.monthly_income = 0.0;
        assert!(matches!(p.validate(), Err(Error::InvalidProfile(_))));

        p.monthly_income = -5_000.0;
        assert!(matches!(p.validate(), Err(Error::InvalidProfile(_))));
    }

    #[test]
    fn test_age_bounds() {
        let mut p = profile();
        p.age = 17;
        assert!(p.validate().is_err());
        p.age = 18;
        assert!(p.validate().is_ok());
        p.age = 65;
        assert!(p.validate().is_ok());
        p.age = 66;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_dependents_bound() {
        let mut p = profile();
        p.dependents = 5;
        assert!(p.validate().is_ok());
        p.dependents = 6;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_city_tier_parsing() {
        assert_eq!(CityTier::from_str("Tier 1").unwrap(), CityTier::Tier1);
        assert_eq!(CityTier::from_str("tier2").unwrap(), CityTier::Tier2);
        assert_eq!(CityTier::from_str("3").unwrap(), CityTier::Tier3);
        assert!(CityTier::from_str("Tier 4").is_err());
    }

    #[test]
    fn test_risk_appetite_is_lenient() {
        assert_eq!(RiskAppetite::from("High"), RiskAppetite::High);
        assert_eq!(RiskAppetite::from("Unknown-value"), RiskAppetite::Other);
        assert_eq!(RiskAppetite::default(), RiskAppetite::Medium);
    }

    #[test]
    fn test_risk_appetite_absent_defaults_to_medium() {
        let json = r#"{
            "age": 30,
            "monthly_income": 50000.0,
            "occupation": "employee",
            "city_tier": "tier2",
            "dependents": 1
        }"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.risk_appetite, RiskAppetite::Medium);
    }

    #[test]
    fn test_unknown_risk_string_deserializes_to_other() {
        let json = r#"{
            "age": 30,
            "monthly_income": 50000.0,
            "occupation": "student",
            "city_tier": "tier3",
            "dependents": 0,
            "risk_appetite": "yolo"
        }"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.risk_appetite, RiskAppetite::Other);
    }
}
