//! Budget recommendation engine
//!
//! Pure transformation from {predicted expenses, income, risk appetite}
//! into a structured budget plan: risk-tiered savings/investment targets,
//! a distress adjustment when predicted spending crowds out the plan, and
//! fixed per-category savings suggestions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::profile::{RiskAppetite, UserProfile};

/// Expense ratio above which the plan is scaled down
pub const DISTRESS_RATIO: f64 = 0.8;

/// Scale factor applied to savings/investment targets under distress
pub const DISTRESS_SCALE: f64 = 0.8;

/// Marker appended to the strategy label under distress
pub const DISTRESS_MARKER: &str = " | High expense alert";

/// Base allocation rates for a risk tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Allocation {
    pub savings_rate: f64,
    pub investment_rate: f64,
    pub strategy: &'static str,
}

/// The risk-tier strategy table
///
/// Targets derive from income and risk tier only; predicted expenses never
/// enter here. `Other` shares Medium's rates under its own label.
pub fn base_allocation(risk: RiskAppetite) -> Allocation {
    match risk {
        RiskAppetite::Low => Allocation {
            savings_rate: 0.15,
            investment_rate: 0.10,
            strategy: "Conservative - Focus on safety and long-term holdings",
        },
        RiskAppetite::Medium => Allocation {
            savings_rate: 0.20,
            investment_rate: 0.15,
            strategy: "Balanced - Growth via diversified recurring investments",
        },
        RiskAppetite::High => Allocation {
            savings_rate: 0.25,
            investment_rate: 0.20,
            strategy: "Aggressive - Maximum growth (higher-risk instruments)",
        },
        RiskAppetite::Other => Allocation {
            savings_rate: 0.20,
            investment_rate: 0.15,
            strategy: "Standard - Balanced approach (prefer secure instruments)",
        },
    }
}

/// Fixed spending categories with savings suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsCategory {
    Groceries,
    Entertainment,
    EatingOut,
    Transport,
}

impl SavingsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Entertainment => "Entertainment",
            Self::EatingOut => "Eating Out",
            Self::Transport => "Transport",
        }
    }
}

impl std::fmt::Display for SavingsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Engine constants: category, income multiplier, tip text
const SAVINGS_TABLE: [(SavingsCategory, f64, &str); 4] = [
    (SavingsCategory::Groceries, 0.03, "Save with smart shopping"),
    (
        SavingsCategory::Entertainment,
        0.02,
        "Save with budget planning",
    ),
    (SavingsCategory::EatingOut, 0.04, "Save by cooking at home"),
    (SavingsCategory::Transport, 0.02, "Save with carpooling"),
];

/// A per-category savings suggestion
///
/// The numeric amount and the display text are separate fields; charts and
/// UIs consume `amount` directly, never by parsing `note`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsTip {
    pub category: SavingsCategory,
    pub amount: f64,
    pub note: String,
}

/// Three-tier affordability classification of the expense ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseHealth {
    /// ratio < 0.5
    Healthy,
    /// 0.5 <= ratio < 0.7
    Moderate,
    /// ratio >= 0.7
    High,
}

impl ExpenseHealth {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 0.5 {
            Self::Healthy
        } else if ratio < 0.7 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Advice line shown alongside the classification
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Healthy => "Spending within healthy limits",
            Self::Moderate => "Consider optimizing some expenses",
            Self::High => "Immediate expense optimization needed",
        }
    }
}

impl std::fmt::Display for ExpenseHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A complete budget recommendation, immutable once computed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub predicted_expenses: f64,
    /// predicted_expenses / monthly_income; values > 1 indicate distress
    pub expense_ratio: f64,
    pub savings_target: f64,
    pub investment_recommended: f64,
    pub strategy: String,
    /// Whether the distress adjustment was applied
    pub distress: bool,
    /// Always exactly four entries, in fixed category order
    pub savings_opportunities: Vec<SavingsTip>,
}

impl BudgetPlan {
    pub fn health(&self) -> ExpenseHealth {
        ExpenseHealth::from_ratio(self.expense_ratio)
    }
}

/// Derive a budget plan from a profile and its predicted expenses
///
/// The profile is validated first: income <= 0 must be rejected before the
/// expense ratio is computed.
pub fn recommend(profile: &UserProfile, predicted_expenses: f64) -> Result<BudgetPlan> {
    profile.validate()?;

    // Predicted expenses are defined as non-negative.
    let predicted_expenses = predicted_expenses.max(0.0);

    let income = profile.monthly_income;
    let expense_ratio = predicted_expenses / income;

    let allocation = base_allocation(profile.risk_appetite);
    let mut savings_target = allocation.savings_rate * income;
    let mut investment_recommended = allocation.investment_rate * income;
    let mut strategy = allocation.strategy.to_string();

    // When predicted spending already consumes most of income, a fixed plan
    // would be infeasible; shrink the targets instead.
    let distress = expense_ratio > DISTRESS_RATIO;
    if distress {
        savings_target *= DISTRESS_SCALE;
        investment_recommended *= DISTRESS_SCALE;
        strategy.push_str(DISTRESS_MARKER);
    }

    let savings_opportunities = SAVINGS_TABLE
        .iter()
        .map(|(category, rate, note)| SavingsTip {
            category: *category,
            amount: rate * income,
            note: (*note).to_string(),
        })
        .collect();

    Ok(BudgetPlan {
        predicted_expenses,
        expense_ratio,
        savings_target,
        investment_recommended,
        strategy,
        distress,
        savings_opportunities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::profile::{CityTier, Occupation};

    fn profile(income: f64, risk: RiskAppetite) -> UserProfile {
        UserProfile {
            age: 30,
            monthly_income: income,
            occupation: Occupation::Employee,
            city_tier: CityTier::Tier1,
            dependents: 1,
            risk_appetite: risk,
        }
    }

    #[test]
    fn test_medium_risk_moderate_ratio() {
        // income=75000, risk=Medium, predicted=45000
        let plan = recommend(&profile(75_000.0, RiskAppetite::Medium), 45_000.0).unwrap();

        assert!((plan.expense_ratio - 0.6).abs() < 1e-12);
        assert_eq!(plan.savings_target, 15_000.0);
        assert_eq!(plan.investment_recommended, 11_250.0);
        assert!(!plan.distress);
        assert!(!plan.strategy.contains(DISTRESS_MARKER.trim()));
        assert_eq!(plan.health(), ExpenseHealth::Moderate);
    }

    #[test]
    fn test_high_risk_distress_adjustment() {
        // income=50000, risk=High, predicted=45000 -> ratio 0.9
        let plan = recommend(&profile(50_000.0, RiskAppetite::High), 45_000.0).unwrap();

        assert!((plan.expense_ratio - 0.9).abs() < 1e-12);
        // Base 12500/10000 scaled by 0.8
        assert!((plan.savings_target - 10_000.0).abs() < 1e-9);
        assert!((plan.investment_recommended - 8_000.0).abs() < 1e-9);
        assert!(plan.distress);
        assert!(plan.strategy.ends_with(DISTRESS_MARKER));
        assert_eq!(plan.health(), ExpenseHealth::High);
    }

    #[test]
    fn test_unknown_risk_falls_to_standard() {
        // income=20000, risk outside the enumerated set
        let plan = recommend(&profile(20_000.0, RiskAppetite::Other), 5_000.0).unwrap();

        assert_eq!(plan.savings_target, 4_000.0);
        assert_eq!(plan.investment_recommended, 3_000.0);
        assert!(plan.strategy.starts_with("Standard"));
    }

    #[test]
    fn test_targets_scale_linearly_with_income() {
        for risk in [
            RiskAppetite::Low,
            RiskAppetite::Medium,
            RiskAppetite::High,
            RiskAppetite::Other,
        ] {
            let base = recommend(&profile(10_000.0, risk), 1_000.0).unwrap();
            let scaled = recommend(&profile(30_000.0, risk), 3_000.0).unwrap();
            assert!((scaled.savings_target - 3.0 * base.savings_target).abs() < 1e-9);
            assert!(
                (scaled.investment_recommended - 3.0 * base.investment_recommended).abs() < 1e-9
            );
        }
    }

    #[test]
    fn test_ratio_exactly_at_threshold_is_not_distress() {
        // ratio == 0.8 exactly: no adjustment
        let plan = recommend(&profile(50_000.0, RiskAppetite::Low), 40_000.0).unwrap();
        assert!(!plan.distress);
        assert_eq!(plan.savings_target, 7_500.0);
        assert_eq!(plan.investment_recommended, 5_000.0);
    }

    #[test]
    fn test_savings_opportunities_are_fixed() {
        let plan = recommend(&profile(75_000.0, RiskAppetite::Low), 90_000.0).unwrap();

        assert_eq!(plan.savings_opportunities.len(), 4);
        let amounts: Vec<f64> = plan.savings_opportunities.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![2_250.0, 1_500.0, 3_000.0, 1_500.0]);

        let categories: Vec<&str> = plan
            .savings_opportunities
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(
            categories,
            vec!["Groceries", "Entertainment", "Eating Out", "Transport"]
        );

        // Notes carry no embedded amounts to re-parse
        for tip in &plan.savings_opportunities {
            assert!(!tip.note.contains(char::is_numeric));
        }
    }

    #[test]
    fn test_zero_income_rejected_before_ratio() {
        let err = recommend(&profile(0.0, RiskAppetite::Medium), 10_000.0).unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(_)));
    }

    #[test]
    fn test_health_thresholds() {
        assert_eq!(ExpenseHealth::from_ratio(0.49), ExpenseHealth::Healthy);
        assert_eq!(ExpenseHealth::from_ratio(0.5), ExpenseHealth::Moderate);
        assert_eq!(ExpenseHealth::from_ratio(0.69), ExpenseHealth::Moderate);
        assert_eq!(ExpenseHealth::from_ratio(0.7), ExpenseHealth::High);
        assert_eq!(ExpenseHealth::from_ratio(1.3), ExpenseHealth::High);
    }

    #[test]
    fn test_negative_prediction_clamped() {
        let plan = recommend(&profile(40_000.0, RiskAppetite::Medium), -500.0).unwrap();
        assert_eq!(plan.predicted_expenses, 0.0);
        assert_eq!(plan.expense_ratio, 0.0);
        assert_eq!(plan.health(), ExpenseHealth::Healthy);
    }
}
