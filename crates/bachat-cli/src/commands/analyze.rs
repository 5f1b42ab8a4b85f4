//! Analyze command implementation

use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use bachat_core::{CityTier, Occupation, RiskAppetite, UserProfile};

use super::{build_advisor, format_inr};

#[allow(clippy::too_many_arguments)]
pub async fn cmd_analyze(
    artifacts: Option<&Path>,
    age: u32,
    income: f64,
    occupation: &str,
    city_tier: &str,
    dependents: u8,
    risk: Option<&str>,
    json: bool,
) -> Result<()> {
    let profile = UserProfile {
        age,
        monthly_income: income,
        occupation: Occupation::from_str(occupation).map_err(|e| anyhow!(e))?,
        city_tier: CityTier::from_str(city_tier).map_err(|e| anyhow!(e))?,
        dependents,
        risk_appetite: risk.map(RiskAppetite::from).unwrap_or_default(),
    };

    let advisor = build_advisor(artifacts)?;
    let advice = advisor.analyze(&profile).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    let plan = &advice.plan;

    println!("📊 Financial Analysis");
    println!();
    println!(
        "   Predicted monthly expenses: {} ({:.1}% of income)",
        format_inr(plan.predicted_expenses),
        plan.expense_ratio * 100.0
    );
    println!(
        "   Recommended savings:        {}",
        format_inr(plan.savings_target)
    );
    println!(
        "   Recommended investment:     {}",
        format_inr(plan.investment_recommended)
    );
    println!();
    println!("🎯 Strategy: {}", plan.strategy);
    println!(
        "   Expense health: {} ({})",
        advice.health,
        advice.health.advice()
    );
    println!();
    println!("💡 Savings opportunities");
    for tip in &plan.savings_opportunities {
        println!(
            "   {:<14} {:>10}  {}",
            tip.category.as_str(),
            format_inr(tip.amount),
            tip.note
        );
    }

    Ok(())
}
