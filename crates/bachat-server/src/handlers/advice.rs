//! Advice handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};
use bachat_core::{base_allocation, Advice, RiskAppetite, UserProfile};

/// Minimum value for an allocation chart segment
///
/// A zero-sized segment degenerates in a pie/donut chart; the dashboard
/// contract clamps every segment to at least this value.
const CHART_MIN_SEGMENT: f64 = 0.1;

/// A labeled slice of the budget allocation chart
#[derive(Debug, Serialize)]
pub struct ChartSegment {
    pub label: &'static str,
    pub value: f64,
}

/// One bar of the per-category savings chart
#[derive(Debug, Serialize)]
pub struct SavingsBar {
    pub category: &'static str,
    pub amount: f64,
}

/// Chart-ready payloads derived from a plan (numeric, never re-parsed)
#[derive(Debug, Serialize)]
pub struct ChartData {
    pub allocation: Vec<ChartSegment>,
    pub savings: Vec<SavingsBar>,
}

/// Response body for POST /api/advice
#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    #[serde(flatten)]
    pub advice: Advice,
    pub health_advice: &'static str,
    pub charts: ChartData,
}

fn build_charts(advice: &Advice) -> ChartData {
    let plan = &advice.plan;
    let allocation = vec![
        ChartSegment {
            label: "Predicted Expenses",
            value: plan.predicted_expenses.max(CHART_MIN_SEGMENT),
        },
        ChartSegment {
            label: "Recommended Savings",
            value: plan.savings_target.max(CHART_MIN_SEGMENT),
        },
        ChartSegment {
            label: "Investment",
            value: plan.investment_recommended.max(CHART_MIN_SEGMENT),
        },
    ];

    let savings = plan
        .savings_opportunities
        .iter()
        .map(|tip| SavingsBar {
            category: tip.category.as_str(),
            amount: tip.amount,
        })
        .collect();

    ChartData { allocation, savings }
}

/// POST /api/advice - Run the full analysis for a profile
pub async fn post_advice(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<AdviceResponse>, AppError> {
    let advice = state.advisor.analyze(&profile).await?;
    let charts = build_charts(&advice);

    Ok(Json(AdviceResponse {
        health_advice: advice.health.advice(),
        charts,
        advice,
    }))
}

/// Response body for GET /api/health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend_healthy: bool,
    pub model: String,
    pub backend: String,
}

/// GET /api/health - Prediction backend availability
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let backend_healthy = state.advisor.health_check().await;
    Json(HealthResponse {
        status: if backend_healthy { "ok" } else { "degraded" },
        backend_healthy,
        model: state.advisor.model().to_string(),
        backend: state.advisor.backend_host().to_string(),
    })
}

/// One row of the risk-tier strategy table
#[derive(Debug, Serialize)]
pub struct StrategyRow {
    pub risk: &'static str,
    pub savings_rate: f64,
    pub investment_rate: f64,
    pub strategy: &'static str,
}

/// GET /api/strategies - The static risk-tier allocation table
pub async fn get_strategies() -> Json<Vec<StrategyRow>> {
    let rows = [
        RiskAppetite::Low,
        RiskAppetite::Medium,
        RiskAppetite::High,
        RiskAppetite::Other,
    ]
    .into_iter()
    .map(|risk| {
        let allocation = base_allocation(risk);
        StrategyRow {
            risk: risk.as_str(),
            savings_rate: allocation.savings_rate,
            investment_rate: allocation.investment_rate,
            strategy: allocation.strategy,
        }
    })
    .collect();

    Json(rows)
}
