use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    api::{error::ApiError, AppState},
    domain::{
        Appliance, ApplianceSelection, BhkCategory, BreakdownEntry, CostEstimate,
        FAN_UNIT_KW, LIGHT_UNIT_KW,
    },
    estimator::{self, TipSheet},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate))
        .route("/ratings", get(ratings))
        .route("/tips", post(tips))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    /// Raw BHK number; anything outside 1..=3 is rejected
    pub bhk: u8,
    #[serde(default)]
    pub appliances: ApplianceSelection,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub bhk: BhkCategory,
    /// All five contributions, zeros included
    pub breakdown: Vec<BreakdownEntry>,
    /// Nonzero contributions only, ready to feed a pie chart
    pub chart: Vec<BreakdownEntry>,
    pub total_kw: f64,
    pub cost: CostEstimate,
    pub rate_per_kwh: f64,
}

/// POST /api/v1/estimate - compute a full energy and cost estimate
pub async fn estimate(
    State(st): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let bhk = BhkCategory::try_from(req.bhk)?;
    let breakdown = estimator::compute_breakdown(bhk, req.appliances);
    let total_kw = breakdown.total_kw();
    tracing::debug!(%bhk, appliances = req.appliances.count(), total_kw, "estimate computed");

    Ok(Json(EstimateResponse {
        bhk,
        breakdown: breakdown.entries(),
        chart: breakdown.chart_entries(),
        total_kw,
        cost: st.tariff.estimate(total_kw),
        rate_per_kwh: st.tariff.rate_per_kwh,
    }))
}

#[derive(Debug, Serialize)]
pub struct ApplianceRating {
    pub id: Appliance,
    pub label: &'static str,
    pub rating_kw: f64,
}

#[derive(Debug, Serialize)]
pub struct FixtureCounts {
    pub bhk: BhkCategory,
    pub lights: u32,
    pub fans: u32,
    pub base_kw: f64,
}

#[derive(Debug, Serialize)]
pub struct RatingsResponse {
    pub light_unit_kw: f64,
    pub fan_unit_kw: f64,
    pub appliances: Vec<ApplianceRating>,
    pub fixtures: Vec<FixtureCounts>,
}

/// GET /api/v1/ratings - the static rating tables a UI renders captions from
pub async fn ratings() -> Json<RatingsResponse> {
    let appliances = Appliance::iter()
        .map(|a| ApplianceRating {
            id: a,
            label: a.label(),
            rating_kw: a.rating_kw(),
        })
        .collect();

    let fixtures = BhkCategory::iter()
        .map(|bhk| {
            let (lights, fans) = bhk.fixture_counts();
            FixtureCounts {
                bhk,
                lights,
                fans,
                base_kw: bhk.base_load_kw(),
            }
        })
        .collect();

    Json(RatingsResponse {
        light_unit_kw: LIGHT_UNIT_KW,
        fan_unit_kw: FAN_UNIT_KW,
        appliances,
        fixtures,
    })
}

#[derive(Debug, Deserialize)]
pub struct TipsRequest {
    #[serde(default)]
    pub appliances: ApplianceSelection,
}

/// POST /api/v1/tips - energy-saving advice for a household
pub async fn tips(Json(req): Json<TipsRequest>) -> Json<Vec<TipSheet>> {
    Json(estimator::saving_tips(&req.appliances))
}
