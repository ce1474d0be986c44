use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use wealthspectrum_ai::AnalysisOutcome;
use wealthspectrum_core::positions::{sample_portfolio, validate_positions, Position};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisRequest {
    positions: Vec<Position>,
}

async fn get_sample_portfolio() -> Json<Vec<Position>> {
    Json(sample_portfolio())
}

/// Runs the analyst. Provider failures come back as a `failed` outcome
/// with status 200; only malformed positions are rejected with 400.
async fn analyze_portfolio(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalysisRequest>,
) -> ApiResult<Json<AnalysisOutcome>> {
    validate_positions(&request.positions)?;
    let outcome = state.analysis.request(&request.positions).await;
    if let AnalysisOutcome::Failed { code, .. } = &outcome {
        tracing::warn!("Portfolio analysis failed with {}", code);
    }
    Ok(Json(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/sample", get(get_sample_portfolio))
        .route("/portfolio/analysis", post(analyze_portfolio))
}
