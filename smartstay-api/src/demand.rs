use axum::{extract::State, Json};

use smartstay_demand::{BookingSnapshot, DemandPrediction, DemandSource};

use crate::error::AppError;
use crate::state::AppState;

/// POST /v1/demand
/// Score one booking with the rule-based demand model
pub async fn score_booking(
    State(state): State<AppState>,
    Json(booking): Json<BookingSnapshot>,
) -> Result<Json<DemandPrediction>, AppError> {
    let prediction = state
        .demand_model
        .predict(&booking)
        .await
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    Ok(Json(prediction))
}
