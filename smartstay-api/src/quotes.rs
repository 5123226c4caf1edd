use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use smartstay_demand::{DemandLevel, DemandPrediction};
use smartstay_pricing::{
    HotelType, PricingContext, PricingResult, RevenueComparison, RevenueProjection, RoomType,
};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Either a demand confidence or a cancellation probability must be
    /// supplied; confidence wins when both are present.
    pub demand_confidence: Option<f64>,
    pub cancellation_probability: Option<f64>,

    pub competition_price: f64,
    #[serde(default = "default_season_factor")]
    pub season_factor: f64,
    pub hotel_type: HotelType,
    pub room_type: RoomType,

    /// Rooms available for the projection; falls back to the configured
    /// default when absent
    pub total_rooms: Option<u32>,

    /// Fixed nightly rate to compare the recommendation against
    pub fixed_rate_reference: Option<f64>,
}

fn default_season_factor() -> f64 {
    1.0
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub demand_level: DemandLevel,
    pub pricing: PricingResult,
    pub revenue: RevenueProjection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_rate_comparison: Option<RevenueComparison>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/quotes
/// Price one room night from a demand signal and market context
pub async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let prediction = resolve_demand(&req)?;

    let context = PricingContext {
        demand_confidence: prediction.demand_confidence,
        competition_price: req.competition_price,
        season_factor: req.season_factor,
        hotel_type: req.hotel_type,
        room_type: req.room_type,
    };

    let pricing = state
        .engine
        .compute_optimal_price(&context)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let total_rooms = req.total_rooms.unwrap_or(state.quotes.default_total_rooms);
    let revenue = state.engine.project_revenue(
        pricing.optimal_price,
        prediction.demand_confidence,
        state.quotes.base_occupancy,
        total_rooms,
    );

    let fixed_rate_comparison = req.fixed_rate_reference.map(|fixed_rate| {
        state.engine.compare_with_fixed_price(
            &revenue,
            fixed_rate,
            prediction.demand_confidence,
            state.quotes.base_occupancy,
            total_rooms,
        )
    });

    let quote_id = Uuid::new_v4();
    tracing::debug!(
        %quote_id,
        optimal_price = pricing.optimal_price,
        strategy = %pricing.pricing_strategy,
        "quote created"
    );

    Ok(Json(QuoteResponse {
        quote_id,
        created_at: Utc::now(),
        demand_level: prediction.demand_level,
        pricing,
        revenue,
        fixed_rate_comparison,
    }))
}

fn resolve_demand(req: &QuoteRequest) -> Result<DemandPrediction, AppError> {
    let prediction = match (req.demand_confidence, req.cancellation_probability) {
        (Some(confidence), _) => DemandPrediction::from_confidence(confidence),
        (None, Some(probability)) => DemandPrediction::from_cancellation_probability(probability),
        (None, None) => {
            return Err(AppError::ValidationError(
                "either demand_confidence or cancellation_probability is required".to_string(),
            ))
        }
    };

    prediction.map_err(|e| AppError::ValidationError(e.to_string()))
}
