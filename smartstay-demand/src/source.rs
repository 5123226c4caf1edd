use async_trait::async_trait;

use crate::error::DemandError;
use crate::models::{BookingSnapshot, DemandPrediction};

/// Contract for upstream demand estimators. The engine does not care
/// whether the implementation is a heuristic or a trained model, only
/// that it yields a confidence score in [0, 1].
#[async_trait]
pub trait DemandSource: Send + Sync {
    async fn predict(&self, booking: &BookingSnapshot) -> Result<DemandPrediction, DemandError>;
}
