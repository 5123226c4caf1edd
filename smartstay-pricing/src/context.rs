use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Property categories recognised by the engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HotelType {
    Resort,
    City,
    Other,
}

impl HotelType {
    /// Base-price adjustment for the property category.
    /// Unknown categories are neutral rather than an error.
    pub fn base_adjustment(&self) -> f64 {
        match self {
            HotelType::Resort => 1.2,
            HotelType::City | HotelType::Other => 1.0,
        }
    }
}

/// Room categories recognised by the engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Presidential,
    Other,
}

impl RoomType {
    /// Fixed room-category multiplier. Unknown categories fall back
    /// to the neutral 1.0 rather than failing.
    pub fn multiplier(&self) -> f64 {
        match self {
            RoomType::Standard => 1.0,
            RoomType::Deluxe => 1.3,
            RoomType::Suite => 1.7,
            RoomType::Presidential => 2.5,
            RoomType::Other => 1.0,
        }
    }
}

/// Inputs for a single pricing calculation. Immutable; no lifecycle
/// beyond the call it is passed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingContext {
    /// Estimated likelihood the booking will not cancel, in [0, 1]
    pub demand_confidence: f64,

    /// Competitor nightly rate for a comparable room, must be > 0
    pub competition_price: f64,

    /// Seasonality multiplier, 1.0 = neutral
    pub season_factor: f64,

    pub hotel_type: HotelType,
    pub room_type: RoomType,
}

impl PricingContext {
    /// Reject inputs the pricing formulas are not defined for.
    /// Out-of-range demand confidence is an error, not clamped.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.demand_confidence.is_finite() || !(0.0..=1.0).contains(&self.demand_confidence) {
            return Err(PricingError::InvalidDemandConfidence(self.demand_confidence));
        }
        if !self.competition_price.is_finite() || self.competition_price <= 0.0 {
            return Err(PricingError::InvalidCompetitionPrice(self.competition_price));
        }
        if !self.season_factor.is_finite() || self.season_factor < 0.0 {
            return Err(PricingError::InvalidSeasonFactor(self.season_factor));
        }
        Ok(())
    }
}
