use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::context::PricingContext;
use crate::error::PricingError;

/// Market positioning implied by the quoted price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PricingStrategy {
    #[serde(rename = "Premium Positioning")]
    PremiumPositioning,
    #[serde(rename = "Market Leadership")]
    MarketLeadership,
    #[serde(rename = "Competitive Matching")]
    CompetitiveMatching,
    #[serde(rename = "Value Positioning")]
    ValuePositioning,
}

impl std::fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PricingStrategy::PremiumPositioning => "Premium Positioning",
            PricingStrategy::MarketLeadership => "Market Leadership",
            PricingStrategy::CompetitiveMatching => "Competitive Matching",
            PricingStrategy::ValuePositioning => "Value Positioning",
        };
        f.write_str(label)
    }
}

/// Full price decomposition for one calculation. Every intermediate
/// factor is exposed so consumers can audit the result instead of
/// trusting an opaque number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    pub optimal_price: f64,
    pub base_price: f64,
    pub demand_multiplier: f64,
    pub competition_adjustment: f64,
    pub season_adjustment: f64,
    pub room_multiplier: f64,
    pub pricing_strategy: PricingStrategy,
}

/// Stateless pricing engine. Holds only read-only configuration, so a
/// single instance can serve concurrent callers.
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Compute the recommended nightly rate for the given market context.
    pub fn compute_optimal_price(
        &self,
        context: &PricingContext,
    ) -> Result<PricingResult, PricingError> {
        context.validate()?;

        // Category adjustments establish the base price before any
        // demand or market signal is applied.
        let mut base_price = self.config.base_price;
        base_price *= context.hotel_type.base_adjustment();

        let room_multiplier = context.room_type.multiplier();
        base_price *= room_multiplier;

        let demand_multiplier = demand_multiplier(context.demand_confidence);

        // Ratio of the competitor rate to our category-adjusted base.
        // validate() guarantees base_price > 0 here.
        let competition_ratio = context.competition_price / base_price;
        let competition_adjustment = competition_adjustment(competition_ratio);

        let season_adjustment = 0.8 + context.season_factor * 0.7;

        let raw_price = base_price * demand_multiplier * competition_adjustment * season_adjustment;

        let optimal_price = apply_psychological_pricing(raw_price)
            .max(self.config.min_price)
            .min(self.config.max_price);

        Ok(PricingResult {
            optimal_price,
            base_price,
            demand_multiplier,
            competition_adjustment,
            season_adjustment,
            room_multiplier,
            pricing_strategy: pricing_strategy(context.demand_confidence, competition_ratio),
        })
    }

    /// Estimate the occupancy rate a given nightly rate would produce,
    /// combining price elasticity with the demand signal.
    pub fn estimate_occupancy(
        &self,
        price: f64,
        demand_confidence: f64,
        base_occupancy: f64,
    ) -> f64 {
        let price_ratio = price / self.config.base_price;
        let price_effect = self.config.price_elasticity * (price_ratio - 1.0);
        let demand_effect = (demand_confidence - 0.5) * 0.4;

        let occupancy = base_occupancy * (1.0 + price_effect + demand_effect);

        occupancy.max(0.1).min(0.95)
    }

    /// Expected nightly revenue at the given price and occupancy.
    pub fn estimate_revenue(&self, price: f64, occupancy: f64, total_rooms: u32) -> f64 {
        price * occupancy * total_rooms as f64
    }
}

/// Demand multiplier, piecewise in demand confidence.
///
/// The slope changes at 0.5 and 0.8 and the curve steps up at 0.8;
/// both are intentional and must be preserved for behavioural
/// compatibility with existing rate plans.
fn demand_multiplier(demand_confidence: f64) -> f64 {
    if demand_confidence > 0.8 {
        1.5 + (demand_confidence - 0.8) * 2.5
    } else if demand_confidence > 0.5 {
        1.0 + (demand_confidence - 0.5) * 1.0
    } else {
        0.7 + demand_confidence * 0.6
    }
}

/// Market-positioning adjustment from the competition ratio.
fn competition_adjustment(competition_ratio: f64) -> f64 {
    if competition_ratio < 0.8 {
        // Notably more expensive than the market: hold a premium
        1.15
    } else if competition_ratio > 1.2 {
        // Notably cheaper: keep the value position
        0.95
    } else {
        1.0 + (competition_ratio - 1.0) * 0.1
    }
}

/// Price-ending heuristic: charm endings for mid and high rates.
fn apply_psychological_pricing(price: f64) -> f64 {
    if price >= 100.0 {
        (price - 1.0).round() + 0.99
    } else if price >= 50.0 {
        round_cents(price - 0.05)
    } else {
        round_cents(price)
    }
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

fn pricing_strategy(demand_confidence: f64, competition_ratio: f64) -> PricingStrategy {
    if demand_confidence > 0.8 && competition_ratio < 1.0 {
        PricingStrategy::PremiumPositioning
    } else if demand_confidence > 0.6 && competition_ratio <= 1.2 {
        PricingStrategy::MarketLeadership
    } else if demand_confidence > 0.4 {
        PricingStrategy::CompetitiveMatching
    } else {
        PricingStrategy::ValuePositioning
    }
}
