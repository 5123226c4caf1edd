use serde::{Deserialize, Serialize};

use crate::engine::PricingEngine;

/// Occupancy assumed when the caller has no property-specific figure
pub const DEFAULT_BASE_OCCUPANCY: f64 = 0.7;

/// Expected business impact of publishing a given nightly rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueProjection {
    pub nightly_rate: f64,
    pub expected_occupancy: f64,
    pub nightly_revenue: f64,
    pub weekly_revenue: f64,
    /// Revenue per available room
    pub revpar: f64,
}

/// Projected change versus holding a fixed nightly rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueComparison {
    pub fixed_rate: f64,
    pub fixed_weekly_revenue: f64,
    pub weekly_revenue_delta: f64,
    pub revenue_change_pct: f64,
}

impl PricingEngine {
    /// Project occupancy and revenue at the given nightly rate.
    pub fn project_revenue(
        &self,
        nightly_rate: f64,
        demand_confidence: f64,
        base_occupancy: f64,
        total_rooms: u32,
    ) -> RevenueProjection {
        let expected_occupancy =
            self.estimate_occupancy(nightly_rate, demand_confidence, base_occupancy);
        let nightly_revenue = self.estimate_revenue(nightly_rate, expected_occupancy, total_rooms);

        RevenueProjection {
            nightly_rate,
            expected_occupancy,
            nightly_revenue,
            weekly_revenue: nightly_revenue * 7.0,
            revpar: nightly_rate * expected_occupancy,
        }
    }

    /// Compare a projection against holding a fixed nightly rate under
    /// the same demand conditions.
    pub fn compare_with_fixed_price(
        &self,
        projection: &RevenueProjection,
        fixed_rate: f64,
        demand_confidence: f64,
        base_occupancy: f64,
        total_rooms: u32,
    ) -> RevenueComparison {
        let fixed = self.project_revenue(fixed_rate, demand_confidence, base_occupancy, total_rooms);
        let delta = projection.weekly_revenue - fixed.weekly_revenue;

        let revenue_change_pct = if fixed.weekly_revenue > 0.0 {
            delta / fixed.weekly_revenue * 100.0
        } else {
            0.0
        };

        RevenueComparison {
            fixed_rate,
            fixed_weekly_revenue: fixed.weekly_revenue,
            weekly_revenue_delta: delta,
            revenue_change_pct,
        }
    }
}
