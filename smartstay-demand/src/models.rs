use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use smartstay_pricing::HotelType;

use crate::error::DemandError;

/// Coarse demand band derived from the confidence score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    pub fn from_confidence(demand_confidence: f64) -> Self {
        if demand_confidence > 0.7 {
            DemandLevel::High
        } else if demand_confidence > 0.4 {
            DemandLevel::Medium
        } else {
            DemandLevel::Low
        }
    }
}

/// Output of a demand estimator. Demand confidence is the inverse of
/// the cancellation probability: a booking unlikely to cancel is
/// demand the property can count on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandPrediction {
    pub demand_confidence: f64,
    pub cancellation_probability: f64,
    pub demand_level: DemandLevel,
}

impl DemandPrediction {
    pub fn from_cancellation_probability(probability: f64) -> Result<Self, DemandError> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(DemandError::InvalidProbability(probability));
        }

        let demand_confidence = 1.0 - probability;
        Ok(Self {
            demand_confidence,
            cancellation_probability: probability,
            demand_level: DemandLevel::from_confidence(demand_confidence),
        })
    }

    pub fn from_confidence(demand_confidence: f64) -> Result<Self, DemandError> {
        if !demand_confidence.is_finite() || !(0.0..=1.0).contains(&demand_confidence) {
            return Err(DemandError::InvalidProbability(demand_confidence));
        }

        Ok(Self {
            demand_confidence,
            cancellation_probability: 1.0 - demand_confidence,
            demand_level: DemandLevel::from_confidence(demand_confidence),
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositType {
    NoDeposit,
    NonRefundable,
    Refundable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    Transient,
    TransientParty,
    Contract,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTimeCategory {
    LastMinute,
    Short,
    Medium,
    Long,
    VeryLong,
}

/// One booking as seen at reservation time. These are the raw
/// attributes demand estimators score from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSnapshot {
    pub hotel_type: HotelType,
    pub lead_time_days: u32,
    pub arrival_date: NaiveDate,
    pub weekend_nights: u32,
    pub week_nights: u32,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub babies: u32,
    #[serde(default)]
    pub is_repeated_guest: bool,
    #[serde(default)]
    pub previous_cancellations: u32,
    #[serde(default)]
    pub previous_bookings_not_canceled: u32,
    #[serde(default)]
    pub booking_changes: u32,
    #[serde(default)]
    pub days_in_waiting_list: u32,
    /// Average daily rate agreed at booking time
    pub average_daily_rate: f64,
    #[serde(default)]
    pub required_parking_spaces: u32,
    #[serde(default)]
    pub special_requests: u32,
    pub deposit_type: DepositType,
    pub customer_type: CustomerType,
}

impl BookingSnapshot {
    pub fn total_guests(&self) -> u32 {
        self.adults + self.children + self.babies
    }

    pub fn total_nights(&self) -> u32 {
        self.weekend_nights + self.week_nights
    }

    pub fn is_weekend_stay(&self) -> bool {
        self.weekend_nights > 0
    }

    pub fn has_special_requests(&self) -> bool {
        self.special_requests > 0
    }

    pub fn has_parking(&self) -> bool {
        self.required_parking_spaces > 0
    }

    pub fn season(&self) -> Season {
        match self.arrival_date.month() {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    /// July, August and December carry peak demand
    pub fn is_peak_season(&self) -> bool {
        matches!(self.arrival_date.month(), 7 | 8 | 12)
    }

    pub fn lead_time_category(&self) -> LeadTimeCategory {
        match self.lead_time_days {
            0..=7 => LeadTimeCategory::LastMinute,
            8..=30 => LeadTimeCategory::Short,
            31..=90 => LeadTimeCategory::Medium,
            91..=365 => LeadTimeCategory::Long,
            _ => LeadTimeCategory::VeryLong,
        }
    }
}
