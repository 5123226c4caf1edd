use async_trait::async_trait;

use crate::error::DemandError;
use crate::models::{
    BookingSnapshot, CustomerType, DemandPrediction, DepositType, LeadTimeCategory,
};
use crate::source::DemandSource;

/// Baseline cancellation rate observed across city and resort bookings
const BASELINE_CANCELLATION_RATE: f64 = 0.30;

/// Rule-based demand estimator. Serves as the control implementation
/// of [`DemandSource`] where no trained model is wired in.
#[derive(Debug, Default)]
pub struct HeuristicDemandModel;

impl HeuristicDemandModel {
    pub fn new() -> Self {
        Self
    }

    /// Score cancellation risk from booking attributes. Additive
    /// adjustments over the baseline rate, clamped to (0, 1).
    fn score_cancellation_risk(&self, booking: &BookingSnapshot) -> f64 {
        let mut risk = BASELINE_CANCELLATION_RATE;

        // Long lead times leave more room to cancel
        risk += match booking.lead_time_category() {
            LeadTimeCategory::LastMinute => -0.12,
            LeadTimeCategory::Short => -0.05,
            LeadTimeCategory::Medium => 0.0,
            LeadTimeCategory::Long => 0.08,
            LeadTimeCategory::VeryLong => 0.15,
        };

        // Non-refundable deposits are the strongest cancellation signal
        // in the booking history
        risk += match booking.deposit_type {
            DepositType::NonRefundable => 0.25,
            DepositType::Refundable => 0.05,
            DepositType::NoDeposit => 0.0,
        };

        // Contracted stays rarely fall through; group blocks and party
        // bookings churn more than individual travellers
        risk += match booking.customer_type {
            CustomerType::Contract => -0.06,
            CustomerType::Transient => 0.0,
            CustomerType::TransientParty => 0.04,
            CustomerType::Group => 0.08,
        };

        if booking.is_repeated_guest && booking.previous_cancellations == 0 {
            risk -= 0.10;
        }
        risk += booking.previous_cancellations.min(3) as f64 * 0.12;
        risk -= booking.previous_bookings_not_canceled.min(5) as f64 * 0.03;

        // Guests invested in the stay cancel less
        risk -= booking.special_requests.min(3) as f64 * 0.04;
        if booking.has_parking() {
            risk -= 0.08;
        }
        risk -= booking.booking_changes.min(4) as f64 * 0.02;

        if booking.days_in_waiting_list > 0 {
            risk += 0.05;
        }
        if booking.is_peak_season() {
            risk -= 0.03;
        }

        risk.max(0.01).min(0.99)
    }
}

#[async_trait]
impl DemandSource for HeuristicDemandModel {
    async fn predict(&self, booking: &BookingSnapshot) -> Result<DemandPrediction, DemandError> {
        if booking.total_guests() == 0 {
            return Err(DemandError::InvalidSnapshot(
                "booking has no guests".to_string(),
            ));
        }
        if booking.total_nights() == 0 {
            return Err(DemandError::InvalidSnapshot(
                "booking has no nights".to_string(),
            ));
        }
        if !booking.average_daily_rate.is_finite() || booking.average_daily_rate < 0.0 {
            return Err(DemandError::InvalidSnapshot(format!(
                "average daily rate {} is not a valid amount",
                booking.average_daily_rate
            )));
        }

        let risk = self.score_cancellation_risk(booking);
        DemandPrediction::from_cancellation_probability(risk)
    }
}
