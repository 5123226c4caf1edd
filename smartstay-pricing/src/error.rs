/// Pricing calculation errors
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("demand confidence must lie in [0, 1], got {0}")]
    InvalidDemandConfidence(f64),

    #[error("competition price must be positive and finite, got {0}")]
    InvalidCompetitionPrice(f64),

    #[error("season factor must be non-negative and finite, got {0}")]
    InvalidSeasonFactor(f64),
}
