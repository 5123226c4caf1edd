/// Demand estimation errors
#[derive(Debug, thiserror::Error)]
pub enum DemandError {
    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("invalid booking snapshot: {0}")]
    InvalidSnapshot(String),
}
