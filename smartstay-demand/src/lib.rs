pub mod error;
pub mod heuristic;
pub mod models;
pub mod source;

pub use error::DemandError;
pub use heuristic::HeuristicDemandModel;
pub use models::{
    BookingSnapshot, CustomerType, DemandLevel, DemandPrediction, DepositType, LeadTimeCategory,
    Season,
};
pub use source::DemandSource;
