pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod revenue;

pub use config::PricingConfig;
pub use context::{HotelType, PricingContext, RoomType};
pub use engine::{PricingEngine, PricingResult, PricingStrategy};
pub use error::PricingError;
pub use revenue::{RevenueComparison, RevenueProjection, DEFAULT_BASE_OCCUPANCY};
