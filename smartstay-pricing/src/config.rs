use serde::{Deserialize, Serialize};

/// Immutable pricing constants, fixed at engine construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Nightly rate before any adjustment, in major currency units
    #[serde(default = "default_base_price")]
    pub base_price: f64,

    /// Price elasticity of demand for hotel rooms
    #[serde(default = "default_price_elasticity")]
    pub price_elasticity: f64,

    /// Floor applied to every published price
    #[serde(default = "default_min_price")]
    pub min_price: f64,

    /// Ceiling applied to every published price
    #[serde(default = "default_max_price")]
    pub max_price: f64,
}

fn default_base_price() -> f64 {
    100.0
}

fn default_price_elasticity() -> f64 {
    -1.8
}

fn default_min_price() -> f64 {
    50.0
}

fn default_max_price() -> f64 {
    400.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: default_base_price(),
            price_elasticity: default_price_elasticity(),
            min_price: default_min_price(),
            max_price: default_max_price(),
        }
    }
}
