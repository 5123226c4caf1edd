use serde::Deserialize;
use smartstay_pricing::PricingConfig;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub quotes: QuoteSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuoteSettings {
    /// Room count assumed when a quote request does not supply one
    #[serde(default = "default_total_rooms")]
    pub default_total_rooms: u32,

    /// Occupancy baseline fed into revenue projections
    #[serde(default = "default_base_occupancy")]
    pub base_occupancy: f64,
}

fn default_total_rooms() -> u32 {
    100
}

fn default_base_occupancy() -> f64 {
    smartstay_pricing::DEFAULT_BASE_OCCUPANCY
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            default_total_rooms: default_total_rooms(),
            base_occupancy: default_base_occupancy(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SMARTSTAY_SERVER__PORT=9090` overrides server.port
            .add_source(config::Environment::with_prefix("SMARTSTAY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
