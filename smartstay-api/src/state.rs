use std::sync::Arc;

use smartstay_demand::HeuristicDemandModel;
use smartstay_pricing::PricingEngine;

use crate::app_config::QuoteSettings;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PricingEngine>,
    pub demand_model: Arc<HeuristicDemandModel>,
    pub quotes: QuoteSettings,
}

impl AppState {
    pub fn new(engine: PricingEngine, quotes: QuoteSettings) -> Self {
        Self {
            engine: Arc::new(engine),
            demand_model: Arc::new(HeuristicDemandModel::new()),
            quotes,
        }
    }
}
