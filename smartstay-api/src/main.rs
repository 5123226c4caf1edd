use std::net::SocketAddr;

use smartstay_api::{app, AppState};
use smartstay_pricing::PricingEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartstay_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = smartstay_api::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting SmartStay API on port {}", config.server.port);

    let state = AppState::new(PricingEngine::new(config.pricing.clone()), config.quotes.clone());

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
