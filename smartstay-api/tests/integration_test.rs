use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use smartstay_api::app_config::QuoteSettings;
use smartstay_api::{app, AppState};
use smartstay_pricing::{PricingConfig, PricingEngine};

fn test_app() -> axum::Router {
    let state = AppState::new(
        PricingEngine::new(PricingConfig::default()),
        QuoteSettings::default(),
    );
    app(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_quote_resort_deluxe() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/quotes",
            json!({
                "demand_confidence": 0.78,
                "competition_price": 180.0,
                "season_factor": 1.2,
                "hotel_type": "RESORT",
                "room_type": "DELUXE",
                "total_rooms": 100,
                "fixed_rate_reference": 150.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let pricing = &body["pricing"];
    assert!((pricing["optimal_price"].as_f64().unwrap() - 332.99).abs() < 1e-9);
    assert!((pricing["base_price"].as_f64().unwrap() - 156.0).abs() < 1e-9);
    assert_eq!(
        pricing["pricing_strategy"].as_str().unwrap(),
        "Market Leadership"
    );
    assert_eq!(body["demand_level"].as_str().unwrap(), "HIGH");

    let occupancy = body["revenue"]["expected_occupancy"].as_f64().unwrap();
    assert!((0.1..=0.95).contains(&occupancy));
    assert!(body["fixed_rate_comparison"]["fixed_weekly_revenue"]
        .as_f64()
        .is_some());
    assert!(body["quote_id"].as_str().is_some());
}

#[tokio::test]
async fn test_quote_accepts_cancellation_probability() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/quotes",
            json!({
                "cancellation_probability": 0.22,
                "competition_price": 180.0,
                "season_factor": 1.2,
                "hotel_type": "RESORT",
                "room_type": "DELUXE"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    // Equivalent to demand_confidence = 0.78
    assert!((body["pricing"]["optimal_price"].as_f64().unwrap() - 332.99).abs() < 1e-9);
}

#[tokio::test]
async fn test_quote_requires_demand_signal() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/quotes",
            json!({
                "competition_price": 180.0,
                "hotel_type": "CITY",
                "room_type": "STANDARD"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_quote_rejects_non_positive_competition_price() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/quotes",
            json!({
                "demand_confidence": 0.6,
                "competition_price": 0.0,
                "hotel_type": "CITY",
                "room_type": "STANDARD"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quote_rejects_out_of_range_confidence() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/quotes",
            json!({
                "demand_confidence": 1.4,
                "competition_price": 120.0,
                "hotel_type": "CITY",
                "room_type": "STANDARD"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_demand_scoring() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/demand",
            json!({
                "hotel_type": "RESORT",
                "lead_time_days": 45,
                "arrival_date": "2024-07-15",
                "weekend_nights": 2,
                "week_nights": 3,
                "adults": 2,
                "average_daily_rate": 150.0,
                "required_parking_spaces": 1,
                "special_requests": 2,
                "deposit_type": "NO_DEPOSIT",
                "customer_type": "TRANSIENT"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let confidence = body["demand_confidence"].as_f64().unwrap();
    let probability = body["cancellation_probability"].as_f64().unwrap();
    assert!((confidence + probability - 1.0).abs() < 1e-9);
    assert!(body["demand_level"].as_str().is_some());
}

#[tokio::test]
async fn test_demand_scoring_rejects_empty_booking() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/demand",
            json!({
                "hotel_type": "CITY",
                "lead_time_days": 10,
                "arrival_date": "2024-03-01",
                "weekend_nights": 0,
                "week_nights": 2,
                "adults": 0,
                "average_daily_rate": 90.0,
                "deposit_type": "NO_DEPOSIT",
                "customer_type": "TRANSIENT"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
