use crate::handlers::{calculation, health};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/calculator", post(calculation::calculate))
        .route("/calculator/defaults", get(calculation::defaults));

    Router::new()
        .route("/health", get(health::health))
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use std::str::FromStr;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(&Config::default()))
    }

    async fn post_form(body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/v1/calculator")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn dec_at(value: &Value) -> Decimal {
        Decimal::from_str(value.as_str().unwrap()).unwrap()
    }

    fn long_form() -> Value {
        json!({
            "side": "long",
            "entry_price": "100",
            "stop_price": "90",
            "target_price": "130",
            "leverage": "10",
            "risk_amount": "100",
            "account_balance": "5000",
            "dca_enabled": true,
            "dca_percent": "0"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_calculate_success() {
        let (status, body) = post_form(long_form()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dec_at(&body["metrics"]["risk_per_unit"]), Decimal::from(10));
        assert_eq!(dec_at(&body["metrics"]["liquidation_price"]), Decimal::from(90));
        assert_eq!(body["report"]["risk_reward"], "1 : 3.00");
        assert_eq!(body["report"]["margin_required"], "$100.00");
        assert!(body["calculation_id"].is_string());

        let advisories = body["metrics"]["advisories"].as_array().unwrap();
        assert!(advisories.contains(&json!("STRONG_SETUP")));
    }

    #[tokio::test]
    async fn test_calculate_parse_error() {
        let mut form = long_form();
        form["stop_price"] = json!("ninety");
        let (status, body) = post_form(form).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "PARSE_ERROR");
        assert_eq!(body["field"], "stop_price");
    }

    #[tokio::test]
    async fn test_calculate_invalid_input() {
        let mut form = long_form();
        form["stop_price"] = json!("100");
        let (status, body) = post_form(form).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "INVALID_INPUT");
        assert_eq!(body["kind"], "ZERO_RISK_DISTANCE");
    }

    #[tokio::test]
    async fn test_calculate_overflow_is_invalid_input() {
        let mut form = long_form();
        form["side"] = json!("short");
        form["entry_price"] = json!("70000000000000000000000000000");
        form["stop_price"] = json!("1");
        form["leverage"] = json!("1");
        let (status, body) = post_form(form).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "INVALID_INPUT");
        assert_eq!(body["kind"], "NUMERIC_OVERFLOW");
    }

    #[tokio::test]
    async fn test_calculate_risk_percent_over_hundred() {
        let mut form = long_form();
        form["risk_mode"] = json!("percent_of_account");
        form["risk_amount"] = json!("150");
        let (status, body) = post_form(form).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "RISK_PERCENT_OUT_OF_RANGE");
    }

    #[tokio::test]
    async fn test_defaults_compute_cleanly() {
        let request = Request::builder()
            .uri("/v1/calculator/defaults")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let defaults: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(defaults["leverage"], "20");

        let (status, body) = post_form(defaults).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report"]["dca_note"], "DCA active: 50% of the planned size reserved");
    }
}
