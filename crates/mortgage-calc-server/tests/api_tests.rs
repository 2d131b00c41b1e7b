use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use mortgage_calc_core::RateStore;
use mortgage_calc_server::{app, AppState};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> (Router, RateStore) {
    let rates = RateStore::default();
    (app(AppState::new(rates.clone())), rates)
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Body::empty()).await
}

async fn patch(app: Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Body::from(body)).await
}

fn assert_fail(status: StatusCode, body: &Value, fragment: &str) {
    assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
    assert_eq!(body["result"], "fail");
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error: "), "message: {message}");
    assert!(message.contains(fragment), "message: {message}");
}

// ===========================================================================
// /payment-amount/
// ===========================================================================

#[tokio::test]
async fn test_payment_amount_success() {
    let (app, _) = test_app();
    let (status, body) = get(
        app,
        "/api/v1/payment-amount/?asking-price=300000&down-payment=30000&payment-schedule=monthly&amortization-period=25",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "success");
    let payment = body["paymentAmount"].as_f64().unwrap();
    assert!((payment - 1378.1506).abs() < 0.001, "payment {payment}");
}

#[tokio::test]
async fn test_payment_amount_without_trailing_slash() {
    let (app, _) = test_app();
    let (status, body) = get(
        app,
        "/api/v1/payment-amount?asking-price=300000&down-payment=60000&payment-schedule=Weekly&amortization-period=20",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paymentAmount"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_payment_amount_missing_parameter() {
    let (app, _) = test_app();
    let (status, body) = get(
        app,
        "/api/v1/payment-amount/?asking-price=300000&payment-schedule=monthly&amortization-period=25",
    )
    .await;
    assert_fail(status, &body, "wrong input types");
}

#[tokio::test]
async fn test_payment_amount_not_a_number() {
    let (app, _) = test_app();
    let (status, body) = get(
        app,
        "/api/v1/payment-amount/?asking-price=lots&down-payment=30000&payment-schedule=monthly&amortization-period=25",
    )
    .await;
    assert_fail(status, &body, "must be a number");
}

#[tokio::test]
async fn test_payment_amount_down_payment_too_low() {
    let (app, _) = test_app();
    let (status, body) = get(
        app,
        "/api/v1/payment-amount/?asking-price=600000&down-payment=20000&payment-schedule=monthly&amortization-period=25",
    )
    .await;
    assert_fail(status, &body, "Down Payment Is Too Low");
}

#[tokio::test]
async fn test_payment_amount_unknown_schedule() {
    let (app, _) = test_app();
    let (status, body) = get(
        app,
        "/api/v1/payment-amount/?asking-price=300000&down-payment=30000&payment-schedule=daily&amortization-period=25",
    )
    .await;
    assert_fail(status, &body, "paymentSchedule must be");
}

#[tokio::test]
async fn test_amortization_out_of_range_halts_both_endpoints() {
    for years in ["3", "30"] {
        let (app, _) = test_app();
        let uri = format!(
            "/api/v1/payment-amount/?asking-price=300000&down-payment=30000&payment-schedule=monthly&amortization-period={years}"
        );
        let (status, body) = get(app, &uri).await;
        assert_fail(status, &body, "between 5 to 25 years");
        assert!(body.get("paymentAmount").is_none());

        let (app, _) = test_app();
        let uri = format!(
            "/api/v1/mortgage-amount/?payment-amount=1500&payment-schedule=monthly&amortization-period={years}"
        );
        let (status, body) = get(app, &uri).await;
        assert_fail(status, &body, "between 5 to 25 years");
        assert!(body.get("mortgageAmount").is_none());
    }
}

// ===========================================================================
// /mortgage-amount/
// ===========================================================================

#[tokio::test]
async fn test_mortgage_amount_success() {
    let (app, rates) = test_app();
    rates.replace(dec!(0.03)).unwrap();
    let (status, body) = get(
        app,
        "/api/v1/mortgage-amount/?payment-amount=1000&payment-schedule=biweekly&amortization-period=20",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "success");
    let mortgage = body["mortgageAmount"].as_f64().unwrap();
    assert!((mortgage - 390865.37).abs() < 0.01, "mortgage {mortgage}");
}

// ===========================================================================
// /interest-rate/
// ===========================================================================

#[tokio::test]
async fn test_interest_rate_update() {
    let (app, rates) = test_app();
    let (status, body) = patch(app, "/api/v1/interest-rate/", r#"{"interest-rate": 0.031}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "result": "success",
            "oldInterestRate": 0.025,
            "newInterestRate": 0.031,
        })
    );
    assert_eq!(rates.current(), dec!(0.031));
}

#[tokio::test]
async fn test_interest_rate_negative_leaves_store_unchanged() {
    let (app, rates) = test_app();
    let (status, body) = patch(app, "/api/v1/interest-rate/", r#"{"interest-rate": -1}"#).await;

    assert_fail(status, &body, "greater than 0");
    assert_eq!(rates.current(), dec!(0.025));
}

#[tokio::test]
async fn test_interest_rate_unparsable_body() {
    let (app, rates) = test_app();
    let (status, body) = patch(app, "/api/v1/interest-rate/", "{interest-rate: 0.03").await;

    assert_fail(status, &body, "unparsable JSON");
    assert_eq!(rates.current(), dec!(0.025));
}

#[tokio::test]
async fn test_interest_rate_string_value_is_wrong_type() {
    let (app, _) = test_app();
    let (status, body) = patch(app, "/api/v1/interest-rate/", r#"{"interest-rate": "0.03"}"#).await;
    assert_fail(status, &body, "wrong input types");
}

#[tokio::test]
async fn test_rate_update_feeds_later_calculations() {
    let (app, _) = test_app();
    let uri = "/api/v1/payment-amount/?asking-price=300000&down-payment=60000&payment-schedule=monthly&amortization-period=25";

    let (_, before) = get(app.clone(), uri).await;
    patch(app.clone(), "/api/v1/interest-rate", r#"{"interest-rate": 0.05}"#).await;
    let (_, after) = get(app.clone(), uri).await;
    let (_, current) = get(app, "/api/v1/interest-rate/").await;

    assert!(after["paymentAmount"].as_f64().unwrap() > before["paymentAmount"].as_f64().unwrap());
    assert_eq!(current["interestRate"], json!(0.05));
}

// ===========================================================================
// Misc
// ===========================================================================

#[tokio::test]
async fn test_health() {
    let (app, _) = test_app();
    let (status, body) = get(app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": "success", "status": "ok" }));
}

#[tokio::test]
async fn test_unknown_route_uses_fail_envelope() {
    let (app, _) = test_app();
    let (status, body) = get(app, "/api/v1/amortization-table/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["result"], "fail");
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = test_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/interest-rate/")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("PATCH"));
}
