//! End-to-end tests for the HTTP API.
//!
//! Builds the router from a YAML config the way the binary does and drives it
//! with `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tower::ServiceExt;

use journal_metrics::config::load_config_from_string;
use journal_metrics::infrastructure::http::{
    ApiErrorResponse, AppState, DailyMetricsResponse, MetricsResponse, create_router,
};

fn app_from_yaml(yaml: &str) -> Router {
    let config = load_config_from_string(yaml).unwrap();
    create_router(AppState::new(config.metrics.calculator(), "test"))
}

fn default_app() -> Router {
    app_from_yaml("{}")
}

fn post(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn journal() -> serde_json::Value {
    serde_json::json!([
        {"id": "t1", "pnl": "100", "date": "2024-03-04T15:00:00Z", "result": "WIN",
         "symbol": "AAPL", "account_id": "main", "risk_amount": "50"},
        {"id": "t2", "pnl": "-50", "date": "2024-03-05T15:00:00Z", "result": "LOSS",
         "symbol": "TSLA", "account_id": "main", "risk_amount": "50"},
        {"id": "t3", "pnl": "200", "date": "2024-03-06T15:00:00Z", "result": "WIN",
         "symbol": "AAPL", "account_id": "swing"},
        {"id": "t4", "pnl": "0", "date": "2024-03-06T18:00:00Z", "result": "BREAKEVEN",
         "symbol": "MSFT", "account_id": "swing", "notes": "scratch, no fill"}
    ])
}

#[tokio::test]
async fn full_journal_summary() {
    let response = default_app()
        .oneshot(post("/api/v1/metrics", &serde_json::json!({ "trades": journal() })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let metrics: MetricsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let summary = metrics.summary;

    assert_eq!(summary.total_trades, 4);
    assert_eq!(summary.trading_days, 3);
    assert_eq!(summary.winning_trades, 2);
    assert_eq!(summary.breakeven_trades, 1);
    assert_eq!(summary.total_pnl, dec!(250));
    assert_eq!(summary.profit_factor, dec!(6));
    assert_eq!(summary.max_drawdown, dec!(50));
    // (100 / 50 + -50 / 50) / 2
    assert_eq!(summary.average_r_multiple, Some(dec!(0.5)));
    assert!(summary.sharpe_ratio > Decimal::ZERO);
}

#[tokio::test]
async fn account_filter_narrows_the_journal() {
    let body = serde_json::json!({
        "trades": journal(),
        "filter": { "account_id": "swing" }
    });
    let response = default_app()
        .oneshot(post("/api/v1/metrics", &body))
        .await
        .unwrap();

    let metrics: MetricsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(metrics.summary.total_trades, 2);
    assert_eq!(metrics.summary.total_pnl, dec!(200));
    // Both trades closed on the same day, leaving a single daily return
    assert_eq!(metrics.summary.sharpe_ratio, Decimal::ZERO);
}

#[tokio::test]
async fn configured_risk_free_rate_is_used() {
    let app = app_from_yaml("metrics:\n  risk_free_rate: 0.05\n");
    let response = app
        .oneshot(post("/api/v1/metrics", &serde_json::json!({ "trades": journal() })))
        .await
        .unwrap();

    let metrics: MetricsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(metrics.risk_free_rate, dec!(0.05));
}

#[tokio::test]
async fn negative_risk_free_rate_is_rejected() {
    let body = serde_json::json!({ "trades": journal(), "risk_free_rate": "-0.01" });
    let response = default_app()
        .oneshot(post("/api/v1/reports/summary.json", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ApiErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(error.code, "INVALID_PARAMETER");
}

#[tokio::test]
async fn daily_view_uses_configured_capital() {
    let app = app_from_yaml("metrics:\n  baseline_capital: 500\n");
    let body = serde_json::json!({ "trades": journal(), "filter": { "from": "2024-03-05" } });
    let response = app.oneshot(post("/api/v1/metrics/daily", &body)).await.unwrap();

    let daily: DailyMetricsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(daily.days.len(), 2);
    assert_eq!(daily.days[1].trade_count, 2);
    let equity: Vec<Decimal> = daily.equity_curve.iter().map(|p| p.equity).collect();
    assert_eq!(equity, vec![dec!(450), dec!(650)]);
}

#[tokio::test]
async fn csv_export_escapes_notes() {
    let response = default_app()
        .oneshot(post(
            "/api/v1/reports/trades.csv",
            &serde_json::json!({ "trades": journal() }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let csv = String::from_utf8(body_bytes(response).await).unwrap();
    let last = csv.lines().last().unwrap();
    assert!(last.starts_with("t4,2024-03-06T18:00:00+00:00,MSFT,BREAKEVEN,0,"));
    assert!(last.ends_with(",\"scratch, no fill\""));
}

#[tokio::test]
async fn missing_trades_field_is_a_client_error() {
    let response = default_app()
        .oneshot(post("/api/v1/metrics", &serde_json::json!({ "filter": {} })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ApiErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(error.code, "INVALID_REQUEST");
    assert!(error.message.contains("trades"));
    assert_eq!(
        error.details.unwrap().get("rejection").map(String::as_str),
        Some("422")
    );
}
