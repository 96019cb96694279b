//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API over the metrics calculator and report exports.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;

use crate::error::ApiError;
use crate::metrics::{MetricsCalculator, daily_pnl, equity_curve};
use crate::report::{format_summary, summary_to_json, trades_to_csv};

use super::request::{MetricsRequest, TradesRequest};
use super::response::{DailyMetricsResponse, HealthResponse, MetricsResponse};

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Calculator configured with the service defaults.
    pub calculator: Arc<MetricsCalculator>,
    /// Application version.
    pub version: String,
}

impl AppState {
    /// Create state around a configured calculator.
    #[must_use]
    pub fn new(calculator: MetricsCalculator, version: impl Into<String>) -> Self {
        Self {
            calculator: Arc::new(calculator),
            version: version.into(),
        }
    }

    /// The shared calculator, or a copy using the requested risk-free rate.
    fn calculator_for(
        &self,
        risk_free_rate: Option<Decimal>,
    ) -> Result<MetricsCalculator, ApiError> {
        let Some(rate) = risk_free_rate else {
            return Ok((*self.calculator).clone());
        };

        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(ApiError::invalid_parameter(
                "risk_free_rate",
                "risk_free_rate must be between 0 and 1",
            )
            .with_context("value", rate.to_string()));
        }

        Ok((*self.calculator).clone().with_risk_free_rate(rate))
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/metrics", post(compute_metrics))
        .route("/api/v1/metrics/daily", post(compute_daily))
        .route("/api/v1/reports/trades.csv", post(export_trades_csv))
        .route("/api/v1/reports/summary.txt", post(export_summary_text))
        .route("/api/v1/reports/summary.json", post(export_summary_json))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Dashboard summary endpoint.
async fn compute_metrics(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let Json(request) = payload?;
    let calculator = state.calculator_for(request.risk_free_rate)?;
    let trades = request.filtered_trades();

    tracing::info!(
        received = request.trades.len(),
        selected = trades.len(),
        risk_free_rate = %calculator.risk_free_rate(),
        "Computing metrics"
    );

    Ok(Json(MetricsResponse {
        summary: calculator.calculate(&trades),
        risk_free_rate: calculator.risk_free_rate(),
    }))
}

/// Calendar and equity curve endpoint.
async fn compute_daily(
    State(state): State<AppState>,
    payload: Result<Json<TradesRequest>, JsonRejection>,
) -> Result<Json<DailyMetricsResponse>, ApiError> {
    let Json(request) = payload?;
    let trades = request.filtered_trades();

    tracing::info!(
        received = request.trades.len(),
        selected = trades.len(),
        "Computing daily P&L"
    );

    Ok(Json(DailyMetricsResponse {
        days: daily_pnl(&trades),
        equity_curve: equity_curve(&trades, state.calculator.baseline_capital()),
    }))
}

/// Trade log CSV export.
async fn export_trades_csv(
    payload: Result<Json<TradesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let trades = request.filtered_trades();

    tracing::info!(rows = trades.len(), "Exporting trades as CSV");

    let body = trades_to_csv(&trades)?;
    Ok(([(header::CONTENT_TYPE, CSV_CONTENT_TYPE)], body))
}

/// Plain-text performance report.
async fn export_summary_text(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let calculator = state.calculator_for(request.risk_free_rate)?;
    let trades = request.filtered_trades();

    tracing::info!(trades = trades.len(), "Exporting summary as text");

    let body = format_summary(&calculator.calculate(&trades))?;
    Ok(([(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], body))
}

/// Pretty JSON performance report, suitable for download.
async fn export_summary_json(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let calculator = state.calculator_for(request.risk_free_rate)?;
    let trades = request.filtered_trades();

    tracing::info!(trades = trades.len(), "Exporting summary as JSON");

    let body = summary_to_json(&calculator.calculate(&trades))?;
    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body))
}
