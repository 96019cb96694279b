//! HTTP response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metrics::{DailyPnl, EquityPoint, MetricsSummary};

pub use crate::error::ApiErrorResponse;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Dashboard summary for the filtered trade list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    /// Every computed metric.
    pub summary: MetricsSummary,
    /// Annual risk-free rate the ratios were computed with.
    pub risk_free_rate: Decimal,
}

/// Per-day P&L and the equity curve built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMetricsResponse {
    /// Calendar days, oldest first.
    pub days: Vec<DailyPnl>,
    /// Balance after each day, starting from the baseline capital.
    pub equity_curve: Vec<EquityPoint>,
}
