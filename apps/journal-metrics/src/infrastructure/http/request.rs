//! HTTP request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::trade::{Trade, TradeFilter};

/// Request to compute the dashboard summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsRequest {
    /// Trades to analyze.
    pub trades: Vec<Trade>,
    /// Optional filter applied before computing.
    #[serde(default)]
    pub filter: TradeFilter,
    /// Overrides the configured annual risk-free rate for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_free_rate: Option<Decimal>,
}

impl MetricsRequest {
    /// Trades left after applying the filter.
    #[must_use]
    pub fn filtered_trades(&self) -> Vec<Trade> {
        self.filter.apply(&self.trades)
    }
}

/// Request carrying a trade list for per-day views and CSV export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradesRequest {
    /// Trades to process.
    pub trades: Vec<Trade>,
    /// Optional filter applied first.
    #[serde(default)]
    pub filter: TradeFilter,
}

impl TradesRequest {
    /// Trades left after applying the filter.
    #[must_use]
    pub fn filtered_trades(&self) -> Vec<Trade> {
        self.filter.apply(&self.trades)
    }
}
