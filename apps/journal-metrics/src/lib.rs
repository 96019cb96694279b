// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Journal Metrics - Rust Core Library
//!
//! Trade metrics engine for the trading journal dashboard.
//!
//! # Architecture
//!
//! - **Domain**: the trade record, its identifiers, and the dashboard filter
//! - **Metrics**: pure calculators over a trade list
//!   - daily return series over a normalized capital base
//!   - Sharpe and Sortino ratios (annualized over 252 trading days)
//!   - maximum drawdown of cumulative P&L
//!   - profit factor, expectancy, and the dashboard summary
//!   - daily P&L calendar and equity curve
//! - **Report**: CSV, JSON, and text exports
//! - **Infrastructure**: axum REST adapter
//!
//! Every calculator reads its input and returns a value; none fail, mutate,
//! or retain the trades they are given.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Service configuration (YAML + environment interpolation).
pub mod config;

/// Domain layer - trades and filters.
pub mod domain;

/// Service errors and their HTTP mapping.
pub mod error;

/// Infrastructure layer - HTTP adapter.
pub mod infrastructure;

/// Trade metrics calculators.
pub mod metrics;

/// Report export.
pub mod report;

/// Tracing subscriber setup.
pub mod telemetry;

// Domain re-exports
pub use domain::shared::{AccountId, TradeId};
pub use domain::trade::{Trade, TradeFilter, TradeResult, parse_trade_date};

// Metrics re-exports
pub use metrics::{
    DailyPnl, EquityPoint, MetricsCalculator, MetricsSummary, daily_pnl, daily_returns,
    equity_curve, expectancy, max_drawdown, profit_factor, sharpe_ratio, sortino_ratio,
};

// Service re-exports
pub use config::{Config, ConfigError, load_config};
pub use error::{ApiError, ErrorCode};
pub use infrastructure::http::{AppState, create_router};
pub use report::{ReportError, format_summary, summary_to_json, trades_to_csv};
