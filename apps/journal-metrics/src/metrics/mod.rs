//! Trade metrics engine.
//!
//! Pure calculations over a caller-supplied trade list:
//! - Daily return series over a normalized capital base
//! - Sharpe ratio (risk-adjusted returns)
//! - Sortino ratio (downside risk-adjusted returns)
//! - Maximum drawdown (peak-to-trough decline of cumulative P&L)
//! - Profit factor (gross profit / gross loss)
//! - Expectancy, win rate, streaks, and other dashboard statistics
//!
//! No function here mutates or retains its input, and none can fail: degenerate
//! inputs (empty lists, zero variance, no losses) map to fixed sentinel values.

mod calculator;
mod calendar;
mod constants;
mod daily_returns;
mod drawdown;
mod format;
mod math;
mod outcome;
mod risk_adjusted;
mod types;

pub use calculator::MetricsCalculator;
pub use calendar::{daily_pnl, equity_curve};
pub use constants::{
    BASELINE_CAPITAL, DEFAULT_RISK_FREE_RATE, EXPECTANCY_FALLBACK_LOSS, PROFIT_FACTOR_CAP,
    SORTINO_CEILING,
};
pub use daily_returns::{daily_returns, group_pnl_by_day};
pub use drawdown::{chronological, max_drawdown};
pub use format::{format_decimal, format_money, format_pct, format_percent_points, format_ratio};
pub use outcome::{count_result, expectancy, gross_profit_and_loss, profit_factor};
pub use risk_adjusted::{sharpe_from_returns, sharpe_ratio, sortino_from_returns, sortino_ratio};
pub use types::{DailyPnl, EquityPoint, MetricsSummary};
