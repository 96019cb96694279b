//! Core types for journal performance metrics.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net result of one calendar day, as shown in the journal calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPnl {
    /// UTC calendar day.
    pub date: NaiveDate,
    /// Net P&L for the day.
    pub pnl: Decimal,
    /// Trades closed that day.
    pub trade_count: u64,
    /// Trades logged as WIN that day.
    pub wins: u64,
    /// Trades logged as LOSS that day.
    pub losses: u64,
}

/// Equity curve point after a day's trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// UTC calendar day.
    pub date: NaiveDate,
    /// Balance after the day's P&L.
    pub equity: Decimal,
}

/// Dashboard summary with every computed metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSummary {
    // Risk-adjusted metrics
    /// Annualized Sharpe ratio.
    pub sharpe_ratio: Decimal,
    /// Annualized Sortino ratio.
    pub sortino_ratio: Decimal,

    // Drawdown
    /// Maximum drawdown in percent of the running P&L peak.
    pub max_drawdown: Decimal,

    // Trade outcome statistics
    /// Gross profit over gross loss, capped at 99.99.
    pub profit_factor: Decimal,
    /// Expected P&L per trade.
    pub expectancy: Decimal,

    // Counts
    /// Total number of trades.
    pub total_trades: u64,
    /// Trades logged as WIN.
    pub winning_trades: u64,
    /// Trades logged as LOSS.
    pub losing_trades: u64,
    /// Trades logged as BREAKEVEN.
    pub breakeven_trades: u64,
    /// Distinct calendar days with at least one trade.
    pub trading_days: u64,
    /// Share of trades logged as WIN (decimal, e.g., 0.55 = 55%).
    pub win_rate: Decimal,

    // P&L
    /// Net P&L.
    pub total_pnl: Decimal,
    /// Sum of positive P&L.
    pub gross_profit: Decimal,
    /// Absolute sum of negative P&L.
    pub gross_loss: Decimal,
    /// Mean P&L of profitable trades (0 if none).
    pub average_win: Decimal,
    /// Absolute mean P&L of losing trades (0 if none).
    pub average_loss: Decimal,
    /// Best single trade (0 if nothing was profitable).
    pub largest_win: Decimal,
    /// Most negative single P&L (0 if nothing lost money).
    pub largest_loss: Decimal,
    /// Mean P&L in multiples of risk, over trades with a recorded risk amount.
    pub average_r_multiple: Option<Decimal>,

    // Streaks
    /// Longest run of WIN trades in chronological order.
    pub max_consecutive_wins: u64,
    /// Longest run of LOSS trades in chronological order.
    pub max_consecutive_losses: u64,
}
