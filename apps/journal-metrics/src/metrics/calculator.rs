//! Performance calculator for journal dashboards.

use rust_decimal::Decimal;

use super::constants::{BASELINE_CAPITAL, DEFAULT_RISK_FREE_RATE, MIN_TRADES_FOR_RATIOS};
use super::daily_returns::{daily_returns, group_pnl_by_day};
use super::drawdown::{chronological, max_drawdown};
use super::math::mean;
use super::outcome::{average_pnl, count_result, expectancy, gross_profit_and_loss, profit_factor};
use super::risk_adjusted::{sharpe_from_returns, sortino_from_returns};
use super::types::MetricsSummary;
use crate::domain::trade::{Trade, TradeResult};

/// Computes journal metrics with a fixed set of parameters.
///
/// Holds no trades: every call works on the slice it is given, so one
/// calculator can be shared across threads and requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsCalculator {
    risk_free_rate: Decimal,
    baseline_capital: Decimal,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            baseline_capital: BASELINE_CAPITAL,
        }
    }
}

impl MetricsCalculator {
    /// Create a calculator with a 1% risk-free rate and a 10,000 capital base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the annual risk-free rate for Sharpe/Sortino calculations.
    #[must_use]
    pub const fn with_risk_free_rate(mut self, rate: Decimal) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Set the capital base the daily return series is normalized against.
    #[must_use]
    pub const fn with_baseline_capital(mut self, capital: Decimal) -> Self {
        self.baseline_capital = capital;
        self
    }

    /// Annual risk-free rate.
    #[must_use]
    pub const fn risk_free_rate(&self) -> Decimal {
        self.risk_free_rate
    }

    /// Capital base for daily returns.
    #[must_use]
    pub const fn baseline_capital(&self) -> Decimal {
        self.baseline_capital
    }

    /// Daily return series for the trades.
    #[must_use]
    pub fn daily_returns(&self, trades: &[Trade]) -> Vec<Decimal> {
        daily_returns(trades, self.baseline_capital)
    }

    /// Annualized Sharpe ratio.
    #[must_use]
    pub fn sharpe_ratio(&self, trades: &[Trade]) -> Decimal {
        if trades.len() < MIN_TRADES_FOR_RATIOS {
            return Decimal::ZERO;
        }
        sharpe_from_returns(&self.daily_returns(trades), self.risk_free_rate)
    }

    /// Annualized Sortino ratio.
    #[must_use]
    pub fn sortino_ratio(&self, trades: &[Trade]) -> Decimal {
        if trades.len() < MIN_TRADES_FOR_RATIOS {
            return Decimal::ZERO;
        }
        sortino_from_returns(&self.daily_returns(trades), self.risk_free_rate)
    }

    /// Calculate every dashboard metric.
    #[must_use]
    pub fn calculate(&self, trades: &[Trade]) -> MetricsSummary {
        if trades.is_empty() {
            return MetricsSummary::default();
        }

        let total_trades = trades.len() as u64;
        let winning_trades = count_result(trades, TradeResult::Win);
        let losing_trades = count_result(trades, TradeResult::Loss);
        let breakeven_trades = count_result(trades, TradeResult::Breakeven);
        let win_rate = Decimal::from(winning_trades) / Decimal::from(total_trades);

        let (gross_profit, gross_loss) = gross_profit_and_loss(trades);
        let total_pnl: Decimal = trades.iter().map(|t| t.pnl).sum();

        let average_win =
            average_pnl(trades.iter().filter(|t| t.is_profitable())).unwrap_or(Decimal::ZERO);
        let average_loss = average_pnl(trades.iter().filter(|t| t.is_losing()))
            .map_or(Decimal::ZERO, |avg| avg.abs());

        let largest_win = trades
            .iter()
            .map(|t| t.pnl)
            .max()
            .filter(|pnl| *pnl > Decimal::ZERO)
            .unwrap_or(Decimal::ZERO);
        let largest_loss = trades
            .iter()
            .map(|t| t.pnl)
            .min()
            .filter(|pnl| *pnl < Decimal::ZERO)
            .unwrap_or(Decimal::ZERO);

        let (max_consecutive_wins, max_consecutive_losses) = consecutive_streaks(trades);

        let summary = MetricsSummary {
            sharpe_ratio: self.sharpe_ratio(trades),
            sortino_ratio: self.sortino_ratio(trades),
            max_drawdown: max_drawdown(trades),
            profit_factor: profit_factor(trades),
            expectancy: expectancy(trades),
            total_trades,
            winning_trades,
            losing_trades,
            breakeven_trades,
            trading_days: group_pnl_by_day(trades).len() as u64,
            win_rate,
            total_pnl,
            gross_profit,
            gross_loss,
            average_win,
            average_loss,
            largest_win,
            largest_loss,
            average_r_multiple: average_r_multiple(trades),
            max_consecutive_wins,
            max_consecutive_losses,
        };

        tracing::debug!(
            trades = total_trades,
            trading_days = summary.trading_days,
            sharpe = %summary.sharpe_ratio,
            max_drawdown = %summary.max_drawdown,
            "Calculated journal metrics"
        );

        summary
    }
}

/// Longest WIN and LOSS runs, in chronological order. BREAKEVEN ends both runs.
fn consecutive_streaks(trades: &[Trade]) -> (u64, u64) {
    let mut max_wins = 0u64;
    let mut max_losses = 0u64;
    let mut current_wins = 0u64;
    let mut current_losses = 0u64;

    for trade in chronological(trades) {
        match trade.result {
            TradeResult::Win => {
                current_wins += 1;
                current_losses = 0;
                max_wins = max_wins.max(current_wins);
            }
            TradeResult::Loss => {
                current_losses += 1;
                current_wins = 0;
                max_losses = max_losses.max(current_losses);
            }
            TradeResult::Breakeven => {
                current_wins = 0;
                current_losses = 0;
            }
        }
    }

    (max_wins, max_losses)
}

fn average_r_multiple(trades: &[Trade]) -> Option<Decimal> {
    let multiples: Vec<Decimal> = trades.iter().filter_map(Trade::r_multiple).collect();
    mean(&multiples)
}
