//! Profit factor and expectancy from the raw trade list.

use rust_decimal::Decimal;

use super::constants::{EXPECTANCY_FALLBACK_LOSS, PROFIT_FACTOR_CAP};
use crate::domain::trade::{Trade, TradeResult};

/// Gross profit (sum of positive P&L) and gross loss (absolute sum of negative P&L).
#[must_use]
pub fn gross_profit_and_loss(trades: &[Trade]) -> (Decimal, Decimal) {
    trades
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(profit, loss), trade| {
            if trade.is_profitable() {
                (profit + trade.pnl, loss)
            } else if trade.is_losing() {
                (profit, loss + trade.pnl.abs())
            } else {
                (profit, loss)
            }
        })
}

/// Gross profit over gross loss, capped at 99.99.
///
/// With no losses the factor is 99.99 when anything was won and 0 otherwise.
#[must_use]
pub fn profit_factor(trades: &[Trade]) -> Decimal {
    let (gross_profit, gross_loss) = gross_profit_and_loss(trades);

    if gross_loss == Decimal::ZERO {
        return if gross_profit > Decimal::ZERO {
            PROFIT_FACTOR_CAP
        } else {
            Decimal::ZERO
        };
    }

    gross_profit
        .checked_div(gross_loss)
        .map_or(PROFIT_FACTOR_CAP, |factor| factor.min(PROFIT_FACTOR_CAP))
}

/// Expected P&L per trade: `win_rate * avg_win - loss_rate * avg_loss`.
///
/// Rates count trades by their `result`; averages use the sign of the P&L.
/// When nothing lost money the average loss is taken as 1 currency unit.
#[must_use]
pub fn expectancy(trades: &[Trade]) -> Decimal {
    if trades.is_empty() {
        return Decimal::ZERO;
    }

    let total = Decimal::from(trades.len() as u64);
    let wins = count_result(trades, TradeResult::Win);
    let losses = count_result(trades, TradeResult::Loss);
    let win_rate = Decimal::from(wins) / total;
    let loss_rate = Decimal::from(losses) / total;

    let average_win =
        average_pnl(trades.iter().filter(|t| t.is_profitable())).unwrap_or(Decimal::ZERO);
    let average_loss = average_pnl(trades.iter().filter(|t| t.is_losing()))
        .map_or(EXPECTANCY_FALLBACK_LOSS, |avg| avg.abs());

    win_rate * average_win - loss_rate * average_loss
}

/// Number of trades logged with the given result.
#[must_use]
pub fn count_result(trades: &[Trade], result: TradeResult) -> u64 {
    trades.iter().filter(|t| t.result == result).count() as u64
}

/// Mean P&L of the given trades, `None` when there are none.
pub(crate) fn average_pnl<'a>(trades: impl Iterator<Item = &'a Trade>) -> Option<Decimal> {
    let (sum, count) = trades.fold((Decimal::ZERO, 0u64), |(sum, count), t| {
        (sum + t.pnl, count + 1)
    });
    if count == 0 {
        return None;
    }
    Some(sum / Decimal::from(count))
}
