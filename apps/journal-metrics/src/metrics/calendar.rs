//! Per-day views backing the journal calendar and equity chart.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{DailyPnl, EquityPoint};
use crate::domain::trade::{Trade, TradeResult};

/// Net P&L and trade counts per UTC calendar day, oldest first.
#[must_use]
pub fn daily_pnl(trades: &[Trade]) -> Vec<DailyPnl> {
    let mut days: BTreeMap<NaiveDate, DailyPnl> = BTreeMap::new();

    for trade in trades {
        let date = trade.day();
        let entry = days.entry(date).or_insert_with(|| DailyPnl {
            date,
            pnl: Decimal::ZERO,
            trade_count: 0,
            wins: 0,
            losses: 0,
        });
        entry.pnl += trade.pnl;
        entry.trade_count += 1;
        match trade.result {
            TradeResult::Win => entry.wins += 1,
            TradeResult::Loss => entry.losses += 1,
            TradeResult::Breakeven => {}
        }
    }

    days.into_values().collect()
}

/// Balance after each trading day, starting from `starting_balance`.
#[must_use]
pub fn equity_curve(trades: &[Trade], starting_balance: Decimal) -> Vec<EquityPoint> {
    let mut equity = starting_balance;

    daily_pnl(trades)
        .into_iter()
        .map(|day| {
            equity += day.pnl;
            EquityPoint {
                date: day.date,
                equity,
            }
        })
        .collect()
}
