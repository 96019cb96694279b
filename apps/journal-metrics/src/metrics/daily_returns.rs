//! Daily return series over a normalized capital base.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::trade::Trade;

/// Sum P&L per UTC calendar day, in the order each day first appears.
///
/// The order is deliberately not chronological: the return series built on
/// top of it compounds capital in input order.
#[must_use]
pub fn group_pnl_by_day(trades: &[Trade]) -> Vec<(NaiveDate, Decimal)> {
    let mut days: Vec<(NaiveDate, Decimal)> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for trade in trades {
        let day = trade.day();
        match index.get(&day) {
            Some(&slot) => days[slot].1 += trade.pnl,
            None => {
                index.insert(day, days.len());
                days.push((day, trade.pnl));
            }
        }
    }

    days
}

/// Fractional return per day against a running capital base.
///
/// Capital starts at `baseline_capital`; each day's return is its P&L divided
/// by the capital before that day, after which the P&L is added to capital.
/// A day reached with exactly zero capital, or whose return falls outside
/// `Decimal` range, reports a return of 0.
#[must_use]
pub fn daily_returns(trades: &[Trade], baseline_capital: Decimal) -> Vec<Decimal> {
    let mut capital = baseline_capital;

    group_pnl_by_day(trades)
        .into_iter()
        .map(|(_, day_pnl)| {
            let daily_return = day_pnl.checked_div(capital).unwrap_or(Decimal::ZERO);
            capital = capital.saturating_add(day_pnl);
            daily_return
        })
        .collect()
}
