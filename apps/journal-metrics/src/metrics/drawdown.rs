//! Maximum drawdown of cumulative P&L.

use rust_decimal::Decimal;

use super::constants::HUNDRED;
use crate::domain::trade::Trade;

/// Borrow the trades in chronological order without touching the caller's slice.
///
/// Ties on the timestamp fall back to the trade id and then the P&L, so the
/// order (and everything computed from it) does not depend on input order.
#[must_use]
pub fn chronological(trades: &[Trade]) -> Vec<&Trade> {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.id.cmp(&b.id))
            .then_with(|| a.pnl.cmp(&b.pnl))
    });
    ordered
}

/// Largest peak-to-trough decline of cumulative P&L, in percent of the peak.
///
/// The peak starts at 0, so no drawdown is measured until cumulative P&L has
/// been positive at least once. Returns 0 for an empty list. A decline too
/// large to express in percent saturates at `Decimal::MAX`.
#[must_use]
pub fn max_drawdown(trades: &[Trade]) -> Decimal {
    let mut peak = Decimal::ZERO;
    let mut running_pnl = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;

    for trade in chronological(trades) {
        running_pnl = running_pnl.saturating_add(trade.pnl);
        if running_pnl > peak {
            peak = running_pnl;
        }
        if peak > Decimal::ZERO {
            let drawdown = peak
                .saturating_sub(running_pnl)
                .checked_div(peak)
                .and_then(|fraction| fraction.checked_mul(HUNDRED))
                .unwrap_or(Decimal::MAX);
            max_drawdown = max_drawdown.max(drawdown);
        }
    }

    max_drawdown
}
