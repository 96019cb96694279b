//! Property tests for metric invariants over generated journals.

#![allow(clippy::unwrap_used)]

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use journal_metrics::metrics::{
    PROFIT_FACTOR_CAP, group_pnl_by_day, sharpe_from_returns, sortino_from_returns,
};
use journal_metrics::{
    MetricsCalculator, Trade, TradeResult, daily_returns, max_drawdown, profit_factor,
    sharpe_ratio, sortino_ratio,
};

/// One generated trade: P&L in cents, day offset, hour.
fn trade_parts() -> impl Strategy<Value = (i64, i64, u32)> {
    (-500_000i64..500_000, 0i64..45, 9u32..17)
}

fn build(parts: &[(i64, i64, u32)]) -> Vec<Trade> {
    let start = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    parts
        .iter()
        .enumerate()
        .map(|(i, (cents, day, hour))| {
            let pnl = Decimal::new(*cents, 2);
            let result = match pnl.cmp(&Decimal::ZERO) {
                std::cmp::Ordering::Greater => TradeResult::Win,
                std::cmp::Ordering::Less => TradeResult::Loss,
                std::cmp::Ordering::Equal => TradeResult::Breakeven,
            };
            let date = start + Duration::days(*day) + Duration::hours(i64::from(*hour));
            Trade::new(format!("t{i:03}"), pnl, date, result)
        })
        .collect()
}

fn journal() -> impl Strategy<Value = Vec<(i64, i64, u32)>> {
    prop::collection::vec(trade_parts(), 0..40)
}

/// Daily returns in basis points: a run of gains and a run of smaller losses.
fn mixed_returns() -> impl Strategy<Value = Vec<i64>> {
    (
        prop::collection::vec(1i64..600, 1..12),
        prop::collection::vec(-200i64..0, 1..12),
    )
        .prop_map(|(mut gains, losses)| {
            gains.extend(losses);
            gains
        })
        .prop_shuffle()
}

/// Population std dev and downside deviation of a basis-point series, as fractions.
fn deviations(bps: &[i64]) -> (f64, f64, f64) {
    let values: Vec<f64> = bps.iter().map(|bp| *bp as f64 / 10_000.0).collect();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();

    let negatives: Vec<f64> = values.iter().copied().filter(|v| *v < 0.0).collect();
    let downside =
        (negatives.iter().map(|v| v * v).sum::<f64>() / negatives.len() as f64).sqrt();

    (mean, std, downside)
}

proptest! {
    #[test]
    fn profit_factor_stays_in_range(parts in journal()) {
        let pf = profit_factor(&build(&parts));
        prop_assert!(pf >= Decimal::ZERO);
        prop_assert!(pf <= PROFIT_FACTOR_CAP);
    }

    #[test]
    fn drawdown_ignores_input_order(
        (parts, order) in journal().prop_flat_map(|v| {
            let indices: Vec<usize> = (0..v.len()).collect();
            (Just(v), Just(indices).prop_shuffle())
        })
    ) {
        let trades = build(&parts);
        let permuted: Vec<Trade> = order.iter().map(|&i| trades[i].clone()).collect();

        prop_assert_eq!(max_drawdown(&trades), max_drawdown(&permuted));
    }

    #[test]
    fn drawdown_is_never_negative(parts in journal()) {
        prop_assert!(max_drawdown(&build(&parts)) >= Decimal::ZERO);
    }

    #[test]
    fn ratios_are_zero_below_two_trades(part in trade_parts(), rate in 0u32..100) {
        let trades = build(&[part]);
        let rate = Decimal::new(i64::from(rate), 3);
        prop_assert_eq!(sharpe_ratio(&trades, rate), Decimal::ZERO);
        prop_assert_eq!(sortino_ratio(&trades, rate), Decimal::ZERO);
    }

    #[test]
    fn sortino_at_least_sharpe_when_downside_is_tighter(bps in mixed_returns()) {
        let (mean, std, downside) = deviations(&bps);
        prop_assume!(mean - 0.01 / 252.0 > 1e-6);
        prop_assume!(downside < std * 0.999);

        let returns: Vec<Decimal> = bps.iter().map(|bp| Decimal::new(*bp, 4)).collect();
        let sharpe = sharpe_from_returns(&returns, dec!(0.01));
        let sortino = sortino_from_returns(&returns, dec!(0.01));

        prop_assert!(sharpe > Decimal::ZERO);
        prop_assert!(sortino >= sharpe, "sortino {} < sharpe {}", sortino, sharpe);
    }

    #[test]
    fn one_return_per_trading_day(parts in journal()) {
        let trades = build(&parts);
        let days = group_pnl_by_day(&trades);
        prop_assert_eq!(daily_returns(&trades, dec!(10000)).len(), days.len());

        let day_total: Decimal = days.iter().map(|(_, pnl)| *pnl).sum();
        let trade_total: Decimal = trades.iter().map(|t| t.pnl).sum();
        prop_assert_eq!(day_total, trade_total);
    }

    #[test]
    fn summary_counts_add_up(parts in journal()) {
        let trades = build(&parts);
        let summary = MetricsCalculator::new().calculate(&trades);

        prop_assert_eq!(summary.total_trades, trades.len() as u64);
        prop_assert_eq!(
            summary.winning_trades + summary.losing_trades + summary.breakeven_trades,
            summary.total_trades
        );
        prop_assert_eq!(summary.gross_profit - summary.gross_loss, summary.total_pnl);
        prop_assert!(summary.win_rate >= Decimal::ZERO && summary.win_rate <= Decimal::ONE);
    }
}

#[test]
fn empty_journal_summary_is_all_zero() {
    let summary = MetricsCalculator::new().calculate(&[]);

    assert_eq!(summary.sharpe_ratio, Decimal::ZERO);
    assert_eq!(summary.sortino_ratio, Decimal::ZERO);
    assert_eq!(summary.max_drawdown, Decimal::ZERO);
    assert_eq!(summary.profit_factor, Decimal::ZERO);
    assert_eq!(summary.expectancy, Decimal::ZERO);
    assert_eq!(summary.total_trades, 0);
}
