//! Sharpe and Sortino ratios over the daily return series.
//!
//! Both ratios annualize a daily statistic with `sqrt(252)` and subtract a
//! daily risk-free rate of `annual_rate / 252` from the mean return.

use rust_decimal::Decimal;

use super::constants::{
    BASELINE_CAPITAL, MIN_TRADES_FOR_RATIOS, SORTINO_CEILING, SQRT_TRADING_DAYS, TRADING_DAYS,
};
use super::daily_returns::daily_returns;
use super::math::{downside_deviation, mean, population_std_dev};
use crate::domain::trade::Trade;

/// Annualized Sharpe ratio of a trade list.
///
/// Returns 0 with fewer than two trades or when daily returns do not vary.
#[must_use]
pub fn sharpe_ratio(trades: &[Trade], annual_risk_free_rate: Decimal) -> Decimal {
    if trades.len() < MIN_TRADES_FOR_RATIOS {
        return Decimal::ZERO;
    }
    sharpe_from_returns(&daily_returns(trades, BASELINE_CAPITAL), annual_risk_free_rate)
}

/// Annualized Sortino ratio of a trade list.
///
/// Returns 0 with fewer than two trades. With no losing day the ratio is
/// pinned to 10 when the mean return is positive, 0 otherwise.
#[must_use]
pub fn sortino_ratio(trades: &[Trade], annual_risk_free_rate: Decimal) -> Decimal {
    if trades.len() < MIN_TRADES_FOR_RATIOS {
        return Decimal::ZERO;
    }
    sortino_from_returns(&daily_returns(trades, BASELINE_CAPITAL), annual_risk_free_rate)
}

/// Sharpe ratio of an already aggregated daily return series.
#[must_use]
pub fn sharpe_from_returns(returns: &[Decimal], annual_risk_free_rate: Decimal) -> Decimal {
    let (Some(avg), Some(std)) = (mean(returns), population_std_dev(returns)) else {
        return Decimal::ZERO;
    };

    if std == Decimal::ZERO {
        return Decimal::ZERO;
    }

    annualize(avg, annual_risk_free_rate, std)
}

/// Sortino ratio of an already aggregated daily return series.
#[must_use]
pub fn sortino_from_returns(returns: &[Decimal], annual_risk_free_rate: Decimal) -> Decimal {
    let Some(avg) = mean(returns) else {
        return Decimal::ZERO;
    };

    if !returns.iter().any(|r| *r < Decimal::ZERO) {
        return if avg > Decimal::ZERO {
            SORTINO_CEILING
        } else {
            Decimal::ZERO
        };
    }

    let Some(downside) = downside_deviation(returns) else {
        return Decimal::ZERO;
    };

    if downside == Decimal::ZERO {
        return Decimal::ZERO;
    }

    annualize(avg, annual_risk_free_rate, downside)
}

/// Annualized excess return per unit of deviation, 0 when out of `Decimal` range.
fn annualize(mean_return: Decimal, annual_risk_free_rate: Decimal, deviation: Decimal) -> Decimal {
    mean_return
        .checked_sub(annual_risk_free_rate / TRADING_DAYS)
        .and_then(|excess| excess.checked_div(deviation))
        .and_then(|ratio| ratio.checked_mul(SQRT_TRADING_DAYS))
        .unwrap_or(Decimal::ZERO)
}
