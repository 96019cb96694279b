//! Statistical math utilities for performance metric calculations.

use rust_decimal::Decimal;

use super::constants::{TOLERANCE, TWO};

/// Arithmetic mean, `None` for an empty slice or a sum outside `Decimal` range.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum = checked_sum(values.iter().copied())?;
    sum.checked_div(Decimal::from(values.len() as u64))
}

/// Population standard deviation (divides by N, not N - 1).
///
/// `None` when the squared deviations overflow.
pub fn population_std_dev(values: &[Decimal]) -> Option<Decimal> {
    let avg = mean(values)?;
    let squares = values
        .iter()
        .map(|v| v.checked_sub(avg).and_then(|d| d.checked_mul(d)))
        .collect::<Option<Vec<Decimal>>>()?;
    let variance = checked_sum(squares)?.checked_div(Decimal::from(values.len() as u64))?;

    sqrt_decimal(variance)
}

/// Downside deviation over the strictly negative values, measured from zero.
///
/// Divides by the number of negative values, not the total count. Returns
/// `None` when no value is negative or the squares overflow.
pub fn downside_deviation(values: &[Decimal]) -> Option<Decimal> {
    let negative_returns: Vec<Decimal> = values
        .iter()
        .filter(|v| **v < Decimal::ZERO)
        .copied()
        .collect();

    if negative_returns.is_empty() {
        return None;
    }

    let squares = negative_returns
        .iter()
        .map(|v| v.checked_mul(*v))
        .collect::<Option<Vec<Decimal>>>()?;
    let variance =
        checked_sum(squares)?.checked_div(Decimal::from(negative_returns.len() as u64))?;

    sqrt_decimal(variance)
}

fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}

/// Approximate square root using Newton's method.
pub fn sqrt_decimal(value: Decimal) -> Option<Decimal> {
    if value < Decimal::ZERO {
        return None;
    }
    if value == Decimal::ZERO {
        return Some(Decimal::ZERO);
    }

    let mut guess = if value > Decimal::ONE {
        value / TWO
    } else {
        Decimal::ONE
    };

    for _ in 0..100 {
        let next = (guess + value / guess) / TWO;
        if (next - guess).abs() < TOLERANCE {
            return Some(next);
        }
        guess = next;
    }

    Some(guess)
}
