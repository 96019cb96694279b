//! Display helpers for dashboard and report values.

use rust_decimal::Decimal;

use super::constants::HUNDRED;

/// Render a fraction as a percentage (`0.1523` becomes `15.23%`).
#[must_use]
pub fn format_pct(fraction: Decimal) -> String {
    format_percent_points(fraction * HUNDRED)
}

/// Render a value that is already in percent (`12.5` becomes `12.50%`).
#[must_use]
pub fn format_percent_points(points: Decimal) -> String {
    format!("{:.2}%", points.round_dp(2))
}

/// Two decimal places, no grouping.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Signed money amount with thousands separators (`+1,250.00`, `-80.50`).
///
/// Zero carries no sign.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = match rounded.cmp(&Decimal::ZERO) {
        std::cmp::Ordering::Greater => "+",
        std::cmp::Ordering::Less => "-",
        std::cmp::Ordering::Equal => "",
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{cents}")
}

/// Optional ratio, `N/A` when absent.
#[must_use]
pub fn format_ratio(value: Option<Decimal>) -> String {
    value.map_or_else(|| "N/A".to_string(), format_decimal)
}
