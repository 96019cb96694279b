//! Decimal constants for performance metric calculations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const TWO: Decimal = Decimal::TWO;
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
pub const TRADING_DAYS: Decimal = Decimal::from_parts(252, 0, 0, false, 0);
pub const SQRT_TRADING_DAYS: Decimal = dec!(15.874507866387543543);
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 12); // 0.000000000001

/// Capital base the daily return series is normalized against.
pub const BASELINE_CAPITAL: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
/// Annual risk-free rate used when the caller supplies none (1%).
pub const DEFAULT_RISK_FREE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Sharpe and Sortino need at least this many trades.
pub const MIN_TRADES_FOR_RATIOS: usize = 2;
/// Sortino reported when no daily return was negative but the mean is positive.
pub const SORTINO_CEILING: Decimal = Decimal::TEN;
/// Upper bound on the reported profit factor.
pub const PROFIT_FACTOR_CAP: Decimal = dec!(99.99);
/// Average loss assumed by expectancy when no trade lost money.
pub const EXPECTANCY_FALLBACK_LOSS: Decimal = Decimal::ONE;
