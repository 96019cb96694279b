//! Defaults for the metrics calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metrics::{BASELINE_CAPITAL, DEFAULT_RISK_FREE_RATE, MetricsCalculator};

/// Metric calculation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Annual risk-free rate used by Sharpe and Sortino (decimal, 0.01 = 1%).
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: Decimal,
    /// Capital base the daily return series is normalized against.
    #[serde(default = "default_baseline_capital")]
    pub baseline_capital: Decimal,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            baseline_capital: default_baseline_capital(),
        }
    }
}

impl MetricsConfig {
    /// Build a calculator from these settings.
    #[must_use]
    pub fn calculator(&self) -> MetricsCalculator {
        MetricsCalculator::new()
            .with_risk_free_rate(self.risk_free_rate)
            .with_baseline_capital(self.baseline_capital)
    }
}

const fn default_risk_free_rate() -> Decimal {
    DEFAULT_RISK_FREE_RATE
}

const fn default_baseline_capital() -> Decimal {
    BASELINE_CAPITAL
}
