//! Dashboard filter producing the "current" trade list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{Trade, TradeResult};
use crate::domain::shared::AccountId;

/// Criteria narrowing a trade list before metrics are computed.
///
/// Every criterion is optional; an empty filter keeps every trade. Date bounds
/// are inclusive and compare against the trade's UTC calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeFilter {
    /// First day to include.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Last day to include.
    #[serde(default)]
    pub to: Option<NaiveDate>,
    /// Keep only trades with this result.
    #[serde(default)]
    pub result: Option<TradeResult>,
    /// Keep only trades on this symbol (case-insensitive).
    #[serde(default)]
    pub symbol: Option<String>,
    /// Keep only trades logged against this account.
    #[serde(default)]
    pub account_id: Option<AccountId>,
}

impl TradeFilter {
    /// Check whether a trade passes every criterion.
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        let day = trade.day();

        if self.from.is_some_and(|from| day < from) {
            return false;
        }
        if self.to.is_some_and(|to| day > to) {
            return false;
        }
        if self.result.is_some_and(|result| trade.result != result) {
            return false;
        }
        if let Some(symbol) = &self.symbol {
            let Some(traded) = &trade.symbol else {
                return false;
            };
            if !traded.eq_ignore_ascii_case(symbol) {
                return false;
            }
        }
        self.account_id
            .as_ref()
            .is_none_or(|account| trade.account_id.as_ref() == Some(account))
    }

    /// Copy the matching trades, preserving input order.
    #[must_use]
    pub fn apply(&self, trades: &[Trade]) -> Vec<Trade> {
        trades.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}
