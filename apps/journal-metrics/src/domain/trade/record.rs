//! Trade record as logged in the journal.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::shared::{AccountId, TradeId};

/// Outcome classification chosen when the trade was logged.
///
/// The classification is expected to agree with the sign of the P&L, but
/// nothing enforces that: statistics that count outcomes use this field,
/// statistics that sum money use the P&L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeResult {
    /// Profitable trade.
    Win,
    /// Losing trade.
    Loss,
    /// Closed flat.
    Breakeven,
}

impl TradeResult {
    /// Wire name of the result.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Loss => "LOSS",
            Self::Breakeven => "BREAKEVEN",
        }
    }
}

impl std::fmt::Display for TradeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed trade supplied by the journal.
///
/// The metrics engine only ever reads trades; it never mutates or retains them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Trade identifier.
    pub id: TradeId,
    /// Signed profit or loss in account currency.
    pub pnl: Decimal,
    /// When the trade was closed. Date-only values are read as midnight UTC.
    #[serde(deserialize_with = "deserialize_trade_date")]
    pub date: DateTime<Utc>,
    /// Outcome classification.
    pub result: TradeResult,
    /// Amount risked on the trade, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_amount: Option<Decimal>,
    /// Account the trade belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    /// Traded symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Free-form journal notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trade {
    /// Create a trade with the fields the metrics depend on.
    #[must_use]
    pub fn new(
        id: impl Into<TradeId>,
        pnl: Decimal,
        date: DateTime<Utc>,
        result: TradeResult,
    ) -> Self {
        Self {
            id: id.into(),
            pnl,
            date,
            result,
            risk_amount: None,
            account_id: None,
            symbol: None,
            notes: None,
        }
    }

    /// Set the amount risked.
    #[must_use]
    pub const fn with_risk_amount(mut self, risk_amount: Decimal) -> Self {
        self.risk_amount = Some(risk_amount);
        self
    }

    /// Set the owning account.
    #[must_use]
    pub fn with_account(mut self, account_id: impl Into<AccountId>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Set the traded symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the journal notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Calendar day (UTC) the trade is grouped under.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// P&L is strictly positive.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.pnl > Decimal::ZERO
    }

    /// P&L is strictly negative.
    #[must_use]
    pub fn is_losing(&self) -> bool {
        self.pnl < Decimal::ZERO
    }

    /// P&L expressed in multiples of the amount risked.
    ///
    /// `None` when no positive risk amount was recorded or the ratio is
    /// too large to represent.
    #[must_use]
    pub fn r_multiple(&self) -> Option<Decimal> {
        self.risk_amount
            .filter(|risk| *risk > Decimal::ZERO)
            .and_then(|risk| self.pnl.checked_div(risk))
    }
}

fn deserialize_trade_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_trade_date(&raw).map_err(serde::de::Error::custom)
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns a message naming the rejected value when neither format matches.
pub fn parse_trade_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| format!("invalid trade date '{raw}': {e}"))
}
