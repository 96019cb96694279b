//! Shared value objects.

mod identifiers;

pub use identifiers::{AccountId, TradeId};
