//! Shared Domain Types
//!
//! Value objects shared across the journal domain.

pub mod value_objects;

pub use value_objects::{AccountId, TradeId};
