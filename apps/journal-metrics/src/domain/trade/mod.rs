//! Trade records and the filters the dashboard applies to them.

mod filter;
mod record;

pub use filter::TradeFilter;
pub use record::{Trade, TradeResult, parse_trade_date};
