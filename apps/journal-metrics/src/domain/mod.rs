//! Domain Layer
//!
//! Journal types with no infrastructure dependencies:
//!
//! - [`trade`]: the trade record supplied by the journal, its result
//!   classification, and the dashboard filter
//! - [`shared`]: identifiers shared across the crate

pub mod shared;
pub mod trade;
