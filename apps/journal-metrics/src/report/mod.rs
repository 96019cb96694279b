//! Report export for the journal.
//!
//! - [`trades_to_csv`]: trade log as CSV
//! - [`summary_to_json`]: metrics summary as pretty JSON
//! - [`format_summary`]: human-readable performance report

mod text;
mod trade_log;

use thiserror::Error;

use crate::metrics::MetricsSummary;

pub use text::format_summary;
pub use trade_log::{TRADE_CSV_HEADER, trades_to_csv};

/// Report rendering errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to serialize the report body.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to write formatted output.
    #[error("Failed to format report: {0}")]
    Format(#[from] std::fmt::Error),

    /// Failed to write a CSV row.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// CSV output was not valid UTF-8.
    #[error("CSV output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Export a metrics summary to pretty-printed JSON.
///
/// # Errors
///
/// Returns `ReportError::Serialization` if the summary cannot be serialized.
pub fn summary_to_json(summary: &MetricsSummary) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn summary_json_round_trips() {
        let summary = MetricsSummary {
            profit_factor: dec!(1.75),
            total_trades: 4,
            ..Default::default()
        };

        let json = summary_to_json(&summary).unwrap();
        assert!(json.contains("\"profit_factor\": \"1.75\""));

        let parsed: MetricsSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
