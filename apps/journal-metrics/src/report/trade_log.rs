//! CSV export of the trade log.

use crate::domain::trade::Trade;

use super::ReportError;

/// Column header of the trade CSV export.
pub const TRADE_CSV_HEADER: &str = "id,date,symbol,result,pnl,risk_amount,notes";

/// Export trades to CSV, one row per trade in input order.
///
/// Free-text fields are quoted when they contain a delimiter, quote or line break.
///
/// # Errors
///
/// Returns `ReportError::Csv` if a row cannot be written.
pub fn trades_to_csv(trades: &[Trade]) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TRADE_CSV_HEADER.split(','))?;

    for trade in trades {
        let date = trade.date.to_rfc3339();
        let pnl = trade.pnl.to_string();
        let risk_amount = trade
            .risk_amount
            .map(|risk| risk.to_string())
            .unwrap_or_default();

        writer.write_record([
            trade.id.as_str(),
            date.as_str(),
            trade.symbol.as_deref().unwrap_or_default(),
            trade.result.as_str(),
            pnl.as_str(),
            risk_amount.as_str(),
            trade.notes.as_deref().unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
