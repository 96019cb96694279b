//! Plain-text performance report.

use std::fmt::Write;

use super::ReportError;
use crate::metrics::{
    MetricsSummary, format_decimal, format_money, format_pct, format_percent_points, format_ratio,
};

/// Render a summary as a fixed-layout text report.
///
/// # Errors
///
/// Returns `ReportError::Format` if writing to the output buffer fails.
pub fn format_summary(summary: &MetricsSummary) -> Result<String, ReportError> {
    let mut out = String::new();

    writeln!(out, "Performance Report")?;
    writeln!(out, "==================")?;
    writeln!(out)?;

    writeln!(out, "Trades")?;
    writeln!(out, "  Total:            {}", summary.total_trades)?;
    writeln!(
        out,
        "  Wins/Losses/BE:   {}/{}/{}",
        summary.winning_trades, summary.losing_trades, summary.breakeven_trades
    )?;
    writeln!(out, "  Win rate:         {}", format_pct(summary.win_rate))?;
    writeln!(out, "  Trading days:     {}", summary.trading_days)?;
    writeln!(
        out,
        "  Streaks (W/L):    {}/{}",
        summary.max_consecutive_wins, summary.max_consecutive_losses
    )?;
    writeln!(out)?;

    writeln!(out, "P&L")?;
    writeln!(out, "  Net:              {}", format_money(summary.total_pnl))?;
    writeln!(out, "  Gross profit:     {}", format_money(summary.gross_profit))?;
    writeln!(out, "  Gross loss:       {}", format_money(-summary.gross_loss))?;
    writeln!(out, "  Average win:      {}", format_money(summary.average_win))?;
    writeln!(out, "  Average loss:     {}", format_money(-summary.average_loss))?;
    writeln!(out, "  Largest win:      {}", format_money(summary.largest_win))?;
    writeln!(out, "  Largest loss:     {}", format_money(summary.largest_loss))?;
    writeln!(out)?;

    writeln!(out, "Ratios")?;
    writeln!(out, "  Sharpe:           {}", format_decimal(summary.sharpe_ratio))?;
    writeln!(out, "  Sortino:          {}", format_decimal(summary.sortino_ratio))?;
    writeln!(out, "  Profit factor:    {}", format_decimal(summary.profit_factor))?;
    writeln!(out, "  Expectancy:       {}", format_money(summary.expectancy))?;
    writeln!(
        out,
        "  Max drawdown:     {}",
        format_percent_points(summary.max_drawdown)
    )?;
    writeln!(
        out,
        "  Avg R-multiple:   {}",
        format_ratio(summary.average_r_multiple)
    )?;

    Ok(out)
}
