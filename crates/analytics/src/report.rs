use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A standardized summary of a journal's trading performance.
///
/// This struct is the final output of the `StatsEngine` and serves as the
/// data transfer object for performance results throughout the system.
///
/// Counts always satisfy
/// `win_count + loss_count + breakeven_count == total_trades`.
/// Trades with no P&L figure contribute only to `excluded_trades`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    // I. Counts
    pub total_trades: usize,
    pub win_count: usize,
    pub loss_count: usize,
    pub breakeven_count: usize,
    /// Trades skipped because they carry no P&L figure.
    pub excluded_trades: usize,

    // II. Profitability
    pub total_pnl: Decimal,
    pub gross_profit: Decimal,
    /// Magnitude of the summed losing P&L (non-negative).
    pub gross_loss: Decimal,
    pub win_rate_pct: Decimal,
    pub average_win: Decimal,
    /// Average losing trade, as a non-negative magnitude.
    pub average_loss: Decimal,
    /// Gross profit over gross loss. `None` means there were winning trades
    /// but no losing ones, so the ratio is undefined ("no losses"); a
    /// tradeless journal reports `Some(0)`.
    pub profit_factor: Option<Decimal>,

    // III. Extremes
    pub largest_win: Option<Decimal>,
    /// The most negative P&L, kept signed.
    pub largest_loss: Option<Decimal>,
}

impl SummaryStats {
    /// Creates a new, zeroed-out SummaryStats.
    /// This is the result for an empty (or fully excluded) journal.
    pub fn new() -> Self {
        Self {
            total_trades: 0,
            win_count: 0,
            loss_count: 0,
            breakeven_count: 0,
            excluded_trades: 0,
            total_pnl: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
            win_rate_pct: Decimal::ZERO,
            average_win: Decimal::ZERO,
            average_loss: Decimal::ZERO,
            profit_factor: Some(Decimal::ZERO),
            largest_win: None,
            largest_loss: None,
        }
    }
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Performance of one group of trades sharing a key (strategy, pair, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub trades: usize,
    pub total_pnl: Decimal,
    pub win_count: usize,
    pub win_rate_pct: Decimal,
    pub avg_pnl: Decimal,
}
