use crate::report::{GroupStats, SummaryStats};
use core_types::{Trade, TradeDirection};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::hash::Hash;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// A stateless calculator for deriving performance statistics from
/// journaled trades.
///
/// Only trades carrying a P&L figure participate in any metric; the rest
/// are tallied in `SummaryStats::excluded_trades` and skipped. The sign of
/// `pnl` alone decides win/loss/breakeven, never `status` or `exit_price`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsEngine {}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the whole-journal summary.
    ///
    /// # Arguments
    ///
    /// * `trades` - The journal's trades, in any order; the result does not
    ///   depend on ordering.
    ///
    /// # Returns
    ///
    /// A `SummaryStats` record. An empty (or fully excluded) input yields
    /// the zeroed baseline; this operation cannot fail.
    pub fn summarize(&self, trades: &[Trade]) -> SummaryStats {
        let mut stats = SummaryStats::new();

        for trade in trades {
            let Some(pnl) = trade.pnl else {
                stats.excluded_trades += 1;
                continue;
            };

            stats.total_trades += 1;
            stats.total_pnl += pnl;

            if pnl > Decimal::ZERO {
                stats.win_count += 1;
                stats.gross_profit += pnl;
                stats.largest_win = Some(stats.largest_win.map_or(pnl, |w| w.max(pnl)));
            } else if pnl < Decimal::ZERO {
                stats.loss_count += 1;
                stats.gross_loss += pnl.abs();
                stats.largest_loss = Some(stats.largest_loss.map_or(pnl, |l| l.min(pnl)));
            } else {
                stats.breakeven_count += 1;
            }
        }

        if stats.excluded_trades > 0 {
            tracing::warn!(
                excluded = stats.excluded_trades,
                "skipping trades without a P&L figure"
            );
        }

        // --- Ratios (all divisions zero-guarded) ---
        if stats.total_trades > 0 {
            stats.win_rate_pct =
                Decimal::from(stats.win_count) / Decimal::from(stats.total_trades) * HUNDRED;
        }

        if stats.win_count > 0 {
            stats.average_win = stats.gross_profit / Decimal::from(stats.win_count);
        }

        if stats.loss_count > 0 {
            stats.average_loss = stats.gross_loss / Decimal::from(stats.loss_count);
        }

        stats.profit_factor = if stats.gross_loss > Decimal::ZERO {
            Some(stats.gross_profit / stats.gross_loss)
        } else if stats.gross_profit > Decimal::ZERO {
            // Winning trades but no losing ones: the ratio is undefined.
            None
        } else {
            Some(Decimal::ZERO)
        };

        stats
    }

    /// Partitions trades by an arbitrary key and computes per-group
    /// statistics.
    ///
    /// Groups are returned in first-seen key order, so the output is
    /// deterministic for a given input ordering. Ranking them differently
    /// is the caller's concern; see [`sort_groups`] and
    /// [`sort_by_pnl_desc`].
    pub fn group_by<K, F>(&self, trades: &[Trade], key_fn: F) -> Vec<(K, GroupStats)>
    where
        K: Eq + Hash,
        F: Fn(&Trade) -> K,
    {
        let mut groups: IndexMap<K, GroupStats> = IndexMap::new();

        for trade in trades {
            let Some(pnl) = trade.pnl else {
                continue;
            };

            let entry = groups.entry(key_fn(trade)).or_default();
            entry.trades += 1;
            entry.total_pnl += pnl;
            if pnl > Decimal::ZERO {
                entry.win_count += 1;
            }
        }

        for stats in groups.values_mut() {
            // A group only exists because at least one trade landed in it.
            stats.win_rate_pct =
                Decimal::from(stats.win_count) / Decimal::from(stats.trades) * HUNDRED;
            stats.avg_pnl = stats.total_pnl / Decimal::from(stats.trades);
        }

        groups.into_iter().collect()
    }

    /// Per-strategy breakdown, as shown on the statistics screen.
    pub fn group_by_strategy(&self, trades: &[Trade]) -> Vec<(String, GroupStats)> {
        self.group_by(trades, |t| t.strategy.clone())
    }

    /// Per-currency-pair breakdown.
    pub fn group_by_pair(&self, trades: &[Trade]) -> Vec<(String, GroupStats)> {
        self.group_by(trades, |t| t.pair.clone())
    }

    /// Counts BUY versus SELL trades.
    ///
    /// Direction is always known, so unlike the P&L metrics this counts
    /// every trade, including ones without a P&L figure.
    pub fn count_by_direction(&self, trades: &[Trade]) -> (usize, usize) {
        let buys = trades
            .iter()
            .filter(|t| t.direction == TradeDirection::Buy)
            .count();
        (buys, trades.len() - buys)
    }
}

/// Sorts groups in place with a caller-supplied comparator.
///
/// Delegates to the standard library's stable sort, so equal groups keep
/// their first-seen relative order.
pub fn sort_groups<K, F>(groups: &mut [(K, GroupStats)], mut cmp: F)
where
    F: FnMut(&(K, GroupStats), &(K, GroupStats)) -> Ordering,
{
    groups.sort_by(|a, b| cmp(a, b));
}

/// Ranks groups by descending total P&L, the ordering the pair-performance
/// table uses.
pub fn sort_by_pnl_desc<K>(groups: &mut [(K, GroupStats)]) {
    sort_groups(groups, |a, b| b.1.total_pnl.cmp(&a.1.total_pnl));
}
