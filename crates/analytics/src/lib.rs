//! # Journal Analytics
//!
//! This crate provides the single source of truth for trading-journal
//! performance statistics: win rate, profit factor, average win/loss and
//! per-strategy / per-pair breakdowns. Every screen that shows a number
//! derives it from here, so there is exactly one definition of each metric.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `StatsEngine` is a stateless calculator.
//!   It takes a slice of trades as input and produces `SummaryStats` or
//!   `GroupStats` as output. It never mutates its input, which makes it
//!   trivially safe to call from anywhere, any number of times.
//! - **Total Functions:** Every operation is defined for every input. Empty
//!   collections, all-winning runs and trades with no P&L figure all resolve
//!   to documented values, never to errors or panics.
//!
//! ## Public API
//!
//! - `StatsEngine`: The struct that contains the calculation logic.
//! - `SummaryStats`: The whole-journal summary record.
//! - `GroupStats`: The per-key (strategy, pair, ...) breakdown record.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{StatsEngine, sort_by_pnl_desc, sort_groups};
pub use report::{GroupStats, SummaryStats};
