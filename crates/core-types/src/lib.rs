//! # Journal Core Types
//!
//! The foundational data crate for the trading journal. It defines the
//! `Trade` record that every other crate consumes, along with the enums
//! and errors that go with it.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate has no knowledge of any other part of the
//!   system. It only describes data.
//! - **Plain Data:** A `Trade` is a value. It carries no behavior beyond
//!   opt-in validation, and it is never mutated by consumers.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{TradeDirection, TradeStatus};
pub use error::CoreError;
pub use structs::Trade;
