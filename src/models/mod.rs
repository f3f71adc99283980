//! Data models for the Binance Futures API.
//!
//! Organized by domain:
//!
//! - [`primitives`] - Core types like `Symbol`, `OrderId`, `Environment`
//! - [`enums`] - Order sides, types, statuses, time in force
//! - [`instrument`] - Instrument listing and per-symbol trading constraints
//! - [`order`] - Order intent, canonical payloads, venue acknowledgements
//! - [`account`] - Account balances, positions, open orders

pub mod account;
pub mod enums;
pub mod instrument;
pub mod order;
pub mod primitives;

// Re-export commonly used types
pub use account::*;
pub use enums::*;
pub use instrument::*;
pub use order::*;
pub use primitives::*;
