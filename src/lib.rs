//! # binance-futures-cli
//!
//! A command-line client for Binance USD-M Futures: validates and submits
//! orders, and reports account state.
//!
//! The heart of the crate is the order validation and construction
//! pipeline: user trade intent ([`models::OrderRequest`]) is checked
//! against per-symbol venue constraints ([`InstrumentCache`]) entirely
//! client-side, then converted into a canonical wire payload
//! ([`models::NewOrder`]) for submission. Invalid combinations never reach
//! the network.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use binance_futures_cli::models::{OrderRequest, OrderSide, Symbol};
//! use binance_futures_cli::{
//!     ClientConfig, Credentials, Dispatcher, Environment, FuturesClient,
//! };
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> binance_futures_cli::Result<()> {
//!     let client = FuturesClient::new(
//!         Credentials::new("api-key", "api-secret"),
//!         Environment::Testnet,
//!         ClientConfig::default(),
//!     )?;
//!
//!     let dispatcher = Dispatcher::new(&client);
//!     let ack = dispatcher
//!         .submit(OrderRequest::Market {
//!             symbol: Symbol::new("BTCUSDT"),
//!             side: OrderSide::Buy,
//!             quantity: Decimal::new(2, 3), // 0.002
//!         })
//!         .await?;
//!     println!("order {} is {}", ack.order_id, ack.status);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod cli;
pub mod client;
pub mod error;
pub mod exchange;
pub mod instruments;
pub mod models;
pub mod report;
pub mod validate;

// Re-export primary types at crate root for convenience
pub use cli::Dispatcher;
pub use client::{ClientConfig, Credentials, FuturesClient};
pub use error::{Error, Result};
pub use exchange::Exchange;
pub use instruments::InstrumentCache;
pub use models::{Environment, OrderId, Symbol};

/// Prelude module for convenient imports.
///
/// ```rust
/// use binance_futures_cli::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cli::Dispatcher;
    pub use crate::client::{ClientConfig, Credentials, FuturesClient};
    pub use crate::error::{Error, Result};
    pub use crate::exchange::Exchange;
    pub use crate::instruments::InstrumentCache;
    pub use crate::models::{
        AccountInfo, Environment, InstrumentConstraints, NewOrder, OpenOrder, OrderAck, OrderId,
        OrderRequest, OrderSide, OrderStatus, OrderType, Position, PositionSide, Symbol,
        TimeInForce,
    };
    pub use crate::report::AccountSummary;
    pub use crate::validate::validate;
}
