//! API service modules for Binance Futures endpoints.
//!
//! Each service covers one domain of the REST API and borrows the shared
//! client internals.

mod account;
mod market;
mod orders;

pub use account::AccountService;
pub use market::MarketService;
pub use orders::OrdersService;
