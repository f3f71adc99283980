//! HTTP client and configuration for the Binance Futures REST API.
//!
//! [`FuturesClient`] is the concrete exchange collaborator: it owns the
//! connection pool, credentials, and signing, and exposes one service
//! struct per API domain.

mod config;
mod http;
mod sign;

pub use config::{ClientConfig, Credentials};
pub use http::FuturesClient;
pub(crate) use http::ClientInner;
