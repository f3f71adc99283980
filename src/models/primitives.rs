//! Primitive types and newtypes for type-safe API interactions.
//!
//! Strongly-typed wrappers around raw identifiers prevent mixing up
//! symbols and order IDs at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trading pair symbol (e.g., "BTCUSDT").
///
/// Normalized to uppercase on construction, matching how the venue keys
/// its instrument list.
///
/// # Example
///
/// ```
/// use binance_futures_cli::Symbol;
///
/// let symbol = Symbol::new("btcusdt");
/// assert_eq!(symbol.as_str(), "BTCUSDT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol, normalizing to uppercase.
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_uppercase())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// A venue-assigned order ID.
///
/// Only ever produced from an exchange response or user input referring
/// to one; this client never invents order IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Wrap a raw venue order ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Which deployment of the venue to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Binance Futures testnet (paper trading)
    Testnet,
    /// Binance Futures production
    Mainnet,
}

impl Environment {
    /// Base URL for REST API requests.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Environment::Testnet => "https://testnet.binancefuture.com",
            Environment::Mainnet => "https://fapi.binance.com",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Testnet => write!(f, "testnet"),
            Environment::Mainnet => write!(f, "mainnet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_normalization() {
        assert_eq!(Symbol::new("btcusdt").as_str(), "BTCUSDT");
        assert_eq!(Symbol::new("  ethusdt ").as_str(), "ETHUSDT");
        assert_eq!(Symbol::new("BTCUSDT"), Symbol::new("btcusdt"));
    }

    #[test]
    fn test_order_id_roundtrip() {
        let id: OrderId = "283194".parse().unwrap();
        assert_eq!(id.value(), 283194);
        assert_eq!(id.to_string(), "283194");
        assert!("not-a-number".parse::<OrderId>().is_err());
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Testnet.rest_base_url(),
            "https://testnet.binancefuture.com"
        );
        assert_eq!(
            Environment::Mainnet.rest_base_url(),
            "https://fapi.binance.com"
        );
    }
}
