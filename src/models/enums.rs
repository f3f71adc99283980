//! Enumeration types shared across the API models.
//!
//! Wire names follow the venue's conventions (`BUY`, `STOP`, `GTC`, ...);
//! the serde renames are the single source of truth for those spellings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy (long)
    Buy,
    /// Sell (short)
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            other => Err(format!("side must be 'BUY' or 'SELL', got '{other}'")),
        }
    }
}

/// Order type specifying how the order should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Execute immediately at the current market price
    Market,
    /// Execute at the specified price or better
    Limit,
    /// Becomes a limit order when the stop price is reached
    Stop,
    /// Paired order where one leg's execution cancels the other
    Oco,
    /// Venue order type this client does not construct
    #[serde(other)]
    Other,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Market => write!(f, "MARKET"),
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Stop => write!(f, "STOP"),
            OrderType::Oco => write!(f, "OCO"),
            OrderType::Other => write!(f, "OTHER"),
        }
    }
}

/// Time in force specification for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
    /// Good till crossing (post-only)
    Gtx,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Ioc => write!(f, "IOC"),
            TimeInForce::Fok => write!(f, "FOK"),
            TimeInForce::Gtx => write!(f, "GTX"),
        }
    }
}

/// Lifecycle status of an order as reported by the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Accepted, not yet filled
    New,
    /// Partially executed
    PartiallyFilled,
    /// Completely executed
    Filled,
    /// Cancelled by the user
    Canceled,
    /// Rejected by the venue
    Rejected,
    /// Expired per its time-in-force
    Expired,
    /// Status this client does not model
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns `true` if the order can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled
                | OrderStatus::Canceled
                | OrderStatus::Rejected
                | OrderStatus::Expired
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::New => write!(f, "NEW"),
            OrderStatus::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            OrderStatus::Filled => write!(f, "FILLED"),
            OrderStatus::Canceled => write!(f, "CANCELED"),
            OrderStatus::Rejected => write!(f, "REJECTED"),
            OrderStatus::Expired => write!(f, "EXPIRED"),
            OrderStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Direction of a futures position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    /// One-way position mode
    Both,
    /// Long leg in hedge mode
    Long,
    /// Short leg in hedge mode
    Short,
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSide::Both => write!(f, "BOTH"),
            PositionSide::Long => write!(f, "LONG"),
            PositionSide::Short => write!(f, "SHORT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parsing() {
        assert_eq!("buy".parse::<OrderSide>().unwrap(), OrderSide::Buy);
        assert_eq!(" SELL ".parse::<OrderSide>().unwrap(), OrderSide::Sell);
        assert!("hold".parse::<OrderSide>().is_err());
    }

    #[test]
    fn test_side_wire_format() {
        assert_eq!(serde_json::to_string(&OrderSide::Buy).unwrap(), "\"BUY\"");
        assert_eq!(
            serde_json::from_str::<OrderSide>("\"SELL\"").unwrap(),
            OrderSide::Sell
        );
    }

    #[test]
    fn test_order_type_wire_format() {
        assert_eq!(serde_json::to_string(&OrderType::Market).unwrap(), "\"MARKET\"");
        assert_eq!(serde_json::to_string(&OrderType::Stop).unwrap(), "\"STOP\"");
        assert_eq!(serde_json::to_string(&OrderType::Oco).unwrap(), "\"OCO\"");
        // Venue types we do not construct still deserialize
        assert_eq!(
            serde_json::from_str::<OrderType>("\"TRAILING_STOP_MARKET\"").unwrap(),
            OrderType::Other
        );
    }

    #[test]
    fn test_status_terminal() {
        assert!(OrderStatus::Filled.is_terminal());
        assert!(OrderStatus::Expired.is_terminal());
        assert!(!OrderStatus::New.is_terminal());
        assert!(!OrderStatus::PartiallyFilled.is_terminal());
    }

    #[test]
    fn test_status_unknown_fallback() {
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"NEW_INSURANCE\"").unwrap(),
            OrderStatus::Unknown
        );
    }

    #[test]
    fn test_time_in_force_wire_format() {
        assert_eq!(serde_json::to_string(&TimeInForce::Gtc).unwrap(), "\"GTC\"");
    }
}
