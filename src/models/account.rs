//! Account, position, and open-order models.
//!
//! The venue reports every numeric field as a JSON string; `rust_decimal`'s
//! serde impl parses those losslessly.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::enums::{OrderSide, OrderStatus, OrderType, PositionSide};
use super::primitives::OrderId;

/// Futures account balances.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Total wallet balance in the margin asset
    pub total_wallet_balance: Decimal,
    /// Unrealized profit across all positions
    pub total_unrealized_profit: Decimal,
    /// Wallet balance plus unrealized profit
    pub total_margin_balance: Decimal,
    /// Balance available for new positions
    #[serde(default)]
    pub available_balance: Decimal,
}

/// A futures position as reported by the venue.
///
/// Read-only projection; the venue reports one entry per symbol and
/// position side, including flat (zero-size) positions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Trading pair
    pub symbol: String,
    /// Position direction
    pub position_side: PositionSide,
    /// Signed position size; zero when flat
    pub position_amt: Decimal,
    /// Average entry price
    pub entry_price: Decimal,
    /// Current mark price
    pub mark_price: Decimal,
    /// Unrealized profit at the mark price
    #[serde(rename = "unRealizedProfit")]
    pub unrealized_profit: Decimal,
}

impl Position {
    /// Returns `true` if the position has any size.
    pub fn is_open(&self) -> bool {
        !self.position_amt.is_zero()
    }
}

/// An open (working) order as reported by the venue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrder {
    /// Venue-assigned order ID
    pub order_id: OrderId,
    /// Trading pair
    pub symbol: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Venue order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Originally requested quantity
    pub orig_qty: Decimal,
    /// Limit price; the venue sends a zero sentinel for market-style types
    pub price: Decimal,
    /// Current lifecycle status
    pub status: OrderStatus,
}
