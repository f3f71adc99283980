//! Order intent, canonical payloads, and venue acknowledgements.
//!
//! [`OrderRequest`] is the user's trade intent: one variant per supported
//! order type, carrying exactly the fields that type needs. A market order
//! cannot carry a price because the variant has no slot for one.
//!
//! [`NewOrder`] is the canonical wire payload produced by
//! [`OrderRequest::into_payload`] after validation; the transport signs and
//! submits it unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderSide, OrderStatus, OrderType, TimeInForce};
use super::primitives::{OrderId, Symbol};

/// A user's trade intent, one variant per supported order type.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderRequest {
    /// Execute immediately at the current market price
    Market {
        /// Trading pair
        symbol: Symbol,
        /// Buy or sell
        side: OrderSide,
        /// Order quantity
        quantity: Decimal,
    },
    /// Rest on the book at a limit price
    Limit {
        /// Trading pair
        symbol: Symbol,
        /// Buy or sell
        side: OrderSide,
        /// Order quantity
        quantity: Decimal,
        /// Limit price
        price: Decimal,
    },
    /// Become a limit order once the stop price trades
    StopLimit {
        /// Trading pair
        symbol: Symbol,
        /// Buy or sell
        side: OrderSide,
        /// Order quantity
        quantity: Decimal,
        /// Limit price of the triggered order
        price: Decimal,
        /// Trigger price
        stop_price: Decimal,
    },
    /// One-cancels-other pair: a limit leg and a stop-limit leg
    Oco {
        /// Trading pair
        symbol: Symbol,
        /// Buy or sell
        side: OrderSide,
        /// Order quantity
        quantity: Decimal,
        /// Limit leg price
        price: Decimal,
        /// Stop leg trigger price
        stop_price: Decimal,
        /// Stop leg limit price
        stop_limit_price: Decimal,
    },
}

impl OrderRequest {
    /// The symbol this request trades.
    pub fn symbol(&self) -> &Symbol {
        match self {
            OrderRequest::Market { symbol, .. }
            | OrderRequest::Limit { symbol, .. }
            | OrderRequest::StopLimit { symbol, .. }
            | OrderRequest::Oco { symbol, .. } => symbol,
        }
    }

    /// The order side.
    pub fn side(&self) -> OrderSide {
        match self {
            OrderRequest::Market { side, .. }
            | OrderRequest::Limit { side, .. }
            | OrderRequest::StopLimit { side, .. }
            | OrderRequest::Oco { side, .. } => *side,
        }
    }

    /// The order quantity.
    pub fn quantity(&self) -> Decimal {
        match self {
            OrderRequest::Market { quantity, .. }
            | OrderRequest::Limit { quantity, .. }
            | OrderRequest::StopLimit { quantity, .. }
            | OrderRequest::Oco { quantity, .. } => *quantity,
        }
    }

    /// The limit price, for variants that carry one.
    pub fn price(&self) -> Option<Decimal> {
        match self {
            OrderRequest::Market { .. } => None,
            OrderRequest::Limit { price, .. }
            | OrderRequest::StopLimit { price, .. }
            | OrderRequest::Oco { price, .. } => Some(*price),
        }
    }

    /// The venue order type this request maps to.
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderRequest::Market { .. } => OrderType::Market,
            OrderRequest::Limit { .. } => OrderType::Limit,
            OrderRequest::StopLimit { .. } => OrderType::Stop,
            OrderRequest::Oco { .. } => OrderType::Oco,
        }
    }

    /// Convert a validated request into its canonical wire payload.
    ///
    /// Pure and infallible; only invoked after validation succeeds.
    /// Quantities and prices are normalized so the payload never carries
    /// trailing zeros.
    pub fn into_payload(self) -> NewOrder {
        match self {
            OrderRequest::Market {
                symbol,
                side,
                quantity,
            } => NewOrder {
                symbol: symbol.as_str().to_string(),
                side,
                order_type: OrderType::Market,
                quantity: quantity.normalize(),
                price: None,
                stop_price: None,
                stop_limit_price: None,
                time_in_force: None,
                stop_limit_time_in_force: None,
            },
            OrderRequest::Limit {
                symbol,
                side,
                quantity,
                price,
            } => NewOrder {
                symbol: symbol.as_str().to_string(),
                side,
                order_type: OrderType::Limit,
                quantity: quantity.normalize(),
                price: Some(price.normalize()),
                stop_price: None,
                stop_limit_price: None,
                time_in_force: Some(TimeInForce::Gtc),
                stop_limit_time_in_force: None,
            },
            OrderRequest::StopLimit {
                symbol,
                side,
                quantity,
                price,
                stop_price,
            } => NewOrder {
                symbol: symbol.as_str().to_string(),
                side,
                order_type: OrderType::Stop,
                quantity: quantity.normalize(),
                price: Some(price.normalize()),
                stop_price: Some(stop_price.normalize()),
                stop_limit_price: None,
                time_in_force: Some(TimeInForce::Gtc),
                stop_limit_time_in_force: None,
            },
            OrderRequest::Oco {
                symbol,
                side,
                quantity,
                price,
                stop_price,
                stop_limit_price,
            } => NewOrder {
                symbol: symbol.as_str().to_string(),
                side,
                order_type: OrderType::Oco,
                quantity: quantity.normalize(),
                price: Some(price.normalize()),
                stop_price: Some(stop_price.normalize()),
                stop_limit_price: Some(stop_limit_price.normalize()),
                time_in_force: None,
                stop_limit_time_in_force: Some(TimeInForce::Gtc),
            },
        }
    }
}

/// Canonical order payload, ready for signing and transmission.
///
/// Field names and spellings match the venue's REST API. The transport
/// appends `timestamp`, `recvWindow`, and `signature`; nothing else is
/// added or changed after the builder produces this value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    /// Trading pair
    pub symbol: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Venue order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order quantity
    pub quantity: Decimal,
    /// Limit price (absent for market orders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Trigger price (stop-limit and OCO)
    #[serde(rename = "stopPrice", skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    /// Stop leg limit price (OCO only)
    #[serde(rename = "stopLimitPrice", skip_serializing_if = "Option::is_none")]
    pub stop_limit_price: Option<Decimal>,
    /// Time in force for the resting order
    #[serde(rename = "timeInForce", skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Time in force for the stop leg (OCO only)
    #[serde(
        rename = "stopLimitTimeInForce",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_limit_time_in_force: Option<TimeInForce>,
}

/// A venue acknowledgement for a placed, queried, or cancelled order.
///
/// Created only from exchange responses; this client never invents an
/// order ID.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAck {
    /// Venue-assigned order ID
    pub order_id: OrderId,
    /// Echoed trading pair
    pub symbol: String,
    /// Echoed side
    pub side: OrderSide,
    /// Echoed order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Originally requested quantity
    #[serde(rename = "origQty", default)]
    pub orig_qty: Option<Decimal>,
    /// Limit price; zero sentinel when the type carries no price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Current lifecycle status
    pub status: OrderStatus,
}
