//! The exchange collaborator seam.
//!
//! The dispatcher talks to the venue exclusively through [`Exchange`], so
//! the validation and reporting pipeline can be exercised in tests against
//! an in-memory implementation. [`FuturesClient`] is the production
//! implementation.

use async_trait::async_trait;

use crate::client::FuturesClient;
use crate::models::{
    AccountInfo, NewOrder, OpenOrder, OrderAck, OrderId, Position, Symbol, SymbolInfo,
};
use crate::Result;

/// Operations the trading core requires from the venue.
///
/// Every method can fail with a remote rejection or transport error; the
/// core reports those verbatim and never retries.
#[async_trait]
pub trait Exchange: Send + Sync {
    /// Fetch account balances.
    async fn account(&self) -> Result<AccountInfo>;

    /// Fetch the full instrument listing.
    async fn exchange_info(&self) -> Result<Vec<SymbolInfo>>;

    /// Fetch all positions, including flat ones.
    async fn positions(&self) -> Result<Vec<Position>>;

    /// Fetch open orders, optionally restricted to one symbol.
    async fn open_orders(&self, symbol: Option<&Symbol>) -> Result<Vec<OpenOrder>>;

    /// Submit a canonical order payload.
    async fn place_order(&self, order: &NewOrder) -> Result<OrderAck>;

    /// Fetch the current state of an order.
    async fn get_order(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck>;

    /// Cancel a working order.
    async fn cancel_order(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck>;
}

#[async_trait]
impl Exchange for FuturesClient {
    async fn account(&self) -> Result<AccountInfo> {
        self.account().info().await
    }

    async fn exchange_info(&self) -> Result<Vec<SymbolInfo>> {
        self.market().exchange_info().await
    }

    async fn positions(&self) -> Result<Vec<Position>> {
        self.account().positions().await
    }

    async fn open_orders(&self, symbol: Option<&Symbol>) -> Result<Vec<OpenOrder>> {
        self.orders().open_orders(symbol).await
    }

    async fn place_order(&self, order: &NewOrder) -> Result<OrderAck> {
        self.orders().place(order).await
    }

    async fn get_order(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck> {
        self.orders().get(symbol, order_id).await
    }

    async fn cancel_order(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck> {
        self.orders().cancel(symbol, order_id).await
    }
}
