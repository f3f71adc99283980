//! Orders service: placement, status, and cancellation.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{NewOrder, OpenOrder, OrderAck, OrderId, Symbol};
use crate::Result;

/// Service for order operations.
///
/// Payloads arriving here have already passed client-side validation; this
/// layer only encodes, signs, and transmits them.
///
/// # Example
///
/// ```no_run
/// use binance_futures_cli::models::{OrderRequest, OrderSide, Symbol};
/// use rust_decimal::Decimal;
///
/// # async fn example(client: binance_futures_cli::FuturesClient)
/// #     -> binance_futures_cli::Result<()> {
/// let payload = OrderRequest::Market {
///     symbol: Symbol::new("BTCUSDT"),
///     side: OrderSide::Buy,
///     quantity: Decimal::new(2, 3), // 0.002
/// }
/// .into_payload();
///
/// let ack = client.orders().place(&payload).await?;
/// println!("order {} is {}", ack.order_id, ack.status);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Submit a canonical order payload.
    ///
    /// POST `/fapi/v1/order`; the payload travels in the signed query string.
    pub async fn place(&self, order: &NewOrder) -> Result<OrderAck> {
        let query = serde_urlencoded::to_string(order)?;
        self.inner.signed_post("/fapi/v1/order", &query).await
    }

    /// Fetch the current state of an order.
    pub async fn get(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck> {
        let query = format!("symbol={}&orderId={}", symbol, order_id);
        self.inner.signed_get("/fapi/v1/order", &query).await
    }

    /// Cancel a working order.
    pub async fn cancel(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck> {
        let query = format!("symbol={}&orderId={}", symbol, order_id);
        self.inner.signed_delete("/fapi/v1/order", &query).await
    }

    /// Fetch open orders, optionally restricted to one symbol.
    pub async fn open_orders(&self, symbol: Option<&Symbol>) -> Result<Vec<OpenOrder>> {
        let query = match symbol {
            Some(symbol) => format!("symbol={symbol}"),
            None => String::new(),
        };
        self.inner.signed_get("/fapi/v1/openOrders", &query).await
    }
}
