//! Command dispatch: the shared pipeline behind both CLI modes.
//!
//! Every order command flows constraints lookup → validation → payload
//! build → one exchange call. Validation failures never reach the network;
//! remote failures are surfaced verbatim to the caller.

use tracing::{info, warn};

use crate::exchange::Exchange;
use crate::instruments::InstrumentCache;
use crate::models::{OpenOrder, OrderAck, OrderId, OrderRequest, Position, Symbol};
use crate::report::AccountSummary;
use crate::validate::validate;
use crate::Result;

/// Routes commands through the validation pipeline to the exchange.
///
/// Holds the collaborator handle and the process-wide instrument cache;
/// constructed once at startup and threaded through both batch and
/// interactive modes.
pub struct Dispatcher<'a> {
    exchange: &'a dyn Exchange,
    instruments: InstrumentCache,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over an exchange collaborator.
    pub fn new(exchange: &'a dyn Exchange) -> Self {
        Self {
            exchange,
            instruments: InstrumentCache::new(),
        }
    }

    /// Validate, build, and submit an order.
    pub async fn submit(&self, request: OrderRequest) -> Result<OrderAck> {
        let constraints = self
            .instruments
            .constraints(self.exchange, request.symbol())
            .await?;

        if let Err(err) = validate(&request, &constraints) {
            warn!(symbol = %request.symbol(), %err, "order rejected client-side");
            return Err(err);
        }

        let payload = request.into_payload();
        info!(
            symbol = %payload.symbol,
            order_type = %payload.order_type,
            side = %payload.side,
            quantity = %payload.quantity,
            "submitting order"
        );

        let ack = self.exchange.place_order(&payload).await?;
        info!(order_id = %ack.order_id, status = %ack.status, "order acknowledged");
        Ok(ack)
    }

    /// Fetch the current state of an order.
    pub async fn order_status(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck> {
        self.exchange.get_order(symbol, order_id).await
    }

    /// Cancel a working order.
    pub async fn cancel(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck> {
        let ack = self.exchange.cancel_order(symbol, order_id).await?;
        info!(order_id = %ack.order_id, "order cancelled");
        Ok(ack)
    }

    /// Build the normalized account summary.
    pub async fn account_summary(&self) -> Result<AccountSummary> {
        let account = self.exchange.account().await?;
        let positions = self.exchange.positions().await?;
        let open_orders = self.exchange.open_orders(None).await?;
        Ok(AccountSummary::new(&account, &positions, &open_orders))
    }

    /// Fetch all open orders.
    pub async fn open_orders(&self) -> Result<Vec<OpenOrder>> {
        self.exchange.open_orders(None).await
    }

    /// Fetch all positions (including flat ones; display layers filter).
    pub async fn positions(&self) -> Result<Vec<Position>> {
        self.exchange.positions().await
    }
}
