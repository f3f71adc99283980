//! Market metadata service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{ExchangeInfo, SymbolInfo};
use crate::Result;

/// Service for venue metadata queries.
pub struct MarketService {
    inner: Arc<ClientInner>,
}

impl MarketService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the full instrument listing.
    ///
    /// GET `/fapi/v1/exchangeInfo` (public, unsigned). Callers are expected
    /// to cache the result; the listing changes rarely.
    pub async fn exchange_info(&self) -> Result<Vec<SymbolInfo>> {
        let info: ExchangeInfo = self.inner.public_get("/fapi/v1/exchangeInfo").await?;
        Ok(info.symbols)
    }
}
