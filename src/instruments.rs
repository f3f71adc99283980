//! Instrument metadata cache.
//!
//! The venue's instrument listing is fetched once per process on first use,
//! indexed by symbol, then frozen. A `OnceCell` gives load-once-then-freeze
//! semantics that stay safe if lookups ever become concurrent.

use std::collections::HashMap;

use tokio::sync::OnceCell;
use tracing::info;

use crate::exchange::Exchange;
use crate::models::{InstrumentConstraints, Symbol};
use crate::{Error, Result};

/// Cache of per-symbol trading constraints.
#[derive(Default)]
pub struct InstrumentCache {
    index: OnceCell<HashMap<String, InstrumentConstraints>>,
}

impl InstrumentCache {
    /// Create an empty cache; nothing is fetched until the first lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up constraints for a symbol, loading the listing on first use.
    ///
    /// Fails with [`Error::UnknownSymbol`] when the venue lists no such
    /// instrument. All other lookups for the life of the process reuse the
    /// one fetched index.
    pub async fn constraints(
        &self,
        exchange: &dyn Exchange,
        symbol: &Symbol,
    ) -> Result<InstrumentConstraints> {
        let index = self
            .index
            .get_or_try_init(|| async {
                let symbols = exchange.exchange_info().await?;
                info!(count = symbols.len(), "loaded instrument listing");
                Ok::<_, Error>(
                    symbols
                        .into_iter()
                        .map(|info| (info.symbol.clone(), InstrumentConstraints::from(info)))
                        .collect(),
                )
            })
            .await?;

        index
            .get(symbol.as_str())
            .cloned()
            .ok_or_else(|| Error::UnknownSymbol(symbol.to_string()))
    }
}
