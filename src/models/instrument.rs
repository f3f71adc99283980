//! Instrument metadata models.
//!
//! The venue's `exchangeInfo` endpoint describes every listed symbol along
//! with its trading filters. Only the `LOT_SIZE` filter matters for order
//! validation; the rest are skipped during deserialization.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The venue's full instrument listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfo {
    /// All listed symbols
    pub symbols: Vec<SymbolInfo>,
}

/// One symbol's entry in the instrument listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Trading pair symbol (e.g., "BTCUSDT")
    pub symbol: String,
    /// Number of decimal places accepted in prices
    #[serde(default)]
    pub price_precision: u32,
    /// Trading filters attached to this symbol
    #[serde(default)]
    pub filters: Vec<SymbolFilter>,
}

/// A venue trading filter.
///
/// The venue attaches many filter kinds per symbol; only `LOT_SIZE`
/// participates in client-side validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "filterType")]
pub enum SymbolFilter {
    /// Quantity bounds and step size
    #[serde(rename = "LOT_SIZE")]
    LotSize {
        /// Minimum order quantity
        #[serde(rename = "minQty")]
        min_qty: Decimal,
        /// Quantity increment
        #[serde(rename = "stepSize")]
        step_size: Decimal,
    },
    /// Any filter kind not used by this client
    #[serde(other)]
    Other,
}

/// Per-symbol trading constraints used to validate orders.
///
/// Immutable once built; owned exclusively by the instrument cache and
/// cloned out to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentConstraints {
    /// Trading pair symbol (unique key)
    pub symbol: String,
    /// Minimum order quantity
    pub min_quantity: Decimal,
    /// Quantity increment; zero when the venue reports no `LOT_SIZE` filter
    pub quantity_step: Decimal,
    /// Number of decimal places accepted in prices
    pub price_precision: u32,
}

impl From<SymbolInfo> for InstrumentConstraints {
    fn from(info: SymbolInfo) -> Self {
        let mut min_quantity = Decimal::ZERO;
        let mut quantity_step = Decimal::ZERO;
        for filter in &info.filters {
            if let SymbolFilter::LotSize { min_qty, step_size } = filter {
                // Normalize so "0.00100000" reads back as "0.001" in messages.
                min_quantity = min_qty.normalize();
                quantity_step = step_size.normalize();
            }
        }
        Self {
            symbol: info.symbol,
            min_quantity,
            quantity_step,
            price_precision: info.price_precision,
        }
    }
}
