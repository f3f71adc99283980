//! Interactive parameter collection.
//!
//! Each interactive command declares an ordered schema of named, typed
//! prompts; [`collect`] walks the schema against an abstract [`LineSource`]
//! so the prompting logic is testable without a TTY. Ctrl-c (or EOF) while
//! a prompt is pending surfaces as [`Error::Interrupted`], aborting the
//! current command only.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::models::{OrderId, OrderSide, Symbol};
use crate::{Error, Result};

/// A source of user input lines.
#[async_trait]
pub trait LineSource: Send {
    /// Display `prompt` and read one line.
    ///
    /// Returns `Ok(None)` on end of input and [`Error::Interrupted`] when
    /// the user cancels with ctrl-c.
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line source backed by stdin, with ctrl-c detection.
pub struct StdinLineSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinLineSource {
    /// Create a line source reading from this process's stdin.
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinLineSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineSource for StdinLineSource {
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        {
            use std::io::Write;
            let mut stdout = std::io::stdout();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                Err(Error::Interrupted)
            }
            line = self.lines.next_line() => Ok(line?),
        }
    }
}

/// One named, typed parameter in a command's prompt schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Trading pair symbol
    Symbol,
    /// Order side
    Side,
    /// Order quantity
    Quantity,
    /// Limit price
    Price,
    /// Stop trigger price
    StopPrice,
    /// Stop leg limit price
    StopLimitPrice,
    /// Venue order ID
    OrderRef,
}

impl Field {
    fn prompt(&self) -> &'static str {
        match self {
            Field::Symbol => "Symbol (e.g., BTCUSDT): ",
            Field::Side => "Side (BUY/SELL): ",
            Field::Quantity => "Quantity: ",
            Field::Price => "Price: ",
            Field::StopPrice => "Stop Price: ",
            Field::StopLimitPrice => "Stop Limit Price: ",
            Field::OrderRef => "Order ID: ",
        }
    }
}

/// Prompt schema for `market`.
pub const MARKET_FIELDS: &[Field] = &[Field::Symbol, Field::Side, Field::Quantity];

/// Prompt schema for `limit`.
pub const LIMIT_FIELDS: &[Field] = &[Field::Symbol, Field::Side, Field::Quantity, Field::Price];

/// Prompt schema for `stop-limit`.
pub const STOP_LIMIT_FIELDS: &[Field] = &[
    Field::Symbol,
    Field::Side,
    Field::Quantity,
    Field::Price,
    Field::StopPrice,
];

/// Prompt schema for `oco`.
pub const OCO_FIELDS: &[Field] = &[
    Field::Symbol,
    Field::Side,
    Field::Quantity,
    Field::Price,
    Field::StopPrice,
    Field::StopLimitPrice,
];

/// Prompt schema for `status` and `cancel`.
pub const ORDER_REF_FIELDS: &[Field] = &[Field::Symbol, Field::OrderRef];

/// Parameters gathered by walking a prompt schema.
#[derive(Debug, Default)]
pub struct Collected {
    symbol: Option<Symbol>,
    side: Option<OrderSide>,
    quantity: Option<Decimal>,
    price: Option<Decimal>,
    stop_price: Option<Decimal>,
    stop_limit_price: Option<Decimal>,
    order_id: Option<OrderId>,
}

impl Collected {
    fn require<T>(value: Option<T>, name: &str) -> Result<T> {
        value.ok_or_else(|| Error::validation(format!("missing parameter: {name}")))
    }

    /// The collected symbol.
    pub fn symbol(&self) -> Result<Symbol> {
        Self::require(self.symbol.clone(), "symbol")
    }

    /// The collected side.
    pub fn side(&self) -> Result<OrderSide> {
        Self::require(self.side, "side")
    }

    /// The collected quantity.
    pub fn quantity(&self) -> Result<Decimal> {
        Self::require(self.quantity, "quantity")
    }

    /// The collected limit price.
    pub fn price(&self) -> Result<Decimal> {
        Self::require(self.price, "price")
    }

    /// The collected stop price.
    pub fn stop_price(&self) -> Result<Decimal> {
        Self::require(self.stop_price, "stop price")
    }

    /// The collected stop leg limit price.
    pub fn stop_limit_price(&self) -> Result<Decimal> {
        Self::require(self.stop_limit_price, "stop limit price")
    }

    /// The collected order ID.
    pub fn order_id(&self) -> Result<OrderId> {
        Self::require(self.order_id, "order ID")
    }
}

fn parse_decimal(label: &str, input: &str) -> Result<Decimal> {
    input
        .trim()
        .parse::<Decimal>()
        .map_err(|_| Error::validation(format!("invalid {label}: '{}'", input.trim())))
}

/// Walk a prompt schema, reading and parsing one value per field.
///
/// A parse failure aborts collection with a validation error; the caller's
/// command is abandoned and the interactive loop continues. End of input
/// behaves like cancellation.
pub async fn collect<S: LineSource>(source: &mut S, fields: &[Field]) -> Result<Collected> {
    let mut collected = Collected::default();
    for field in fields {
        let line = source
            .read_line(field.prompt())
            .await?
            .ok_or(Error::Interrupted)?;
        match field {
            Field::Symbol => {
                let symbol = Symbol::new(&line);
                if symbol.as_str().is_empty() {
                    return Err(Error::validation("symbol must not be empty"));
                }
                collected.symbol = Some(symbol);
            }
            Field::Side => {
                collected.side = Some(line.parse::<OrderSide>().map_err(Error::Validation)?);
            }
            Field::Quantity => collected.quantity = Some(parse_decimal("quantity", &line)?),
            Field::Price => collected.price = Some(parse_decimal("price", &line)?),
            Field::StopPrice => collected.stop_price = Some(parse_decimal("stop price", &line)?),
            Field::StopLimitPrice => {
                collected.stop_limit_price = Some(parse_decimal("stop limit price", &line)?)
            }
            Field::OrderRef => {
                collected.order_id = Some(line.trim().parse::<OrderId>().map_err(|_| {
                    Error::validation(format!("invalid order ID: '{}'", line.trim()))
                })?);
            }
        }
    }
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    struct Scripted {
        lines: Vec<String>,
        prompts: Vec<String>,
    }

    impl Scripted {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().rev().map(|s| s.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    #[async_trait]
    impl LineSource for Scripted {
        async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.lines.pop())
        }
    }

    #[tokio::test]
    async fn test_collect_market_fields_in_order() {
        let mut source = Scripted::new(&["btcusdt", "buy", "0.002"]);
        let collected = collect(&mut source, MARKET_FIELDS).await.unwrap();
        assert_eq!(collected.symbol().unwrap().as_str(), "BTCUSDT");
        assert_eq!(collected.side().unwrap(), OrderSide::Buy);
        assert_eq!(collected.quantity().unwrap(), dec!(0.002));
        assert_eq!(
            source.prompts,
            ["Symbol (e.g., BTCUSDT): ", "Side (BUY/SELL): ", "Quantity: "]
        );
    }

    #[tokio::test]
    async fn test_collect_oco_fields() {
        let mut source = Scripted::new(&[
            "BTCUSDT", "SELL", "0.01", "65000", "58000", "57900",
        ]);
        let collected = collect(&mut source, OCO_FIELDS).await.unwrap();
        assert_eq!(collected.stop_price().unwrap(), dec!(58000));
        assert_eq!(collected.stop_limit_price().unwrap(), dec!(57900));
    }

    #[tokio::test]
    async fn test_invalid_side_aborts_collection() {
        let mut source = Scripted::new(&["BTCUSDT", "hold", "0.002"]);
        let err = collect(&mut source, MARKET_FIELDS).await.unwrap_err();
        assert!(err.to_string().contains("side must be 'BUY' or 'SELL'"));
        // Collection stopped at the bad field
        assert_eq!(source.prompts.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_quantity_aborts_collection() {
        let mut source = Scripted::new(&["BTCUSDT", "BUY", "lots"]);
        let err = collect(&mut source, MARKET_FIELDS).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid quantity: 'lots'");
    }

    #[tokio::test]
    async fn test_end_of_input_is_cancellation() {
        let mut source = Scripted::new(&["BTCUSDT"]);
        let err = collect(&mut source, MARKET_FIELDS).await.unwrap_err();
        assert!(matches!(err, Error::Interrupted));
    }

    #[tokio::test]
    async fn test_order_ref_fields() {
        let mut source = Scripted::new(&["btcusdt", "283194"]);
        let collected = collect(&mut source, ORDER_REF_FIELDS).await.unwrap();
        assert_eq!(collected.order_id().unwrap().value(), 283194);
    }
}
