//! End-to-end dispatch tests against an in-memory exchange.
//!
//! Covers the full pipeline (constraints lookup → validation → payload
//! build → collaborator call) and the interactive loop's error discipline,
//! without any network access.

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use binance_futures_cli::cli::interactive;
use binance_futures_cli::cli::prompt::LineSource;
use binance_futures_cli::models::{
    AccountInfo, NewOrder, OpenOrder, OrderAck, OrderId, OrderRequest, OrderSide, OrderStatus,
    OrderType, Position, PositionSide, Symbol, SymbolInfo,
};
use binance_futures_cli::{Dispatcher, Error, Exchange, Result};

/// In-memory exchange: records submissions, answers with canned data.
#[derive(Default)]
struct MockExchange {
    placed: Mutex<Vec<NewOrder>>,
    cancelled: Mutex<Vec<(Symbol, OrderId)>>,
}

impl MockExchange {
    fn placed(&self) -> Vec<NewOrder> {
        self.placed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Exchange for MockExchange {
    async fn account(&self) -> Result<AccountInfo> {
        Ok(AccountInfo {
            total_wallet_balance: dec!(15000),
            total_unrealized_profit: dec!(-23.4),
            total_margin_balance: dec!(14976.6),
            available_balance: dec!(12000),
        })
    }

    async fn exchange_info(&self) -> Result<Vec<SymbolInfo>> {
        Ok(serde_json::from_str(
            r#"[
                {
                    "symbol": "BTCUSDT",
                    "pricePrecision": 2,
                    "filters": [
                        {"filterType": "LOT_SIZE", "minQty": "0.00100000", "stepSize": "0.00100000"}
                    ]
                }
            ]"#,
        )
        .unwrap())
    }

    async fn positions(&self) -> Result<Vec<Position>> {
        Ok(vec![
            Position {
                symbol: "BTCUSDT".into(),
                position_side: PositionSide::Both,
                position_amt: dec!(0.005),
                entry_price: dec!(60210.5),
                mark_price: dec!(60500.12),
                unrealized_profit: dec!(1.4481),
            },
            Position {
                symbol: "ETHUSDT".into(),
                position_side: PositionSide::Both,
                position_amt: dec!(0),
                entry_price: dec!(0),
                mark_price: dec!(2450),
                unrealized_profit: dec!(0),
            },
        ])
    }

    async fn open_orders(&self, _symbol: Option<&Symbol>) -> Result<Vec<OpenOrder>> {
        Ok(vec![OpenOrder {
            order_id: OrderId::new(991),
            symbol: "BTCUSDT".into(),
            side: OrderSide::Sell,
            order_type: OrderType::Other,
            orig_qty: dec!(0.004),
            price: dec!(0),
            status: OrderStatus::New,
        }])
    }

    async fn place_order(&self, order: &NewOrder) -> Result<OrderAck> {
        self.placed.lock().unwrap().push(order.clone());
        Ok(OrderAck {
            order_id: OrderId::new(7001),
            symbol: order.symbol.clone(),
            side: order.side,
            order_type: order.order_type,
            orig_qty: Some(order.quantity),
            price: order.price,
            status: OrderStatus::New,
        })
    }

    async fn get_order(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck> {
        Ok(OrderAck {
            order_id,
            symbol: symbol.to_string(),
            side: OrderSide::Buy,
            order_type: OrderType::Limit,
            orig_qty: Some(dec!(0.003)),
            price: Some(dec!(60000.5)),
            status: OrderStatus::PartiallyFilled,
        })
    }

    async fn cancel_order(&self, symbol: &Symbol, order_id: OrderId) -> Result<OrderAck> {
        self.cancelled
            .lock()
            .unwrap()
            .push((symbol.clone(), order_id));
        Ok(OrderAck {
            order_id,
            symbol: symbol.to_string(),
            side: OrderSide::Buy,
            order_type: OrderType::Limit,
            orig_qty: Some(dec!(0.003)),
            price: Some(dec!(60000.5)),
            status: OrderStatus::Canceled,
        })
    }
}

/// Scripted interactive input: lines and injected interrupts.
enum Input {
    Line(&'static str),
    Interrupt,
}

struct Scripted {
    inputs: Vec<Input>,
}

impl Scripted {
    fn new(inputs: Vec<Input>) -> Self {
        let mut inputs = inputs;
        inputs.reverse();
        Self { inputs }
    }
}

#[async_trait]
impl LineSource for Scripted {
    async fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        match self.inputs.pop() {
            Some(Input::Line(line)) => Ok(Some(line.to_string())),
            Some(Input::Interrupt) => Err(Error::Interrupted),
            None => Ok(None),
        }
    }
}

async fn run_interactive(exchange: &MockExchange, inputs: Vec<Input>) -> String {
    let dispatcher = Dispatcher::new(exchange);
    let mut source = Scripted::new(inputs);
    let mut out = Vec::new();
    interactive::run(&dispatcher, &mut source, &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_market_order_payload() {
    let exchange = MockExchange::default();
    let dispatcher = Dispatcher::new(&exchange);

    let ack = dispatcher
        .submit(OrderRequest::Market {
            symbol: Symbol::new("btcusdt"),
            side: OrderSide::Buy,
            quantity: dec!(0.002),
        })
        .await
        .unwrap();

    assert_eq!(ack.order_id.value(), 7001);
    let placed = exchange.placed();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].symbol, "BTCUSDT");
    assert_eq!(placed[0].order_type, OrderType::Market);
    assert!(placed[0].price.is_none());
    assert!(placed[0].time_in_force.is_none());
}

#[tokio::test]
async fn test_oco_order_payload() {
    let exchange = MockExchange::default();
    let dispatcher = Dispatcher::new(&exchange);

    dispatcher
        .submit(OrderRequest::Oco {
            symbol: Symbol::new("BTCUSDT"),
            side: OrderSide::Sell,
            quantity: dec!(0.01),
            price: dec!(65000),
            stop_price: dec!(58000),
            stop_limit_price: dec!(57900),
        })
        .await
        .unwrap();

    let placed = exchange.placed();
    assert_eq!(placed[0].order_type, OrderType::Oco);
    assert_eq!(placed[0].stop_price, Some(dec!(58000)));
    assert_eq!(placed[0].stop_limit_price, Some(dec!(57900)));
    assert!(placed[0].time_in_force.is_none());
    assert!(placed[0].stop_limit_time_in_force.is_some());
}

#[tokio::test]
async fn test_invalid_order_never_reaches_exchange() {
    let exchange = MockExchange::default();
    let dispatcher = Dispatcher::new(&exchange);

    let err = dispatcher
        .submit(OrderRequest::Market {
            symbol: Symbol::new("BTCUSDT"),
            side: OrderSide::Buy,
            quantity: dec!(0.0005),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "quantity must be at least 0.001");
    assert!(exchange.placed().is_empty());
}

#[tokio::test]
async fn test_zero_price_limit_rejected() {
    let exchange = MockExchange::default();
    let dispatcher = Dispatcher::new(&exchange);

    let err = dispatcher
        .submit(OrderRequest::Limit {
            symbol: Symbol::new("BTCUSDT"),
            side: OrderSide::Buy,
            quantity: dec!(0.002),
            price: dec!(0),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "price must be specified and positive");
    assert!(exchange.placed().is_empty());
}

#[tokio::test]
async fn test_unknown_symbol_rejected_client_side() {
    let exchange = MockExchange::default();
    let dispatcher = Dispatcher::new(&exchange);

    let err = dispatcher
        .submit(OrderRequest::Market {
            symbol: Symbol::new("DOGEUSDT"),
            side: OrderSide::Buy,
            quantity: dec!(1),
        })
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "symbol not found: DOGEUSDT");
    assert!(exchange.placed().is_empty());
}

#[tokio::test]
async fn test_account_summary_projection() {
    let exchange = MockExchange::default();
    let dispatcher = Dispatcher::new(&exchange);

    let summary = dispatcher.account_summary().await.unwrap();
    // Flat ETHUSDT position excluded
    assert_eq!(summary.positions.len(), 1);
    assert_eq!(summary.positions[0].symbol, "BTCUSDT");
    // Zero-price open order renders "Market"
    assert_eq!(summary.open_orders[0].price, "Market");
}

#[tokio::test]
async fn test_interactive_unknown_command_keeps_loop() {
    let exchange = MockExchange::default();
    let output = run_interactive(
        &exchange,
        vec![Input::Line("frobnicate"), Input::Line("quit")],
    )
    .await;

    assert!(output.contains("Unknown command: frobnicate"));
    assert!(output.contains("Type 'help' for available commands"));
    // Still reached the deliberate quit
    assert!(output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_interactive_market_order_flow() {
    let exchange = MockExchange::default();
    let output = run_interactive(
        &exchange,
        vec![
            Input::Line("market"),
            Input::Line("btcusdt"),
            Input::Line("buy"),
            Input::Line("0.002"),
            Input::Line("quit"),
        ],
    )
    .await;

    assert!(output.contains("Market order placed! ID: 7001"));
    assert_eq!(exchange.placed().len(), 1);
}

#[tokio::test]
async fn test_interactive_validation_failure_keeps_loop() {
    let exchange = MockExchange::default();
    let output = run_interactive(
        &exchange,
        vec![
            Input::Line("limit"),
            Input::Line("BTCUSDT"),
            Input::Line("BUY"),
            Input::Line("0.002"),
            Input::Line("0"),
            Input::Line("quit"),
        ],
    )
    .await;

    assert!(output.contains("Error: price must be specified and positive"));
    assert!(output.contains("Goodbye!"));
    assert!(exchange.placed().is_empty());
}

#[tokio::test]
async fn test_interrupt_during_parameters_aborts_command_only() {
    let exchange = MockExchange::default();
    let output = run_interactive(
        &exchange,
        vec![
            Input::Line("market"),
            Input::Line("BTCUSDT"),
            Input::Interrupt,
            Input::Line("orders"),
            Input::Line("quit"),
        ],
    )
    .await;

    assert!(output.contains("Operation cancelled"));
    // The loop continued and executed the next command
    assert!(output.contains("Open Orders:"));
    assert!(exchange.placed().is_empty());
}

#[tokio::test]
async fn test_interactive_status_and_cancel() {
    let exchange = MockExchange::default();
    let output = run_interactive(
        &exchange,
        vec![
            Input::Line("status"),
            Input::Line("BTCUSDT"),
            Input::Line("283194"),
            Input::Line("cancel"),
            Input::Line("BTCUSDT"),
            Input::Line("283194"),
            Input::Line("exit"),
        ],
    )
    .await;

    assert!(output.contains("Status: PARTIALLY_FILLED"));
    assert!(output.contains("Order cancelled! ID: 283194"));
    assert_eq!(exchange.cancelled.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_interactive_positions_listing() {
    let exchange = MockExchange::default();
    let output = run_interactive(
        &exchange,
        vec![Input::Line("positions"), Input::Line("quit")],
    )
    .await;

    assert!(output.contains("BTCUSDT"));
    // Flat position is not listed
    assert!(!output.contains("ETHUSDT"));
}
