//! Command-line surface: argument parsing, batch dispatch, and the
//! interactive prompt.

pub mod dispatch;
pub mod interactive;
pub mod prompt;

use clap::{Parser, Subcommand};
use console::style;
use rust_decimal::Decimal;

use crate::client::{ClientConfig, Credentials, FuturesClient};
use crate::models::{Environment, OrderAck, OrderId, OrderRequest, OrderSide, Symbol};
use crate::report::render_order_detail;
use crate::Result;

pub use dispatch::Dispatcher;

/// Order validation and submission CLI for Binance USD-M Futures.
#[derive(Debug, Parser)]
#[command(name = "binance-futures-cli", version, about, long_about = None)]
pub struct Cli {
    /// Binance API key
    #[arg(long, env = "BINANCE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Binance API secret
    #[arg(long, env = "BINANCE_API_SECRET", hide_env_values = true)]
    pub api_secret: String,

    /// Use the production venue instead of the testnet
    #[arg(long)]
    pub mainnet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Place a market order
    Market {
        /// Trading pair symbol (e.g., BTCUSDT)
        symbol: Symbol,
        /// Order side (BUY or SELL)
        side: OrderSide,
        /// Order quantity
        quantity: Decimal,
    },
    /// Place a limit order
    Limit {
        /// Trading pair symbol (e.g., BTCUSDT)
        symbol: Symbol,
        /// Order side (BUY or SELL)
        side: OrderSide,
        /// Order quantity
        quantity: Decimal,
        /// Limit price
        price: Decimal,
    },
    /// Place a stop-limit order
    StopLimit {
        /// Trading pair symbol (e.g., BTCUSDT)
        symbol: Symbol,
        /// Order side (BUY or SELL)
        side: OrderSide,
        /// Order quantity
        quantity: Decimal,
        /// Limit price
        price: Decimal,
        /// Stop trigger price
        stop_price: Decimal,
    },
    /// Place a one-cancels-other order pair
    Oco {
        /// Trading pair symbol (e.g., BTCUSDT)
        symbol: Symbol,
        /// Order side (BUY or SELL)
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
    /// Display account balances, positions, and open orders
    Account,
    /// Get the status of an order
    Status {
        /// Trading pair symbol
        symbol: Symbol,
        /// Venue order ID
        order_id: OrderId,
    },
    /// Cancel a working order
    Cancel {
        /// Trading pair symbol
        symbol: Symbol,
        /// Venue order ID
        order_id: OrderId,
    },
    /// Start interactive mode
    Interactive,
}

/// Execute the parsed command line: connect, dispatch one command, return.
pub async fn run(cli: Cli) -> Result<()> {
    let environment = if cli.mainnet {
        Environment::Mainnet
    } else {
        Environment::Testnet
    };

    let credentials = Credentials::new(cli.api_key, cli.api_secret);
    let client = FuturesClient::new(credentials, environment, ClientConfig::default())?;

    tracing::info!(%environment, "connecting to Binance Futures");
    // Connection check up front so credential problems surface before any
    // command work.
    client.account().info().await?;
    tracing::info!("authenticated with the exchange");

    let dispatcher = Dispatcher::new(&client);

    match cli.command {
        Command::Market {
            symbol,
            side,
            quantity,
        } => {
            let ack = dispatcher
                .submit(OrderRequest::Market {
                    symbol,
                    side,
                    quantity,
                })
                .await?;
            print_placed("Market order placed successfully!", &ack);
        }
        Command::Limit {
            symbol,
            side,
            quantity,
            price,
        } => {
            let ack = dispatcher
                .submit(OrderRequest::Limit {
                    symbol,
                    side,
                    quantity,
                    price,
                })
                .await?;
            print_placed("Limit order placed successfully!", &ack);
        }
        Command::StopLimit {
            symbol,
            side,
            quantity,
            price,
            stop_price,
        } => {
            let ack = dispatcher
                .submit(OrderRequest::StopLimit {
                    symbol,
                    side,
                    quantity,
                    price,
                    stop_price,
                })
                .await?;
            print_placed("Stop-limit order placed successfully!", &ack);
        }
        Command::Oco {
            symbol,
            side,
            quantity,
            price,
            stop_price,
            stop_limit_price,
        } => {
            let ack = dispatcher
                .submit(OrderRequest::Oco {
                    symbol,
                    side,
                    quantity,
                    price,
                    stop_price,
                    stop_limit_price,
                })
                .await?;
            print_placed("OCO order placed successfully!", &ack);
        }
        Command::Account => {
            let summary = dispatcher.account_summary().await?;
            println!("{}", summary.render());
        }
        Command::Status { symbol, order_id } => {
            let ack = dispatcher.order_status(&symbol, order_id).await?;
            println!("{}", style("Order Status:").cyan());
            println!("{}", render_order_detail(&ack));
        }
        Command::Cancel { symbol, order_id } => {
            let ack = dispatcher.cancel(&symbol, order_id).await?;
            println!("{}", style("Order cancelled successfully!").green());
            println!("{}", style(format!("Order ID: {}", ack.order_id)).cyan());
        }
        Command::Interactive => {
            let mut source = prompt::StdinLineSource::new();
            let mut stdout = std::io::stdout();
            interactive::run(&dispatcher, &mut source, &mut stdout).await?;
        }
    }

    Ok(())
}

fn print_placed(headline: &str, ack: &OrderAck) {
    println!("{}", style(headline).green());
    println!("{}", style(format!("Order ID: {}", ack.order_id)).cyan());
    println!("{}", style(format!("Status: {}", ack.status)).cyan());
}
