//! Interactive prompt mode.
//!
//! Line-oriented loop over the same command vocabulary as the batch CLI.
//! The loop never dies on a failed command: errors are printed and control
//! returns to the prompt. Only `quit`/`exit` (or end of input) leave.

use std::io::Write;

use console::style;

use crate::cli::dispatch::Dispatcher;
use crate::cli::prompt::{
    collect, LineSource, LIMIT_FIELDS, MARKET_FIELDS, OCO_FIELDS, ORDER_REF_FIELDS,
    STOP_LIMIT_FIELDS,
};
use crate::models::OrderRequest;
use crate::report::{render_open_orders, render_order_detail, render_positions};
use crate::{Error, Result};

const PROMPT: &str = "Bot> ";

/// Run the interactive loop until `quit`, `exit`, or end of input.
pub async fn run<S: LineSource, W: Write>(
    dispatcher: &Dispatcher<'_>,
    source: &mut S,
    out: &mut W,
) -> Result<()> {
    banner(out)?;

    loop {
        let line = match source.read_line(PROMPT).await {
            Ok(Some(line)) => line,
            // End of input behaves like quit
            Ok(None) => break,
            // Ctrl-c at the prompt just re-prompts; it only quits from the
            // top-level entry point
            Err(Error::Interrupted) => continue,
            Err(err) => return Err(err),
        };

        let command = line.trim().to_lowercase();
        if command.is_empty() {
            continue;
        }
        if command == "quit" || command == "exit" {
            writeln!(out, "{}", style("Goodbye!").yellow())?;
            break;
        }

        match execute(dispatcher, &command, source, out).await {
            Ok(()) => {}
            Err(Error::Interrupted) => {
                writeln!(out, "{}", style("Operation cancelled").yellow())?;
            }
            Err(err) => {
                writeln!(out, "{}", style(format!("Error: {err}")).red())?;
            }
        }
    }

    Ok(())
}

async fn execute<S: LineSource, W: Write>(
    dispatcher: &Dispatcher<'_>,
    command: &str,
    source: &mut S,
    out: &mut W,
) -> Result<()> {
    match command {
        "help" => help(out)?,
        "account" => {
            let summary = dispatcher.account_summary().await?;
            writeln!(out, "{}", summary.render())?;
        }
        "market" => {
            let params = collect(source, MARKET_FIELDS).await?;
            let ack = dispatcher
                .submit(OrderRequest::Market {
                    symbol: params.symbol()?,
                    side: params.side()?,
                    quantity: params.quantity()?,
                })
                .await?;
            writeln!(
                out,
                "{}",
                style(format!("Market order placed! ID: {}", ack.order_id)).green()
            )?;
        }
        "limit" => {
            let params = collect(source, LIMIT_FIELDS).await?;
            let ack = dispatcher
                .submit(OrderRequest::Limit {
                    symbol: params.symbol()?,
                    side: params.side()?,
                    quantity: params.quantity()?,
                    price: params.price()?,
                })
                .await?;
            writeln!(
                out,
                "{}",
                style(format!("Limit order placed! ID: {}", ack.order_id)).green()
            )?;
        }
        "stop-limit" => {
            let params = collect(source, STOP_LIMIT_FIELDS).await?;
            let ack = dispatcher
                .submit(OrderRequest::StopLimit {
                    symbol: params.symbol()?,
                    side: params.side()?,
                    quantity: params.quantity()?,
                    price: params.price()?,
                    stop_price: params.stop_price()?,
                })
                .await?;
            writeln!(
                out,
                "{}",
                style(format!("Stop-limit order placed! ID: {}", ack.order_id)).green()
            )?;
        }
        "oco" => {
            let params = collect(source, OCO_FIELDS).await?;
            let ack = dispatcher
                .submit(OrderRequest::Oco {
                    symbol: params.symbol()?,
                    side: params.side()?,
                    quantity: params.quantity()?,
                    price: params.price()?,
                    stop_price: params.stop_price()?,
                    stop_limit_price: params.stop_limit_price()?,
                })
                .await?;
            writeln!(
                out,
                "{}",
                style(format!("OCO order placed! ID: {}", ack.order_id)).green()
            )?;
        }
        "status" => {
            let params = collect(source, ORDER_REF_FIELDS).await?;
            let ack = dispatcher
                .order_status(&params.symbol()?, params.order_id()?)
                .await?;
            writeln!(out, "{}", render_order_detail(&ack))?;
        }
        "cancel" => {
            let params = collect(source, ORDER_REF_FIELDS).await?;
            let ack = dispatcher
                .cancel(&params.symbol()?, params.order_id()?)
                .await?;
            writeln!(
                out,
                "{}",
                style(format!("Order cancelled! ID: {}", ack.order_id)).green()
            )?;
        }
        "orders" => {
            let orders = dispatcher.open_orders().await?;
            writeln!(out, "{}", render_open_orders(&orders))?;
        }
        "positions" => {
            let positions = dispatcher.positions().await?;
            writeln!(out, "{}", render_positions(&positions))?;
        }
        unknown => {
            writeln!(out, "{}", style(format!("Unknown command: {unknown}")).red())?;
            writeln!(out, "{}", style("Type 'help' for available commands").yellow())?;
        }
    }
    Ok(())
}

fn banner<W: Write>(out: &mut W) -> Result<()> {
    let rule = "=".repeat(60);
    writeln!(out, "{}", style(&rule).cyan())?;
    writeln!(out, "{}", style("INTERACTIVE TRADING MODE").cyan().bold())?;
    writeln!(out, "{}", style(&rule).cyan())?;
    writeln!(
        out,
        "{}",
        style("Type 'help' for available commands or 'quit' to exit").yellow()
    )?;
    Ok(())
}

fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", style("Available commands:").cyan())?;
    writeln!(out, "  account     - Display account summary")?;
    writeln!(out, "  market      - Place market order")?;
    writeln!(out, "  limit       - Place limit order")?;
    writeln!(out, "  stop-limit  - Place stop-limit order")?;
    writeln!(out, "  oco         - Place OCO order")?;
    writeln!(out, "  status      - Get order status")?;
    writeln!(out, "  cancel      - Cancel order")?;
    writeln!(out, "  orders      - Show open orders")?;
    writeln!(out, "  positions   - Show positions")?;
    writeln!(out, "  help        - Show this help")?;
    writeln!(out, "  quit        - Exit interactive mode")?;
    Ok(())
}
