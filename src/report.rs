//! Account summary projection and rendering.
//!
//! Projection (what to show) is separated from rendering (tables, colors)
//! so the display contract is testable without a terminal. Display
//! precision is fixed: 4 decimal places for currency amounts, 6 for
//! quantities.

use console::style;
use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{AccountInfo, OpenOrder, OrderAck, Position};

/// Format a currency amount with 4 decimal places.
pub fn fmt_currency(value: Decimal) -> String {
    format!("{:.4}", value.round_dp(4))
}

/// Format a quantity with 6 decimal places.
pub fn fmt_quantity(value: Decimal) -> String {
    format!("{:.6}", value.round_dp(6))
}

/// Format an order price, rendering the venue's zero sentinel as "Market".
pub fn fmt_price(value: Decimal) -> String {
    if value.is_zero() {
        "Market".to_string()
    } else {
        fmt_currency(value)
    }
}

/// One row of the active-positions table.
#[derive(Debug, PartialEq, Tabled)]
pub struct PositionRow {
    /// Trading pair
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    /// Position direction
    #[tabled(rename = "Side")]
    pub side: String,
    /// Position size
    #[tabled(rename = "Size")]
    pub size: String,
    /// Average entry price
    #[tabled(rename = "Entry Price")]
    pub entry_price: String,
    /// Current mark price
    #[tabled(rename = "Mark Price")]
    pub mark_price: String,
    /// Unrealized profit
    #[tabled(rename = "Unrealized PnL")]
    pub unrealized_pnl: String,
}

impl From<&Position> for PositionRow {
    fn from(position: &Position) -> Self {
        Self {
            symbol: position.symbol.clone(),
            side: position.position_side.to_string(),
            size: fmt_quantity(position.position_amt),
            entry_price: fmt_currency(position.entry_price),
            mark_price: fmt_currency(position.mark_price),
            unrealized_pnl: format!("{} USDT", fmt_currency(position.unrealized_profit)),
        }
    }
}

/// One row of the open-orders table.
#[derive(Debug, PartialEq, Tabled)]
pub struct OpenOrderRow {
    /// Trading pair
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    /// Order side
    #[tabled(rename = "Side")]
    pub side: String,
    /// Venue order type
    #[tabled(rename = "Type")]
    pub order_type: String,
    /// Requested quantity
    #[tabled(rename = "Quantity")]
    pub quantity: String,
    /// Limit price or "Market"
    #[tabled(rename = "Price")]
    pub price: String,
    /// Lifecycle status
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&OpenOrder> for OpenOrderRow {
    fn from(order: &OpenOrder) -> Self {
        Self {
            symbol: order.symbol.clone(),
            side: order.side.to_string(),
            order_type: order.order_type.to_string(),
            quantity: fmt_quantity(order.orig_qty),
            price: fmt_price(order.price),
            status: order.status.to_string(),
        }
    }
}

/// Normalized account summary: balances, active positions, open orders.
#[derive(Debug)]
pub struct AccountSummary {
    /// Total wallet balance
    pub total_wallet_balance: Decimal,
    /// Unrealized profit across positions
    pub total_unrealized_profit: Decimal,
    /// Wallet balance plus unrealized profit
    pub total_margin_balance: Decimal,
    /// Active positions only, venue ordering preserved
    pub positions: Vec<PositionRow>,
    /// Open orders, venue ordering preserved
    pub open_orders: Vec<OpenOrderRow>,
}

impl AccountSummary {
    /// Project already-fetched venue data into a display summary.
    ///
    /// Pure: no network calls. Zero-size positions are excluded; everything
    /// else is kept in the order the venue reported it.
    pub fn new(account: &AccountInfo, positions: &[Position], open_orders: &[OpenOrder]) -> Self {
        Self {
            total_wallet_balance: account.total_wallet_balance,
            total_unrealized_profit: account.total_unrealized_profit,
            total_margin_balance: account.total_margin_balance,
            positions: positions
                .iter()
                .filter(|p| p.is_open())
                .map(PositionRow::from)
                .collect(),
            open_orders: open_orders.iter().map(OpenOrderRow::from).collect(),
        }
    }

    /// Render the summary as styled text with table grids.
    pub fn render(&self) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();
        out.push_str(&format!("{}\n", style(&rule).cyan()));
        out.push_str(&format!("{}\n", style("ACCOUNT SUMMARY").cyan().bold()));
        out.push_str(&format!("{}\n", style(&rule).cyan()));
        out.push_str(&format!(
            "{}\n",
            style(format!(
                "Total Wallet Balance: {} USDT",
                fmt_currency(self.total_wallet_balance)
            ))
            .green()
        ));
        out.push_str(&format!(
            "{}\n",
            style(format!(
                "Total Unrealized PnL: {} USDT",
                fmt_currency(self.total_unrealized_profit)
            ))
            .yellow()
        ));
        out.push_str(&format!(
            "{}\n",
            style(format!(
                "Total Margin Balance: {} USDT",
                fmt_currency(self.total_margin_balance)
            ))
            .blue()
        ));

        if !self.positions.is_empty() {
            out.push_str(&format!("\n{}\n", style("ACTIVE POSITIONS:").cyan()));
            out.push_str(&render_table(&self.positions));
            out.push('\n');
        }

        if !self.open_orders.is_empty() {
            out.push_str(&format!("\n{}\n", style("OPEN ORDERS:").cyan()));
            out.push_str(&render_table(&self.open_orders));
            out.push('\n');
        }

        out.push_str(&format!("{}\n", style(&rule).cyan()));
        out
    }
}

fn render_table<T: Tabled>(rows: &[T]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::ascii());
    table.to_string()
}

/// Render a single order acknowledgement for the `status` command.
pub fn render_order_detail(ack: &OrderAck) -> String {
    let price = match ack.price {
        Some(price) => fmt_price(price),
        None => "Market".to_string(),
    };
    let quantity = ack
        .orig_qty
        .map(fmt_quantity)
        .unwrap_or_else(|| "-".to_string());
    format!(
        "ID: {}\nSymbol: {}\nSide: {}\nType: {}\nQuantity: {}\nPrice: {}\nStatus: {}",
        ack.order_id, ack.symbol, ack.side, ack.order_type, quantity, price, ack.status
    )
}

/// Render the open-orders listing for the interactive `orders` command.
pub fn render_open_orders(orders: &[OpenOrder]) -> String {
    if orders.is_empty() {
        return style("No open orders").yellow().to_string();
    }
    let rows: Vec<OpenOrderRow> = orders.iter().map(OpenOrderRow::from).collect();
    format!("{}\n{}", style("Open Orders:").cyan(), render_table(&rows))
}

/// Render the positions listing for the interactive `positions` command.
///
/// Zero-size positions are excluded, matching the account summary.
pub fn render_positions(positions: &[Position]) -> String {
    let rows: Vec<PositionRow> = positions
        .iter()
        .filter(|p| p.is_open())
        .map(PositionRow::from)
        .collect();
    if rows.is_empty() {
        return style("No active positions").yellow().to_string();
    }
    format!(
        "{}\n{}",
        style("Active Positions:").cyan(),
        render_table(&rows)
    )
}
