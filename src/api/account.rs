//! Account service: balances and positions.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{AccountInfo, Position};
use crate::Result;

/// Service for account state queries.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: binance_futures_cli::FuturesClient)
/// #     -> binance_futures_cli::Result<()> {
/// let account = client.account().info().await?;
/// println!("margin balance: {}", account.total_margin_balance);
///
/// for position in client.account().positions().await? {
///     println!("{}: {}", position.symbol, position.position_amt);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch account balances.
    pub async fn info(&self) -> Result<AccountInfo> {
        self.inner.signed_get("/fapi/v2/account", "").await
    }

    /// Fetch all positions, including flat ones.
    ///
    /// The venue reports an entry per symbol and position side; filtering
    /// out zero-size entries is the reporter's job, not the transport's.
    pub async fn positions(&self) -> Result<Vec<Position>> {
        self.inner.signed_get("/fapi/v2/positionRisk", "").await
    }
}
