//! HTTP transport for the Binance Futures REST API.
//!
//! A single `reqwest::Client` is shared across all services for connection
//! pooling. Authenticated endpoints get `timestamp` and `recvWindow`
//! appended and the whole query string HMAC-signed; the API key travels in
//! the `X-MBX-APIKEY` header.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{AccountService, MarketService, OrdersService};
use crate::models::Environment;
use crate::{Error, Result};

use super::config::{ClientConfig, Credentials};
use super::sign::sign_query;

/// The main client for the Binance Futures REST API.
///
/// Access API domains through the service accessors. Cloning is cheap;
/// all clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use binance_futures_cli::{ClientConfig, Credentials, Environment, FuturesClient};
///
/// # async fn example() -> binance_futures_cli::Result<()> {
/// let client = FuturesClient::new(
///     Credentials::new("api-key", "api-secret"),
///     Environment::Testnet,
///     ClientConfig::default(),
/// )?;
///
/// let account = client.account().info().await?;
/// println!("wallet balance: {}", account.total_wallet_balance);
/// # Ok(())
/// # }
/// ```
pub struct FuturesClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
    pub(crate) base_url: String,
}

impl FuturesClient {
    /// Create a new client for the given environment.
    pub fn new(
        credentials: Credentials,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                config,
                base_url: environment.rest_base_url().to_string(),
            }),
        })
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the market metadata service.
    pub fn market(&self) -> MarketService {
        MarketService::new(self.inner.clone())
    }
}

impl Clone for FuturesClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for FuturesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuturesClient")
            .field("base_url", &self.inner.base_url)
            .field("config", &self.inner.config)
            .finish()
    }
}

impl ClientInner {
    /// Make an unauthenticated GET request (public market data endpoints).
    pub(crate) async fn public_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(path, "public GET request");
        let response = self.http.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a signed GET request.
    pub(crate) async fn signed_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T> {
        self.signed_request(reqwest::Method::GET, path, query).await
    }

    /// Make a signed POST request. Binance takes order parameters in the
    /// query string, not the body.
    pub(crate) async fn signed_post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T> {
        self.signed_request(reqwest::Method::POST, path, query).await
    }

    /// Make a signed DELETE request.
    pub(crate) async fn signed_delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T> {
        self.signed_request(reqwest::Method::DELETE, path, query)
            .await
    }

    async fn signed_request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        query: &str,
    ) -> Result<T> {
        let signed = self.build_signed_query(query);
        let url = format!("{}{}?{}", self.base_url, path, signed);

        debug!(%method, path, "signed request");

        let response = self
            .http
            .request(method, &url)
            .header("X-MBX-APIKEY", &self.credentials.api_key)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Append `timestamp`/`recvWindow` and the HMAC signature to a query.
    fn build_signed_query(&self, query: &str) -> String {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let query = if query.is_empty() {
            format!("recvWindow={}&timestamp={}", self.config.recv_window, timestamp)
        } else {
            format!(
                "{}&recvWindow={}&timestamp={}",
                query, self.config.recv_window, timestamp
            )
        };
        let signature = sign_query(&self.credentials.api_secret, &query);
        format!("{query}&signature={signature}")
    }

    /// Parse a response, mapping venue error bodies to [`Error::Api`].
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        // Binance error bodies are `{"code": -2010, "msg": "..."}`.
        #[derive(serde::Deserialize)]
        struct ApiError {
            code: i64,
            msg: String,
        }

        match serde_json::from_str::<ApiError>(&body) {
            Ok(err) => Err(Error::Api {
                code: err.code,
                message: err.msg,
            }),
            Err(_) => Err(Error::Api {
                code: status.as_u16() as i64,
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            }),
        }
    }
}
