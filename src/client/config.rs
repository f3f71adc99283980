//! Client configuration and credentials.

use std::time::Duration;

use secrecy::SecretString;

/// API credentials for signed requests.
///
/// The secret is held in a [`SecretString`] so it is never printed by
/// `Debug` output or log formatting.
#[derive(Clone)]
pub struct Credentials {
    /// API key, sent in the `X-MBX-APIKEY` header
    pub api_key: String,
    /// API secret, used only to sign query strings
    pub api_secret: SecretString,
}

impl Credentials {
    /// Create credentials from raw key material.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::new(api_secret.into()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the futures client.
///
/// # Example
///
/// ```
/// use binance_futures_cli::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(10))
///     .with_recv_window(10_000);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// `recvWindow` in milliseconds for signed requests
    pub recv_window: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("binance-futures-cli/{} (Rust)", env!("CARGO_PKG_VERSION")),
            recv_window: 5_000,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `recvWindow` for signed requests.
    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.recv_window, 5_000);
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_recv_window(10_000)
            .with_user_agent("test/1.0");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.recv_window, 10_000);
        assert_eq!(config.user_agent, "test/1.0");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("key-id", "super-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("key-id"));
        assert!(!debug.contains("super-secret"));
    }
}
