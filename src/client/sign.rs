//! HMAC-SHA256 request signing.
//!
//! Binance signs the query string: `HMAC-SHA256(secret, query_string)`,
//! hex-encoded and appended as `&signature=...`. Uses `ring` for the HMAC;
//! the secret never appears in logs or error messages.

use ring::hmac;
use secrecy::{ExposeSecret, SecretString};

/// Sign a query string with the API secret.
pub(crate) fn sign_query(secret: &SecretString, query: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.expose_secret().as_bytes());
    let signature = hmac::sign(&key, query.as_bytes());
    hex::encode(signature.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[test]
    fn test_known_vector_from_api_docs() {
        // Signature example published in the Binance API documentation.
        let key = secret("NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j");
        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        assert_eq!(
            sign_query(&key, query),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let sig = sign_query(&secret("key"), "data");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn test_different_inputs_differ() {
        let key = secret("my_secret");
        assert_ne!(
            sign_query(&key, "symbol=BTCUSDT&timestamp=1000"),
            sign_query(&key, "symbol=ETHUSDT&timestamp=1000")
        );
        assert_ne!(
            sign_query(&secret("a"), "symbol=BTCUSDT"),
            sign_query(&secret("b"), "symbol=BTCUSDT")
        );
    }
}
