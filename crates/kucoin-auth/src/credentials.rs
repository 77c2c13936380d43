//! Authentication credentials for the KuCoin API
//!
//! Implements the KC-API v2 signing scheme required by private endpoints.
//!
//! # Security
//!
//! The API secret and passphrase are stored using the `secrecy` crate
//! which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;
use tracing::trace;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// API key version sent in `KC-API-KEY-VERSION`
///
/// Version 2 keys require the passphrase header to be HMAC-signed;
/// version 1 sent it in plaintext and is not supported here.
pub const KEY_VERSION: &str = "2";

/// API credentials for authenticated requests
///
/// The secret and passphrase are automatically zeroized when the
/// Credentials are dropped, preventing sensitive data from remaining in
/// memory.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    api_secret: SecretBox<String>,
    /// API passphrase chosen at key creation (zeroized on drop)
    passphrase: SecretBox<String>,
}

/// The five header values for one signed request
///
/// Produced by [`Credentials::sign_request`]; the timestamp embedded in
/// the signature is returned alongside it so both always agree.
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    /// `KC-API-KEY`
    pub api_key: String,
    /// `KC-API-SIGN`: base64 HMAC over `timestamp + method + path + body`
    pub signature: String,
    /// `KC-API-TIMESTAMP`: milliseconds, identical to the signed value
    pub timestamp: String,
    /// `KC-API-PASSPHRASE`: passphrase HMAC-signed with the secret
    pub passphrase: String,
    /// `KC-API-KEY-VERSION`
    pub key_version: &'static str,
}

impl Credentials {
    /// Create new credentials
    ///
    /// # Arguments
    /// * `api_key` - Your KuCoin API key
    /// * `api_secret` - The API secret shown once at key creation
    /// * `passphrase` - The passphrase you chose when creating the key
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretBox::new(Box::new(api_secret.into())),
            passphrase: SecretBox::new(Box::new(passphrase.into())),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `KUCOIN_API_KEY`, `KUCOIN_API_SECRET`, and
    /// `KUCOIN_API_PASSPHRASE` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("KUCOIN_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("KUCOIN_API_KEY".to_string()))?;
        let api_secret = std::env::var("KUCOIN_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("KUCOIN_API_SECRET".to_string()))?;
        let passphrase = std::env::var("KUCOIN_API_PASSPHRASE")
            .map_err(|_| AuthError::EnvVarNotSet("KUCOIN_API_PASSPHRASE".to_string()))?;

        Ok(Self::new(api_key, api_secret, passphrase))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Current millisecond timestamp as used in `KC-API-TIMESTAMP`
    pub fn timestamp_ms() -> String {
        chrono::Utc::now().timestamp_millis().to_string()
    }

    /// Sign a request with an explicit timestamp
    ///
    /// KuCoin signature algorithm:
    /// 1. prehash = timestamp + METHOD + path(with query string) + body
    /// 2. HMAC-SHA256(secret, prehash)
    /// 3. Base64 encode result
    ///
    /// # Arguments
    /// * `timestamp` - Millisecond timestamp, must match `KC-API-TIMESTAMP`
    /// * `method` - Uppercase HTTP verb ("GET", "POST", "DELETE")
    /// * `path` - Endpoint path including any query string
    /// * `body` - JSON body for POST requests, empty string otherwise
    pub fn sign(&self, timestamp: &str, method: &str, path: &str, body: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(timestamp.as_bytes());
        mac.update(method.as_bytes());
        mac.update(path.as_bytes());
        mac.update(body.as_bytes());

        BASE64.encode(mac.finalize().into_bytes())
    }

    /// Passphrase header value for version-2 keys
    ///
    /// The plaintext passphrase is HMAC-SHA256 signed with the API secret
    /// and base64 encoded.
    pub fn signed_passphrase(&self) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(self.passphrase.expose_secret().as_bytes());

        BASE64.encode(mac.finalize().into_bytes())
    }

    /// Produce the full header set for one request
    ///
    /// Generates a fresh timestamp, signs the request with it, and returns
    /// the timestamp together with the signature so the caller cannot send
    /// mismatched values.
    pub fn sign_request(&self, method: &str, path: &str, body: &str) -> SignedHeaders {
        let timestamp = Self::timestamp_ms();
        let signature = self.sign(&timestamp, method, path, body);
        trace!(%method, %path, %timestamp, "signed request");

        SignedHeaders {
            api_key: self.api_key.clone(),
            signature,
            timestamp,
            passphrase: self.signed_passphrase(),
            key_version: KEY_VERSION,
        }
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBoxes with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretBox::new(Box::new(self.api_secret.expose_secret().clone())),
            passphrase: SecretBox::new(Box::new(self.passphrase.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("api_secret", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_creds() -> Credentials {
        Credentials::new("test_api_key", "test_api_secret", "test_passphrase")
    }

    #[test]
    fn test_signing_is_deterministic() {
        let creds = test_creds();

        let sig1 = creds.sign("1616492376594", "GET", "/api/v1/accounts", "");
        let sig2 = creds.sign("1616492376594", "GET", "/api/v1/accounts", "");
        assert_eq!(sig1, sig2);

        // Signature is valid base64
        assert!(BASE64.decode(&sig1).is_ok());
    }

    #[test]
    fn test_signature_covers_all_inputs() {
        let creds = test_creds();
        let base = creds.sign("1616492376594", "GET", "/api/v1/accounts", "");

        assert_ne!(base, creds.sign("1616492376595", "GET", "/api/v1/accounts", ""));
        assert_ne!(base, creds.sign("1616492376594", "POST", "/api/v1/accounts", ""));
        assert_ne!(base, creds.sign("1616492376594", "GET", "/api/v1/orders", ""));
        assert_ne!(base, creds.sign("1616492376594", "GET", "/api/v1/accounts", "{}"));
    }

    #[test]
    fn test_query_string_changes_signature() {
        let creds = test_creds();
        let bare = creds.sign("1", "GET", "/api/v1/accounts", "");
        let with_query = creds.sign("1", "GET", "/api/v1/accounts?currency=BTC", "");
        assert_ne!(bare, with_query);
    }

    #[test]
    fn test_signed_passphrase_differs_from_plaintext() {
        let creds = test_creds();
        let signed = creds.signed_passphrase();
        assert_ne!(signed, "test_passphrase");
        assert!(BASE64.decode(&signed).is_ok());
    }

    #[test]
    fn test_sign_request_headers_agree() {
        let creds = test_creds();
        let headers = creds.sign_request("POST", "/api/v1/orders", "{\"symbol\":\"BTC-USDT\"}");

        // Re-signing with the returned timestamp must reproduce the signature
        let expected = creds.sign(&headers.timestamp, "POST", "/api/v1/orders", "{\"symbol\":\"BTC-USDT\"}");
        assert_eq!(headers.signature, expected);
        assert_eq!(headers.key_version, "2");
        assert_eq!(headers.api_key, "test_api_key");
    }

    #[test]
    fn test_timestamp_is_numeric_millis() {
        let ts = Credentials::timestamp_ms();
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
        assert!(ts.len() >= 13);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = test_creds();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_api_secret"));
        assert!(!debug.contains("test_passphrase"));
        assert!(debug.contains("[REDACTED]"));
    }
}
