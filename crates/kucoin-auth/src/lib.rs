//! Credentials and request signing for the KuCoin API
//!
//! KuCoin authenticates private REST calls with five headers computed per
//! request: `KC-API-KEY`, `KC-API-SIGN`, `KC-API-TIMESTAMP`,
//! `KC-API-PASSPHRASE`, and `KC-API-KEY-VERSION`. This crate owns the
//! credential storage (secrets zeroized on drop) and the HMAC-SHA256
//! signing scheme; the REST transport attaches the resulting headers.
//!
//! # Example
//!
//! ```no_run
//! use kucoin_auth::Credentials;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     // Sign a GET request (empty body)
//!     let signed = creds.sign_request("GET", "/api/v1/accounts", "");
//!     println!("timestamp used: {}", signed.timestamp);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, SignedHeaders, KEY_VERSION};
pub use error::{AuthError, AuthResult};
