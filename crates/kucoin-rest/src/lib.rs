//! REST API client for the KuCoin cryptocurrency exchange
//!
//! This crate exposes KuCoin's documented REST endpoints as typed async
//! methods, organized the way the exchange documents them:
//!
//! - **Market data**: symbols, tickers, orderbooks, klines, trade history
//! - **Account**: balances, ledgers, sub-accounts, sub-account API keys
//! - **Funding**: deposits, withdrawals, transfers, fees
//! - **Trading**: regular, stop, and OCO orders plus fills
//! - **HF trading**: the low-latency high-frequency order surface
//! - **Margin**: cross/isolated margin orders, borrow/repay, lending
//! - **Earn**: savings/staking products, subscriptions, redemptions
//! - **WebSocket bootstrap**: bullet-public / bullet-private tokens
//!
//! plus a [`FuturesClient`] for the futures API's core surface.
//!
//! # Authentication
//!
//! Private endpoints require API credentials (key, secret, passphrase).
//! Every private request is HMAC-SHA256 signed per KuCoin's KC-API v2
//! scheme; see the `kucoin-auth` crate.
//!
//! # Example
//!
//! ```no_run
//! use kucoin_rest::{Credentials, SpotClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = SpotClient::new();
//!     let ticker = client.get_ticker("BTC-USDT").await?;
//!     println!("BTC-USDT: {:?}", ticker);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = SpotClient::with_credentials(creds);
//!     let balances = auth_client.get_balances(None).await?;
//!     println!("Balances: {:?}", balances);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate limiting
//!
//! The client does not throttle on its own; 429 responses surface as
//! [`RestError::RateLimited`]. Use `kucoin_types::RateLimitConfig` for
//! client-side weight budgeting.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, FuturesClient, SpotClient};
pub use error::{RestError, RestResult};
pub use kucoin_auth::Credentials;

// Re-export shared wire types
pub use types::{
    ApiResponse, ClockDrift, OrderIdResponse, Paginated, Ticker, WsConnectionInfo,
};
