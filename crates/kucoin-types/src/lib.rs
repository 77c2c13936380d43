//! Core types shared across the KuCoin SDK crates
//!
//! This crate holds the exchange-wide vocabulary used by the REST client:
//!
//! - [`Symbol`]: trading pair identifiers in KuCoin's `BTC-USDT` format
//! - Order enums ([`OrderSide`], [`OrderType`], [`TimeInForce`], ...)
//! - [`error_codes`]: structured mapping of KuCoin's numeric API error
//!   codes to categories and recovery strategies
//! - [`rate_limit`]: client-side weight buckets for KuCoin's 30-second
//!   resource pools

pub mod enums;
pub mod error_codes;
pub mod rate_limit;
pub mod symbol;

pub use enums::*;
pub use error_codes::{ErrorCategory, KucoinApiError, RecoveryStrategy};
pub use rate_limit::{RateLimitConfig, RateLimitPool, WeightBucket, WeightBucketConfig};
pub use symbol::{Symbol, SymbolParseError};
