//! Trading pair symbols (BTC-USDT format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading pair symbol in KuCoin's `BASE-QUOTE` format
///
/// KuCoin separates base and quote with a dash: `BTC-USDT`, `ETH-BTC`.
/// Futures contracts use a single token (`XBTUSDTM`) and are passed as
/// plain strings, not through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// BTC-USDT trading pair
    pub const BTC_USDT: &'static str = "BTC-USDT";
    /// ETH-USDT trading pair
    pub const ETH_USDT: &'static str = "ETH-USDT";
    /// KCS-USDT trading pair
    pub const KCS_USDT: &'static str = "KCS-USDT";
    /// ETH-BTC trading pair
    pub const ETH_BTC: &'static str = "ETH-BTC";

    /// Create a new symbol from a string without validation
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the base currency (e.g., "BTC" from "BTC-USDT")
    pub fn base(&self) -> Option<&str> {
        self.0.split('-').next()
    }

    /// Get the quote currency (e.g., "USDT" from "BTC-USDT")
    pub fn quote(&self) -> Option<&str> {
        self.0.split('-').nth(1)
    }
}

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains('-') {
            return Err(SymbolParseError::MissingDash(s.to_string()));
        }

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(SymbolParseError::InvalidFormat(s.to_string()));
        }

        if parts[0].is_empty() || parts[1].is_empty() {
            return Err(SymbolParseError::EmptyPart(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors from strict symbol parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolParseError {
    /// No dash separator found
    #[error("symbol '{0}' is missing the '-' separator")]
    MissingDash(String),
    /// More than one dash or otherwise malformed
    #[error("symbol '{0}' is not in BASE-QUOTE format")]
    InvalidFormat(String),
    /// Base or quote part is empty
    #[error("symbol '{0}' has an empty base or quote")]
    EmptyPart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_symbol() {
        let sym: Symbol = "BTC-USDT".parse().unwrap();
        assert_eq!(sym.base(), Some("BTC"));
        assert_eq!(sym.quote(), Some("USDT"));
        assert_eq!(sym.as_str(), "BTC-USDT");
    }

    #[test]
    fn test_parse_rejects_missing_dash() {
        let err = "BTCUSDT".parse::<Symbol>().unwrap_err();
        assert!(matches!(err, SymbolParseError::MissingDash(_)));
    }

    #[test]
    fn test_parse_rejects_extra_dash() {
        let err = "BTC-USDT-M".parse::<Symbol>().unwrap_err();
        assert!(matches!(err, SymbolParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_rejects_empty_part() {
        let err = "BTC-".parse::<Symbol>().unwrap_err();
        assert!(matches!(err, SymbolParseError::EmptyPart(_)));
    }

    #[test]
    fn test_serde_transparent() {
        let sym = Symbol::new("ETH-BTC");
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"ETH-BTC\"");

        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sym);
    }
}
