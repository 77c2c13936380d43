//! Side, order type, time-in-force, and account enums

use serde::{Deserialize, Serialize};

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Returns the side name as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type
///
/// KuCoin spot supports `limit` and `market` at the order endpoints; stop
/// and OCO behavior is expressed through dedicated endpoints rather than
/// extra order types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
}

impl OrderType {
    /// Returns the type name as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Market => "market",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time in force for limit orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till cancelled (default)
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Good till time
    #[serde(rename = "GTT")]
    GoodTillTime,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    /// Fill or kill
    #[serde(rename = "FOK")]
    FillOrKill,
}

impl TimeInForce {
    /// Returns the API spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoodTillCancelled => "GTC",
            Self::GoodTillTime => "GTT",
            Self::ImmediateOrCancel => "IOC",
            Self::FillOrKill => "FOK",
        }
    }
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trade context for an order or fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    /// Spot trading
    #[serde(rename = "TRADE")]
    Trade,
    /// Cross margin trading
    #[serde(rename = "MARGIN_TRADE")]
    MarginTrade,
    /// Isolated margin trading
    #[serde(rename = "MARGIN_ISOLATED_TRADE")]
    MarginIsolatedTrade,
}

impl TradeType {
    /// Returns the API spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trade => "TRADE",
            Self::MarginTrade => "MARGIN_TRADE",
            Self::MarginIsolatedTrade => "MARGIN_ISOLATED_TRADE",
        }
    }
}

/// Margin collateral scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginMode {
    /// Cross margin, collateral shared across positions
    Cross,
    /// Isolated margin, collateral per trading pair
    Isolated,
}

impl MarginMode {
    /// Returns the API spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::Isolated => "isolated",
        }
    }
}

/// Account ledger type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Funding (main) account
    Main,
    /// Spot trading account
    Trade,
    /// High-frequency trading account
    #[serde(rename = "trade_hf")]
    TradeHf,
    /// Cross margin account
    Margin,
    /// Isolated margin account
    Isolated,
    /// Futures account
    Contract,
}

impl AccountType {
    /// Returns the API spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Trade => "trade",
            Self::TradeHf => "trade_hf",
            Self::Margin => "margin",
            Self::Isolated => "isolated",
            Self::Contract => "contract",
        }
    }
}

/// Price basis for stop order triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StopPriceType {
    /// Trigger on trade price
    Tp,
    /// Trigger on index price
    Ip,
    /// Trigger on mark price
    Mp,
}

/// Order lifecycle status as reported by query endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Resting on the book (HF order surface)
    Open,
    /// Fully filled or cancelled
    Done,
    /// Active (regular order surface)
    Active,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&OrderSide::Buy).unwrap(), "\"buy\"");
        assert_eq!(OrderSide::Sell.opposite(), OrderSide::Buy);
    }

    #[test]
    fn test_time_in_force_spelling() {
        assert_eq!(serde_json::to_string(&TimeInForce::FillOrKill).unwrap(), "\"FOK\"");
        let tif: TimeInForce = serde_json::from_str("\"GTT\"").unwrap();
        assert_eq!(tif, TimeInForce::GoodTillTime);
    }

    #[test]
    fn test_trade_type_spelling() {
        assert_eq!(TradeType::MarginIsolatedTrade.as_str(), "MARGIN_ISOLATED_TRADE");
        let t: TradeType = serde_json::from_str("\"TRADE\"").unwrap();
        assert_eq!(t, TradeType::Trade);
    }

    #[test]
    fn test_account_type_hf_rename() {
        assert_eq!(serde_json::to_string(&AccountType::TradeHf).unwrap(), "\"trade_hf\"");
    }
}
