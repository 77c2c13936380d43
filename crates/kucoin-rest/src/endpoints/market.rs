//! Public market data endpoints
//!
//! All calls here are unauthenticated except [`MarketEndpoints::get_full_orderbook`],
//! which KuCoin gates behind a signed request.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::transport::RestTransport;
use crate::types::{Paginated, Ticker};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    transport: &'a RestTransport,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(transport: &'a RestTransport) -> Self {
        Self { transport }
    }

    /// Get server time (milliseconds)
    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> RestResult<u64> {
        debug!("Fetching server time");
        self.transport.get("/api/v1/timestamp", None::<&()>).await
    }

    /// Get service status
    #[instrument(skip(self))]
    pub async fn get_service_status(&self) -> RestResult<ServiceStatus> {
        debug!("Fetching service status");
        self.transport.get("/api/v1/status", None::<&()>).await
    }

    /// Get exchange announcements
    ///
    /// # Arguments
    /// * `ann_type` - Filter by type (e.g., "latest-announcements", "new-listings")
    /// * `lang` - Language code (e.g., "en_US")
    #[instrument(skip(self))]
    pub async fn get_announcements(
        &self,
        ann_type: Option<&str>,
        lang: Option<&str>,
        current_page: Option<u32>,
        page_size: Option<u32>,
    ) -> RestResult<Paginated<serde_json::Value>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            ann_type: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            lang: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            current_page: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            page_size: Option<u32>,
        }

        debug!("Fetching announcements");
        self.transport
            .get(
                "/api/v3/announcements",
                Some(&Query { ann_type, lang, current_page, page_size }),
            )
            .await
    }

    /// Get the full currency list
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Vec<CurrencyInfo>> {
        debug!("Fetching currency list");
        self.transport.get("/api/v3/currencies", None::<&()>).await
    }

    /// Get detail for a single currency
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "BTC")
    /// * `chain` - Optional chain name to narrow the chain list
    #[instrument(skip(self))]
    pub async fn get_currency(
        &self,
        currency: &str,
        chain: Option<&str>,
    ) -> RestResult<CurrencyInfo> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            chain: Option<&'q str>,
        }

        debug!("Fetching currency {}", currency);
        self.transport
            .get(
                &format!("/api/v3/currencies/{currency}"),
                Some(&Query { chain }),
            )
            .await
    }

    /// Get the tradable symbol list
    ///
    /// # Arguments
    /// * `market` - Optional market filter (e.g., "USDS", "BTC")
    #[instrument(skip(self))]
    pub async fn get_symbols(&self, market: Option<&str>) -> RestResult<Vec<SymbolInfo>> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            market: Option<&'q str>,
        }

        debug!("Fetching symbol list");
        self.transport
            .get("/api/v2/symbols", Some(&Query { market }))
            .await
    }

    /// Get detail for a single symbol
    #[instrument(skip(self))]
    pub async fn get_symbol(&self, symbol: &str) -> RestResult<SymbolInfo> {
        debug!("Fetching symbol {}", symbol);
        self.transport
            .get(&format!("/api/v2/symbols/{symbol}"), None::<&()>)
            .await
    }

    /// Get the level-1 ticker (best bid/offer) for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol (e.g., "BTC-USDT")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<Ticker> {
        #[derive(Serialize)]
        struct Query<'q> {
            symbol: &'q str,
        }

        debug!("Fetching ticker for {}", symbol);
        self.transport
            .get("/api/v1/market/orderbook/level1", Some(&Query { symbol }))
            .await
    }

    /// Get tickers for all trading symbols
    #[instrument(skip(self))]
    pub async fn get_all_tickers(&self) -> RestResult<AllTickers> {
        debug!("Fetching all tickers");
        self.transport
            .get("/api/v1/market/allTickers", None::<&()>)
            .await
    }

    /// Get 24-hour statistics for a symbol
    #[instrument(skip(self))]
    pub async fn get_24h_stats(&self, symbol: &str) -> RestResult<Stats24h> {
        #[derive(Serialize)]
        struct Query<'q> {
            symbol: &'q str,
        }

        debug!("Fetching 24h stats for {}", symbol);
        self.transport
            .get("/api/v1/market/stats", Some(&Query { symbol }))
            .await
    }

    /// Get the list of markets (quote currencies)
    #[instrument(skip(self))]
    pub async fn get_markets(&self) -> RestResult<Vec<String>> {
        debug!("Fetching market list");
        self.transport.get("/api/v1/markets", None::<&()>).await
    }

    /// Get a partial orderbook snapshot (top 20 or 100 levels)
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol
    /// * `depth` - Snapshot depth, 20 or 100 levels
    #[instrument(skip(self))]
    pub async fn get_orderbook(
        &self,
        symbol: &str,
        depth: OrderbookDepth,
    ) -> RestResult<Orderbook> {
        #[derive(Serialize)]
        struct Query<'q> {
            symbol: &'q str,
        }

        let path = match depth {
            OrderbookDepth::Top20 => "/api/v1/market/orderbook/level2_20",
            OrderbookDepth::Top100 => "/api/v1/market/orderbook/level2_100",
        };

        debug!("Fetching orderbook for {}", symbol);
        self.transport.get(path, Some(&Query { symbol })).await
    }

    /// Get the full orderbook snapshot (signed request)
    ///
    /// Unlike the partial snapshots this endpoint requires credentials.
    #[instrument(skip(self))]
    pub async fn get_full_orderbook(&self, symbol: &str) -> RestResult<Orderbook> {
        #[derive(Serialize)]
        struct Query<'q> {
            symbol: &'q str,
        }

        debug!("Fetching full orderbook for {}", symbol);
        self.transport
            .get_private("/api/v3/market/orderbook/level2", Some(&Query { symbol }))
            .await
    }

    /// Get the most recent trades for a symbol
    #[instrument(skip(self))]
    pub async fn get_trade_histories(&self, symbol: &str) -> RestResult<Vec<TradeHistory>> {
        #[derive(Serialize)]
        struct Query<'q> {
            symbol: &'q str,
        }

        debug!("Fetching trade histories for {}", symbol);
        self.transport
            .get("/api/v1/market/histories", Some(&Query { symbol }))
            .await
    }

    /// Get klines (candles) for a symbol
    ///
    /// Each candle is `[time, open, close, high, low, volume, turnover]`
    /// as strings, oldest last.
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol
    /// * `interval` - Candle interval (e.g., "1min", "1hour", "1day")
    /// * `start_at` - Start time in seconds (optional)
    /// * `end_at` - End time in seconds (optional)
    #[instrument(skip(self))]
    pub async fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        start_at: Option<u64>,
        end_at: Option<u64>,
    ) -> RestResult<Vec<Kline>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            symbol: &'q str,
            #[serde(rename = "type")]
            interval: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            start_at: Option<u64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            end_at: Option<u64>,
        }

        debug!("Fetching {} klines for {}", interval, symbol);
        self.transport
            .get(
                "/api/v1/market/candles",
                Some(&Query { symbol, interval, start_at, end_at }),
            )
            .await
    }

    /// Get fiat prices for listed currencies
    ///
    /// # Arguments
    /// * `base` - Fiat currency to quote in (e.g., "USD", defaults server-side)
    /// * `currencies` - Comma-separated currency filter (optional)
    #[instrument(skip(self))]
    pub async fn get_fiat_prices(
        &self,
        base: Option<&str>,
        currencies: Option<&str>,
    ) -> RestResult<HashMap<String, String>> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            base: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            currencies: Option<&'q str>,
        }

        debug!("Fetching fiat prices");
        self.transport
            .get("/api/v1/prices", Some(&Query { base, currencies }))
            .await
    }
}

// Response types specific to market endpoints

use serde::Deserialize;

/// Orderbook snapshot depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderbookDepth {
    /// Top 20 levels per side
    Top20,
    /// Top 100 levels per side
    Top100,
}

/// Service status response
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatus {
    /// "open", "close", or "cancelonly"
    pub status: String,
    /// Operator remark
    pub msg: Option<String>,
}

/// Currency detail including per-chain deposit/withdrawal state
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// Unique currency code
    pub currency: String,
    /// Display name
    pub name: String,
    /// Full name
    pub full_name: String,
    /// Display precision
    pub precision: u32,
    /// Whether the currency has margin support
    pub is_margin_enabled: bool,
    /// Whether the currency is tradable
    pub is_debit_enabled: bool,
    /// Supported chains
    #[serde(default)]
    pub chains: Vec<ChainInfo>,
}

/// One supported chain for a currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    /// Chain name (e.g., "ERC20")
    pub chain_name: String,
    /// Chain identifier used in API parameters
    pub chain_id: String,
    /// Minimum withdrawal amount
    pub withdrawal_min_size: Option<String>,
    /// Withdrawal fee
    pub withdrawal_min_fee: Option<String>,
    /// Whether deposits are open
    pub is_deposit_enabled: bool,
    /// Whether withdrawals are open
    pub is_withdraw_enabled: bool,
    /// Confirmations required to credit a deposit
    pub confirms: Option<u32>,
}

/// Symbol (trading pair) configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Unique symbol code (e.g., "BTC-USDT")
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Base currency
    pub base_currency: String,
    /// Quote currency
    pub quote_currency: String,
    /// Market the symbol trades in
    pub market: String,
    /// Minimum order size in base currency
    pub base_min_size: String,
    /// Maximum order size in base currency
    pub base_max_size: String,
    /// Base currency quantity increment
    pub base_increment: String,
    /// Quote currency price increment
    pub price_increment: String,
    /// Currency fees are charged in
    pub fee_currency: String,
    /// Whether margin trading is available
    pub is_margin_enabled: bool,
    /// Whether the symbol is currently tradable
    pub enable_trading: bool,
}

/// Snapshot of every symbol's ticker
#[derive(Debug, Clone, Deserialize)]
pub struct AllTickers {
    /// Snapshot time (milliseconds)
    pub time: u64,
    /// Per-symbol tickers
    pub ticker: Vec<TickerSnapshot>,
}

/// One symbol's entry in the all-tickers snapshot
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerSnapshot {
    /// Symbol code
    pub symbol: String,
    /// Best bid price
    pub buy: Option<String>,
    /// Best ask price
    pub sell: Option<String>,
    /// 24h change rate
    pub change_rate: Option<String>,
    /// 24h change price
    pub change_price: Option<String>,
    /// 24h high
    pub high: Option<String>,
    /// 24h low
    pub low: Option<String>,
    /// 24h volume in base currency
    pub vol: Option<String>,
    /// 24h volume in quote currency
    pub vol_value: Option<String>,
    /// Last traded price
    pub last: Option<String>,
}

/// 24-hour market statistics
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats24h {
    /// Symbol code
    pub symbol: String,
    /// Snapshot time (milliseconds)
    pub time: u64,
    /// Best bid
    pub buy: Option<String>,
    /// Best ask
    pub sell: Option<String>,
    /// 24h change rate
    pub change_rate: Option<String>,
    /// 24h change price
    pub change_price: Option<String>,
    /// 24h high
    pub high: Option<String>,
    /// 24h low
    pub low: Option<String>,
    /// 24h volume in base currency
    pub vol: Option<String>,
    /// 24h volume in quote currency
    pub vol_value: Option<String>,
    /// Last traded price
    pub last: Option<String>,
    /// 24h average price
    pub average_price: Option<String>,
}

/// Orderbook snapshot
///
/// Each level is `[price, size]` as strings; bids descend, asks ascend.
#[derive(Debug, Clone, Deserialize)]
pub struct Orderbook {
    /// Update sequence
    pub sequence: String,
    /// Snapshot time (milliseconds)
    pub time: u64,
    /// Bid levels, best first
    pub bids: Vec<[String; 2]>,
    /// Ask levels, best first
    pub asks: Vec<[String; 2]>,
}

/// One public trade
#[derive(Debug, Clone, Deserialize)]
pub struct TradeHistory {
    /// Trade sequence
    pub sequence: String,
    /// Traded price
    pub price: String,
    /// Traded size
    pub size: String,
    /// Taker side ("buy" or "sell")
    pub side: String,
    /// Trade time (nanoseconds)
    pub time: u64,
}

/// One candle: `[time, open, close, high, low, volume, turnover]`
pub type Kline = Vec<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_info_parsing() {
        let raw = r#"{
            "symbol":"BTC-USDT",
            "name":"BTC-USDT",
            "baseCurrency":"BTC",
            "quoteCurrency":"USDT",
            "market":"USDS",
            "baseMinSize":"0.00001",
            "baseMaxSize":"10000000000",
            "baseIncrement":"0.00000001",
            "priceIncrement":"0.1",
            "feeCurrency":"USDT",
            "isMarginEnabled":true,
            "enableTrading":true
        }"#;
        let info: SymbolInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.base_currency, "BTC");
        assert_eq!(info.quote_currency, "USDT");
        assert!(info.enable_trading);
    }

    #[test]
    fn test_orderbook_parsing() {
        let raw = r#"{
            "sequence":"3262786978",
            "time":1550653727731,
            "bids":[["6500.12","0.45054140"],["6500.11","0.45054140"]],
            "asks":[["6500.16","0.57753524"],["6500.15","0.57753524"]]
        }"#;
        let book: Orderbook = serde_json::from_str(raw).unwrap();
        assert_eq!(book.bids.len(), 2);
        assert_eq!(book.bids[0][0], "6500.12");
    }

    #[test]
    fn test_currency_without_chains() {
        let raw = r#"{
            "currency":"BTC",
            "name":"BTC",
            "fullName":"Bitcoin",
            "precision":8,
            "isMarginEnabled":true,
            "isDebitEnabled":true
        }"#;
        let info: CurrencyInfo = serde_json::from_str(raw).unwrap();
        assert!(info.chains.is_empty());
    }

    #[test]
    fn test_trade_history_parsing() {
        let raw = r#"{
            "sequence":"1545896668571",
            "price":"0.07",
            "size":"0.004",
            "side":"buy",
            "time":1545904567062140823
        }"#;
        let trade: TradeHistory = serde_json::from_str(raw).unwrap();
        assert_eq!(trade.side, "buy");
    }
}
