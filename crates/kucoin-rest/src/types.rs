//! Shared wire types for KuCoin REST requests and responses
//!
//! Endpoint-specific response shapes live at the bottom of their endpoint
//! module; this module holds the envelope and the types referenced from
//! more than one endpoint group.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{RestError, RestResult};

// ============================================================================
// API Response Envelope
// ============================================================================

/// Standard KuCoin API response envelope
///
/// Every endpoint wraps its payload as `{"code":"200000","data":...}` on
/// success, or `{"code":"...","msg":"..."}` on failure.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Status code string; "200000" means success
    pub code: String,
    /// Error message (present on failure)
    pub msg: Option<String>,
    /// Result payload (present on success)
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Check if the envelope carries the success code
    pub fn is_success(&self) -> bool {
        self.code == kucoin_types::KucoinApiError::SUCCESS_CODE
    }

    /// Unwrap the payload, converting a non-success code into an error
    pub fn into_result(self) -> RestResult<T> {
        if self.is_success() {
            self.data
                .ok_or_else(|| RestError::Parse("no data in success response".to_string()))
        } else {
            Err(RestError::from_api_code(
                &self.code,
                self.msg.as_deref().unwrap_or("unknown error"),
            ))
        }
    }

    /// Unwrap the payload, tolerating `"data": null` on success
    ///
    /// A handful of endpoints (order test calls, some cancellations)
    /// acknowledge with an empty data field.
    pub fn into_result_optional(self) -> RestResult<Option<T>> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(RestError::from_api_code(
                &self.code,
                self.msg.as_deref().unwrap_or("unknown error"),
            ))
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Standard KuCoin paginated list payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Page number (1-based)
    pub current_page: u32,
    /// Requested page size
    pub page_size: u32,
    /// Total number of items
    pub total_num: u64,
    /// Total number of pages
    pub total_page: u32,
    /// Items on this page
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    /// Whether further pages exist after this one
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_page
    }
}

// ============================================================================
// Shared Payloads
// ============================================================================

/// Response carrying only a server-assigned order ID
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIdResponse {
    /// The created order's ID
    pub order_id: String,
}

/// Level-1 ticker (best bid/offer) for a symbol
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Update sequence
    pub sequence: String,
    /// Last traded price
    pub price: String,
    /// Last traded size
    pub size: String,
    /// Best bid price
    pub best_bid: String,
    /// Best bid size
    pub best_bid_size: String,
    /// Best ask price
    pub best_ask: String,
    /// Best ask size
    pub best_ask_size: String,
    /// Snapshot time (milliseconds)
    pub time: u64,
}

impl Ticker {
    /// Best ask as a decimal
    pub fn ask_price(&self) -> Option<Decimal> {
        self.best_ask.parse().ok()
    }

    /// Best bid as a decimal
    pub fn bid_price(&self) -> Option<Decimal> {
        self.best_bid.parse().ok()
    }

    /// Last trade price as a decimal
    pub fn last_price(&self) -> Option<Decimal> {
        self.price.parse().ok()
    }

    /// Mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        Some((ask + bid) / Decimal::TWO)
    }

    /// Spread in basis points
    pub fn spread_bps(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        let mid = self.mid_price()?;
        Some((ask - bid) / mid * Decimal::from(10000))
    }
}

/// WebSocket bootstrap info returned by the bullet endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WsConnectionInfo {
    /// Connection token to append to the endpoint URL
    pub token: String,
    /// Candidate WebSocket servers
    pub instance_servers: Vec<WsInstanceServer>,
}

/// One candidate WebSocket server
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WsInstanceServer {
    /// WebSocket endpoint URL
    pub endpoint: String,
    /// Whether the endpoint uses TLS
    pub encrypt: bool,
    /// Transport protocol (always "websocket")
    pub protocol: String,
    /// Required ping interval (milliseconds)
    pub ping_interval: u64,
    /// Pong timeout (milliseconds)
    pub ping_timeout: u64,
}

/// Result of a clock-drift measurement against the exchange
///
/// Produced by `SpotClient::measure_clock_drift`. Signatures embed a
/// client timestamp the exchange validates against its own clock, so
/// large drift causes authentication failures (code 400002).
#[derive(Debug, Clone)]
pub struct ClockDrift {
    /// Client time when the response arrived (ms)
    pub local_time_ms: i64,
    /// Server-reported time (ms)
    pub server_time_ms: i64,
    /// Full request round trip (ms)
    pub round_trip_ms: i64,
    /// Estimated one-way latency (ms)
    pub one_way_latency_ms: i64,
    /// Server time minus local time, latency-adjusted (ms)
    pub drift_ms: i64,
}

impl ClockDrift {
    /// Drift beyond which signed requests risk rejection
    pub const ACCEPTABLE_DRIFT_MS: i64 = 500;

    /// Whether the measured drift is within the safe range
    pub fn is_acceptable(&self) -> bool {
        self.drift_ms.abs() <= Self::ACCEPTABLE_DRIFT_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let raw = r#"{"code":"200000","data":{"orderId":"5bd6e9286d99522a52e458de"}}"#;
        let resp: ApiResponse<OrderIdResponse> = serde_json::from_str(raw).unwrap();
        assert!(resp.is_success());

        let data = resp.into_result().unwrap();
        assert_eq!(data.order_id, "5bd6e9286d99522a52e458de");
    }

    #[test]
    fn test_error_envelope() {
        let raw = r#"{"code":"400100","msg":"Parameter error"}"#;
        let resp: ApiResponse<OrderIdResponse> = serde_json::from_str(raw).unwrap();
        assert!(!resp.is_success());

        let err = resp.into_result().unwrap_err();
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("400100"));
    }

    #[test]
    fn test_success_without_data_is_parse_error() {
        let raw = r#"{"code":"200000"}"#;
        let resp: ApiResponse<OrderIdResponse> = serde_json::from_str(raw).unwrap();
        assert!(matches!(resp.into_result(), Err(crate::RestError::Parse(_))));
    }

    #[test]
    fn test_optional_tolerates_null_data() {
        let raw = r#"{"code":"200000","data":null}"#;
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_result_optional().unwrap(), None);
    }

    #[test]
    fn test_paginated_has_more() {
        let raw = r#"{"currentPage":1,"pageSize":50,"totalNum":120,"totalPage":3,"items":[]}"#;
        let page: Paginated<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(page.has_more());
        assert_eq!(page.total_num, 120);
    }

    #[test]
    fn test_ticker_parsing() {
        let raw = r#"{
            "sequence":"1550467636704",
            "price":"0.03715005",
            "size":"0.17",
            "bestBid":"0.03715004",
            "bestBidSize":"3.803",
            "bestAsk":"0.03715005",
            "bestAskSize":"1.61",
            "time":1550653727731
        }"#;
        let ticker: Ticker = serde_json::from_str(raw).unwrap();
        assert!(ticker.bid_price().unwrap() < ticker.ask_price().unwrap());
        assert!(ticker.spread_bps().unwrap() > Decimal::ZERO);
    }

    #[test]
    fn test_ws_connection_info_parsing() {
        let raw = r#"{
            "token":"2neAiuYvAU61ZD",
            "instanceServers":[{
                "endpoint":"wss://ws-api-spot.kucoin.com/",
                "encrypt":true,
                "protocol":"websocket",
                "pingInterval":18000,
                "pingTimeout":10000
            }]
        }"#;
        let info: WsConnectionInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.instance_servers.len(), 1);
        assert!(info.instance_servers[0].encrypt);
    }

    #[test]
    fn test_clock_drift_threshold() {
        let drift = ClockDrift {
            local_time_ms: 0,
            server_time_ms: 0,
            round_trip_ms: 40,
            one_way_latency_ms: 20,
            drift_ms: -200,
        };
        assert!(drift.is_acceptable());

        let drift = ClockDrift { drift_ms: 800, ..drift };
        assert!(!drift.is_acceptable());
    }
}
