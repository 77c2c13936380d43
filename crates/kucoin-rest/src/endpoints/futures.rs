//! Futures endpoints, served from the futures base URL
//!
//! A deliberately compact surface: account overview, contracts and market
//! snapshots, order entry, and positions. Sizes are in contract lots, not
//! base currency.

use serde::Serialize;
use tracing::{debug, instrument};

use kucoin_types::{MarginMode, OrderSide, StopPriceType, TimeInForce};

use crate::error::RestResult;
use crate::transport::RestTransport;
use crate::types::Paginated;

/// Futures endpoints
pub struct FuturesEndpoints<'a> {
    transport: &'a RestTransport,
}

impl<'a> FuturesEndpoints<'a> {
    pub(crate) fn new(transport: &'a RestTransport) -> Self {
        Self { transport }
    }

    // ========================================================================
    // Account
    // ========================================================================

    /// Get the futures account overview
    #[instrument(skip(self))]
    pub async fn get_account_overview(&self, currency: Option<&str>) -> RestResult<FuturesAccountOverview> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'q str>,
        }

        debug!("Fetching futures account overview");
        self.transport
            .get_private("/api/v1/account-overview", Some(&Query { currency }))
            .await
    }

    /// Transfer funds out of the futures account (v3)
    ///
    /// # Arguments
    /// * `amount` - Transfer amount
    /// * `currency` - Currency code
    /// * `rec_account_type` - Receiving account ("MAIN" or "TRADE")
    #[instrument(skip(self))]
    pub async fn transfer_out(
        &self,
        amount: &str,
        currency: &str,
        rec_account_type: &str,
    ) -> RestResult<FuturesTransferAck> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            amount: &'b str,
            currency: &'b str,
            rec_account_type: &'b str,
        }

        debug!("Transferring {} {} out of futures", amount, currency);
        self.transport
            .post_private("/api/v3/transfer-out", &Body { amount, currency, rec_account_type })
            .await
    }

    /// Get the margin mode for a symbol
    #[instrument(skip(self))]
    pub async fn get_margin_mode(&self, symbol: &str) -> RestResult<FuturesMarginMode> {
        debug!("Fetching margin mode for {}", symbol);
        self.transport
            .get_private("/api/v2/position/getMarginMode", Some(&SymbolQuery { symbol }))
            .await
    }

    /// Change the margin mode for a symbol
    ///
    /// Fails while the symbol has open positions or active orders.
    #[instrument(skip(self))]
    pub async fn set_margin_mode(
        &self,
        symbol: &str,
        margin_mode: MarginMode,
    ) -> RestResult<FuturesMarginMode> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            symbol: &'b str,
            margin_mode: &'b str,
        }

        // Futures spells modes in caps, unlike spot margin
        let mode = match margin_mode {
            MarginMode::Cross => "CROSS",
            MarginMode::Isolated => "ISOLATED",
        };

        debug!("Setting margin mode for {} to {}", symbol, mode);
        self.transport
            .post_private(
                "/api/v2/position/changeMarginMode",
                &Body { symbol, margin_mode: mode },
            )
            .await
    }

    // ========================================================================
    // Market data
    // ========================================================================

    /// Get all open contracts
    #[instrument(skip(self))]
    pub async fn get_contracts(&self) -> RestResult<Vec<ContractInfo>> {
        debug!("Fetching open contracts");
        self.transport.get("/api/v1/contracts/active", None::<&()>).await
    }

    /// Get a single contract
    #[instrument(skip(self))]
    pub async fn get_contract(&self, symbol: &str) -> RestResult<ContractInfo> {
        debug!("Fetching contract {}", symbol);
        self.transport
            .get(&format!("/api/v1/contracts/{symbol}"), None::<&()>)
            .await
    }

    /// Get the full level-2 orderbook snapshot
    #[instrument(skip(self))]
    pub async fn get_full_orderbook(&self, symbol: &str) -> RestResult<FuturesOrderbook> {
        debug!("Fetching futures orderbook for {}", symbol);
        self.transport
            .get("/api/v1/level2/snapshot", Some(&SymbolQuery { symbol }))
            .await
    }

    /// Get the real-time ticker for a contract
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<FuturesTicker> {
        debug!("Fetching futures ticker for {}", symbol);
        self.transport
            .get("/api/v1/ticker", Some(&SymbolQuery { symbol }))
            .await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Place a futures order
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side))]
    pub async fn submit_order(&self, order: &FuturesOrderRequest<'_>) -> RestResult<FuturesOrderAck> {
        debug!("Submitting futures order");
        self.transport.post_private("/api/v1/orders", order).await
    }

    /// Cancel a futures order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<FuturesCancelledIds> {
        debug!("Cancelling futures order {}", order_id);
        self.transport
            .delete_private(&format!("/api/v1/orders/{order_id}"), None::<&()>)
            .await
    }

    /// Cancel a futures order by client order ID
    #[instrument(skip(self))]
    pub async fn cancel_order_by_client_oid(
        &self,
        client_oid: &str,
        symbol: &str,
    ) -> RestResult<FuturesClientOidAck> {
        debug!("Cancelling futures order by clientOid {}", client_oid);
        self.transport
            .delete_private(
                &format!("/api/v1/orders/client-order/{client_oid}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Cancel all futures orders, optionally for one symbol
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self, symbol: Option<&str>) -> RestResult<FuturesCancelledIds> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'q str>,
        }

        debug!("Cancelling all futures orders");
        self.transport
            .delete_private("/api/v1/orders", Some(&Query { symbol }))
            .await
    }

    /// Get the paginated futures order list
    #[instrument(skip(self, query))]
    pub async fn get_orders(
        &self,
        query: &FuturesOrderListQuery<'_>,
    ) -> RestResult<Paginated<FuturesOrderInfo>> {
        debug!("Fetching futures orders");
        self.transport.get_private("/api/v1/orders", Some(query)).await
    }

    /// Get a futures order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> RestResult<FuturesOrderInfo> {
        debug!("Fetching futures order {}", order_id);
        self.transport
            .get_private(&format!("/api/v1/orders/{order_id}"), None::<&()>)
            .await
    }

    /// Get paginated futures fills
    #[instrument(skip(self, query))]
    pub async fn get_fills(
        &self,
        query: &FuturesFillQuery<'_>,
    ) -> RestResult<Paginated<FuturesFill>> {
        debug!("Fetching futures fills");
        self.transport.get_private("/api/v1/fills", Some(query)).await
    }

    // ========================================================================
    // Positions
    // ========================================================================

    /// Get all open positions
    #[instrument(skip(self))]
    pub async fn get_positions(&self, currency: Option<&str>) -> RestResult<Vec<FuturesPosition>> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'q str>,
        }

        debug!("Fetching futures positions");
        self.transport
            .get_private("/api/v1/positions", Some(&Query { currency }))
            .await
    }

    /// Get the position for one symbol
    #[instrument(skip(self))]
    pub async fn get_position(&self, symbol: &str) -> RestResult<FuturesPosition> {
        debug!("Fetching futures position for {}", symbol);
        self.transport
            .get_private("/api/v1/position", Some(&SymbolQuery { symbol }))
            .await
    }
}

// Request and response types specific to futures endpoints

use serde::Deserialize;

#[derive(Serialize)]
struct SymbolQuery<'q> {
    symbol: &'q str,
}

/// Futures account overview
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesAccountOverview {
    /// Settlement currency
    pub currency: String,
    /// Account equity (margin balance + unrealized PnL)
    pub account_equity: f64,
    /// Unrealized PnL
    pub unrealised_pnl: f64,
    /// Margin balance
    pub margin_balance: f64,
    /// Margin locked by positions
    pub position_margin: f64,
    /// Margin locked by open orders
    pub order_margin: f64,
    /// Frozen funds
    pub frozen_funds: f64,
    /// Available balance
    pub available_balance: f64,
}

/// Acknowledgement of a futures transfer-out
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesTransferAck {
    /// Transfer application ID
    pub apply_id: String,
}

/// Margin mode of one futures symbol
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesMarginMode {
    /// Symbol code
    pub symbol: String,
    /// "CROSS" or "ISOLATED"
    pub margin_mode: String,
}

/// Futures contract specification
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
    /// Contract symbol (e.g., "XBTUSDTM")
    pub symbol: String,
    /// Base currency
    pub base_currency: String,
    /// Quote currency
    pub quote_currency: String,
    /// Settlement currency
    pub settle_currency: String,
    /// Contract type ("FFWCSX" perpetual, "FFICSX" dated)
    #[serde(rename = "type")]
    pub contract_type: Option<String>,
    /// Contract value per lot
    pub multiplier: f64,
    /// Maximum leverage
    pub max_leverage: Option<f64>,
    /// Price tick size
    pub tick_size: f64,
    /// Lot size in contracts
    pub lot_size: f64,
    /// Maximum order size in contracts
    pub max_order_qty: Option<f64>,
    /// Maker fee rate
    pub maker_fee_rate: Option<f64>,
    /// Taker fee rate
    pub taker_fee_rate: Option<f64>,
    /// Whether the contract is open for trading
    pub status: String,
}

/// Futures level-2 orderbook snapshot
///
/// Levels are `[price, size]` with size in contract lots.
#[derive(Debug, Clone, Deserialize)]
pub struct FuturesOrderbook {
    /// Symbol code
    pub symbol: String,
    /// Update sequence
    pub sequence: u64,
    /// Snapshot time (nanoseconds)
    pub ts: u64,
    /// Bid levels, best first
    pub bids: Vec<[f64; 2]>,
    /// Ask levels, best first
    pub asks: Vec<[f64; 2]>,
}

/// Futures real-time ticker
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesTicker {
    /// Symbol code
    pub symbol: String,
    /// Update sequence
    pub sequence: u64,
    /// Last traded price
    pub price: String,
    /// Last traded size in lots
    pub size: u64,
    /// Taker side of the last trade
    pub side: String,
    /// Best bid price
    pub best_bid_price: String,
    /// Best bid size in lots
    pub best_bid_size: u64,
    /// Best ask price
    pub best_ask_price: String,
    /// Best ask size in lots
    pub best_ask_size: u64,
    /// Snapshot time (nanoseconds)
    pub ts: u64,
}

/// Parameters for placing a futures order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesOrderRequest<'b> {
    /// Client-generated order ID
    pub client_oid: &'b str,
    /// Contract symbol
    pub symbol: &'b str,
    /// Order side
    pub side: OrderSide,
    /// "limit" or "market"
    #[serde(rename = "type")]
    pub order_type: &'b str,
    /// Leverage applied to the position
    pub leverage: &'b str,
    /// Limit price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<&'b str>,
    /// Order size in contract lots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Trigger direction for stop orders ("up" or "down")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<&'b str>,
    /// Trigger price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<&'b str>,
    /// Price basis for the trigger
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price_type: Option<StopPriceType>,
    /// Only reduce an existing position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
    /// Close the position entirely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_order: Option<bool>,
    /// Time in force
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Post-only flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
    /// Margin mode ("CROSS" or "ISOLATED")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_mode: Option<&'b str>,
    /// Remark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<&'b str>,
}

/// Acknowledgement of a futures order placement
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesOrderAck {
    /// Server-assigned order ID
    pub order_id: String,
    /// Client order ID echoed back
    pub client_oid: Option<String>,
}

/// Server-assigned IDs of cancelled futures orders
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesCancelledIds {
    /// Cancelled order IDs
    pub cancelled_order_ids: Vec<String>,
}

/// Cancellation acknowledgement keyed by client order ID
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesClientOidAck {
    /// Cancelled client order ID
    pub client_oid: String,
}

/// Query parameters for the futures order list
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesOrderListQuery<'q> {
    /// Status filter ("active" or "done")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'q str>,
    /// Symbol filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'q str>,
    /// Side filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Order type filter
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<&'q str>,
    /// Start time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u64>,
    /// End time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<u64>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    /// Page size (10-500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Query parameters for futures fills
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesFillQuery<'q> {
    /// Filter fills of one order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<&'q str>,
    /// Symbol filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'q str>,
    /// Side filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Order type filter
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<&'q str>,
    /// Start time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u64>,
    /// End time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<u64>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    /// Page size (10-500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// A futures order as reported by query endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesOrderInfo {
    /// Server-assigned order ID
    pub id: String,
    /// Contract symbol
    pub symbol: String,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: String,
    /// Order side
    pub side: OrderSide,
    /// Limit price
    pub price: Option<String>,
    /// Order size in lots
    pub size: u64,
    /// Filled value
    pub deal_value: Option<String>,
    /// Filled size in lots
    pub deal_size: u64,
    /// Applied leverage
    pub leverage: Option<String>,
    /// Order status ("open" or "done")
    pub status: String,
    /// Client order ID
    pub client_oid: Option<String>,
    /// Reduce-only flag
    pub reduce_only: Option<bool>,
    /// Whether the order was cancelled
    pub cancel_exist: bool,
    /// Creation time (milliseconds)
    pub created_at: u64,
}

/// One futures fill
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesFill {
    /// Contract symbol
    pub symbol: String,
    /// Trade ID
    pub trade_id: String,
    /// Order ID the fill belongs to
    pub order_id: String,
    /// Order side
    pub side: OrderSide,
    /// Liquidity role ("maker" or "taker")
    pub liquidity: String,
    /// Executed price
    pub price: String,
    /// Executed size in lots
    pub size: u64,
    /// Executed value
    pub value: String,
    /// Fee charged
    pub fee: String,
    /// Currency the fee was charged in
    pub fee_currency: String,
    /// Fill time (nanoseconds)
    pub trade_time: u64,
}

/// One futures position
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesPosition {
    /// Contract symbol
    pub symbol: String,
    /// Whether a position is open
    pub is_open: bool,
    /// Signed position size in lots (negative is short)
    pub current_qty: i64,
    /// Position value
    pub current_cost: f64,
    /// Average entry price
    pub avg_entry_price: f64,
    /// Liquidation price
    pub liquidation_price: f64,
    /// Applied leverage
    pub real_leverage: f64,
    /// Unrealized PnL
    pub unrealised_pnl: f64,
    /// Realized PnL
    pub realised_pnl: f64,
    /// Margin allocated to the position
    pub position_margin: f64,
    /// Cross margin flag
    pub cross_mode: Option<bool>,
    /// Settlement currency
    pub settle_currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_futures_order_serialization() {
        let order = FuturesOrderRequest {
            client_oid: "oid-1",
            symbol: "XBTUSDTM",
            side: OrderSide::Buy,
            order_type: "limit",
            leverage: "5",
            price: Some("60000"),
            size: Some(10),
            stop: None,
            stop_price: None,
            stop_price_type: None,
            reduce_only: None,
            close_order: None,
            time_in_force: None,
            post_only: Some(true),
            margin_mode: Some("CROSS"),
            remark: None,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["leverage"], "5");
        assert_eq!(json["size"], 10);
        assert_eq!(json["postOnly"], true);
        assert!(json.get("stopPrice").is_none());
    }

    #[test]
    fn test_position_parsing() {
        let raw = r#"{
            "id":"615ba79f83a3410001cde321",
            "symbol":"XBTUSDTM",
            "autoDeposit":false,
            "maintMarginReq":0.005,
            "riskLimit":500000,
            "realLeverage":4.99,
            "crossMode":false,
            "isOpen":true,
            "currentQty":-20,
            "currentCost":-193.9588,
            "unrealisedPnl":-15.6112,
            "realisedPnl":0.0038,
            "avgEntryPrice":19389.8,
            "liquidationPrice":24248.6,
            "positionMargin":39.13,
            "settleCurrency":"USDT"
        }"#;
        let position: FuturesPosition = serde_json::from_str(raw).unwrap();
        assert!(position.is_open);
        assert_eq!(position.current_qty, -20);
        assert_eq!(position.cross_mode, Some(false));
    }

    #[test]
    fn test_contract_parsing() {
        let raw = r#"{
            "symbol":"XBTUSDTM",
            "rootSymbol":"USDT",
            "type":"FFWCSX",
            "baseCurrency":"XBT",
            "quoteCurrency":"USDT",
            "settleCurrency":"USDT",
            "maxOrderQty":1000000,
            "maxPrice":1000000.0,
            "lotSize":1,
            "tickSize":0.1,
            "multiplier":0.001,
            "makerFeeRate":0.0002,
            "takerFeeRate":0.0006,
            "isInverse":false,
            "maxLeverage":125,
            "status":"Open"
        }"#;
        let contract: ContractInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(contract.multiplier, 0.001);
        assert_eq!(contract.status, "Open");
    }
}
