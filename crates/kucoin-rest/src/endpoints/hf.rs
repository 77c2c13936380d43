//! Private high-frequency (HF) trading endpoints
//!
//! The HF surface trades against the `trade_hf` account and favors
//! low-latency semantics: sync variants block until the matching result
//! is known, cancellation is scoped by symbol, and a dead man's switch
//! can flatten all HF orders if the client stops calling in.

use serde::Serialize;
use tracing::{debug, instrument};

use kucoin_types::{OrderSide, OrderStatus, OrderType, TimeInForce};

use crate::endpoints::trading::OrderRequest;
use crate::error::RestResult;
use crate::transport::RestTransport;

/// Private HF trading endpoints
pub struct HfTradingEndpoints<'a> {
    transport: &'a RestTransport,
}

impl<'a> HfTradingEndpoints<'a> {
    pub(crate) fn new(transport: &'a RestTransport) -> Self {
        Self { transport }
    }

    // ========================================================================
    // Order placement
    // ========================================================================

    /// Place an HF order
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side))]
    pub async fn submit_order(&self, order: &OrderRequest<'_>) -> RestResult<HfOrderAck> {
        debug!("Submitting HF order");
        self.transport.post_private("/api/v1/hf/orders", order).await
    }

    /// Validate an HF order without placing it
    #[instrument(skip(self, order), fields(symbol = %order.symbol))]
    pub async fn submit_order_test(&self, order: &OrderRequest<'_>) -> RestResult<()> {
        debug!("Submitting test HF order");
        self.transport
            .post_private_optional::<serde_json::Value, _>("/api/v1/hf/orders/test", order)
            .await
            .map(|_| ())
    }

    /// Place an HF order and wait for the matching result
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side))]
    pub async fn submit_order_sync(&self, order: &OrderRequest<'_>) -> RestResult<HfSyncOrderResult> {
        debug!("Submitting HF order (sync)");
        self.transport
            .post_private("/api/v1/hf/orders/sync", order)
            .await
    }

    /// Place up to 5 HF orders in one request
    #[instrument(skip(self, orders))]
    pub async fn submit_batch_orders(
        &self,
        orders: &[OrderRequest<'_>],
    ) -> RestResult<Vec<HfBatchOutcome>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            order_list: &'b [OrderRequest<'b>],
        }

        debug!("Submitting batch of {} HF orders", orders.len());
        self.transport
            .post_private("/api/v1/hf/orders/multi", &Body { order_list: orders })
            .await
    }

    /// Place up to 5 HF orders and wait for the matching results
    #[instrument(skip(self, orders))]
    pub async fn submit_batch_orders_sync(
        &self,
        orders: &[OrderRequest<'_>],
    ) -> RestResult<Vec<HfSyncOrderResult>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            order_list: &'b [OrderRequest<'b>],
        }

        debug!("Submitting batch of {} HF orders (sync)", orders.len());
        self.transport
            .post_private("/api/v1/hf/orders/multi/sync", &Body { order_list: orders })
            .await
    }

    /// Modify a resting HF order's price or size
    ///
    /// Identify the order by `order_id` or `client_oid`, one of which must
    /// be set. Modification re-queues the order at its new price level.
    #[instrument(skip(self, request), fields(symbol = %request.symbol))]
    pub async fn modify_order(&self, request: &HfModifyRequest<'_>) -> RestResult<HfModifyAck> {
        debug!("Modifying HF order");
        self.transport
            .post_private("/api/v1/hf/orders/alter", request)
            .await
    }

    // ========================================================================
    // Cancellation
    // ========================================================================

    /// Cancel an HF order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str, symbol: &str) -> RestResult<HfCancelAck> {
        debug!("Cancelling HF order {}", order_id);
        self.transport
            .delete_private(
                &format!("/api/v1/hf/orders/{order_id}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Cancel an HF order by ID and wait for the cancellation result
    #[instrument(skip(self))]
    pub async fn cancel_order_sync(
        &self,
        order_id: &str,
        symbol: &str,
    ) -> RestResult<HfSyncCancelResult> {
        debug!("Cancelling HF order {} (sync)", order_id);
        self.transport
            .delete_private(
                &format!("/api/v1/hf/orders/sync/{order_id}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Cancel an HF order by client order ID
    #[instrument(skip(self))]
    pub async fn cancel_order_by_client_oid(
        &self,
        client_oid: &str,
        symbol: &str,
    ) -> RestResult<HfClientOidAck> {
        debug!("Cancelling HF order by clientOid {}", client_oid);
        self.transport
            .delete_private(
                &format!("/api/v1/hf/orders/client-order/{client_oid}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Cancel an HF order by client order ID and wait for the result
    #[instrument(skip(self))]
    pub async fn cancel_order_by_client_oid_sync(
        &self,
        client_oid: &str,
        symbol: &str,
    ) -> RestResult<HfSyncCancelResult> {
        debug!("Cancelling HF order by clientOid {} (sync)", client_oid);
        self.transport
            .delete_private(
                &format!("/api/v1/hf/orders/sync/client-order/{client_oid}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Cancel part of a resting HF order's size
    #[instrument(skip(self))]
    pub async fn cancel_partial_order(
        &self,
        order_id: &str,
        symbol: &str,
        cancel_size: &str,
    ) -> RestResult<HfPartialCancelAck> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            symbol: &'q str,
            cancel_size: &'q str,
        }

        debug!("Cancelling {} of HF order {}", cancel_size, order_id);
        self.transport
            .delete_private(
                &format!("/api/v1/hf/orders/cancel/{order_id}"),
                Some(&Query { symbol, cancel_size }),
            )
            .await
    }

    /// Cancel all HF orders for one symbol
    #[instrument(skip(self))]
    pub async fn cancel_all_orders_by_symbol(&self, symbol: &str) -> RestResult<String> {
        debug!("Cancelling all HF orders for {}", symbol);
        self.transport
            .delete_private("/api/v1/hf/orders", Some(&SymbolQuery { symbol }))
            .await
    }

    /// Cancel all HF orders across every symbol
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self) -> RestResult<HfCancelAllResult> {
        debug!("Cancelling all HF orders");
        self.transport
            .delete_private("/api/v1/hf/orders/cancelAll", None::<&()>)
            .await
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Get all active HF orders for a symbol
    #[instrument(skip(self))]
    pub async fn get_active_orders(&self, symbol: &str) -> RestResult<Vec<HfOrderInfo>> {
        debug!("Fetching active HF orders for {}", symbol);
        self.transport
            .get_private("/api/v1/hf/orders/active", Some(&SymbolQuery { symbol }))
            .await
    }

    /// Get the symbols that currently have active HF orders
    #[instrument(skip(self))]
    pub async fn get_active_symbols(&self) -> RestResult<HfActiveSymbols> {
        debug!("Fetching active HF symbols");
        self.transport
            .get_private("/api/v1/hf/orders/active/symbols", None::<&()>)
            .await
    }

    /// Get completed HF orders for a symbol (cursor-paginated)
    #[instrument(skip(self, query))]
    pub async fn get_completed_orders(
        &self,
        query: &HfCompletedQuery<'_>,
    ) -> RestResult<HfOrderPage> {
        debug!("Fetching completed HF orders");
        self.transport
            .get_private("/api/v1/hf/orders/done", Some(query))
            .await
    }

    /// Get an HF order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str, symbol: &str) -> RestResult<HfOrderInfo> {
        debug!("Fetching HF order {}", order_id);
        self.transport
            .get_private(
                &format!("/api/v1/hf/orders/{order_id}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Get an HF order by client order ID
    #[instrument(skip(self))]
    pub async fn get_order_by_client_oid(
        &self,
        client_oid: &str,
        symbol: &str,
    ) -> RestResult<HfOrderInfo> {
        debug!("Fetching HF order by clientOid {}", client_oid);
        self.transport
            .get_private(
                &format!("/api/v1/hf/orders/client-order/{client_oid}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Get HF fills (cursor-paginated)
    #[instrument(skip(self, query))]
    pub async fn get_fills(&self, query: &HfFillQuery<'_>) -> RestResult<HfFillPage> {
        debug!("Fetching HF fills");
        self.transport.get_private("/api/v1/hf/fills", Some(query)).await
    }

    // ========================================================================
    // Dead man's switch
    // ========================================================================

    /// Arm (or re-arm) the dead man's switch
    ///
    /// All HF orders are cancelled `timeout` seconds after the last call;
    /// keep calling this inside the window to stay armed. A timeout of -1
    /// disarms the switch.
    #[instrument(skip(self))]
    pub async fn set_dead_mans_switch(
        &self,
        timeout: i64,
        symbols: Option<&str>,
    ) -> RestResult<DeadMansSwitchAck> {
        #[derive(Serialize)]
        struct Body<'b> {
            timeout: i64,
            #[serde(skip_serializing_if = "Option::is_none")]
            symbols: Option<&'b str>,
        }

        debug!("Arming dead man's switch with timeout {}s", timeout);
        self.transport
            .post_private("/api/v1/hf/orders/dead-cancel-all", &Body { timeout, symbols })
            .await
    }

    /// Query the dead man's switch state
    #[instrument(skip(self))]
    pub async fn get_dead_mans_switch(&self) -> RestResult<DeadMansSwitchStatus> {
        debug!("Querying dead man's switch");
        self.transport
            .get_private("/api/v1/hf/orders/dead-cancel-all/query", None::<&()>)
            .await
    }
}

// Request and response types specific to HF endpoints

use serde::Deserialize;

#[derive(Serialize)]
struct SymbolQuery<'q> {
    symbol: &'q str,
}

/// Parameters for modifying a resting HF order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HfModifyRequest<'b> {
    /// Trading symbol
    pub symbol: &'b str,
    /// Server-assigned order ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<&'b str>,
    /// Client order ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_oid: Option<&'b str>,
    /// New price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_price: Option<&'b str>,
    /// New size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_size: Option<&'b str>,
}

/// Query parameters for completed HF orders
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HfCompletedQuery<'q> {
    /// Trading symbol (required)
    pub symbol: &'q str,
    /// Side filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Order type filter
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Return orders with IDs before this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,
    /// Max orders to return (default 20, max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Start time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u64>,
    /// End time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<u64>,
}

/// Query parameters for HF fills
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HfFillQuery<'q> {
    /// Trading symbol (required)
    pub symbol: &'q str,
    /// Filter fills of one order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<&'q str>,
    /// Side filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Order type filter
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Return fills with IDs before this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,
    /// Max fills to return (default 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Start time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u64>,
    /// End time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<u64>,
}

/// Acknowledgement of an HF order placement
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfOrderAck {
    /// Server-assigned order ID
    pub order_id: String,
    /// Client order ID echoed back
    pub client_oid: Option<String>,
}

/// Matching result of a sync HF order placement
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfSyncOrderResult {
    /// Server-assigned order ID
    pub order_id: String,
    /// Client order ID echoed back
    pub client_oid: Option<String>,
    /// Order time (milliseconds)
    pub order_time: Option<u64>,
    /// Original size
    pub orig_size: Option<String>,
    /// Filled size at response time
    pub deal_size: Option<String>,
    /// Remaining size at response time
    pub remain_size: Option<String>,
    /// Whether the order was fully matched and closed
    pub canceled_size: Option<String>,
    /// Order status at response time
    pub status: Option<OrderStatus>,
    /// Matching time (milliseconds)
    pub match_time: Option<u64>,
}

/// Outcome of one order inside an HF batch
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfBatchOutcome {
    /// Server-assigned order ID (on success)
    pub order_id: Option<String>,
    /// Client order ID echoed back
    pub client_oid: Option<String>,
    /// "true" when accepted
    pub success: bool,
    /// Failure message
    pub fail_msg: Option<String>,
}

/// Acknowledgement of an HF order modification
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfModifyAck {
    /// ID of the modified order (a new ID is assigned)
    pub new_order_id: String,
}

/// Acknowledgement of an HF cancellation by order ID
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfCancelAck {
    /// Cancelled order ID
    pub order_id: String,
}

/// Acknowledgement of an HF cancellation by client order ID
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfClientOidAck {
    /// Cancelled client order ID
    pub client_oid: String,
}

/// Result of a sync HF cancellation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfSyncCancelResult {
    /// Cancelled order ID
    pub order_id: Option<String>,
    /// Original size
    pub orig_size: Option<String>,
    /// Filled size before cancellation
    pub deal_size: Option<String>,
    /// Size actually cancelled
    pub remain_size: Option<String>,
    /// Order status after cancellation
    pub status: Option<OrderStatus>,
}

/// Acknowledgement of a partial-size cancellation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfPartialCancelAck {
    /// Order ID
    pub order_id: String,
    /// Size removed from the order
    pub cancel_size: String,
}

/// Per-symbol outcome of cancelling all HF orders
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfCancelAllResult {
    /// Symbols whose orders were cancelled
    #[serde(default)]
    pub succeed_symbols: Vec<String>,
    /// Symbols where cancellation failed
    #[serde(default)]
    pub failed_symbols: Vec<HfCancelAllFailure>,
}

/// One failed symbol in a cancel-all request
#[derive(Debug, Clone, Deserialize)]
pub struct HfCancelAllFailure {
    /// Symbol that failed
    pub symbol: String,
    /// Failure reason
    pub error: String,
}

/// Symbols with active HF orders
#[derive(Debug, Clone, Deserialize)]
pub struct HfActiveSymbols {
    /// Symbol list
    pub symbols: Vec<String>,
}

/// An HF order as reported by query endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfOrderInfo {
    /// Server-assigned order ID
    pub id: String,
    /// Trading symbol
    pub symbol: String,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order side
    pub side: OrderSide,
    /// Limit price
    pub price: String,
    /// Order size
    pub size: String,
    /// Filled quote amount
    pub deal_funds: String,
    /// Filled base amount
    pub deal_size: String,
    /// Size cancelled
    pub cancelled_size: Option<String>,
    /// Remaining size on the book
    pub remain_size: Option<String>,
    /// Fees paid
    pub fee: String,
    /// Currency the fee was charged in
    pub fee_currency: String,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Post-only flag
    pub post_only: bool,
    /// Hidden flag
    pub hidden: bool,
    /// Iceberg flag
    pub iceberg: bool,
    /// Client order ID
    pub client_oid: Option<String>,
    /// Remark
    pub remark: Option<String>,
    /// Whether the order is still on the book
    pub active: Option<bool>,
    /// Whether the order was cancelled
    pub cancel_exist: bool,
    /// Creation time (milliseconds)
    pub created_at: u64,
    /// Last update time (milliseconds)
    pub last_updated_at: Option<u64>,
}

/// One cursor-paginated page of completed HF orders
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfOrderPage {
    /// Cursor for the next page
    pub last_id: Option<u64>,
    /// Orders on this page
    pub items: Vec<HfOrderInfo>,
}

/// One HF fill
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfFill {
    /// Fill ID
    pub id: u64,
    /// Trading symbol
    pub symbol: String,
    /// Trade ID
    pub trade_id: u64,
    /// Order ID the fill belongs to
    pub order_id: String,
    /// Counter order ID
    pub counter_order_id: Option<String>,
    /// Order side
    pub side: OrderSide,
    /// Liquidity role ("maker" or "taker")
    pub liquidity: String,
    /// Executed price
    pub price: String,
    /// Executed size
    pub size: String,
    /// Executed quote amount
    pub funds: String,
    /// Fee charged
    pub fee: String,
    /// Currency the fee was charged in
    pub fee_currency: String,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    /// Fill time (milliseconds)
    pub created_at: u64,
}

/// One cursor-paginated page of HF fills
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfFillPage {
    /// Cursor for the next page
    pub last_id: Option<u64>,
    /// Fills on this page
    pub items: Vec<HfFill>,
}

/// Acknowledgement of arming the dead man's switch
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadMansSwitchAck {
    /// Server time at arming (seconds)
    pub current_time: u64,
    /// Time the switch will fire (seconds)
    pub trigger_time: u64,
}

/// Current dead man's switch state
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadMansSwitchStatus {
    /// Configured timeout (seconds)
    pub timeout: i64,
    /// Symbol scope ("ALL" or a comma-separated list)
    pub symbols: Option<String>,
    /// Server time at query (seconds)
    pub current_time: u64,
    /// Time the switch will fire (seconds)
    pub trigger_time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_result_parsing() {
        let raw = r#"{
            "orderId":"5bd6e9286d99522a52e458de",
            "clientOid":"11223344",
            "orderTime":1550653727731,
            "origSize":"0.1",
            "dealSize":"0.1",
            "remainSize":"0",
            "canceledSize":"0",
            "status":"done",
            "matchTime":1550653727732
        }"#;
        let result: HfSyncOrderResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.status, Some(OrderStatus::Done));
        assert_eq!(result.remain_size.as_deref(), Some("0"));
    }

    #[test]
    fn test_modify_request_requires_one_id() {
        let request = HfModifyRequest {
            symbol: "BTC-USDT",
            order_id: Some("5bd6e9286d99522a52e458de"),
            client_oid: None,
            new_price: Some("50100"),
            new_size: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["orderId"], "5bd6e9286d99522a52e458de");
        assert!(json.get("clientOid").is_none());
        assert!(json.get("newSize").is_none());
    }

    #[test]
    fn test_cancel_all_result_parsing() {
        let raw = r#"{
            "succeedSymbols":["BTC-USDT","ETH-USDT"],
            "failedSymbols":[{"symbol":"BTC-ETH","error":"can't cancel, system timeout"}]
        }"#;
        let result: HfCancelAllResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.succeed_symbols.len(), 2);
        assert_eq!(result.failed_symbols[0].symbol, "BTC-ETH");
    }

    #[test]
    fn test_dead_mans_switch_status_parsing() {
        let raw = r#"{
            "timeout":5,
            "symbols":"ALL",
            "currentTime":1728097110,
            "triggerTime":1728097115
        }"#;
        let status: DeadMansSwitchStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.trigger_time - status.current_time, 5);
    }
}
