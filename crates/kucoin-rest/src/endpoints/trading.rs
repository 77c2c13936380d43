//! Private spot trading endpoints: orders, stop orders, OCO orders, fills

use serde::Serialize;
use tracing::{debug, instrument};

use kucoin_types::{OrderSide, OrderType, StopPriceType, TimeInForce, TradeType};

use crate::error::RestResult;
use crate::transport::RestTransport;
use crate::types::{OrderIdResponse, Paginated};

/// Private spot trading endpoints
pub struct TradingEndpoints<'a> {
    transport: &'a RestTransport,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(transport: &'a RestTransport) -> Self {
        Self { transport }
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Place a new order
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side))]
    pub async fn submit_order(&self, order: &OrderRequest<'_>) -> RestResult<OrderIdResponse> {
        debug!("Submitting order");
        self.transport.post_private("/api/v1/orders", order).await
    }

    /// Validate an order without placing it
    ///
    /// Runs the same parameter checks as [`submit_order`](Self::submit_order)
    /// but never reaches the matching engine.
    #[instrument(skip(self, order), fields(symbol = %order.symbol))]
    pub async fn submit_order_test(&self, order: &OrderRequest<'_>) -> RestResult<()> {
        debug!("Submitting test order");
        self.transport
            .post_private_optional::<serde_json::Value, _>("/api/v1/orders/test", order)
            .await
            .map(|_| ())
    }

    /// Place up to 5 orders for one symbol in a single request
    ///
    /// Per-order failures are reported inside the response rather than as
    /// an overall error.
    #[instrument(skip(self, orders))]
    pub async fn submit_batch_orders(
        &self,
        symbol: &str,
        orders: &[OrderRequest<'_>],
    ) -> RestResult<BatchOrderResult> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            symbol: &'b str,
            order_list: &'b [OrderRequest<'b>],
        }

        debug!("Submitting batch of {} orders", orders.len());
        self.transport
            .post_private("/api/v1/orders/multi", &Body { symbol, order_list: orders })
            .await
    }

    /// Cancel an order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<CancelledOrderIds> {
        debug!("Cancelling order {}", order_id);
        self.transport
            .delete_private(&format!("/api/v1/orders/{order_id}"), None::<&()>)
            .await
    }

    /// Cancel an order by client order ID
    #[instrument(skip(self))]
    pub async fn cancel_order_by_client_oid(
        &self,
        client_oid: &str,
    ) -> RestResult<CancelledByClientOid> {
        debug!("Cancelling order by clientOid {}", client_oid);
        self.transport
            .delete_private(
                &format!("/api/v1/order/client-order/{client_oid}"),
                None::<&()>,
            )
            .await
    }

    /// Cancel all orders, optionally scoped to a symbol and trade type
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(
        &self,
        symbol: Option<&str>,
        trade_type: Option<TradeType>,
    ) -> RestResult<CancelledOrderIds> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            trade_type: Option<TradeType>,
        }

        debug!("Cancelling all orders");
        self.transport
            .delete_private("/api/v1/orders", Some(&Query { symbol, trade_type }))
            .await
    }

    /// Get the paginated order list
    #[instrument(skip(self, query))]
    pub async fn get_orders(&self, query: &OrderListQuery<'_>) -> RestResult<Paginated<OrderInfo>> {
        debug!("Fetching orders");
        self.transport.get_private("/api/v1/orders", Some(query)).await
    }

    /// Get orders placed in the last 24 hours (max 1000)
    #[instrument(skip(self))]
    pub async fn get_recent_orders(&self) -> RestResult<Vec<OrderInfo>> {
        debug!("Fetching recent orders");
        self.transport
            .get_private("/api/v1/limit/orders", None::<&()>)
            .await
    }

    /// Get a single order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> RestResult<OrderInfo> {
        debug!("Fetching order {}", order_id);
        self.transport
            .get_private(&format!("/api/v1/orders/{order_id}"), None::<&()>)
            .await
    }

    /// Get a single order by client order ID
    #[instrument(skip(self))]
    pub async fn get_order_by_client_oid(&self, client_oid: &str) -> RestResult<OrderInfo> {
        debug!("Fetching order by clientOid {}", client_oid);
        self.transport
            .get_private(
                &format!("/api/v1/order/client-order/{client_oid}"),
                None::<&()>,
            )
            .await
    }

    // ========================================================================
    // Fills
    // ========================================================================

    /// Get the paginated fill list
    #[instrument(skip(self, query))]
    pub async fn get_fills(&self, query: &FillListQuery<'_>) -> RestResult<Paginated<Fill>> {
        debug!("Fetching fills");
        self.transport.get_private("/api/v1/fills", Some(query)).await
    }

    /// Get fills from the last 24 hours (max 1000)
    #[instrument(skip(self))]
    pub async fn get_recent_fills(&self) -> RestResult<Vec<Fill>> {
        debug!("Fetching recent fills");
        self.transport
            .get_private("/api/v1/limit/fills", None::<&()>)
            .await
    }

    // ========================================================================
    // Stop orders
    // ========================================================================

    /// Place a stop order
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side))]
    pub async fn submit_stop_order(
        &self,
        order: &StopOrderRequest<'_>,
    ) -> RestResult<OrderIdResponse> {
        debug!("Submitting stop order");
        self.transport.post_private("/api/v1/stop-order", order).await
    }

    /// Cancel a stop order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn cancel_stop_order(&self, order_id: &str) -> RestResult<CancelledOrderIds> {
        debug!("Cancelling stop order {}", order_id);
        self.transport
            .delete_private(&format!("/api/v1/stop-order/{order_id}"), None::<&()>)
            .await
    }

    /// Cancel a stop order by client order ID
    #[instrument(skip(self))]
    pub async fn cancel_stop_order_by_client_oid(
        &self,
        client_oid: &str,
        symbol: Option<&str>,
    ) -> RestResult<CancelledByClientOid> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            client_oid: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'q str>,
        }

        debug!("Cancelling stop order by clientOid {}", client_oid);
        self.transport
            .delete_private(
                "/api/v1/stop-order/cancelOrderByClientOid",
                Some(&Query { client_oid, symbol }),
            )
            .await
    }

    /// Cancel a batch of stop orders by symbol, trade type, or explicit IDs
    #[instrument(skip(self))]
    pub async fn cancel_stop_orders(
        &self,
        symbol: Option<&str>,
        trade_type: Option<TradeType>,
        order_ids: Option<&str>,
    ) -> RestResult<CancelledOrderIds> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            trade_type: Option<TradeType>,
            #[serde(skip_serializing_if = "Option::is_none")]
            order_ids: Option<&'q str>,
        }

        debug!("Cancelling stop orders");
        self.transport
            .delete_private(
                "/api/v1/stop-order/cancel",
                Some(&Query { symbol, trade_type, order_ids }),
            )
            .await
    }

    /// Get the paginated stop order list
    #[instrument(skip(self, query))]
    pub async fn get_stop_orders(
        &self,
        query: &StopOrderListQuery<'_>,
    ) -> RestResult<Paginated<StopOrderInfo>> {
        debug!("Fetching stop orders");
        self.transport
            .get_private("/api/v1/stop-order", Some(query))
            .await
    }

    /// Get a single stop order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn get_stop_order(&self, order_id: &str) -> RestResult<StopOrderInfo> {
        debug!("Fetching stop order {}", order_id);
        self.transport
            .get_private(&format!("/api/v1/stop-order/{order_id}"), None::<&()>)
            .await
    }

    /// Get stop orders by client order ID
    ///
    /// Returns a list because client order IDs are not unique across
    /// symbols on the stop order surface.
    #[instrument(skip(self))]
    pub async fn get_stop_order_by_client_oid(
        &self,
        client_oid: &str,
        symbol: Option<&str>,
    ) -> RestResult<Vec<StopOrderInfo>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            client_oid: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'q str>,
        }

        debug!("Fetching stop order by clientOid {}", client_oid);
        self.transport
            .get_private(
                "/api/v1/stop-order/queryOrderByClientOid",
                Some(&Query { client_oid, symbol }),
            )
            .await
    }

    // ========================================================================
    // OCO orders
    // ========================================================================

    /// Place an OCO (one-cancels-other) order
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side))]
    pub async fn submit_oco_order(
        &self,
        order: &OcoOrderRequest<'_>,
    ) -> RestResult<OrderIdResponse> {
        debug!("Submitting OCO order");
        self.transport.post_private("/api/v3/oco/order", order).await
    }

    /// Cancel an OCO order by its server-assigned ID
    ///
    /// Cancels both legs; the returned IDs are the limit and stop leg IDs.
    #[instrument(skip(self))]
    pub async fn cancel_oco_order(&self, order_id: &str) -> RestResult<CancelledOrderIds> {
        debug!("Cancelling OCO order {}", order_id);
        self.transport
            .delete_private(&format!("/api/v3/oco/order/{order_id}"), None::<&()>)
            .await
    }

    /// Cancel an OCO order by client order ID
    #[instrument(skip(self))]
    pub async fn cancel_oco_order_by_client_oid(
        &self,
        client_oid: &str,
    ) -> RestResult<CancelledOrderIds> {
        debug!("Cancelling OCO order by clientOid {}", client_oid);
        self.transport
            .delete_private(
                &format!("/api/v3/oco/client-order/{client_oid}"),
                None::<&()>,
            )
            .await
    }

    /// Cancel a batch of OCO orders
    #[instrument(skip(self))]
    pub async fn cancel_oco_orders(
        &self,
        symbol: Option<&str>,
        order_ids: Option<&str>,
    ) -> RestResult<CancelledOrderIds> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            order_ids: Option<&'q str>,
        }

        debug!("Cancelling OCO orders");
        self.transport
            .delete_private("/api/v3/oco/orders", Some(&Query { symbol, order_ids }))
            .await
    }

    /// Get an OCO order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn get_oco_order(&self, order_id: &str) -> RestResult<OcoOrderInfo> {
        debug!("Fetching OCO order {}", order_id);
        self.transport
            .get_private(&format!("/api/v3/oco/order/{order_id}"), None::<&()>)
            .await
    }

    /// Get an OCO order by client order ID
    #[instrument(skip(self))]
    pub async fn get_oco_order_by_client_oid(&self, client_oid: &str) -> RestResult<OcoOrderInfo> {
        debug!("Fetching OCO order by clientOid {}", client_oid);
        self.transport
            .get_private(&format!("/api/v3/oco/client-order/{client_oid}"), None::<&()>)
            .await
    }

    /// Get an OCO order including both legs' detail
    #[instrument(skip(self))]
    pub async fn get_oco_order_details(&self, order_id: &str) -> RestResult<OcoOrderDetails> {
        debug!("Fetching OCO order details {}", order_id);
        self.transport
            .get_private(&format!("/api/v3/oco/order/details/{order_id}"), None::<&()>)
            .await
    }

    /// Get the paginated OCO order list
    #[instrument(skip(self, query))]
    pub async fn get_oco_orders(
        &self,
        query: &OcoOrderListQuery<'_>,
    ) -> RestResult<Paginated<OcoOrderInfo>> {
        debug!("Fetching OCO orders");
        self.transport
            .get_private("/api/v3/oco/orders", Some(query))
            .await
    }
}

// Request and response types specific to trading endpoints

use serde::Deserialize;

/// Parameters for placing a spot order
///
/// Limit orders require `price` and `size`; market orders take `size`
/// (base currency) or `funds` (quote currency), never both.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest<'b> {
    /// Client-generated order ID, unique for 24 hours
    pub client_oid: &'b str,
    /// Trading symbol (e.g., "BTC-USDT")
    pub symbol: &'b str,
    /// Order side
    pub side: OrderSide,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Limit price (limit orders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<&'b str>,
    /// Amount in base currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'b str>,
    /// Amount in quote currency (market orders only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds: Option<&'b str>,
    /// Time in force (limit orders, default GTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Cancel after n seconds (GTT only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<u64>,
    /// Post-only flag (invalid with IOC/FOK)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
    /// Hide the order from the public book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Show only `visible_size` on the public book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iceberg: Option<bool>,
    /// Displayed size for iceberg orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_size: Option<&'b str>,
    /// Self-trade prevention ("CN", "CO", "CB", "DC")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stp: Option<&'b str>,
    /// Trade context (default spot)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<TradeType>,
    /// Remark (max 100 chars)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<&'b str>,
}

impl<'b> OrderRequest<'b> {
    /// Limit order with the required fields; optional flags default off
    pub fn limit(
        client_oid: &'b str,
        symbol: &'b str,
        side: OrderSide,
        price: &'b str,
        size: &'b str,
    ) -> Self {
        Self {
            client_oid,
            symbol,
            side,
            order_type: OrderType::Limit,
            price: Some(price),
            size: Some(size),
            funds: None,
            time_in_force: None,
            cancel_after: None,
            post_only: None,
            hidden: None,
            iceberg: None,
            visible_size: None,
            stp: None,
            trade_type: None,
            remark: None,
        }
    }

    /// Market order sized in base currency
    pub fn market(client_oid: &'b str, symbol: &'b str, side: OrderSide, size: &'b str) -> Self {
        Self {
            size: Some(size),
            ..Self::market_base(client_oid, symbol, side)
        }
    }

    /// Market order sized in quote currency
    pub fn market_funds(
        client_oid: &'b str,
        symbol: &'b str,
        side: OrderSide,
        funds: &'b str,
    ) -> Self {
        Self {
            funds: Some(funds),
            ..Self::market_base(client_oid, symbol, side)
        }
    }

    fn market_base(client_oid: &'b str, symbol: &'b str, side: OrderSide) -> Self {
        Self {
            client_oid,
            symbol,
            side,
            order_type: OrderType::Market,
            price: None,
            size: None,
            funds: None,
            time_in_force: None,
            cancel_after: None,
            post_only: None,
            hidden: None,
            iceberg: None,
            visible_size: None,
            stp: None,
            trade_type: None,
            remark: None,
        }
    }
}

/// Parameters for placing a stop order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRequest<'b> {
    /// Client-generated order ID
    pub client_oid: &'b str,
    /// Trading symbol
    pub symbol: &'b str,
    /// Order side
    pub side: OrderSide,
    /// Order type once triggered
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Trigger price
    pub stop_price: &'b str,
    /// "loss" (trigger at or below) or "entry" (trigger at or above)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<&'b str>,
    /// Price basis for the trigger
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price_type: Option<StopPriceType>,
    /// Limit price (limit orders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<&'b str>,
    /// Amount in base currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'b str>,
    /// Amount in quote currency (market orders only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds: Option<&'b str>,
    /// Time in force
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Trade context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<TradeType>,
    /// Remark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<&'b str>,
}

/// Parameters for placing an OCO order
///
/// Places a limit leg at `price` and a stop-limit leg triggered at
/// `stop_price` filling at `limit_price`; filling either leg cancels the
/// other.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OcoOrderRequest<'b> {
    /// Client-generated order ID
    pub client_oid: &'b str,
    /// Trading symbol
    pub symbol: &'b str,
    /// Order side
    pub side: OrderSide,
    /// Limit leg price
    pub price: &'b str,
    /// Order size in base currency
    pub size: &'b str,
    /// Stop leg trigger price
    pub stop_price: &'b str,
    /// Stop leg limit price
    pub limit_price: &'b str,
    /// Self-trade prevention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stp: Option<&'b str>,
    /// Remark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<&'b str>,
}

/// Query parameters for the order list
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery<'q> {
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
    pub order_type: Option<OrderType>,
    /// Trade context filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<TradeType>,
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

/// Query parameters for the stop order list
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderListQuery<'q> {
    /// Symbol filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'q str>,
    /// Side filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Order type filter
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Trade context filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<TradeType>,
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

/// Query parameters for the OCO order list
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OcoOrderListQuery<'q> {
    /// Symbol filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'q str>,
    /// Explicit order IDs, comma-separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_ids: Option<&'q str>,
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

/// Query parameters for the fill list
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillListQuery<'q> {
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
    pub order_type: Option<OrderType>,
    /// Trade context filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<TradeType>,
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

/// Server-assigned IDs of cancelled orders
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledOrderIds {
    /// Cancelled order IDs
    pub cancelled_order_ids: Vec<String>,
}

/// Cancellation acknowledgement keyed by client order ID
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledByClientOid {
    /// Cancelled server-assigned order ID
    pub cancelled_order_id: String,
    /// The client order ID that was cancelled
    pub client_oid: String,
}

/// Per-order outcomes of a batch submission
#[derive(Debug, Clone, Deserialize)]
pub struct BatchOrderResult {
    /// One entry per submitted order, in request order
    pub data: Vec<BatchOrderOutcome>,
}

/// Outcome of one order inside a batch
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOrderOutcome {
    /// Server-assigned order ID (on success)
    pub id: Option<String>,
    /// Client order ID echoed back
    pub client_oid: Option<String>,
    /// Trading symbol
    pub symbol: String,
    /// "success" or "fail"
    pub status: String,
    /// Failure reason
    pub fail_msg: Option<String>,
}

/// A spot order as reported by query endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    /// Server-assigned order ID
    pub id: String,
    /// Trading symbol
    pub symbol: String,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order side
    pub side: OrderSide,
    /// Limit price ("0" for market orders)
    pub price: String,
    /// Order size in base currency
    pub size: String,
    /// Order funds in quote currency
    pub funds: Option<String>,
    /// Filled quote amount
    pub deal_funds: String,
    /// Filled base amount
    pub deal_size: String,
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
    /// Trade context
    pub trade_type: Option<TradeType>,
    /// Client order ID
    pub client_oid: Option<String>,
    /// Remark
    pub remark: Option<String>,
    /// Whether the order is still on the book
    pub is_active: Option<bool>,
    /// Whether the order was cancelled
    pub cancel_exist: bool,
    /// Creation time (milliseconds)
    pub created_at: u64,
}

/// A stop order as reported by query endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderInfo {
    /// Server-assigned order ID
    pub id: String,
    /// Trading symbol
    pub symbol: String,
    /// Order type once triggered
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order side
    pub side: OrderSide,
    /// Limit price
    pub price: Option<String>,
    /// Order size
    pub size: Option<String>,
    /// Trigger price
    pub stop_price: String,
    /// Trigger direction ("loss" or "entry")
    pub stop: String,
    /// Lifecycle status ("NEW", "TRIGGERED")
    pub status: String,
    /// Client order ID
    pub client_oid: Option<String>,
    /// Trade context
    pub trade_type: Option<TradeType>,
    /// Creation time (milliseconds)
    pub created_at: u64,
}

/// An OCO order as reported by query endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcoOrderInfo {
    /// Server-assigned order ID
    pub order_id: String,
    /// Trading symbol
    pub symbol: String,
    /// Client order ID
    pub client_oid: Option<String>,
    /// Lifecycle status ("NEW", "DONE", "TRIGGERED", "CANCELLED")
    pub status: String,
    /// Creation time (milliseconds)
    pub order_time: u64,
}

/// An OCO order with both legs expanded
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcoOrderDetails {
    /// Server-assigned order ID
    pub order_id: String,
    /// Trading symbol
    pub symbol: String,
    /// Client order ID
    pub client_oid: Option<String>,
    /// Lifecycle status
    pub status: String,
    /// Creation time (milliseconds)
    pub order_time: u64,
    /// The two legs
    pub orders: Vec<OcoOrderLeg>,
}

/// One leg of an OCO order
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcoOrderLeg {
    /// Server-assigned order ID of this leg
    pub id: String,
    /// Trading symbol
    pub symbol: String,
    /// Order side
    pub side: OrderSide,
    /// Limit price
    pub price: String,
    /// Trigger price (stop leg only)
    pub stop_price: Option<String>,
    /// Order size
    pub size: String,
    /// Leg status
    pub status: String,
}

/// One fill (execution)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Trading symbol
    pub symbol: String,
    /// Trade ID
    pub trade_id: String,
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
    /// Executed size in base currency
    pub size: String,
    /// Executed amount in quote currency
    pub funds: String,
    /// Fee charged
    pub fee: String,
    /// Currency the fee was charged in
    pub fee_currency: String,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    /// Trade context
    pub trade_type: Option<TradeType>,
    /// Fill time (nanoseconds)
    pub created_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_order_serialization() {
        let order = OrderRequest::limit("oid-1", "BTC-USDT", OrderSide::Buy, "50000", "0.01");
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["clientOid"], "oid-1");
        assert_eq!(json["symbol"], "BTC-USDT");
        assert_eq!(json["side"], "buy");
        assert_eq!(json["type"], "limit");
        assert_eq!(json["price"], "50000");
        assert_eq!(json["size"], "0.01");
        // Unset optionals stay off the wire
        assert!(json.get("funds").is_none());
        assert!(json.get("postOnly").is_none());
    }

    #[test]
    fn test_market_order_size_vs_funds() {
        let by_size = OrderRequest::market("oid-2", "BTC-USDT", OrderSide::Sell, "0.01");
        let json = serde_json::to_value(&by_size).unwrap();
        assert_eq!(json["type"], "market");
        assert_eq!(json["size"], "0.01");
        assert!(json.get("funds").is_none());

        let by_funds = OrderRequest::market_funds("oid-3", "BTC-USDT", OrderSide::Buy, "500");
        let json = serde_json::to_value(&by_funds).unwrap();
        assert_eq!(json["funds"], "500");
        assert!(json.get("size").is_none());
    }

    #[test]
    fn test_order_info_parsing() {
        let raw = r#"{
            "id":"5c35c02703aa673ceec2a168",
            "symbol":"BTC-USDT",
            "opType":"DEAL",
            "type":"limit",
            "side":"buy",
            "price":"10",
            "size":"2",
            "funds":"0",
            "dealFunds":"0.166",
            "dealSize":"2",
            "fee":"0",
            "feeCurrency":"USDT",
            "stp":"",
            "timeInForce":"GTC",
            "postOnly":false,
            "hidden":false,
            "iceberg":false,
            "visibleSize":"0",
            "cancelAfter":0,
            "channel":"IOS",
            "clientOid":"",
            "remark":"",
            "tags":"",
            "isActive":false,
            "cancelExist":false,
            "createdAt":1547026471000,
            "tradeType":"TRADE"
        }"#;
        let order: OrderInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.time_in_force, Some(TimeInForce::GoodTillCancelled));
        assert!(!order.cancel_exist);
    }

    #[test]
    fn test_fill_parsing() {
        let raw = r#"{
            "symbol":"BTC-USDT",
            "tradeId":"5c35c02709e4f67d5266954e",
            "orderId":"5c35c02703aa673ceec2a168",
            "counterOrderId":"5c1ab46003aa676e487fa8e3",
            "side":"buy",
            "liquidity":"taker",
            "forceTaker":true,
            "price":"0.083",
            "size":"0.8424304",
            "funds":"0.0699217232",
            "fee":"0",
            "feeRate":"0",
            "feeCurrency":"USDT",
            "stop":"",
            "type":"limit",
            "createdAt":1547026472000,
            "tradeType":"TRADE"
        }"#;
        let fill: Fill = serde_json::from_str(raw).unwrap();
        assert_eq!(fill.liquidity, "taker");
        assert_eq!(fill.side, OrderSide::Buy);
    }

    #[test]
    fn test_batch_outcome_parsing() {
        let raw = r#"{
            "data":[
                {"symbol":"KCS-USDT","type":"limit","side":"buy","status":"success","id":"611a6a","clientOid":"c1"},
                {"symbol":"KCS-USDT","type":"limit","side":"buy","status":"fail","failMsg":"Balance insufficient!","clientOid":"c2"}
            ]
        }"#;
        let result: BatchOrderResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.data.len(), 2);
        assert_eq!(result.data[1].status, "fail");
        assert!(result.data[1].fail_msg.as_deref().unwrap().contains("insufficient"));
    }

    #[test]
    fn test_cancel_query_serialization() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            symbol: Option<&'static str>,
            trade_type: Option<TradeType>,
        }

        let encoded = serde_urlencoded::to_string(Query {
            symbol: Some("ETH-BTC"),
            trade_type: Some(TradeType::Trade),
        })
        .unwrap();
        assert_eq!(encoded, "symbol=ETH-BTC&tradeType=TRADE");
    }
}
