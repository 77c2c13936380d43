//! Margin endpoints: HF margin orders, borrow/repay, isolated accounts, lending
//!
//! The info calls (mark prices, margin config, lending rates) are public;
//! everything else is signed.

use serde::Serialize;
use tracing::{debug, instrument};

use kucoin_types::{MarginMode, OrderSide, OrderType, TimeInForce};

use crate::error::RestResult;
use crate::transport::RestTransport;
use crate::types::Paginated;

/// Margin trading, borrowing, and lending endpoints
pub struct MarginEndpoints<'a> {
    transport: &'a RestTransport,
}

impl<'a> MarginEndpoints<'a> {
    pub(crate) fn new(transport: &'a RestTransport) -> Self {
        Self { transport }
    }

    // ========================================================================
    // HF margin orders
    // ========================================================================

    /// Place an HF margin order
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side))]
    pub async fn submit_hf_order(&self, order: &MarginOrderRequest<'_>) -> RestResult<MarginOrderAck> {
        debug!("Submitting HF margin order");
        self.transport
            .post_private("/api/v3/hf/margin/order", order)
            .await
    }

    /// Validate an HF margin order without placing it
    #[instrument(skip(self, order), fields(symbol = %order.symbol))]
    pub async fn submit_hf_order_test(&self, order: &MarginOrderRequest<'_>) -> RestResult<()> {
        debug!("Submitting test HF margin order");
        self.transport
            .post_private_optional::<serde_json::Value, _>("/api/v3/hf/margin/order/test", order)
            .await
            .map(|_| ())
    }

    /// Cancel an HF margin order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn cancel_hf_order(&self, order_id: &str, symbol: &str) -> RestResult<MarginCancelAck> {
        debug!("Cancelling HF margin order {}", order_id);
        self.transport
            .delete_private(
                &format!("/api/v3/hf/margin/orders/{order_id}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Cancel an HF margin order by client order ID
    #[instrument(skip(self))]
    pub async fn cancel_hf_order_by_client_oid(
        &self,
        client_oid: &str,
        symbol: &str,
    ) -> RestResult<MarginClientOidAck> {
        debug!("Cancelling HF margin order by clientOid {}", client_oid);
        self.transport
            .delete_private(
                &format!("/api/v3/hf/margin/orders/client-order/{client_oid}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Cancel all HF margin orders for one symbol and trade type
    #[instrument(skip(self))]
    pub async fn cancel_all_hf_orders_by_symbol(
        &self,
        symbol: &str,
        trade_type: &str,
    ) -> RestResult<String> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            symbol: &'q str,
            trade_type: &'q str,
        }

        debug!("Cancelling all HF margin orders for {}", symbol);
        self.transport
            .delete_private("/api/v3/hf/margin/orders", Some(&Query { symbol, trade_type }))
            .await
    }

    /// Get active HF margin orders
    #[instrument(skip(self))]
    pub async fn get_active_hf_orders(
        &self,
        trade_type: &str,
        symbol: &str,
    ) -> RestResult<Vec<serde_json::Value>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            trade_type: &'q str,
            symbol: &'q str,
        }

        debug!("Fetching active HF margin orders for {}", symbol);
        self.transport
            .get_private("/api/v3/hf/margin/orders/active", Some(&Query { trade_type, symbol }))
            .await
    }

    /// Get completed HF margin orders (cursor-paginated)
    #[instrument(skip(self, query))]
    pub async fn get_completed_hf_orders(
        &self,
        query: &HfMarginDoneQuery<'_>,
    ) -> RestResult<serde_json::Value> {
        debug!("Fetching completed HF margin orders");
        self.transport
            .get_private("/api/v3/hf/margin/orders/done", Some(query))
            .await
    }

    /// Get an HF margin order by its server-assigned ID
    #[instrument(skip(self))]
    pub async fn get_hf_order(&self, order_id: &str, symbol: &str) -> RestResult<serde_json::Value> {
        debug!("Fetching HF margin order {}", order_id);
        self.transport
            .get_private(
                &format!("/api/v3/hf/margin/orders/{order_id}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Get an HF margin order by client order ID
    #[instrument(skip(self))]
    pub async fn get_hf_order_by_client_oid(
        &self,
        client_oid: &str,
        symbol: &str,
    ) -> RestResult<serde_json::Value> {
        debug!("Fetching HF margin order by clientOid {}", client_oid);
        self.transport
            .get_private(
                &format!("/api/v3/hf/margin/orders/client-order/{client_oid}"),
                Some(&SymbolQuery { symbol }),
            )
            .await
    }

    /// Get HF margin fills (cursor-paginated)
    #[instrument(skip(self, query))]
    pub async fn get_hf_fills(&self, query: &HfMarginDoneQuery<'_>) -> RestResult<serde_json::Value> {
        debug!("Fetching HF margin fills");
        self.transport
            .get_private("/api/v3/hf/margin/fills", Some(query))
            .await
    }

    /// Get symbols that currently have active HF margin orders
    #[instrument(skip(self))]
    pub async fn get_active_hf_symbols(&self, trade_type: &str) -> RestResult<HfMarginActiveSymbols> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            trade_type: &'q str,
        }

        debug!("Fetching active HF margin symbols");
        self.transport
            .get_private("/api/v3/hf/margin/order/active/symbols", Some(&Query { trade_type }))
            .await
    }

    // ========================================================================
    // Regular margin orders
    // ========================================================================

    /// Place a margin order (v1)
    ///
    /// With `auto_borrow` set the exchange borrows any shortfall at
    /// placement; with `auto_repay` fills repay outstanding debt.
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side))]
    pub async fn submit_order(&self, order: &MarginOrderRequest<'_>) -> RestResult<MarginOrderAck> {
        debug!("Submitting margin order");
        self.transport.post_private("/api/v1/margin/order", order).await
    }

    /// Validate a margin order without placing it
    #[instrument(skip(self, order), fields(symbol = %order.symbol))]
    pub async fn submit_order_test(&self, order: &MarginOrderRequest<'_>) -> RestResult<()> {
        debug!("Submitting test margin order");
        self.transport
            .post_private_optional::<serde_json::Value, _>("/api/v1/margin/order/test", order)
            .await
            .map(|_| ())
    }

    // ========================================================================
    // Margin info (public)
    // ========================================================================

    /// Get leveraged token info
    #[instrument(skip(self))]
    pub async fn get_leveraged_token_info(&self, currency: Option<&str>) -> RestResult<Vec<serde_json::Value>> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'q str>,
        }

        debug!("Fetching leveraged token info");
        self.transport
            .get("/api/v3/etf/info", Some(&Query { currency }))
            .await
    }

    /// Get mark prices for all margin symbols
    #[instrument(skip(self))]
    pub async fn get_all_mark_prices(&self) -> RestResult<Vec<MarkPrice>> {
        debug!("Fetching all mark prices");
        self.transport
            .get("/api/v3/mark-price/all-symbols", None::<&()>)
            .await
    }

    /// Get the current mark price for one symbol
    #[instrument(skip(self))]
    pub async fn get_mark_price(&self, symbol: &str) -> RestResult<MarkPrice> {
        debug!("Fetching mark price for {}", symbol);
        self.transport
            .get(&format!("/api/v1/mark-price/{symbol}/current"), None::<&()>)
            .await
    }

    /// Get the cross margin configuration
    #[instrument(skip(self))]
    pub async fn get_margin_config(&self) -> RestResult<MarginConfig> {
        debug!("Fetching margin config");
        self.transport.get("/api/v1/margin/config", None::<&()>).await
    }

    /// Get cross/isolated margin risk limit and currency configuration
    ///
    /// # Arguments
    /// * `is_isolated` - true for isolated margin, false for cross
    /// * `symbol` - Required for isolated margin
    /// * `currency` - Required for cross margin
    #[instrument(skip(self))]
    pub async fn get_risk_limit_config(
        &self,
        is_isolated: bool,
        symbol: Option<&str>,
        currency: Option<&str>,
    ) -> RestResult<Vec<serde_json::Value>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            is_isolated: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'q str>,
        }

        debug!("Fetching margin risk limit config");
        self.transport
            .get_private(
                "/api/v3/margin/currencies",
                Some(&Query { is_isolated, symbol, currency }),
            )
            .await
    }

    // ========================================================================
    // Isolated margin
    // ========================================================================

    /// Get isolated margin symbol configuration
    #[instrument(skip(self))]
    pub async fn get_isolated_symbols(&self) -> RestResult<Vec<serde_json::Value>> {
        debug!("Fetching isolated margin symbols");
        self.transport
            .get_private("/api/v1/isolated/symbols", None::<&()>)
            .await
    }

    /// Get all isolated margin accounts
    #[instrument(skip(self))]
    pub async fn get_isolated_accounts(
        &self,
        balance_currency: Option<&str>,
    ) -> RestResult<IsolatedAccounts> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            balance_currency: Option<&'q str>,
        }

        debug!("Fetching isolated margin accounts");
        self.transport
            .get_private("/api/v1/isolated/accounts", Some(&Query { balance_currency }))
            .await
    }

    /// Get one isolated margin account by symbol
    #[instrument(skip(self))]
    pub async fn get_isolated_account(&self, symbol: &str) -> RestResult<IsolatedAssetDetail> {
        debug!("Fetching isolated margin account {}", symbol);
        self.transport
            .get_private(&format!("/api/v1/isolated/account/{symbol}"), None::<&()>)
            .await
    }

    // ========================================================================
    // Borrow / repay (v3)
    // ========================================================================

    /// Borrow a currency
    #[instrument(skip(self, request))]
    pub async fn borrow(&self, request: &BorrowRequest<'_>) -> RestResult<BorrowRepayAck> {
        debug!("Borrowing {} {}", request.size, request.currency);
        self.transport.post_private("/api/v3/margin/borrow", request).await
    }

    /// Repay a borrowed currency
    #[instrument(skip(self, request))]
    pub async fn repay(&self, request: &RepayRequest<'_>) -> RestResult<BorrowRepayAck> {
        debug!("Repaying {} {}", request.size, request.currency);
        self.transport.post_private("/api/v3/margin/repay", request).await
    }

    /// Get the paginated borrow history
    #[instrument(skip(self, query))]
    pub async fn get_borrow_history(
        &self,
        query: &BorrowRepayHistoryQuery<'_>,
    ) -> RestResult<Paginated<BorrowRepayRecord>> {
        debug!("Fetching borrow history");
        self.transport
            .get_private("/api/v3/margin/borrow", Some(query))
            .await
    }

    /// Get the paginated repay history
    #[instrument(skip(self, query))]
    pub async fn get_repay_history(
        &self,
        query: &BorrowRepayHistoryQuery<'_>,
    ) -> RestResult<Paginated<BorrowRepayRecord>> {
        debug!("Fetching repay history");
        self.transport
            .get_private("/api/v3/margin/repay", Some(query))
            .await
    }

    /// Get the paginated interest records
    #[instrument(skip(self, query))]
    pub async fn get_interest_records(
        &self,
        query: &InterestQuery<'_>,
    ) -> RestResult<Paginated<InterestRecord>> {
        debug!("Fetching interest records");
        self.transport
            .get_private("/api/v3/margin/interest", Some(query))
            .await
    }

    /// Get the margin trading pairs currently open for the account
    #[instrument(skip(self))]
    pub async fn get_active_pairs(&self, symbol: Option<&str>) -> RestResult<serde_json::Value> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'q str>,
        }

        debug!("Fetching active margin pairs");
        self.transport
            .get_private("/api/v3/margin/symbols", Some(&Query { symbol }))
            .await
    }

    /// Change the account's margin leverage for a symbol
    #[instrument(skip(self))]
    pub async fn update_leverage(
        &self,
        symbol: Option<&str>,
        leverage: &str,
        is_isolated: Option<bool>,
    ) -> RestResult<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'b str>,
            leverage: &'b str,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_isolated: Option<bool>,
        }

        debug!("Updating margin leverage to {}", leverage);
        self.transport
            .post_private_optional::<serde_json::Value, _>(
                "/api/v3/position/update-user-leverage",
                &Body { symbol, leverage, is_isolated },
            )
            .await
            .map(|_| ())
    }

    // ========================================================================
    // Lending (v3)
    // ========================================================================

    /// Get currencies available for lending
    #[instrument(skip(self))]
    pub async fn get_lending_currencies(&self, currency: Option<&str>) -> RestResult<Vec<serde_json::Value>> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'q str>,
        }

        debug!("Fetching lending currencies");
        self.transport
            .get_private("/api/v3/project/list", Some(&Query { currency }))
            .await
    }

    /// Get the market interest rate history for a currency (public)
    #[instrument(skip(self))]
    pub async fn get_lending_interest_rate(&self, currency: &str) -> RestResult<Vec<LendingRate>> {
        #[derive(Serialize)]
        struct Query<'q> {
            currency: &'q str,
        }

        debug!("Fetching lending interest rate for {}", currency);
        self.transport
            .get("/api/v3/project/marketInterestRate", Some(&Query { currency }))
            .await
    }

    /// Subscribe funds to lending
    #[instrument(skip(self))]
    pub async fn subscribe_lending(
        &self,
        currency: &str,
        size: &str,
        interest_rate: &str,
    ) -> RestResult<LendingOrderAck> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            currency: &'b str,
            size: &'b str,
            interest_rate: &'b str,
        }

        debug!("Subscribing {} {} to lending", size, currency);
        self.transport
            .post_private("/api/v3/purchase", &Body { currency, size, interest_rate })
            .await
    }

    /// Redeem a lending subscription
    #[instrument(skip(self))]
    pub async fn redeem_lending(
        &self,
        currency: &str,
        size: &str,
        purchase_order_no: &str,
    ) -> RestResult<LendingOrderAck> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            currency: &'b str,
            size: &'b str,
            purchase_order_no: &'b str,
        }

        debug!("Redeeming {} {} from lending", size, currency);
        self.transport
            .post_private("/api/v3/redeem", &Body { currency, size, purchase_order_no })
            .await
    }

    /// Change the interest rate of an active lending subscription
    #[instrument(skip(self))]
    pub async fn update_lending_subscription(
        &self,
        currency: &str,
        purchase_order_no: &str,
        interest_rate: &str,
    ) -> RestResult<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            currency: &'b str,
            purchase_order_no: &'b str,
            interest_rate: &'b str,
        }

        debug!("Updating lending subscription {}", purchase_order_no);
        self.transport
            .post_private_optional::<serde_json::Value, _>(
                "/api/v3/lend/purchase/update",
                &Body { currency, purchase_order_no, interest_rate },
            )
            .await
            .map(|_| ())
    }

    /// Get paginated lending redemption orders
    #[instrument(skip(self))]
    pub async fn get_redemption_orders(
        &self,
        currency: &str,
        status: &str,
        redeem_order_no: Option<&str>,
        current_page: Option<u32>,
        page_size: Option<u32>,
    ) -> RestResult<Paginated<serde_json::Value>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            currency: &'q str,
            status: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            redeem_order_no: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            current_page: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            page_size: Option<u32>,
        }

        debug!("Fetching lending redemption orders");
        self.transport
            .get_private(
                "/api/v3/redeem/orders",
                Some(&Query { currency, status, redeem_order_no, current_page, page_size }),
            )
            .await
    }

    /// Get paginated lending subscription orders
    #[instrument(skip(self))]
    pub async fn get_subscription_orders(
        &self,
        currency: &str,
        status: &str,
        purchase_order_no: Option<&str>,
        current_page: Option<u32>,
        page_size: Option<u32>,
    ) -> RestResult<Paginated<serde_json::Value>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            currency: &'q str,
            status: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            purchase_order_no: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            current_page: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            page_size: Option<u32>,
        }

        debug!("Fetching lending subscription orders");
        self.transport
            .get_private(
                "/api/v3/purchase/orders",
                Some(&Query { currency, status, purchase_order_no, current_page, page_size }),
            )
            .await
    }
}

// Request and response types specific to margin endpoints

use serde::Deserialize;

#[derive(Serialize)]
struct SymbolQuery<'q> {
    symbol: &'q str,
}

/// Parameters for placing a margin order (regular or HF)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginOrderRequest<'b> {
    /// Client-generated order ID
    pub client_oid: &'b str,
    /// Trading symbol
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
    /// Time in force
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Collateral scope; cross when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_model: Option<MarginMode>,
    /// Isolated margin flag for the HF surface
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_isolated: Option<bool>,
    /// Borrow any shortfall at placement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_borrow: Option<bool>,
    /// Use fills to repay outstanding debt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_repay: Option<bool>,
    /// Post-only flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
    /// Self-trade prevention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stp: Option<&'b str>,
    /// Remark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<&'b str>,
}

/// Acknowledgement of a margin order, including any triggered borrow
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginOrderAck {
    /// Server-assigned order ID
    pub order_id: String,
    /// Amount borrowed by auto-borrow
    pub borrow_size: Option<String>,
    /// Loan application ID when a borrow was triggered
    pub loan_apply_id: Option<String>,
}

/// Acknowledgement of an HF margin cancellation by order ID
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginCancelAck {
    /// Cancelled order ID
    pub order_id: String,
}

/// Acknowledgement of an HF margin cancellation by client order ID
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginClientOidAck {
    /// Cancelled client order ID
    pub client_oid: String,
}

/// Query parameters for completed HF margin orders and fills
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HfMarginDoneQuery<'q> {
    /// Trading symbol (required)
    pub symbol: &'q str,
    /// Trade context ("MARGIN_TRADE" or "MARGIN_ISOLATED_TRADE")
    pub trade_type: &'q str,
    /// Side filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Order type filter
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Return entries with IDs before this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,
    /// Max entries to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Start time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u64>,
    /// End time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<u64>,
}

/// Symbols with active HF margin orders
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HfMarginActiveSymbols {
    /// Number of symbols
    pub symbol_size: u32,
    /// Symbol list
    pub symbols: Vec<String>,
}

/// Mark price of one symbol
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkPrice {
    /// Symbol code
    pub symbol: String,
    /// Snapshot time (milliseconds)
    pub time_point: u64,
    /// Mark price value
    pub value: f64,
}

/// Cross margin configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginConfig {
    /// Currencies usable as collateral
    pub currency_list: Vec<String>,
    /// Warning debt ratio
    pub warning_debt_ratio: String,
    /// Liquidation debt ratio
    pub liq_debt_ratio: String,
    /// Maximum leverage
    pub max_leverage: u32,
}

/// All isolated margin accounts with totals
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolatedAccounts {
    /// Total BTC-equivalent assets
    pub total_conversion_balance: String,
    /// Total BTC-equivalent liabilities
    pub liability_conversion_balance: String,
    /// Per-symbol accounts
    pub assets: Vec<IsolatedAssetDetail>,
}

/// One isolated margin account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolatedAssetDetail {
    /// Trading symbol
    pub symbol: String,
    /// Position status ("CLEAR", "DEBT", "IN_BORROW", "BANKRUPTCY", ...)
    pub status: String,
    /// Debt ratio
    pub debt_ratio: String,
    /// Base currency side
    pub base_asset: IsolatedAssetSide,
    /// Quote currency side
    pub quote_asset: IsolatedAssetSide,
}

/// One side (base or quote) of an isolated margin account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolatedAssetSide {
    /// Currency code
    pub currency: String,
    /// Total balance
    pub total_balance: String,
    /// Amount on hold
    pub hold_balance: String,
    /// Available balance
    pub available_balance: String,
    /// Borrowed amount
    pub liability: String,
    /// Accrued interest
    pub interest: String,
    /// Maximum borrowable amount
    pub borrowable_amount: String,
}

/// Request body for borrowing (v3)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest<'b> {
    /// Currency to borrow
    pub currency: &'b str,
    /// Amount to borrow
    pub size: &'b str,
    /// Borrow strategy ("FOK" or "IOC")
    pub time_in_force: &'b str,
    /// Isolated margin flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_isolated: Option<bool>,
    /// Isolated margin symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'b str>,
    /// Borrow against the HF account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hf: Option<bool>,
}

/// Request body for repaying (v3)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepayRequest<'b> {
    /// Currency to repay
    pub currency: &'b str,
    /// Amount to repay
    pub size: &'b str,
    /// Isolated margin flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_isolated: Option<bool>,
    /// Isolated margin symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'b str>,
    /// Repay from the HF account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hf: Option<bool>,
}

/// Acknowledgement of a borrow or repay
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRepayAck {
    /// Server-assigned order number
    pub order_no: String,
    /// Actual borrowed/repaid size
    pub actual_size: String,
}

/// Query parameters for borrow/repay history
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRepayHistoryQuery<'q> {
    /// Currency filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'q str>,
    /// Isolated margin flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_isolated: Option<bool>,
    /// Isolated margin symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'q str>,
    /// Order number filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_no: Option<&'q str>,
    /// Start time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    /// Page size (10-500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// One borrow or repay record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRepayRecord {
    /// Server-assigned order number
    pub order_no: String,
    /// Currency
    pub currency: String,
    /// Requested size
    pub size: String,
    /// Actual filled size
    pub actual_size: String,
    /// Status ("PENDING", "SUCCESS", "FAILED")
    pub status: String,
    /// Record time (milliseconds)
    pub created_time: u64,
    /// Isolated margin flag
    pub is_isolated: Option<bool>,
    /// Isolated margin symbol
    pub symbol: Option<String>,
}

/// Query parameters for interest records
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestQuery<'q> {
    /// Currency filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'q str>,
    /// Isolated margin flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_isolated: Option<bool>,
    /// Isolated margin symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'q str>,
    /// Start time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    /// Page size (10-500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// One accrued-interest record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRecord {
    /// Currency
    pub currency: String,
    /// Daily interest rate applied
    pub day_ratio: String,
    /// Interest amount accrued
    pub interest_amount: String,
    /// Accrual time (milliseconds)
    pub created_time: u64,
}

/// One point of lending market interest rate history
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingRate {
    /// Hour bucket ("202303261200")
    pub time: String,
    /// Market rate for the hour
    pub market_interest_rate: String,
}

/// Acknowledgement of a lending subscription or redemption
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingOrderAck {
    /// Order number of the subscription/redemption
    pub order_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_order_auto_borrow_serialization() {
        let order = MarginOrderRequest {
            client_oid: "oid-1",
            symbol: "BTC-USDT",
            side: OrderSide::Buy,
            order_type: OrderType::Limit,
            price: Some("50000"),
            size: Some("0.01"),
            funds: None,
            time_in_force: None,
            margin_model: Some(MarginMode::Isolated),
            is_isolated: None,
            auto_borrow: Some(true),
            auto_repay: None,
            post_only: None,
            stp: None,
            remark: None,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["marginModel"], "isolated");
        assert_eq!(json["autoBorrow"], true);
        assert!(json.get("autoRepay").is_none());
    }

    #[test]
    fn test_margin_ack_with_borrow() {
        let raw = r#"{
            "orderId":"5bd6e9286d99522a52e458de",
            "borrowSize":"10.2",
            "loanApplyId":"600656d9a33ac90009de4f6f"
        }"#;
        let ack: MarginOrderAck = serde_json::from_str(raw).unwrap();
        assert_eq!(ack.borrow_size.as_deref(), Some("10.2"));
    }

    #[test]
    fn test_isolated_account_parsing() {
        let raw = r#"{
            "symbol":"MANA-USDT",
            "status":"CLEAR",
            "debtRatio":"0",
            "baseAsset":{
                "currency":"MANA",
                "totalBalance":"0",
                "holdBalance":"0",
                "availableBalance":"0",
                "liability":"0",
                "interest":"0",
                "borrowableAmount":"0"
            },
            "quoteAsset":{
                "currency":"USDT",
                "totalBalance":"0",
                "holdBalance":"0",
                "availableBalance":"0",
                "liability":"0",
                "interest":"0",
                "borrowableAmount":"0"
            }
        }"#;
        let account: IsolatedAssetDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(account.status, "CLEAR");
        assert_eq!(account.base_asset.currency, "MANA");
    }

    #[test]
    fn test_borrow_record_parsing() {
        let raw = r#"{
            "orderNo":"5da6dba0f943c0c81f5d5db5",
            "symbol":"BTC-USDT",
            "currency":"USDT",
            "size":"100",
            "actualSize":"100",
            "status":"SUCCESS",
            "createdTime":1555056425000,
            "isIsolated":true
        }"#;
        let record: BorrowRepayRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.status, "SUCCESS");
        assert_eq!(record.is_isolated, Some(true));
    }
}
