//! Private earn endpoints: fixed income products, staking, VIP lending

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::transport::RestTransport;
use crate::types::Paginated;

/// Private earn endpoints
pub struct EarnEndpoints<'a> {
    transport: &'a RestTransport,
}

impl<'a> EarnEndpoints<'a> {
    pub(crate) fn new(transport: &'a RestTransport) -> Self {
        Self { transport }
    }

    /// Subscribe to a fixed income product
    ///
    /// # Arguments
    /// * `product_id` - Product identifier from a product listing call
    /// * `amount` - Subscription amount
    /// * `account_type` - Funding source ("MAIN" or "TRADE")
    #[instrument(skip(self))]
    pub async fn subscribe(
        &self,
        product_id: &str,
        amount: &str,
        account_type: &str,
    ) -> RestResult<EarnSubscribeAck> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            product_id: &'b str,
            amount: &'b str,
            account_type: &'b str,
        }

        debug!("Subscribing {} to earn product {}", amount, product_id);
        self.transport
            .post_private("/api/v1/earn/orders", &Body { product_id, amount, account_type })
            .await
    }

    /// Redeem a holding
    ///
    /// Early redemption of a fixed product may forfeit accrued interest;
    /// set `confirm_punish_redeem` to acknowledge the penalty.
    #[instrument(skip(self))]
    pub async fn redeem(
        &self,
        order_id: &str,
        amount: &str,
        from_account_type: Option<&str>,
        confirm_punish_redeem: Option<&str>,
    ) -> RestResult<EarnRedeemAck> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            order_id: &'q str,
            amount: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            from_account_type: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            confirm_punish_redeem: Option<&'q str>,
        }

        debug!("Redeeming {} from earn order {}", amount, order_id);
        self.transport
            .delete_private(
                "/api/v1/earn/orders",
                Some(&Query { order_id, amount, from_account_type, confirm_punish_redeem }),
            )
            .await
    }

    /// Preview the outcome of redeeming a holding
    #[instrument(skip(self))]
    pub async fn get_redeem_preview(
        &self,
        order_id: &str,
        from_account_type: Option<&str>,
    ) -> RestResult<EarnRedeemPreview> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            order_id: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            from_account_type: Option<&'q str>,
        }

        debug!("Previewing redemption of earn order {}", order_id);
        self.transport
            .get_private(
                "/api/v1/earn/redeem-preview",
                Some(&Query { order_id, from_account_type }),
            )
            .await
    }

    /// List savings (flexible) products
    #[instrument(skip(self))]
    pub async fn get_savings_products(&self, currency: Option<&str>) -> RestResult<Vec<EarnProduct>> {
        debug!("Fetching savings products");
        self.transport
            .get_private("/api/v1/earn/saving/products", Some(&CurrencyQuery { currency }))
            .await
    }

    /// List current fixed income holdings
    #[instrument(skip(self, query))]
    pub async fn get_holdings(&self, query: &EarnHoldingQuery<'_>) -> RestResult<Paginated<EarnHolding>> {
        debug!("Fetching earn holdings");
        self.transport
            .get_private("/api/v1/earn/hold-assets", Some(query))
            .await
    }

    /// List limited-time promotion products
    #[instrument(skip(self))]
    pub async fn get_promotion_products(
        &self,
        currency: Option<&str>,
    ) -> RestResult<Vec<EarnProduct>> {
        debug!("Fetching promotion products");
        self.transport
            .get_private("/api/v1/earn/promotion/products", Some(&CurrencyQuery { currency }))
            .await
    }

    /// List KCS staking products
    #[instrument(skip(self))]
    pub async fn get_kcs_staking_products(
        &self,
        currency: Option<&str>,
    ) -> RestResult<Vec<EarnProduct>> {
        debug!("Fetching KCS staking products");
        self.transport
            .get_private("/api/v1/earn/kcs-staking/products", Some(&CurrencyQuery { currency }))
            .await
    }

    /// List general staking products
    #[instrument(skip(self))]
    pub async fn get_staking_products(&self, currency: Option<&str>) -> RestResult<Vec<EarnProduct>> {
        debug!("Fetching staking products");
        self.transport
            .get_private("/api/v1/earn/staking/products", Some(&CurrencyQuery { currency }))
            .await
    }

    /// List ETH staking products
    #[instrument(skip(self))]
    pub async fn get_eth_staking_products(&self) -> RestResult<Vec<EarnProduct>> {
        debug!("Fetching ETH staking products");
        self.transport
            .get_private("/api/v1/earn/eth-staking/products", None::<&()>)
            .await
    }

    // ========================================================================
    // VIP lending
    // ========================================================================

    /// Get outstanding OTC loan information
    #[instrument(skip(self))]
    pub async fn get_otc_loan(&self) -> RestResult<serde_json::Value> {
        debug!("Fetching OTC loan info");
        self.transport
            .get_private("/api/v1/otc-loan/loan", None::<&()>)
            .await
    }

    /// Get accounts pledged against OTC loans
    #[instrument(skip(self))]
    pub async fn get_otc_loan_accounts(&self) -> RestResult<Vec<serde_json::Value>> {
        debug!("Fetching OTC loan accounts");
        self.transport
            .get_private("/api/v1/otc-loan/accounts", None::<&()>)
            .await
    }
}

// Request and response types specific to earn endpoints

use serde::Deserialize;

#[derive(Serialize)]
struct CurrencyQuery<'q> {
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<&'q str>,
}

/// Query parameters for earn holdings
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnHoldingQuery<'q> {
    /// Product ID filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<&'q str>,
    /// Category filter ("DEMAND", "FIXED", "ACTIVITY", "KCS_STAKING", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<&'q str>,
    /// Currency filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'q str>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    /// Page size (10-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Acknowledgement of an earn subscription
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnSubscribeAck {
    /// Holding order ID
    pub order_id: String,
    /// Transaction ID of the subscription
    pub order_tx_id: String,
}

/// Acknowledgement of a redemption
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnRedeemAck {
    /// Transaction ID of the redemption
    pub order_tx_id: String,
    /// Expected delivery time (milliseconds)
    pub deliver_time: u64,
    /// Redemption status ("SUCCESS" or "PENDING")
    pub status: String,
    /// Redeemed amount
    pub amount: String,
}

/// Preview of a redemption's outcome
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnRedeemPreview {
    /// Currency of the holding
    pub currency: String,
    /// Redeemable amount
    pub redeem_amount: String,
    /// Interest forfeited by early redemption
    pub penalty_interest_amount: Option<String>,
    /// Redemption period in days
    pub redeem_period: Option<u32>,
    /// Expected delivery time (milliseconds)
    pub deliver_time: Option<u64>,
    /// Whether manual redemption is supported
    pub manual_redeemable: Option<bool>,
}

/// One earn product listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnProduct {
    /// Product ID
    pub id: String,
    /// Currency
    pub currency: String,
    /// Product category ("DEMAND", "FIXED", "ACTIVITY", ...)
    pub category: String,
    /// Annualized return rate
    pub return_rate: String,
    /// Income currency
    pub income_currency: Option<String>,
    /// Minimum subscription amount
    pub user_lower_limit: Option<String>,
    /// Maximum subscription amount
    pub user_upper_limit: Option<String>,
    /// Lock-up period in days (0 for flexible)
    pub lock_start_time: Option<u64>,
    /// Product status ("ONGOING", "PENDING", "FULL", "INTERESTING")
    pub status: String,
    /// Whether early redemption is allowed
    pub early_redeem_supported: Option<u8>,
}

/// One earn holding
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnHolding {
    /// Holding order ID
    pub order_id: String,
    /// Product ID
    pub product_id: String,
    /// Product category
    pub product_category: String,
    /// Currency
    pub currency: String,
    /// Income currency
    pub income_currency: Option<String>,
    /// Annualized return rate
    pub return_rate: Option<String>,
    /// Holding amount
    pub hold_amount: String,
    /// Holding status ("LOCKED" or "REDEEMING")
    pub status: String,
    /// Redemption period in days
    pub redeem_period: Option<u32>,
    /// Subscription time (milliseconds)
    pub purchase_time: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_parsing() {
        let raw = r#"{
            "id":"2152",
            "currency":"USDT",
            "category":"DEMAND",
            "type":"DEMAND",
            "precision":8,
            "productUpperLimit":"2000000",
            "userUpperLimit":"100000",
            "userLowerLimit":"1",
            "returnRate":"0.032",
            "incomeCurrency":"USDT",
            "earlyRedeemSupported":0,
            "productRemainAmount":"770947.1488",
            "status":"ONGOING",
            "redeemType":"MANUAL",
            "incomeReleaseType":"DAILY",
            "interestDate":1729267200000,
            "duration":0,
            "newUserOnly":0
        }"#;
        let product: EarnProduct = serde_json::from_str(raw).unwrap();
        assert_eq!(product.category, "DEMAND");
        assert_eq!(product.return_rate, "0.032");
    }

    #[test]
    fn test_redeem_ack_parsing() {
        let raw = r#"{
            "orderTxId":"6603694",
            "deliverTime":1729257185000,
            "status":"PENDING",
            "amount":"1"
        }"#;
        let ack: EarnRedeemAck = serde_json::from_str(raw).unwrap();
        assert_eq!(ack.status, "PENDING");
    }

    #[test]
    fn test_holding_parsing() {
        let raw = r#"{
            "orderId":"2767291",
            "productId":"2152",
            "productCategory":"DEMAND",
            "productType":"DEMAND",
            "currency":"USDT",
            "incomeCurrency":"USDT",
            "returnRate":"0.032",
            "holdAmount":"100",
            "redeemedAmount":"0",
            "redeemingAmount":"0",
            "lockStartTime":1729257185000,
            "status":"LOCKED",
            "redeemPeriod":0,
            "purchaseTime":1729257185000
        }"#;
        let holding: EarnHolding = serde_json::from_str(raw).unwrap();
        assert_eq!(holding.hold_amount, "100");
        assert_eq!(holding.status, "LOCKED");
    }
}
