//! Private funding endpoints: deposits, withdrawals, transfers, fees

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::transport::RestTransport;
use crate::types::Paginated;

/// Private funding endpoints
pub struct FundingEndpoints<'a> {
    transport: &'a RestTransport,
}

impl<'a> FundingEndpoints<'a> {
    pub(crate) fn new(transport: &'a RestTransport) -> Self {
        Self { transport }
    }

    // ========================================================================
    // Margin balances
    // ========================================================================

    /// Get the cross margin account overview
    #[instrument(skip(self))]
    pub async fn get_margin_account(&self) -> RestResult<MarginAccountOverview> {
        debug!("Fetching margin account overview");
        self.transport
            .get_private("/api/v1/margin/account", None::<&()>)
            .await
    }

    /// Get cross margin balances (v3)
    ///
    /// # Arguments
    /// * `quote_currency` - Quote currency filter (e.g., "USDT")
    /// * `query_type` - Account scope ("MARGIN", "MARGIN_V2", "ALL")
    #[instrument(skip(self))]
    pub async fn get_cross_margin_balance(
        &self,
        quote_currency: Option<&str>,
        query_type: Option<&str>,
    ) -> RestResult<serde_json::Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            quote_currency: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            query_type: Option<&'q str>,
        }

        debug!("Fetching cross margin balance");
        self.transport
            .get_private(
                "/api/v3/margin/accounts",
                Some(&Query { quote_currency, query_type }),
            )
            .await
    }

    /// Get isolated margin balances (v3)
    #[instrument(skip(self))]
    pub async fn get_isolated_margin_balance(
        &self,
        symbol: Option<&str>,
        quote_currency: Option<&str>,
    ) -> RestResult<serde_json::Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            symbol: Option<&'q str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            quote_currency: Option<&'q str>,
        }

        debug!("Fetching isolated margin balance");
        self.transport
            .get_private(
                "/api/v3/isolated/accounts",
                Some(&Query { symbol, quote_currency }),
            )
            .await
    }

    // ========================================================================
    // Deposits
    // ========================================================================

    /// Create a deposit address (v1)
    #[instrument(skip(self))]
    pub async fn create_deposit_address(
        &self,
        currency: &str,
        chain: Option<&str>,
    ) -> RestResult<DepositAddress> {
        #[derive(Serialize)]
        struct Body<'b> {
            currency: &'b str,
            #[serde(skip_serializing_if = "Option::is_none")]
            chain: Option<&'b str>,
        }

        debug!("Creating deposit address for {}", currency);
        self.transport
            .post_private("/api/v1/deposit-addresses", &Body { currency, chain })
            .await
    }

    /// Create a deposit address (v3)
    ///
    /// # Arguments
    /// * `currency` - Currency code
    /// * `chain` - Chain identifier (e.g., "trx")
    /// * `to` - Receiving account ("main" or "trade")
    #[instrument(skip(self))]
    pub async fn create_deposit_address_v3(
        &self,
        currency: &str,
        chain: Option<&str>,
        to: Option<&str>,
    ) -> RestResult<DepositAddress> {
        #[derive(Serialize)]
        struct Body<'b> {
            currency: &'b str,
            #[serde(skip_serializing_if = "Option::is_none")]
            chain: Option<&'b str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            to: Option<&'b str>,
        }

        debug!("Creating v3 deposit address for {}", currency);
        self.transport
            .post_private(
                "/api/v3/deposit-address/create",
                &Body { currency, chain, to },
            )
            .await
    }

    /// Get the deposit address for a currency (v1, single address)
    #[instrument(skip(self))]
    pub async fn get_deposit_address(
        &self,
        currency: &str,
        chain: Option<&str>,
    ) -> RestResult<DepositAddress> {
        debug!("Fetching deposit address for {}", currency);
        self.transport
            .get_private(
                "/api/v1/deposit-addresses",
                Some(&AddressQuery { currency, chain, amount: None }),
            )
            .await
    }

    /// Get all deposit addresses for a currency (v2)
    #[instrument(skip(self))]
    pub async fn get_deposit_addresses_v2(&self, currency: &str) -> RestResult<Vec<DepositAddress>> {
        debug!("Fetching v2 deposit addresses for {}", currency);
        self.transport
            .get_private(
                "/api/v2/deposit-addresses",
                Some(&AddressQuery { currency, chain: None, amount: None }),
            )
            .await
    }

    /// Get all deposit addresses for a currency (v3)
    #[instrument(skip(self))]
    pub async fn get_deposit_addresses_v3(
        &self,
        currency: &str,
        chain: Option<&str>,
        amount: Option<&str>,
    ) -> RestResult<Vec<DepositAddress>> {
        debug!("Fetching v3 deposit addresses for {}", currency);
        self.transport
            .get_private(
                "/api/v3/deposit-addresses",
                Some(&AddressQuery { currency, chain, amount }),
            )
            .await
    }

    /// Get the paginated deposit list
    #[instrument(skip(self))]
    pub async fn get_deposits(
        &self,
        query: &TransferRecordQuery<'_>,
    ) -> RestResult<Paginated<DepositRecord>> {
        debug!("Fetching deposits");
        self.transport
            .get_private("/api/v1/deposits", Some(query))
            .await
    }

    /// Get historical deposits (pre-2019 records, v1)
    #[instrument(skip(self))]
    pub async fn get_historical_deposits(
        &self,
        query: &TransferRecordQuery<'_>,
    ) -> RestResult<Paginated<serde_json::Value>> {
        debug!("Fetching historical deposits");
        self.transport
            .get_private("/api/v1/hist-deposits", Some(query))
            .await
    }

    // ========================================================================
    // Withdrawals
    // ========================================================================

    /// Get the paginated withdrawal list
    #[instrument(skip(self))]
    pub async fn get_withdrawals(
        &self,
        query: &TransferRecordQuery<'_>,
    ) -> RestResult<Paginated<WithdrawalRecord>> {
        debug!("Fetching withdrawals");
        self.transport
            .get_private("/api/v1/withdrawals", Some(query))
            .await
    }

    /// Get historical withdrawals (pre-2019 records, v1)
    #[instrument(skip(self))]
    pub async fn get_historical_withdrawals(
        &self,
        query: &TransferRecordQuery<'_>,
    ) -> RestResult<Paginated<serde_json::Value>> {
        debug!("Fetching historical withdrawals");
        self.transport
            .get_private("/api/v1/hist-withdrawals", Some(query))
            .await
    }

    /// Get withdrawal quotas for a currency
    #[instrument(skip(self))]
    pub async fn get_withdrawal_quotas(
        &self,
        currency: &str,
        chain: Option<&str>,
    ) -> RestResult<WithdrawalQuota> {
        #[derive(Serialize)]
        struct Query<'q> {
            currency: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            chain: Option<&'q str>,
        }

        debug!("Fetching withdrawal quotas for {}", currency);
        self.transport
            .get_private("/api/v1/withdrawals/quotas", Some(&Query { currency, chain }))
            .await
    }

    /// Submit a withdrawal (v1)
    #[instrument(skip(self, request))]
    pub async fn submit_withdrawal(
        &self,
        request: &WithdrawalRequest<'_>,
    ) -> RestResult<WithdrawalSubmitted> {
        debug!("Submitting withdrawal of {}", request.currency);
        self.transport
            .post_private("/api/v1/withdrawals", request)
            .await
    }

    /// Submit a withdrawal (v3, requires `withdraw_type`)
    #[instrument(skip(self, request))]
    pub async fn submit_withdrawal_v3(
        &self,
        request: &WithdrawalRequest<'_>,
    ) -> RestResult<WithdrawalSubmitted> {
        debug!("Submitting v3 withdrawal of {}", request.currency);
        self.transport
            .post_private("/api/v3/withdrawals", request)
            .await
    }

    /// Cancel a pending withdrawal
    ///
    /// Only withdrawals still in PROCESSING state can be cancelled.
    #[instrument(skip(self))]
    pub async fn cancel_withdrawal(&self, withdrawal_id: &str) -> RestResult<()> {
        debug!("Cancelling withdrawal {}", withdrawal_id);
        self.transport
            .delete_private_optional::<serde_json::Value, ()>(
                &format!("/api/v1/withdrawals/{withdrawal_id}"),
                None,
            )
            .await
            .map(|_| ())
    }

    // ========================================================================
    // Transfers
    // ========================================================================

    /// Get the transferable balance of an account
    #[instrument(skip(self))]
    pub async fn get_transferable(
        &self,
        currency: &str,
        account_type: &str,
        tag: Option<&str>,
    ) -> RestResult<TransferableBalance> {
        #[derive(Serialize)]
        struct Query<'q> {
            currency: &'q str,
            #[serde(rename = "type")]
            account_type: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            tag: Option<&'q str>,
        }

        debug!("Fetching transferable {} balance", currency);
        self.transport
            .get_private(
                "/api/v1/accounts/transferable",
                Some(&Query { currency, account_type, tag }),
            )
            .await
    }

    /// Universal (flex) transfer between any two accounts
    #[instrument(skip(self, request))]
    pub async fn flex_transfer(
        &self,
        request: &FlexTransferRequest<'_>,
    ) -> RestResult<TransferResult> {
        debug!("Submitting flex transfer of {}", request.currency);
        self.transport
            .post_private("/api/v3/accounts/universal-transfer", request)
            .await
    }

    /// Transfer between master and sub-account (v2)
    #[instrument(skip(self, request))]
    pub async fn master_sub_transfer(
        &self,
        request: &MasterSubTransferRequest<'_>,
    ) -> RestResult<TransferResult> {
        debug!("Submitting master-sub transfer of {}", request.currency);
        self.transport
            .post_private("/api/v2/accounts/sub-transfer", request)
            .await
    }

    /// Transfer between this account's own sub-accounts (v2)
    #[instrument(skip(self, request))]
    pub async fn inner_transfer(
        &self,
        request: &InnerTransferRequest<'_>,
    ) -> RestResult<TransferResult> {
        debug!("Submitting inner transfer of {}", request.currency);
        self.transport
            .post_private("/api/v2/accounts/inner-transfer", request)
            .await
    }

    // ========================================================================
    // Fees
    // ========================================================================

    /// Get the account's base maker/taker fee rates
    ///
    /// # Arguments
    /// * `currency_type` - 0 for crypto pairs (default), 1 for fiat pairs
    #[instrument(skip(self))]
    pub async fn get_base_fee(&self, currency_type: Option<u8>) -> RestResult<FeeRates> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            currency_type: Option<u8>,
        }

        debug!("Fetching base fee rates");
        self.transport
            .get_private("/api/v1/base-fee", Some(&Query { currency_type }))
            .await
    }

    /// Get actual fee rates for up to 10 trading pairs
    ///
    /// # Arguments
    /// * `symbols` - Comma-separated symbols (e.g., "BTC-USDT,ETH-USDT")
    #[instrument(skip(self))]
    pub async fn get_trading_pair_fees(&self, symbols: &str) -> RestResult<Vec<SymbolFeeRates>> {
        #[derive(Serialize)]
        struct Query<'q> {
            symbols: &'q str,
        }

        debug!("Fetching trading pair fees");
        self.transport
            .get_private("/api/v1/trade-fees", Some(&Query { symbols }))
            .await
    }
}

// Request and response types specific to funding endpoints

use serde::Deserialize;

#[derive(Serialize)]
struct AddressQuery<'q> {
    currency: &'q str,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<&'q str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<&'q str>,
}

/// Common query parameters for deposit/withdrawal record lists
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecordQuery<'q> {
    /// Currency filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'q str>,
    /// Status filter ("PROCESSING", "SUCCESS", "FAILURE")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'q str>,
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

/// Cross margin account overview (v1)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginAccountOverview {
    /// Total debt ratio
    pub debt_ratio: String,
    /// Per-currency margin balances
    pub accounts: Vec<MarginAccountEntry>,
}

/// One currency entry in the margin account overview
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginAccountEntry {
    /// Currency code
    pub currency: String,
    /// Total balance
    pub total_balance: String,
    /// Available balance
    pub available_balance: String,
    /// Amount on hold
    pub hold_balance: String,
    /// Borrowed amount
    pub liability: String,
    /// Maximum borrowable amount
    pub max_borrow_size: String,
}

/// A deposit address
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAddress {
    /// Deposit address
    pub address: String,
    /// Address memo/tag, required by some chains
    pub memo: Option<String>,
    /// Chain name
    pub chain: Option<String>,
    /// Chain identifier
    pub chain_id: Option<String>,
    /// Receiving account ("main" or "trade")
    pub to: Option<String>,
    /// Currency code
    pub currency: Option<String>,
}

/// One deposit record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    /// Currency code
    pub currency: String,
    /// Deposit address
    pub address: String,
    /// Address memo
    pub memo: Option<String>,
    /// Deposited amount
    pub amount: String,
    /// Fee charged
    pub fee: String,
    /// Chain transaction hash
    pub wallet_tx_id: Option<String>,
    /// Whether this was an internal (off-chain) deposit
    pub is_inner: bool,
    /// Status ("PROCESSING", "SUCCESS", "FAILURE")
    pub status: String,
    /// Creation time (milliseconds)
    pub created_at: u64,
    /// Last update time (milliseconds)
    pub updated_at: u64,
}

/// One withdrawal record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRecord {
    /// Withdrawal ID
    pub id: String,
    /// Currency code
    pub currency: String,
    /// Destination address
    pub address: String,
    /// Address memo
    pub memo: Option<String>,
    /// Withdrawn amount
    pub amount: String,
    /// Fee charged
    pub fee: String,
    /// Chain transaction hash
    pub wallet_tx_id: Option<String>,
    /// Whether this was an internal (off-chain) withdrawal
    pub is_inner: bool,
    /// Status ("PROCESSING", "WALLET_PROCESSING", "SUCCESS", "FAILURE")
    pub status: String,
    /// Creation time (milliseconds)
    pub created_at: u64,
    /// Last update time (milliseconds)
    pub updated_at: u64,
}

/// Withdrawal limits and state for one currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalQuota {
    /// Currency code
    pub currency: String,
    /// Maximum BTC-equivalent withdrawal in 24h
    pub limit_btc_amount: String,
    /// BTC-equivalent already withdrawn in 24h
    pub used_btc_amount: String,
    /// Remaining withdrawable amount in this currency
    pub available_amount: String,
    /// Withdrawal fee
    pub withdraw_min_fee: String,
    /// Minimum withdrawal amount
    pub withdraw_min_size: String,
    /// Whether withdrawals are open
    pub is_withdraw_enabled: bool,
    /// Withdrawal amount precision
    pub precision: u32,
    /// Chain identifier
    pub chain: Option<String>,
}

/// Request body for submitting a withdrawal
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest<'b> {
    /// Currency code
    pub currency: &'b str,
    /// Destination address
    pub address: &'b str,
    /// Withdrawal amount
    pub amount: &'b str,
    /// Address memo, required by some chains
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<&'b str>,
    /// Chain identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<&'b str>,
    /// Whether this is an internal (off-chain) withdrawal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inner: Option<bool>,
    /// Remark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<&'b str>,
    /// Fee deduction type ("INTERNAL" or "EXTERNAL")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_deduct_type: Option<&'b str>,
    /// Withdrawal type for the v3 endpoint ("ADDRESS", "UID", "MAIL", "PHONE")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdraw_type: Option<&'b str>,
}

/// Acknowledgement of a submitted withdrawal
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalSubmitted {
    /// Server-assigned withdrawal ID
    pub withdrawal_id: String,
}

/// Transferable balance of one account
#[derive(Debug, Clone, Deserialize)]
pub struct TransferableBalance {
    /// Currency code
    pub currency: String,
    /// Total balance
    pub balance: String,
    /// Available balance
    pub available: String,
    /// Amount on hold
    pub holds: String,
    /// Amount transferable out
    pub transferable: String,
}

/// Request body for a universal (flex) transfer
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexTransferRequest<'b> {
    /// Client-generated order ID
    pub client_oid: &'b str,
    /// Currency code
    pub currency: &'b str,
    /// Transfer amount
    pub amount: &'b str,
    /// Transfer direction ("INTERNAL", "PARENT_TO_SUB", "SUB_TO_PARENT")
    #[serde(rename = "type")]
    pub transfer_type: &'b str,
    /// Source account type ("MAIN", "TRADE", "MARGIN", ...)
    pub from_account_type: &'b str,
    /// Destination account type
    pub to_account_type: &'b str,
    /// Source sub-account user ID (sub transfers only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_user_id: Option<&'b str>,
    /// Destination sub-account user ID (sub transfers only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_user_id: Option<&'b str>,
    /// Isolated margin symbol, when either side is isolated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_account_tag: Option<&'b str>,
    /// Isolated margin symbol, when either side is isolated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_account_tag: Option<&'b str>,
}

/// Request body for a master/sub-account transfer (v2)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterSubTransferRequest<'b> {
    /// Client-generated order ID
    pub client_oid: &'b str,
    /// Currency code
    pub currency: &'b str,
    /// Transfer amount
    pub amount: &'b str,
    /// "OUT" (master to sub) or "IN" (sub to master)
    pub direction: &'b str,
    /// Sub-account user ID
    pub sub_user_id: &'b str,
    /// Master account type ("MAIN", "TRADE")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<&'b str>,
    /// Sub-account type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_account_type: Option<&'b str>,
}

/// Request body for an inner transfer between own accounts (v2)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerTransferRequest<'b> {
    /// Client-generated order ID
    pub client_oid: &'b str,
    /// Currency code
    pub currency: &'b str,
    /// Transfer amount
    pub amount: &'b str,
    /// Source account type ("main", "trade", "margin", "isolated")
    pub from: &'b str,
    /// Destination account type
    pub to: &'b str,
    /// Source isolated margin symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_tag: Option<&'b str>,
    /// Destination isolated margin symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_tag: Option<&'b str>,
}

/// Acknowledgement of a transfer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResult {
    /// Server-assigned transfer order ID
    pub order_id: String,
}

/// Base maker/taker fee rates
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRates {
    /// Taker fee rate
    pub taker_fee_rate: String,
    /// Maker fee rate
    pub maker_fee_rate: String,
}

/// Actual fee rates for one trading pair
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolFeeRates {
    /// Symbol code
    pub symbol: String,
    /// Taker fee rate
    pub taker_fee_rate: String,
    /// Maker fee rate
    pub maker_fee_rate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withdrawal_request_serialization() {
        let request = WithdrawalRequest {
            currency: "BTC",
            address: "bc1qfoo",
            amount: "0.5",
            memo: None,
            chain: Some("btc"),
            is_inner: None,
            remark: None,
            fee_deduct_type: None,
            withdraw_type: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["currency"], "BTC");
        assert_eq!(json["chain"], "btc");
        assert!(json.get("memo").is_none());
    }

    #[test]
    fn test_deposit_record_parsing() {
        let raw = r#"{
            "currency":"XRP",
            "chain":"xrp",
            "status":"SUCCESS",
            "address":"rNFugeoj3ZN8Wv6xhuLegUBBPXKCyWLRkB",
            "memo":"1919537769",
            "isInner":false,
            "amount":"20.50000000",
            "fee":"0.00000000",
            "walletTxId":"2C24A6D5B3E7D5B6AA6534025B9B107AC910309A98825BF5581E25BEC94AD83B",
            "createdAt":1666600519000,
            "updatedAt":1666600549000,
            "remark":"Deposit"
        }"#;
        let record: DepositRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.status, "SUCCESS");
        assert!(!record.is_inner);
    }

    #[test]
    fn test_inner_transfer_serialization() {
        let request = InnerTransferRequest {
            client_oid: "64ccc0f164781800010d8c09",
            currency: "USDT",
            amount: "100",
            from: "main",
            to: "trade",
            from_tag: None,
            to_tag: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["clientOid"], "64ccc0f164781800010d8c09");
        assert_eq!(json["from"], "main");
    }

    #[test]
    fn test_margin_overview_parsing() {
        let raw = r#"{
            "debtRatio":"0.33",
            "accounts":[{
                "currency":"USDT",
                "totalBalance":"5000",
                "availableBalance":"4000",
                "holdBalance":"1000",
                "liability":"1500",
                "maxBorrowSize":"7500"
            }]
        }"#;
        let overview: MarginAccountOverview = serde_json::from_str(raw).unwrap();
        assert_eq!(overview.accounts.len(), 1);
        assert_eq!(overview.accounts[0].liability, "1500");
    }
}
