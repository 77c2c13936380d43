//! Private account endpoints: balances, ledgers, sub-accounts, API keys

use serde::Serialize;
use tracing::{debug, instrument};

use kucoin_types::AccountType;

use crate::error::RestResult;
use crate::transport::RestTransport;
use crate::types::Paginated;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    transport: &'a RestTransport,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(transport: &'a RestTransport) -> Self {
        Self { transport }
    }

    /// Get the account summary (VIP level, sub-account quota, etc.)
    #[instrument(skip(self))]
    pub async fn get_account_summary(&self) -> RestResult<AccountSummary> {
        debug!("Fetching account summary");
        self.transport
            .get_private("/api/v2/user-info", None::<&()>)
            .await
    }

    /// List account balances, optionally filtered
    ///
    /// # Arguments
    /// * `currency` - Currency filter (e.g., "BTC")
    /// * `account_type` - Account type filter
    #[instrument(skip(self))]
    pub async fn get_balances(
        &self,
        currency: Option<&str>,
        account_type: Option<AccountType>,
    ) -> RestResult<Vec<AccountBalance>> {
        #[derive(Serialize)]
        struct Query<'q> {
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'q str>,
            #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
            account_type: Option<AccountType>,
        }

        debug!("Fetching account balances");
        self.transport
            .get_private("/api/v1/accounts", Some(&Query { currency, account_type }))
            .await
    }

    /// Get a single account by ID
    #[instrument(skip(self))]
    pub async fn get_account(&self, account_id: &str) -> RestResult<AccountDetail> {
        debug!("Fetching account {}", account_id);
        self.transport
            .get_private(&format!("/api/v1/accounts/{account_id}"), None::<&()>)
            .await
    }

    /// Get paginated account ledgers
    #[instrument(skip(self))]
    pub async fn get_ledgers(
        &self,
        query: &LedgerQuery<'_>,
    ) -> RestResult<Paginated<LedgerEntry>> {
        debug!("Fetching account ledgers");
        self.transport
            .get_private("/api/v1/accounts/ledgers", Some(query))
            .await
    }

    /// Get HF account ledgers
    ///
    /// The HF surface returns a plain list ordered by `id`; pass the last
    /// seen `last_id` to page backwards.
    #[instrument(skip(self))]
    pub async fn get_hf_ledgers(&self, query: &HfLedgerQuery<'_>) -> RestResult<Vec<LedgerEntry>> {
        debug!("Fetching HF account ledgers");
        self.transport
            .get_private("/api/v1/hf/accounts/ledgers", Some(query))
            .await
    }

    /// Get HF margin account ledgers
    #[instrument(skip(self))]
    pub async fn get_hf_margin_ledgers(
        &self,
        query: &HfLedgerQuery<'_>,
    ) -> RestResult<Vec<LedgerEntry>> {
        debug!("Fetching HF margin ledgers");
        self.transport
            .get_private("/api/v3/hf/margin/account/ledgers", Some(query))
            .await
    }

    /// Check whether the account has opted into the HF (high-frequency) surface
    #[instrument(skip(self))]
    pub async fn get_user_type(&self) -> RestResult<bool> {
        debug!("Fetching user type");
        self.transport
            .get_private("/api/v1/hf/accounts/opened", None::<&()>)
            .await
    }

    // ========================================================================
    // Sub-accounts
    // ========================================================================

    /// List sub-accounts (v1, unpaginated)
    #[instrument(skip(self))]
    pub async fn get_sub_accounts(&self) -> RestResult<Vec<SubAccountInfo>> {
        debug!("Fetching sub-accounts");
        self.transport.get_private("/api/v1/sub/user", None::<&()>).await
    }

    /// List sub-accounts (v2, paginated)
    #[instrument(skip(self))]
    pub async fn get_sub_accounts_v2(
        &self,
        current_page: Option<u32>,
        page_size: Option<u32>,
    ) -> RestResult<Paginated<SubAccountInfo>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            current_page: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            page_size: Option<u32>,
        }

        debug!("Fetching sub-accounts (v2)");
        self.transport
            .get_private("/api/v2/sub/user", Some(&Query { current_page, page_size }))
            .await
    }

    /// Create a sub-account
    ///
    /// # Arguments
    /// * `sub_name` - Sub-account name (7-32 chars, letters and digits)
    /// * `password` - Sub-account password
    /// * `access` - Permission set ("Spot", "Futures", "Margin")
    /// * `remarks` - Optional remark
    #[instrument(skip(self, password))]
    pub async fn create_sub_account(
        &self,
        sub_name: &str,
        password: &str,
        access: &str,
        remarks: Option<&str>,
    ) -> RestResult<SubAccountInfo> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'b> {
            sub_name: &'b str,
            password: &'b str,
            access: &'b str,
            #[serde(skip_serializing_if = "Option::is_none")]
            remarks: Option<&'b str>,
        }

        debug!("Creating sub-account {}", sub_name);
        self.transport
            .post_private(
                "/api/v2/sub/user/created",
                &Body { sub_name, password, access, remarks },
            )
            .await
    }

    /// Get all balances of one sub-account
    #[instrument(skip(self))]
    pub async fn get_sub_account_balance(
        &self,
        sub_user_id: &str,
        include_base_amount: Option<bool>,
    ) -> RestResult<SubAccountBalances> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            include_base_amount: Option<bool>,
        }

        debug!("Fetching balances for sub-account {}", sub_user_id);
        self.transport
            .get_private(
                &format!("/api/v1/sub-accounts/{sub_user_id}"),
                Some(&Query { include_base_amount }),
            )
            .await
    }

    /// Get balances of all sub-accounts (v1, unpaginated)
    #[instrument(skip(self))]
    pub async fn get_sub_account_balances(&self) -> RestResult<Vec<SubAccountBalances>> {
        debug!("Fetching all sub-account balances");
        self.transport
            .get_private("/api/v1/sub-accounts", None::<&()>)
            .await
    }

    /// Get balances of all sub-accounts (v2, paginated)
    #[instrument(skip(self))]
    pub async fn get_sub_account_balances_v2(
        &self,
        current_page: Option<u32>,
        page_size: Option<u32>,
    ) -> RestResult<Paginated<SubAccountBalances>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            current_page: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            page_size: Option<u32>,
        }

        debug!("Fetching all sub-account balances (v2)");
        self.transport
            .get_private("/api/v2/sub-accounts", Some(&Query { current_page, page_size }))
            .await
    }

    // ========================================================================
    // Sub-account API keys
    // ========================================================================

    /// List API keys of a sub-account
    #[instrument(skip(self))]
    pub async fn get_sub_account_api_keys(
        &self,
        sub_name: &str,
        api_key: Option<&str>,
    ) -> RestResult<Vec<SubApiKeyInfo>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            sub_name: &'q str,
            #[serde(skip_serializing_if = "Option::is_none")]
            api_key: Option<&'q str>,
        }

        debug!("Fetching API keys for sub-account {}", sub_name);
        self.transport
            .get_private("/api/v1/sub/api-key", Some(&Query { sub_name, api_key }))
            .await
    }

    /// Create an API key for a sub-account
    #[instrument(skip(self, request))]
    pub async fn create_sub_account_api_key(
        &self,
        request: &SubApiKeyRequest<'_>,
    ) -> RestResult<SubApiKeyCreated> {
        debug!("Creating sub-account API key for {}", request.sub_name);
        self.transport
            .post_private("/api/v1/sub/api-key", request)
            .await
    }

    /// Modify a sub-account API key's permissions or IP whitelist
    #[instrument(skip(self, request))]
    pub async fn update_sub_account_api_key(
        &self,
        request: &SubApiKeyUpdateRequest<'_>,
    ) -> RestResult<SubApiKeyInfo> {
        debug!("Updating sub-account API key for {}", request.sub_name);
        self.transport
            .post_private("/api/v1/sub/api-key/update", request)
            .await
    }

    /// Delete a sub-account API key
    #[instrument(skip(self, passphrase))]
    pub async fn delete_sub_account_api_key(
        &self,
        sub_name: &str,
        api_key: &str,
        passphrase: &str,
    ) -> RestResult<SubApiKeyDeleted> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'q> {
            sub_name: &'q str,
            api_key: &'q str,
            passphrase: &'q str,
        }

        debug!("Deleting sub-account API key for {}", sub_name);
        self.transport
            .delete_private(
                "/api/v1/sub/api-key",
                Some(&Query { sub_name, api_key, passphrase }),
            )
            .await
    }
}

// Request and response types specific to account endpoints

use serde::Deserialize;

/// Query parameters for account ledgers
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerQuery<'q> {
    /// Currency filter (comma-separated, up to 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'q str>,
    /// Business direction filter ("in" or "out")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<&'q str>,
    /// Business type filter (e.g., "DEPOSIT", "TRANSFER")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_type: Option<&'q str>,
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

/// Query parameters for HF ledgers (cursor-paginated by ledger ID)
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HfLedgerQuery<'q> {
    /// Currency filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'q str>,
    /// Business direction filter ("in" or "out")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<&'q str>,
    /// Business type filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_type: Option<&'q str>,
    /// Return entries with IDs before this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,
    /// Max entries to return (default 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Start time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u64>,
    /// End time (milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<u64>,
}

/// Account summary returned by the user-info endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Account VIP level
    pub level: u32,
    /// Number of sub-accounts created
    pub sub_quantity: u32,
    /// Maximum sub-accounts allowed
    pub max_sub_quantity: u32,
    /// Sub-accounts with spot access
    pub spot_sub_quantity: Option<u32>,
    /// Sub-accounts with margin access
    pub margin_sub_quantity: Option<u32>,
    /// Sub-accounts with futures access
    pub futures_sub_quantity: Option<u32>,
}

/// One account's balance entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    /// Account ID
    pub id: String,
    /// Currency code
    pub currency: String,
    /// Account type
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Total balance
    pub balance: String,
    /// Available balance
    pub available: String,
    /// Amount on hold (open orders, pending withdrawals)
    pub holds: String,
}

/// Single-account detail (no ID in the payload)
#[derive(Debug, Clone, Deserialize)]
pub struct AccountDetail {
    /// Currency code
    pub currency: String,
    /// Total balance
    pub balance: String,
    /// Available balance
    pub available: String,
    /// Amount on hold
    pub holds: String,
}

/// One ledger entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Ledger entry ID
    pub id: String,
    /// Currency code
    pub currency: String,
    /// Change amount
    pub amount: String,
    /// Fee charged
    pub fee: String,
    /// Balance after the change
    pub balance: String,
    /// Direction ("in" or "out")
    pub direction: String,
    /// Business type (e.g., "TRANSFER", "TRADE_EXCHANGE")
    pub biz_type: String,
    /// Entry time (milliseconds)
    pub created_at: u64,
    /// Business context (JSON string)
    pub context: Option<String>,
}

/// Sub-account metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccountInfo {
    /// Sub-account user ID
    pub user_id: String,
    /// Sub-account UID
    pub uid: Option<u64>,
    /// Sub-account name
    pub sub_name: String,
    /// Permission set
    pub access: Option<String>,
    /// Remark set at creation
    pub remarks: Option<String>,
    /// Creation time (milliseconds)
    pub created_at: Option<u64>,
}

/// One currency balance inside a sub-account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccountCurrencyBalance {
    /// Currency code
    pub currency: String,
    /// Total balance
    pub balance: String,
    /// Available balance
    pub available: String,
    /// Amount on hold
    pub holds: String,
}

/// Balances of one sub-account, grouped by account type
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccountBalances {
    /// Sub-account user ID
    pub sub_user_id: String,
    /// Sub-account name
    pub sub_name: String,
    /// Funding account balances
    #[serde(default)]
    pub main_accounts: Vec<SubAccountCurrencyBalance>,
    /// Trade account balances
    #[serde(default)]
    pub trade_accounts: Vec<SubAccountCurrencyBalance>,
    /// Margin account balances
    #[serde(default)]
    pub margin_accounts: Vec<SubAccountCurrencyBalance>,
    /// HF trade account balances
    #[serde(default)]
    pub trade_hf_accounts: Vec<SubAccountCurrencyBalance>,
}

/// Request body for creating a sub-account API key
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubApiKeyRequest<'b> {
    /// Sub-account name
    pub sub_name: &'b str,
    /// Passphrase for the new key
    pub passphrase: &'b str,
    /// Key remark (1-24 chars)
    pub remark: &'b str,
    /// Permissions, comma-separated ("General,Trade")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<&'b str>,
    /// IP whitelist, comma-separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_whitelist: Option<&'b str>,
    /// Expiration in days (-1, 30, 90, 180, 360)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i32>,
}

/// Request body for updating a sub-account API key
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubApiKeyUpdateRequest<'b> {
    /// Sub-account name
    pub sub_name: &'b str,
    /// API key to modify
    pub api_key: &'b str,
    /// Key passphrase
    pub passphrase: &'b str,
    /// New permission set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<&'b str>,
    /// New IP whitelist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_whitelist: Option<&'b str>,
    /// New expiration in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i32>,
}

/// Sub-account API key metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubApiKeyInfo {
    /// Sub-account name
    pub sub_name: String,
    /// API key
    pub api_key: String,
    /// Key remark
    pub remark: Option<String>,
    /// Granted permissions
    pub permission: Option<String>,
    /// IP whitelist
    pub ip_whitelist: Option<String>,
    /// Creation time (milliseconds)
    pub created_at: Option<u64>,
}

/// Newly created sub-account API key (secret shown once)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubApiKeyCreated {
    /// Sub-account name
    pub sub_name: String,
    /// API key
    pub api_key: String,
    /// API secret, shown only in this response
    pub api_secret: String,
    /// Key passphrase
    pub passphrase: String,
    /// Granted permissions
    pub permission: Option<String>,
    /// Creation time (milliseconds)
    pub created_at: Option<u64>,
}

/// Confirmation of a deleted sub-account API key
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubApiKeyDeleted {
    /// Sub-account name
    pub sub_name: String,
    /// Deleted API key
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_balance_parsing() {
        let raw = r#"{
            "id":"5bd6e9286d99522a52e458de",
            "currency":"BTC",
            "type":"trade",
            "balance":"237582.04299",
            "available":"237582.032",
            "holds":"0.01099"
        }"#;
        let balance: AccountBalance = serde_json::from_str(raw).unwrap();
        assert_eq!(balance.account_type, AccountType::Trade);
        assert_eq!(balance.currency, "BTC");
    }

    #[test]
    fn test_ledger_entry_parsing() {
        let raw = r#"{
            "id":"611a1e7c6a053300067a88d9",
            "currency":"USDT",
            "amount":"10.00059547",
            "fee":"0",
            "balance":"0",
            "accountType":"TRADE",
            "bizType":"SUB_TRANSFER",
            "direction":"out",
            "createdAt":1629101692950,
            "context":""
        }"#;
        let entry: LedgerEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.direction, "out");
        assert_eq!(entry.biz_type, "SUB_TRANSFER");
    }

    #[test]
    fn test_ledger_query_serialization() {
        let query = LedgerQuery {
            currency: Some("BTC,ETH"),
            direction: Some("in"),
            page_size: Some(100),
            ..Default::default()
        };
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(encoded, "currency=BTC%2CETH&direction=in&pageSize=100");
    }

    #[test]
    fn test_sub_account_balances_default_groups() {
        let raw = r#"{
            "subUserId":"5caefba7d9575a0688f83c45",
            "subName":"sdfgsdfgsfd",
            "mainAccounts":[{
                "currency":"BTC",
                "balance":"8",
                "available":"8",
                "holds":"0"
            }]
        }"#;
        let balances: SubAccountBalances = serde_json::from_str(raw).unwrap();
        assert_eq!(balances.main_accounts.len(), 1);
        assert!(balances.trade_accounts.is_empty());
    }
}
