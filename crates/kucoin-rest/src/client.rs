//! Spot and futures client facades

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::info;

use kucoin_auth::Credentials;

use crate::endpoints::{
    AccountEndpoints, EarnEndpoints, FundingEndpoints, FuturesEndpoints, HfTradingEndpoints,
    MarginEndpoints, MarketEndpoints, TradingEndpoints, WsEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::transport::RestTransport;
use crate::types::{ClockDrift, Ticker};

/// Spot/Margin/Earn API base URL
pub const SPOT_BASE_URL: &str = "https://api.kucoin.com";
/// Futures API base URL
pub const FUTURES_BASE_URL: &str = "https://api-futures.kucoin.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// KuCoin spot REST client
///
/// Covers the Spot, Margin, HF, and Earn endpoint groups plus the
/// WebSocket bootstrap calls.
///
/// # Example
///
/// ```no_run
/// use kucoin_rest::{Credentials, SpotClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = SpotClient::new();
///     let ticker = client.get_ticker("BTC-USDT").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = SpotClient::with_credentials(creds);
///     let balances = auth_client.get_balances(None).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotClient {
    transport: RestTransport,
}

impl SpotClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| SPOT_BASE_URL.to_string());
        let transport = RestTransport::new(config.build_http(), base_url, config.credentials);

        info!("Created KuCoin spot REST client");

        Self { transport }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.transport.has_credentials()
    }

    // ========================================================================
    // Public Endpoint Groups
    // ========================================================================

    /// Get market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.transport)
    }

    /// Get WebSocket bootstrap endpoints
    ///
    /// The public token call works without credentials; the private token
    /// call fails with [`RestError::AuthRequired`] on an unauthenticated
    /// client.
    pub fn ws(&self) -> WsEndpoints<'_> {
        WsEndpoints::new(&self.transport)
    }

    /// Get margin endpoints
    ///
    /// Mark prices, margin config, and lending rates are public; the rest
    /// of the group requires credentials and fails per-call without them.
    pub fn margin(&self) -> MarginEndpoints<'_> {
        MarginEndpoints::new(&self.transport)
    }

    /// Get the level-1 ticker for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol (e.g., "BTC-USDT")
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<Ticker> {
        self.market().get_ticker(symbol).await
    }

    /// Get server time (milliseconds)
    pub async fn get_server_time(&self) -> RestResult<u64> {
        self.market().get_server_time().await
    }

    /// Measure clock drift against the exchange
    ///
    /// Signed requests embed a client timestamp the exchange validates, so
    /// drift beyond [`ClockDrift::ACCEPTABLE_DRIFT_MS`] will start failing
    /// authentication with code 400002. The drift estimate subtracts half
    /// the round trip from the raw offset.
    pub async fn measure_clock_drift(&self) -> RestResult<ClockDrift> {
        let started = Instant::now();
        let server_time_ms = self.get_server_time().await? as i64;
        let round_trip_ms = started.elapsed().as_millis() as i64;

        let local_time_ms = chrono::Utc::now().timestamp_millis();
        let one_way_latency_ms = round_trip_ms / 2;
        let drift_ms = server_time_ms + one_way_latency_ms - local_time_ms;

        Ok(ClockDrift {
            local_time_ms,
            server_time_ms,
            round_trip_ms,
            one_way_latency_ms,
            drift_ms,
        })
    }

    // ========================================================================
    // Private Endpoint Groups
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(&self.transport))
    }

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(FundingEndpoints::new(&self.transport))
    }

    /// Get spot trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(TradingEndpoints::new(&self.transport))
    }

    /// Get HF trading endpoints (requires credentials)
    pub fn hf(&self) -> RestResult<HfTradingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(HfTradingEndpoints::new(&self.transport))
    }

    /// Get earn endpoints (requires credentials)
    pub fn earn(&self) -> RestResult<EarnEndpoints<'_>> {
        self.require_credentials()?;
        Ok(EarnEndpoints::new(&self.transport))
    }

    /// List account balances, optionally filtered by currency
    pub async fn get_balances(
        &self,
        currency: Option<&str>,
    ) -> RestResult<Vec<crate::endpoints::account::AccountBalance>> {
        self.account()?.get_balances(currency, None).await
    }

    /// Place a spot order
    pub async fn submit_order(
        &self,
        order: &crate::endpoints::trading::OrderRequest<'_>,
    ) -> RestResult<crate::types::OrderIdResponse> {
        self.trading()?.submit_order(order).await
    }

    /// Cancel a spot order by its server-assigned ID
    pub async fn cancel_order(
        &self,
        order_id: &str,
    ) -> RestResult<crate::endpoints::trading::CancelledOrderIds> {
        self.trading()?.cancel_order(order_id).await
    }

    fn require_credentials(&self) -> RestResult<()> {
        if self.transport.has_credentials() {
            Ok(())
        } else {
            Err(RestError::AuthRequired)
        }
    }
}

impl Default for SpotClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotClient")
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// KuCoin futures REST client
///
/// Same transport and signing scheme as [`SpotClient`], pointed at the
/// futures base URL.
#[derive(Clone)]
pub struct FuturesClient {
    transport: RestTransport,
}

impl FuturesClient {
    /// Create a new client without authentication
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| FUTURES_BASE_URL.to_string());
        let transport = RestTransport::new(config.build_http(), base_url, config.credentials);

        info!("Created KuCoin futures REST client");

        Self { transport }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.transport.has_credentials()
    }

    /// Get futures endpoints
    ///
    /// Contracts, tickers, and orderbooks are public; account, order, and
    /// position calls require credentials and fail per-call without them.
    pub fn futures(&self) -> FuturesEndpoints<'_> {
        FuturesEndpoints::new(&self.transport)
    }

    /// Get WebSocket bootstrap endpoints on the futures base URL
    pub fn ws(&self) -> WsEndpoints<'_> {
        WsEndpoints::new(&self.transport)
    }
}

impl Default for FuturesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FuturesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuturesClient")
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Override the API base URL (sandbox, proxy)
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            base_url: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn build_http(&self) -> Client {
        Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(self.user_agent.as_deref().unwrap_or("kucoin-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = SpotClient::new();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_base_url("https://openapi-sandbox.kucoin.com");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://openapi-sandbox.kucoin.com")
        );
    }

    #[test]
    fn test_auth_required_error() {
        let client = SpotClient::new();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
        assert!(matches!(client.hf(), Err(RestError::AuthRequired)));
        assert!(matches!(client.earn(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_credentials_unlock_private_groups() {
        let creds = Credentials::new("key", "secret", "pass");
        let client = SpotClient::with_credentials(creds);
        assert!(client.has_credentials());
        assert!(client.account().is_ok());
        assert!(client.funding().is_ok());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let creds = Credentials::new("key", "super_secret", "pass");
        let client = SpotClient::with_credentials(creds);
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super_secret"));
    }

    #[test]
    fn test_futures_client_defaults() {
        let client = FuturesClient::new();
        assert!(!client.has_credentials());
    }
}
