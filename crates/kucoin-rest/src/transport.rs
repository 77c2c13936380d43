//! Shared HTTP transport for all endpoint groups
//!
//! Every endpoint method funnels through [`RestTransport`], which owns the
//! HTTP client, the base URL, and the optional credentials. It builds the
//! query string, signs private requests, decodes the response envelope,
//! and maps HTTP 429 to [`RestError::RateLimited`].

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use kucoin_auth::Credentials;

use crate::error::{RestError, RestResult};
use crate::types::ApiResponse;

/// Fallback wait when a 429 response carries no Retry-After header
const DEFAULT_RETRY_AFTER_MS: u64 = 1000;

/// HTTP transport shared by all endpoint groups of one client
#[derive(Clone)]
pub struct RestTransport {
    http: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl RestTransport {
    /// Create a transport over an already-built HTTP client
    pub fn new(http: Client, base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            credentials,
        }
    }

    /// The API base URL this transport targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether credentials are attached
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Borrow the credentials, or fail with [`RestError::AuthRequired`]
    pub fn credentials(&self) -> RestResult<&Credentials> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)
    }

    // ========================================================================
    // Public requests
    // ========================================================================

    /// Unauthenticated GET
    pub async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> RestResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let path = path_with_query(path, query)?;
        let url = format!("{}{}", self.base_url, path);
        debug!(%path, "GET (public)");

        let response = self.http.get(&url).send().await?;
        decode::<T>(response).await?.into_result()
    }

    /// Unauthenticated POST (used by the bullet-public bootstrap call)
    pub async fn post<T>(&self, path: &str) -> RestResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%path, "POST (public)");

        let response = self.http.post(&url).send().await?;
        decode::<T>(response).await?.into_result()
    }

    // ========================================================================
    // Signed requests
    // ========================================================================

    /// Signed GET
    pub async fn get_private<T, Q>(&self, path: &str, query: Option<&Q>) -> RestResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request_private(Method::GET, path, query, None::<&()>)
            .await?
            .into_result()
    }

    /// Signed POST with a JSON body
    pub async fn post_private<T, B>(&self, path: &str, body: &B) -> RestResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_private(Method::POST, path, None::<&()>, Some(body))
            .await?
            .into_result()
    }

    /// Signed POST whose success response may carry `"data": null`
    pub async fn post_private_optional<T, B>(&self, path: &str, body: &B) -> RestResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_private(Method::POST, path, None::<&()>, Some(body))
            .await?
            .into_result_optional()
    }

    /// Signed DELETE with optional query parameters
    pub async fn delete_private<T, Q>(&self, path: &str, query: Option<&Q>) -> RestResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request_private(Method::DELETE, path, query, None::<&()>)
            .await?
            .into_result()
    }

    /// Signed DELETE whose success response may carry `"data": null`
    pub async fn delete_private_optional<T, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> RestResult<Option<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request_private(Method::DELETE, path, query, None::<&()>)
            .await?
            .into_result_optional()
    }

    /// Build, sign, and send one private request
    ///
    /// The signature covers `timestamp + METHOD + path(with query) + body`,
    /// so the query string is folded into the path before signing and POST
    /// bodies are serialized exactly once and sent verbatim.
    async fn request_private<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> RestResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let creds = self.credentials()?;
        let path = path_with_query(path, query)?;

        let body_json = match body {
            Some(b) => serde_json::to_string(b)
                .map_err(|e| RestError::InvalidParameter(format!("body serialization: {e}")))?,
            None => String::new(),
        };

        let headers = creds.sign_request(method.as_str(), &path, &body_json);
        debug!(method = %method, %path, "signed request");

        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header("KC-API-KEY", &headers.api_key)
            .header("KC-API-SIGN", &headers.signature)
            .header("KC-API-TIMESTAMP", &headers.timestamp)
            .header("KC-API-PASSPHRASE", &headers.passphrase)
            .header("KC-API-KEY-VERSION", headers.key_version);

        if !body_json.is_empty() {
            request = request
                .header("Content-Type", "application/json")
                .body(body_json);
        }

        let response = request.send().await?;
        decode(response).await
    }
}

impl std::fmt::Debug for RestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTransport")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Append serialized query parameters to an endpoint path
///
/// The query string becomes part of the signed path, so it must be built
/// before signing rather than handed to reqwest.
fn path_with_query<Q>(path: &str, query: Option<&Q>) -> RestResult<String>
where
    Q: Serialize + ?Sized,
{
    let Some(query) = query else {
        return Ok(path.to_string());
    };

    let encoded = serde_urlencoded::to_string(query)
        .map_err(|e| RestError::InvalidParameter(format!("query serialization: {e}")))?;

    if encoded.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{encoded}"))
    }
}

/// Decode a response into the API envelope
///
/// KuCoin returns the `{code, msg, data}` envelope even on HTTP error
/// statuses, so the body is parsed regardless of status. HTTP 429 is the
/// exception: it maps straight to [`RestError::RateLimited`] with the
/// Retry-After hint.
async fn decode<T>(response: reqwest::Response) -> RestResult<ApiResponse<T>>
where
    T: DeserializeOwned,
{
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_ms = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(|secs| secs * 1000)
            .unwrap_or(DEFAULT_RETRY_AFTER_MS);

        return Err(RestError::RateLimited { retry_after_ms });
    }

    let status = response.status();
    let text = response.text().await?;

    serde_json::from_str(&text)
        .map_err(|e| RestError::Parse(format!("HTTP {status}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct LedgerQuery {
        #[serde(skip_serializing_if = "Option::is_none")]
        currency: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_at: Option<u64>,
    }

    #[test]
    fn test_path_with_query_appends_params() {
        let query = LedgerQuery {
            currency: Some("BTC".to_string()),
            start_at: Some(1601395200000),
        };
        let path = path_with_query("/api/v1/accounts/ledgers", Some(&query)).unwrap();
        assert_eq!(
            path,
            "/api/v1/accounts/ledgers?currency=BTC&startAt=1601395200000"
        );
    }

    #[test]
    fn test_path_with_query_skips_empty() {
        let query = LedgerQuery {
            currency: None,
            start_at: None,
        };
        let path = path_with_query("/api/v1/accounts/ledgers", Some(&query)).unwrap();
        assert_eq!(path, "/api/v1/accounts/ledgers");

        let path = path_with_query::<()>("/api/v1/accounts/ledgers", None).unwrap();
        assert_eq!(path, "/api/v1/accounts/ledgers");
    }

    #[test]
    fn test_credentials_gate() {
        let transport = RestTransport::new(Client::new(), "https://api.kucoin.com", None);
        assert!(!transport.has_credentials());
        assert!(matches!(
            transport.credentials(),
            Err(RestError::AuthRequired)
        ));
    }

    #[test]
    fn test_debug_omits_credentials() {
        let creds = Credentials::new("key", "secret", "pass");
        let transport = RestTransport::new(Client::new(), "https://api.kucoin.com", Some(creds));
        let debug = format!("{:?}", transport);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("has_credentials: true"));
    }
}
