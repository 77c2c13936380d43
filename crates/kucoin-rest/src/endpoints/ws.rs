//! WebSocket bootstrap endpoints
//!
//! KuCoin WebSocket connections start with a REST call that returns a
//! short-lived token and the candidate servers to dial. This crate stops
//! there; stream handling is up to the caller.

use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::transport::RestTransport;
use crate::types::WsConnectionInfo;

/// WebSocket bootstrap endpoints
pub struct WsEndpoints<'a> {
    transport: &'a RestTransport,
}

impl<'a> WsEndpoints<'a> {
    pub(crate) fn new(transport: &'a RestTransport) -> Self {
        Self { transport }
    }

    /// Get a token for public WebSocket topics
    ///
    /// No credentials needed; the token is valid for a single connection
    /// and expires if unused.
    #[instrument(skip(self))]
    pub async fn get_public_token(&self) -> RestResult<WsConnectionInfo> {
        debug!("Requesting public WebSocket token");
        self.transport.post("/api/v1/bullet-public").await
    }

    /// Get a token for private WebSocket topics (signed)
    #[instrument(skip(self))]
    pub async fn get_private_token(&self) -> RestResult<WsConnectionInfo> {
        debug!("Requesting private WebSocket token");
        self.transport
            .post_private("/api/v1/bullet-private", &serde_json::json!({}))
            .await
    }
}
