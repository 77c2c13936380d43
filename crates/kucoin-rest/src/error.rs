//! Error types for REST API operations

use kucoin_types::error_codes::{KucoinApiError, RecoveryStrategy};

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// API returned a non-success code in the response envelope
    #[error("API error: {error}")]
    Api {
        /// Parsed error with category and recovery hint
        error: KucoinApiError,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded, retry after {retry_after_ms}ms")]
    RateLimited {
        /// Milliseconds to wait before retrying
        retry_after_ms: u64,
    },

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RestError {
    /// Create an API error from an envelope code/msg pair
    pub fn from_api_code(code: &str, msg: &str) -> Self {
        Self::Api {
            error: KucoinApiError::parse(code, msg),
        }
    }

    /// Get the recovery strategy for this error
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        match self {
            Self::Api { error } => error.recovery_strategy(),
            Self::RateLimited { retry_after_ms } => RecoveryStrategy::Backoff {
                initial_ms: *retry_after_ms,
                max_ms: *retry_after_ms * 2,
                multiplier: 1,
            },
            Self::Http(e) if e.is_timeout() => RecoveryStrategy::Retry {
                max_attempts: 3,
                delay_ms: 1000,
            },
            Self::Http(_) => RecoveryStrategy::Retry {
                max_attempts: 3,
                delay_ms: 1000,
            },
            Self::InvalidCredentials(_) | Self::AuthRequired => RecoveryStrategy::Fatal,
            Self::Parse(_) | Self::InvalidParameter(_) => RecoveryStrategy::Fatal,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        self.recovery_strategy().allows_retry()
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
            || matches!(
                self,
                Self::Api { error } if error.is_rate_limit()
            )
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_rate_limit_code() {
        let err = RestError::from_api_code("429000", "Too Many Requests");
        assert!(err.is_rate_limited());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_http_429_rate_limited() {
        let err = RestError::RateLimited { retry_after_ms: 1000 };
        assert!(err.is_rate_limited());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_auth_required_is_fatal() {
        let err = RestError::AuthRequired;
        assert!(!err.is_retryable());
        assert_eq!(err.recovery_strategy(), RecoveryStrategy::Fatal);
    }

    #[test]
    fn test_parameter_code_is_fatal() {
        let err = RestError::from_api_code("400100", "Parameter error");
        assert!(!err.is_retryable());
    }
}
