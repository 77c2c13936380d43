//! KuCoin API error code mapping with recovery strategies
//!
//! KuCoin reports failures as a numeric code string in the response
//! envelope (`{"code":"429000","msg":"Too Many Requests"}`) rather than
//! HTTP status alone. This module classifies the known codes and attaches
//! a recovery strategy so callers can decide how to react.

use std::time::Duration;

/// Recovery strategy for handling API errors
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryStrategy {
    /// Exponential backoff before retry
    Backoff {
        initial_ms: u64,
        max_ms: u64,
        multiplier: u32,
    },
    /// Fixed delay retry
    Retry { delay_ms: u64, max_attempts: u32 },
    /// Re-authenticate (key, signature, or passphrase rejected)
    Reauthenticate,
    /// Cannot recover programmatically - fatal error
    Fatal,
    /// Requires user intervention (e.g., add funds, unfreeze account)
    UserAction { message: &'static str },
    /// Manual investigation needed
    Manual,
}

impl Default for RecoveryStrategy {
    fn default() -> Self {
        Self::Manual
    }
}

impl RecoveryStrategy {
    /// Default exponential backoff for rate limits
    pub fn rate_limit_backoff() -> Self {
        Self::Backoff {
            initial_ms: 1000,
            max_ms: 30000,
            multiplier: 2,
        }
    }

    /// Default retry for transient service errors
    pub fn service_retry() -> Self {
        Self::Retry {
            delay_ms: 5000,
            max_attempts: 3,
        }
    }

    /// Get the initial delay duration
    pub fn initial_delay(&self) -> Option<Duration> {
        match self {
            Self::Backoff { initial_ms, .. } => Some(Duration::from_millis(*initial_ms)),
            Self::Retry { delay_ms, .. } => Some(Duration::from_millis(*delay_ms)),
            _ => None,
        }
    }

    /// Check if this strategy allows retry
    pub fn allows_retry(&self) -> bool {
        matches!(self, Self::Backoff { .. } | Self::Retry { .. } | Self::Reauthenticate)
    }
}

/// KuCoin API error categories, derived from the code's numeric range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Authentication failures (missing/invalid key, signature, passphrase, IP)
    Auth,
    /// Malformed or rejected request parameters
    Request,
    /// Order placement/cancellation rejections
    Order,
    /// Account state problems (frozen, insufficient balance)
    Account,
    /// Rate limiting
    RateLimit,
    /// Exchange-side failures (5xx-class codes)
    Service,
    /// Unknown error category
    Unknown,
}

/// Parsed KuCoin API error with metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KucoinApiError {
    /// The numeric code string from the envelope (e.g., "400100")
    pub code: String,
    /// The `msg` field from the envelope
    pub message: String,
    /// Error category
    pub category: ErrorCategory,
}

impl KucoinApiError {
    /// Success code carried in every successful envelope
    pub const SUCCESS_CODE: &'static str = "200000";

    /// Classify a code/message pair from a response envelope
    pub fn parse(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            category: Self::categorize(code),
        }
    }

    fn categorize(code: &str) -> ErrorCategory {
        match code {
            // KC-API header validation chain
            "400001" | "400002" | "400003" | "400004" | "400005" | "400006" | "400007" => {
                ErrorCategory::Auth
            }
            "401000" => ErrorCategory::Auth,
            // Parameter / request shape problems
            "400100" | "400200" | "400500" | "400700" | "400800" | "404000" | "415000" => {
                ErrorCategory::Request
            }
            // Order rejections
            "300000" | "600100" | "600101" => ErrorCategory::Order,
            // Account state
            "200004" | "411100" | "260000" | "260100" | "260200" => ErrorCategory::Account,
            "429000" => ErrorCategory::RateLimit,
            "500000" | "503000" => ErrorCategory::Service,
            "900001" => ErrorCategory::Request,
            _ => match code.as_bytes().first() {
                Some(b'5') => ErrorCategory::Service,
                Some(b'4') if code.starts_with("429") => ErrorCategory::RateLimit,
                Some(b'4') => ErrorCategory::Request,
                _ => ErrorCategory::Unknown,
            },
        }
    }

    /// Get the recovery strategy for this error
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        match self.category {
            ErrorCategory::RateLimit => RecoveryStrategy::rate_limit_backoff(),
            ErrorCategory::Service => RecoveryStrategy::service_retry(),
            ErrorCategory::Auth => match self.code.as_str() {
                // Timestamp drift is recoverable by re-signing with a
                // fresh clock; bad keys are not.
                "400002" => RecoveryStrategy::Retry {
                    delay_ms: 0,
                    max_attempts: 1,
                },
                _ => RecoveryStrategy::Reauthenticate,
            },
            ErrorCategory::Account => match self.code.as_str() {
                "200004" | "260100" => RecoveryStrategy::UserAction {
                    message: "insufficient balance for the requested operation",
                },
                "411100" => RecoveryStrategy::UserAction {
                    message: "account is frozen, contact exchange support",
                },
                _ => RecoveryStrategy::Manual,
            },
            ErrorCategory::Request | ErrorCategory::Order => RecoveryStrategy::Fatal,
            ErrorCategory::Unknown => RecoveryStrategy::Manual,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        self.recovery_strategy().allows_retry()
    }

    /// Check if this error requires re-authentication
    pub fn requires_reauth(&self) -> bool {
        matches!(self.recovery_strategy(), RecoveryStrategy::Reauthenticate)
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        self.category == ErrorCategory::RateLimit
    }

    /// Check if this is a fatal error that cannot be recovered
    pub fn is_fatal(&self) -> bool {
        matches!(self.recovery_strategy(), RecoveryStrategy::Fatal)
    }
}

impl std::fmt::Display for KucoinApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_code() {
        let err = KucoinApiError::parse("429000", "Too Many Requests");
        assert_eq!(err.category, ErrorCategory::RateLimit);
        assert!(err.is_rate_limit());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_signature_error_requires_reauth() {
        let err = KucoinApiError::parse("400005", "Invalid KC-API-SIGN");
        assert_eq!(err.category, ErrorCategory::Auth);
        assert!(err.requires_reauth());
    }

    #[test]
    fn test_timestamp_drift_is_retryable() {
        let err = KucoinApiError::parse("400002", "KC-API-TIMESTAMP Invalid");
        assert!(err.is_retryable());
        assert!(!err.requires_reauth());
    }

    #[test]
    fn test_parameter_error_is_fatal() {
        let err = KucoinApiError::parse("400100", "Parameter error");
        assert_eq!(err.category, ErrorCategory::Request);
        assert!(err.is_fatal());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_insufficient_balance_needs_user() {
        let err = KucoinApiError::parse("200004", "Balance insufficient!");
        assert_eq!(err.category, ErrorCategory::Account);
        assert!(matches!(
            err.recovery_strategy(),
            RecoveryStrategy::UserAction { .. }
        ));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_unknown_5xx_is_service() {
        let err = KucoinApiError::parse("500999", "boom");
        assert_eq!(err.category, ErrorCategory::Service);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_display_includes_code() {
        let err = KucoinApiError::parse("404000", "Url Not Found");
        assert_eq!(err.to_string(), "[404000] Url Not Found");
    }
}
