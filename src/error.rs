// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the networking layer and the façades above it.

/// Error returned by every API adapter, the auth store and the façades.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response other than 404.
    #[error("HTTP {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// 404 for an individual resource.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// Operation needs a session and none is active.
    #[error("Not signed in")]
    NotAuthenticated,
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Human-readable message carried by the failure itself, if any.
    ///
    /// Bare status codes and decode failures have none, so callers fall
    /// back to their own wording.
    pub fn own_message(&self) -> Option<String> {
        match self {
            ApiError::Transport(msg) | ApiError::Validation(msg) => Some(msg.clone()),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::NotAuthenticated => Some(self.to_string()),
            ApiError::NotFound(_) | ApiError::Decode(_) => None,
        }
    }

    /// Whether a read query may be attempted again after this failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort_unstable();
        ApiError::Validation(format!("Please fill in all fields ({})", fields.join(", ")))
    }
}

/// Result type alias for the networking layer
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_with_and_without_message() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 409: Email already registered");

        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_own_message() {
        assert_eq!(
            ApiError::Transport("connection refused".into()).own_message(),
            Some("connection refused".to_string())
        );
        assert_eq!(
            ApiError::Status {
                status: 500,
                message: None
            }
            .own_message(),
            None
        );
        assert_eq!(ApiError::NotFound("/clients/1".into()).own_message(), None);
    }

    #[test]
    fn test_is_retryable() {
        assert!(ApiError::Transport("reset".into()).is_retryable());
        assert!(ApiError::Status {
            status: 503,
            message: None
        }
        .is_retryable());
        assert!(!ApiError::Status {
            status: 400,
            message: None
        }
        .is_retryable());
        assert!(!ApiError::NotFound("/plans/9".into()).is_retryable());
    }
}
