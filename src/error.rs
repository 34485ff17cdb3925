//! Error types and handling for the `AeroBrief` pipeline

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failure taxonomy of the briefing pipeline.
///
/// Only [`BriefingError::MissingParameter`] ever reaches the HTTP
/// caller; every other variant is absorbed locally and converted into
/// a fallback value.
#[derive(Error, Debug)]
pub enum BriefingError {
    /// Caller supplied no ICAO codes
    #[error("No ICAO codes provided")]
    MissingParameter,

    /// Weather data source unreachable or returned a non-success status
    #[error("Upstream fetch failed: {message}")]
    UpstreamFetch { message: String },

    /// AI backend was not configured at process start
    #[error("AI backend unavailable")]
    AiUnavailable,

    /// AI backend raised at invocation time
    #[error("AI invocation failed: {message}")]
    AiInvocation { message: String },
}

impl BriefingError {
    /// Create a new upstream fetch error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamFetch {
            message: message.into(),
        }
    }

    /// Create a new AI invocation error
    pub fn invocation<S: Into<String>>(message: S) -> Self {
        Self::AiInvocation {
            message: message.into(),
        }
    }

    /// Whether this failure is recovered locally rather than surfaced
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BriefingError::MissingParameter)
    }
}

impl IntoResponse for BriefingError {
    fn into_response(self) -> Response {
        // Recoverable variants never cross this boundary; if one does,
        // it indicates a bug upstream of the handler.
        let status = match self {
            BriefingError::MissingParameter => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let fetch_err = BriefingError::upstream("connection refused");
        assert!(matches!(fetch_err, BriefingError::UpstreamFetch { .. }));

        let invoke_err = BriefingError::invocation("quota exceeded");
        assert!(matches!(invoke_err, BriefingError::AiInvocation { .. }));
    }

    #[test]
    fn test_missing_parameter_message_is_exact() {
        assert_eq!(
            BriefingError::MissingParameter.to_string(),
            "No ICAO codes provided"
        );
    }

    #[test]
    fn test_only_missing_parameter_surfaces() {
        assert!(!BriefingError::MissingParameter.is_recoverable());
        assert!(BriefingError::upstream("x").is_recoverable());
        assert!(BriefingError::AiUnavailable.is_recoverable());
        assert!(BriefingError::invocation("x").is_recoverable());
    }
}
