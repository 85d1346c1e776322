//! Error taxonomy for the tutor request pipeline.
//!
//! Every pipeline operation fails with exactly one of the three classified
//! kinds below.  Each variant displays only the message it carries, so the
//! pipeline's task prefix ("Failed to generate conversation: …") composes
//! textually when an error is re-raised at the operation boundary.

use thiserror::Error;

// ---------------------------------------------------------------------------
// TutorError
// ---------------------------------------------------------------------------

/// Classified failures surfaced by the tutor pipeline.
#[derive(Debug, Clone, Error)]
pub enum TutorError {
    /// Required provider credential is missing or empty.  Raised before any
    /// network call is attempted; not retryable.
    #[error("{0}")]
    Configuration(String),

    /// The provider call failed or returned a non-success status.  Carries
    /// the provider's message when available, otherwise a transport
    /// description.  Never retried by this crate.
    #[error("{0}")]
    Upstream(String),

    /// The provider responded successfully but the payload could not be
    /// normalized into the expected record shape.  Carries the parse or
    /// shape-validation detail.
    #[error("{0}")]
    Format(String),
}

impl From<reqwest::Error> for TutorError {
    fn from(e: reqwest::Error) -> Self {
        TutorError::Upstream(e.to_string())
    }
}

impl TutorError {
    /// Re-wrap the error with a task-specific prefix, preserving its kind.
    ///
    /// Applied exactly once, at the pipeline operation boundary.
    pub(crate) fn prefixed(self, task: &str) -> Self {
        match self {
            TutorError::Configuration(msg) => TutorError::Configuration(format!("{task}: {msg}")),
            TutorError::Upstream(msg) => TutorError::Upstream(format!("{task}: {msg}")),
            TutorError::Format(msg) => TutorError::Format(format!("{task}: {msg}")),
        }
    }

    /// Build an [`TutorError::Upstream`] from a non-success provider
    /// response, preferring the structured `error.message` body field over
    /// the transport status text.
    pub(crate) fn upstream_from_response(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_owned))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_owned)
                    .unwrap_or_else(|| status.to_string())
            });
        TutorError::Upstream(format!("OpenAI API error: {message}"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn display_is_the_carried_message() {
        let err = TutorError::Upstream("OpenAI API error: Invalid API key".into());
        assert_eq!(err.to_string(), "OpenAI API error: Invalid API key");
    }

    #[test]
    fn prefix_preserves_kind_and_composes_message() {
        let err = TutorError::Format("unexpected end of input".into())
            .prefixed("Failed to generate conversation");
        assert!(matches!(err, TutorError::Format(_)));
        assert_eq!(
            err.to_string(),
            "Failed to generate conversation: unexpected end of input"
        );
    }

    #[test]
    fn upstream_prefers_structured_error_message() {
        let body = r#"{"error":{"message":"Invalid API key"}}"#;
        let err = TutorError::upstream_from_response(StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.to_string(), "OpenAI API error: Invalid API key");
    }

    #[test]
    fn upstream_falls_back_to_status_text() {
        let err = TutorError::upstream_from_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "OpenAI API error: Internal Server Error");
    }

    #[test]
    fn upstream_ignores_error_body_without_message() {
        let err =
            TutorError::upstream_from_response(StatusCode::BAD_REQUEST, r#"{"error":{}}"#);
        assert_eq!(err.to_string(), "OpenAI API error: Bad Request");
    }
}
