//! External collaborators: speech-to-text and item inference.
//!
//! Both collaborators sit behind async traits so the pipeline can be tested
//! with mocks and reconfigured without touching the orchestration:
//! * [`Transcriber`] / [`HttpTranscriber`] — WAV audio → transcript text.
//! * [`ItemInference`] / [`ApiInference`] — transcript → free-text reply
//!   expected to embed one item→quantity JSON object.
//! * [`PromptBuilder`] — builds the order-extraction chat prompt.
//! * [`RemoteError`] — shared error taxonomy for both collaborators.

pub mod inference;
pub mod prompt;
pub mod transcribe;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use inference::{ApiInference, ItemInference};
pub use prompt::PromptBuilder;
pub use transcribe::{HttpTranscriber, Transcriber};

// ---------------------------------------------------------------------------
// RemoteError
// ---------------------------------------------------------------------------

/// Errors from either collaborator.
///
/// Failures are reported to the caller and never retried automatically —
/// the user may simply re-attempt the order.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The collaborator answered with a non-success HTTP status.
    #[error("collaborator returned HTTP status {0}")]
    Status(u16),

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse collaborator response: {0}")]
    Parse(String),

    /// The collaborator returned a response with no usable text content.
    #[error("collaborator returned an empty reply")]
    EmptyReply,
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RemoteError::Timeout
        } else {
            RemoteError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_human_readable() {
        assert!(RemoteError::Request("connection refused".into())
            .to_string()
            .contains("connection refused"));
        assert!(RemoteError::Status(502).to_string().contains("502"));
        assert!(RemoteError::Timeout.to_string().contains("timed out"));
        assert!(RemoteError::EmptyReply.to_string().contains("empty"));
    }
}
