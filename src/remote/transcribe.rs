//! Speech-to-text collaborator interface and HTTP implementation.
//!
//! Transcription happens out of process: [`HttpTranscriber`] POSTs the
//! recorded WAV bytes as a multipart upload to `{base_url}/transcribe` and
//! expects a `{ "text": … }` JSON reply.  A failed or empty transcription
//! surfaces as a [`RemoteError`], never as a silent empty order.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::TranscriberConfig;
use crate::remote::RemoteError;

// ---------------------------------------------------------------------------
// Transcriber trait
// ---------------------------------------------------------------------------

/// Async trait for speech-to-text collaborators.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn Transcriber>`.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe `wav` (complete WAV file bytes) and return the text.
    async fn transcribe(&self, wav: &[u8]) -> Result<String, RemoteError>;
}

// ---------------------------------------------------------------------------
// HttpTranscriber
// ---------------------------------------------------------------------------

/// Wire reply from the transcription service.
#[derive(Debug, Deserialize)]
struct TranscribeReply {
    text: String,
}

/// POSTs WAV audio to a transcription HTTP service.
///
/// The upload is a multipart form with one part named `file` (filename
/// `recording.wav`, content type `audio/wav`).  All connection details come
/// from [`TranscriberConfig`]; nothing is hardcoded.
pub struct HttpTranscriber {
    client: reqwest::Client,
    config: TranscriberConfig,
}

impl HttpTranscriber {
    /// Build an `HttpTranscriber` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &TranscriberConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, wav: &[u8]) -> Result<String, RemoteError> {
        let url = format!("{}/transcribe", self.config.base_url);

        let part = reqwest::multipart::Part::bytes(wav.to_vec())
            .file_name("recording.wav")
            .mime_str("audio/wav")
            .map_err(|e| RemoteError::Request(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let reply: TranscribeReply = response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;

        let text = reply.text.trim().to_string();
        if text.is_empty() {
            return Err(RemoteError::EmptyReply);
        }

        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// MockTranscriber  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response without any HTTP.
#[cfg(test)]
pub struct MockTranscriber {
    response: Result<String, ()>,
}

#[cfg(test)]
impl MockTranscriber {
    /// Create a mock that always returns `Ok(text)`.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
        }
    }

    /// Create a mock that always returns `RemoteError::Status(503)`.
    pub fn unavailable() -> Self {
        Self { response: Err(()) }
    }
}

#[cfg(test)]
#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _wav: &[u8]) -> Result<String, RemoteError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(()) => Err(RemoteError::Status(503)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> TranscriberConfig {
        TranscriberConfig {
            base_url: "http://localhost:8000".into(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn from_config_builds_without_panic() {
        let _transcriber = HttpTranscriber::from_config(&make_config());
    }

    /// Verify that `HttpTranscriber` is object-safe (usable as `dyn Transcriber`).
    #[test]
    fn transcriber_is_object_safe() {
        let transcriber: Box<dyn Transcriber> =
            Box::new(HttpTranscriber::from_config(&make_config()));
        drop(transcriber);
    }

    #[tokio::test]
    async fn mock_ok_returns_configured_text() {
        let mock = MockTranscriber::ok("2 chicken burger, 1 veg momos");
        let text = mock.transcribe(&[0u8; 16]).await.unwrap();
        assert_eq!(text, "2 chicken burger, 1 veg momos");
    }

    #[tokio::test]
    async fn mock_unavailable_returns_status_error() {
        let mock = MockTranscriber::unavailable();
        let err = mock.transcribe(&[0u8; 16]).await.unwrap_err();
        assert!(matches!(err, RemoteError::Status(503)));
    }
}
