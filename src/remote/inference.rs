//! Item-inference collaborator interface and API implementation.
//!
//! `ApiInference` calls any OpenAI-compatible `/v1/chat/completions`
//! endpoint — Ollama (OpenAI mode), OpenAI, Groq, LM Studio, vLLM, etc.
//! All connection details come from [`InferenceConfig`]; nothing is
//! hardcoded.  The returned reply is free text expected to embed one
//! item→quantity JSON object; parsing it is the reply extractor's job.

use async_trait::async_trait;

use crate::config::InferenceConfig;
use crate::remote::prompt::PromptBuilder;
use crate::remote::RemoteError;

// ---------------------------------------------------------------------------
// ItemInference trait
// ---------------------------------------------------------------------------

/// Async trait for item-inference collaborators.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn ItemInference>`.
#[async_trait]
pub trait ItemInference: Send + Sync {
    /// Ask the model for an item→quantity mapping for `transcript`.
    ///
    /// Returns the model's raw reply text; the caller extracts the embedded
    /// JSON object from it.
    async fn infer_items(&self, transcript: &str) -> Result<String, RemoteError>;
}

// ---------------------------------------------------------------------------
// ApiInference
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct ApiInference {
    client: reqwest::Client,
    config: InferenceConfig,
    prompt_builder: PromptBuilder,
}

impl ApiInference {
    /// Build an `ApiInference` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &InferenceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
            prompt_builder: PromptBuilder::new(),
        }
    }
}

#[async_trait]
impl ItemInference for ApiInference {
    /// Send `transcript` to the configured endpoint for item extraction.
    ///
    /// The `Authorization: Bearer …` header is attached **only** when
    /// `config.api_key` is `Some(key)` and `key` is non-empty — safe for
    /// Ollama and other local providers that require no authentication.
    async fn infer_items(&self, transcript: &str) -> Result<String, RemoteError> {
        let (system_msg, user_msg) = self.prompt_builder.build_chat(transcript);

        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream":      false,
            "temperature": self.config.temperature,
            "max_tokens":  256
        });

        let mut req = self.client.post(&url).json(&body);

        // Attach Authorization header only when api_key is a non-empty string.
        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;

        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(RemoteError::EmptyReply)?
            .trim()
            .to_string();

        if reply.is_empty() {
            return Err(RemoteError::EmptyReply);
        }

        Ok(reply)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
