//! Core `ChatModel` trait and `OpenAiChat` implementation.
//!
//! `OpenAiChat` calls any OpenAI-compatible `/v1/chat/completions` endpoint.
//! All connection details come from [`ProviderConfig`]; nothing is
//! hardcoded.  The pipeline depends only on the trait, so tests (and any
//! future backend) can swap the implementation.

use async_trait::async_trait;

use crate::config::ProviderConfig;
use crate::tutor::error::TutorError;

// ---------------------------------------------------------------------------
// ChatModel trait
// ---------------------------------------------------------------------------

/// Async trait for text generation.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn ChatModel>`).
///
/// # Contract
///
/// Send a system instruction and a user prompt; receive the generated text.
/// Transport and provider failures surface as
/// [`TutorError::Upstream`]; an undecodable response body as
/// [`TutorError::Format`].
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, TutorError>;
}

// Compile-time assertion: Box<dyn ChatModel> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn ChatModel>) {}
};

// ---------------------------------------------------------------------------
// OpenAiChat
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// The HTTP client is shared with the rest of the pipeline.  No timeout is
/// configured and no retry is performed: a call runs to completion or to
/// transport failure.
pub struct OpenAiChat {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiChat {
    /// Build an `OpenAiChat` from provider config and a resolved credential.
    pub fn new(client: reqwest::Client, config: &ProviderConfig, api_key: String) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            model: config.chat_model.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChat {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, TutorError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user",   "content": prompt }
            ],
            "stream":      false,
            "temperature": self.temperature
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TutorError::upstream_from_response(status, &body));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TutorError::Format(e.to_string()))?;

        let text = json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(TutorError::Upstream(
                "model returned an empty response".into(),
            ));
        }

        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
