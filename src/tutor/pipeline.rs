//! The tutor request pipeline: four caller-facing operations over one chat
//! seam and one raw speech call.
//!
//! Every operation performs exactly one outbound call, classifies any
//! failure into a [`TutorError`] kind, and re-raises it with a task-specific
//! prefix.  The pipeline holds no state across calls and keeps no cache, so
//! a single instance can serve concurrent callers without locking.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::tutor::chat::{ChatModel, OpenAiChat};
use crate::tutor::error::TutorError;
use crate::tutor::normalize;
use crate::tutor::prompt;
use crate::tutor::records::{
    ConversationRecord, PronunciationAnalysisRecord, PronunciationExerciseRecord, SpeechResult,
    Validate,
};
use crate::tutor::speech;

// ---------------------------------------------------------------------------
// TutorPipeline
// ---------------------------------------------------------------------------

/// Owns the provider credential and issues all generation and speech calls.
///
/// Construction fails fast with [`TutorError::Configuration`] when no
/// credential can be resolved, so a misconfigured process never reaches the
/// network.  See [`AppConfig`] for the credential sources.
pub struct TutorPipeline {
    chat: Arc<dyn ChatModel>,
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    speech_model: String,
    default_voice: String,
}

impl TutorPipeline {
    /// Build a pipeline from application config.
    ///
    /// The HTTP client is deliberately built without a timeout: if the
    /// transport hangs, the call hangs.  No retry or backoff exists at this
    /// layer.
    ///
    /// # Errors
    ///
    /// [`TutorError::Configuration`] when neither the config nor the
    /// `OPENAI_API_KEY` environment variable provides a non-empty key.
    pub fn new(config: &AppConfig) -> Result<Self, TutorError> {
        let api_key = Self::require_api_key(config)?;
        let client = reqwest::Client::new();
        let chat = OpenAiChat::new(client.clone(), &config.provider, api_key.clone());
        Ok(Self::assemble(config, Arc::new(chat), client, api_key))
    }

    /// Build a pipeline with an injected [`ChatModel`] (test seam).
    ///
    /// The credential check still applies: the speech path authenticates
    /// with the resolved key even when chat is mocked.
    pub fn with_chat(config: &AppConfig, chat: Arc<dyn ChatModel>) -> Result<Self, TutorError> {
        let api_key = Self::require_api_key(config)?;
        let client = reqwest::Client::new();
        Ok(Self::assemble(config, chat, client, api_key))
    }

    fn require_api_key(config: &AppConfig) -> Result<String, TutorError> {
        config.provider.resolve_api_key().ok_or_else(|| {
            TutorError::Configuration(
                "OpenAI API key is not configured. Please check your environment variables."
                    .into(),
            )
        })
    }

    fn assemble(
        config: &AppConfig,
        chat: Arc<dyn ChatModel>,
        client: reqwest::Client,
        api_key: String,
    ) -> Self {
        Self {
            chat,
            client,
            base_url: config.provider.base_url.clone(),
            api_key,
            speech_model: config.speech.model.clone(),
            default_voice: config.speech.voice.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Generate a practice conversation for a topic/level pair.
    pub async fn generate_conversation(
        &self,
        topic: &str,
        level: &str,
    ) -> Result<ConversationRecord, TutorError> {
        let (system, user) = prompt::conversation(topic, level);
        self.generate(&system, &user, "Failed to generate conversation")
            .await
    }

    /// Generate pronunciation feedback for `reference_text`.
    ///
    /// The audio sample is accepted for interface parity but never
    /// transmitted or inspected; only the reference text drives the
    /// feedback.
    pub async fn analyze_pronunciation(
        &self,
        _audio_sample: &[u8],
        reference_text: &str,
    ) -> Result<PronunciationAnalysisRecord, TutorError> {
        let (system, user) = prompt::pronunciation_analysis(reference_text);
        self.generate(&system, &user, "Failed to analyze pronunciation")
            .await
    }

    /// Generate a pronunciation exercise targeting one sound or phonetic
    /// feature.
    pub async fn generate_pronunciation_exercise(
        &self,
        sound: &str,
        level: &str,
    ) -> Result<PronunciationExerciseRecord, TutorError> {
        let (system, user) = prompt::pronunciation_exercise(sound, level);
        self.generate(&system, &user, "Failed to generate pronunciation exercise")
            .await
    }

    /// Synthesize `text` with the configured default voice.
    pub async fn generate_speech(&self, text: &str) -> Result<SpeechResult, TutorError> {
        self.generate_speech_with_voice(text, &self.default_voice)
            .await
    }

    /// Synthesize `text` with an explicit voice.
    pub async fn generate_speech_with_voice(
        &self,
        text: &str,
        voice: &str,
    ) -> Result<SpeechResult, TutorError> {
        speech::synthesize(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.speech_model,
            text,
            voice,
        )
        .await
        .map_err(|e| e.prefixed("Failed to generate speech"))
    }

    // -----------------------------------------------------------------------
    // Shared generation path
    // -----------------------------------------------------------------------

    /// One chat call followed by normalization, with boundary classification.
    async fn generate<T>(&self, system: &str, user: &str, task: &str) -> Result<T, TutorError>
    where
        T: DeserializeOwned + Validate,
    {
        let reply = self
            .chat
            .complete(system, user)
            .await
            .map_err(|e| e.prefixed(task))?;

        match normalize::parse_record::<T>(&reply) {
            Ok(record) => Ok(record),
            Err(e) => {
                // The normalizer never logs; the raw payload is recorded
                // here for diagnosis.
                log::error!("{task}; raw model reply: {reply}");
                Err(e.prefixed(task))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
