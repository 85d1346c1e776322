//! Tutor request pipeline and response normalization.
//!
//! This module provides:
//! * [`TutorPipeline`] — the four caller-facing operations (conversation,
//!   pronunciation analysis, pronunciation exercise, speech synthesis).
//! * [`ChatModel`] — async trait implemented by text-generation backends.
//! * [`OpenAiChat`] — OpenAI-compatible `/v1/chat/completions` backend.
//! * [`normalize`] — fence-stripping cleanup and typed parsing of model
//!   replies.
//! * [`records`] — the typed records the UI renders, with shape validation.
//! * [`scoring`] — the offline placeholder pronunciation feedback contract.
//! * [`TutorError`] — the three classified failure kinds.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use english_tutor::config::AppConfig;
//! use english_tutor::tutor::TutorPipeline;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::load().unwrap();
//!     let pipeline = TutorPipeline::new(&config).unwrap();
//!
//!     let exercise = pipeline
//!         .generate_pronunciation_exercise("th sound", "beginner")
//!         .await
//!         .unwrap();
//!     for example in &exercise.examples {
//!         println!("{} {}", example.text, example.phonetic);
//!     }
//! }
//! ```

pub mod chat;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod records;
pub mod scoring;
pub mod speech;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use chat::{ChatModel, OpenAiChat};
pub use error::TutorError;
pub use pipeline::TutorPipeline;
pub use records::{
    ConversationRecord, DialogueTurn, ExerciseExample, PronunciationAnalysisRecord,
    PronunciationExerciseRecord, SpeechResult, Validate, VocabularyItem,
};
pub use speech::SPEECH_CONTENT_TYPE;
