//! English-Tutor core library.
//!
//! This crate is the trusted-boundary core of an English-learning app: it
//! owns the OpenAI credential, issues the generation and speech-synthesis
//! calls the UI needs, and normalizes free-form model replies into the typed
//! records the UI renders.
//!
//! Modules:
//! * [`tutor`] — the request pipeline ([`tutor::TutorPipeline`]), the chat
//!   seam ([`tutor::ChatModel`]), response normalization, and the typed
//!   records.
//! * [`config`] — provider settings with TOML persistence and
//!   environment-variable credential resolution.
//! * [`content`] — static practice catalogs and sample progress data.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use english_tutor::config::AppConfig;
//! use english_tutor::tutor::TutorPipeline;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Reads OPENAI_API_KEY when the config carries no key of its own;
//!     // construction fails fast when neither is present.
//!     let config = AppConfig::load().unwrap();
//!     let pipeline = TutorPipeline::new(&config).unwrap();
//!
//!     let conversation = pipeline
//!         .generate_conversation("travel", "intermediate")
//!         .await
//!         .unwrap();
//!     println!("{}", conversation.title);
//!
//!     let speech = pipeline.generate_speech("Hello, how are you?").await.unwrap();
//!     println!("{} bytes of base64 {}", speech.audio.len(), speech.content_type);
//! }
//! ```

pub mod config;
pub mod content;
pub mod tutor;
