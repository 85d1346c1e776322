//! Configuration module for the English-Tutor core.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the provider
//! and speech synthesis, `AppPaths` for cross-platform config directories,
//! and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, ProviderConfig, SpeechConfig};
