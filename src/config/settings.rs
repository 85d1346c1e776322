//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// ProviderConfig
// ---------------------------------------------------------------------------

/// Settings for the OpenAI-compatible text-generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the API endpoint (OpenAI: `https://api.openai.com`).
    pub base_url: String,
    /// API key — `None` means fall back to the `OPENAI_API_KEY` environment
    /// variable at pipeline construction.
    pub api_key: Option<String>,
    /// Chat model identifier sent to the API (e.g. `"gpt-4o"`).
    pub chat_model: String,
    /// Sampling temperature (0.0 – 1.0).  Lower = more deterministic.
    pub temperature: f32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".into(),
            api_key: None,
            chat_model: "gpt-4o".into(),
            temperature: 0.7,
        }
    }
}

impl ProviderConfig {
    /// Resolve the credential the pipeline will authenticate with.
    ///
    /// The config value takes precedence; an empty string counts as absent.
    /// Falls back to the `OPENAI_API_KEY` environment variable.  Returns
    /// `None` when neither source provides a non-empty key.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(str::to_owned)
            .or_else(|| std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()))
    }
}

// ---------------------------------------------------------------------------
// SpeechConfig
// ---------------------------------------------------------------------------

/// Settings for the text-to-speech endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// TTS model identifier (e.g. `"tts-1"`).
    pub model: String,
    /// Default voice used when the caller does not pick one.
    pub voice: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            model: "tts-1".into(),
            voice: "alloy".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use english_tutor::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Text-generation provider settings.
    pub provider: ProviderConfig,
    /// Speech-synthesis settings.
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.provider.base_url, loaded.provider.base_url);
        assert_eq!(original.provider.api_key, loaded.provider.api_key);
        assert_eq!(original.provider.chat_model, loaded.provider.chat_model);
        assert_eq!(original.provider.temperature, loaded.provider.temperature);
        assert_eq!(original.speech.model, loaded.speech.model);
        assert_eq!(original.speech.voice, loaded.speech.voice);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        let default = AppConfig::default();

        assert_eq!(config.provider.base_url, default.provider.base_url);
        assert_eq!(config.provider.chat_model, default.provider.chat_model);
        assert_eq!(config.speech.voice, default.speech.voice);
    }

    /// Verify default values match the provider contract.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.provider.base_url, "https://api.openai.com");
        assert_eq!(cfg.provider.chat_model, "gpt-4o");
        assert!(cfg.provider.api_key.is_none());
        assert_eq!(cfg.speech.model, "tts-1");
        assert_eq!(cfg.speech.voice, "alloy");
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.provider.base_url = "http://localhost:8080".into();
        cfg.provider.api_key = Some("sk-test".into());
        cfg.provider.chat_model = "gpt-4o-mini".into();
        cfg.provider.temperature = 0.2;
        cfg.speech.voice = "nova".into();

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.provider.base_url, "http://localhost:8080");
        assert_eq!(loaded.provider.api_key, Some("sk-test".into()));
        assert_eq!(loaded.provider.chat_model, "gpt-4o-mini");
        assert_eq!(loaded.provider.temperature, 0.2);
        assert_eq!(loaded.speech.voice, "nova");
    }

    /// A config-supplied key wins over the environment; empty strings count
    /// as absent.
    #[test]
    fn api_key_resolution_order() {
        let mut cfg = ProviderConfig::default();

        cfg.api_key = Some("sk-from-config".into());
        assert_eq!(cfg.resolve_api_key(), Some("sk-from-config".into()));

        // An empty config key falls through to the environment (whatever
        // that holds); it must never be returned as a credential itself.
        cfg.api_key = Some(String::new());
        assert_ne!(cfg.resolve_api_key(), Some(String::new()));
    }
}
