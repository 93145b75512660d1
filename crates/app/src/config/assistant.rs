//! Assistant Config

use clap::Args;
use zeroize::Zeroizing;

use crate::assistant::GeminiConfig;

/// Generative assistant settings.
#[derive(Debug, Args)]
pub struct AssistantConfig {
    /// Generative Language API key; the assistant is disabled without one
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Model used for text features
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    /// Model used for narration
    #[arg(
        long,
        env = "GEMINI_TTS_MODEL",
        default_value = "gemini-2.5-flash-preview-tts"
    )]
    pub gemini_tts_model: String,

    /// Generative Language API base URL
    #[arg(
        long,
        env = "GEMINI_API_BASE",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_api_base: String,
}

impl AssistantConfig {
    /// Client settings, or `None` when no usable API key is set.
    #[must_use]
    pub fn gemini(&self) -> Option<GeminiConfig> {
        let api_key = self
            .gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())?;

        Some(GeminiConfig {
            base_url: self.gemini_api_base.clone(),
            api_key: Zeroizing::new(api_key.to_string()),
            model: self.gemini_model.clone(),
            tts_model: self.gemini_tts_model.clone(),
        })
    }
}
