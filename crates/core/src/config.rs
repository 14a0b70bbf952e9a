//! Runtime configuration, resolved once at startup.

use crate::{
    error::Result,
    provider::Provider,
    youtube::YOUTUBE_API_BASE,
};

pub const YOUTUBE_API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Credentials and endpoints for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    /// Overrides the provider's default model
    pub model: Option<String>,
    pub api_key: String,
    /// Only needed when the input refers to an existing video
    pub youtube_api_key: Option<String>,
    /// Preferred transcript languages, in order
    pub transcript_languages: Vec<String>,
    /// Overrides the provider's chat completions URL
    pub generator_api_url: Option<String>,
    pub youtube_api_base: String,
}

/// Values supplied on the command line; unset fields fall back to the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub provider: Provider,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub youtube_api_key: Option<String>,
    pub transcript_languages: Vec<String>,
}

impl Config {
    /// Fails when no generative API key is available.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let api_key = overrides
            .provider
            .resolve_api_key(overrides.api_key.as_deref())?;

        let youtube_api_key = overrides
            .youtube_api_key
            .or_else(|| std::env::var(YOUTUBE_API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty());

        let transcript_languages = if overrides.transcript_languages.is_empty() {
            vec!["en".to_string()]
        } else {
            overrides.transcript_languages
        };

        Ok(Self {
            provider: overrides.provider,
            model: overrides.model,
            api_key,
            youtube_api_key,
            transcript_languages,
            generator_api_url: None,
            youtube_api_base: YOUTUBE_API_BASE.to_string(),
        })
    }

    pub fn new(provider: Provider, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            model: None,
            api_key: api_key.into(),
            youtube_api_key: None,
            transcript_languages: vec!["en".to_string()],
            generator_api_url: None,
            youtube_api_base: YOUTUBE_API_BASE.to_string(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or(self.provider.config().model)
    }
}
