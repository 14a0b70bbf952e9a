use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    error::{MetagenError, Result},
    parse::parse,
    prompt::{build_prompt, transcript_excerpt},
    provider::Provider,
    types::GeneratedMetadata,
};

/// A generative text model: prompt in, unstructured text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// OpenAI-compatible `chat/completions` endpoint.
pub struct ChatCompletionsGenerator {
    client: Client,
    provider: Provider,
    api_url: String,
    model: String,
    api_key: String,
}

impl ChatCompletionsGenerator {
    pub fn new(client: Client, provider: Provider, api_key: impl Into<String>) -> Self {
        let config = provider.config();
        Self {
            client,
            provider,
            api_url: config.api_url.to_string(),
            model: config.model.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsGenerator {
    fn name(&self) -> &str {
        self.provider.name()
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(provider = self.provider.name(), model = %self.model, "Sending prompt");

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt,
                    },
                ],
                "temperature": 0.7,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MetagenError::GenerationFailed {
                reason: format!("{} API returned {}: {}", self.provider.name(), status, body),
            });
        }

        let response = response.json::<serde_json::Value>().await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .ok_or_else(|| MetagenError::GenerationFailed {
                reason: format!("Invalid API response: {:?}", response),
            })?;

        Ok(content.to_string())
    }
}

/// Prompt the model for `title` and parse its answer.
///
/// Only the first [`crate::prompt::TRANSCRIPT_EXCERPT_CHARS`] characters of the
/// transcript are sent.
pub async fn generate_metadata(
    generator: &dyn TextGenerator,
    title: &str,
    transcript: &str,
) -> Result<GeneratedMetadata> {
    let prompt = build_prompt(title, transcript_excerpt(transcript));
    let text = generator.generate(&prompt).await?;
    info!(
        generator = generator.name(),
        chars = text.chars().count(),
        "Received generated metadata"
    );
    Ok(parse(&text, title))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Recording {
        reply: Option<&'static str>,
        prompts: Mutex<Vec<String>>,
    }

    impl Recording {
        fn replying(reply: Option<&'static str>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for Recording {
        fn name(&self) -> &str {
            "recording"
        }

        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .map(str::to_string)
                .ok_or_else(|| MetagenError::GenerationFailed {
                    reason: "quota exceeded".to_string(),
                })
        }
    }

    #[tokio::test]
    async fn parses_the_model_reply() {
        let generator = Recording::replying(Some("Title: New\nDescription: Body\nTags:\na\nb"));
        let meta = generate_metadata(&generator, "Old", "").await.unwrap();

        assert_eq!(meta.title(), "New");
        assert_eq!(meta.description(), "Body");
        assert_eq!(meta.tags(), ["a", "b"]);
    }

    #[tokio::test]
    async fn sends_only_the_transcript_excerpt() {
        let generator = Recording::replying(Some(""));
        let transcript = format!("{}{}", "x".repeat(1000), "Z".repeat(500));
        generate_metadata(&generator, "Old", &transcript).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(&"x".repeat(1000)));
        assert!(!prompts[0].contains('Z'));
    }

    #[tokio::test]
    async fn unlabelled_reply_falls_back_to_input_title() {
        let generator = Recording::replying(Some("Sorry, I can't help with that."));
        let meta = generate_metadata(&generator, "Old", "").await.unwrap();
        assert_eq!(meta.title(), "Old");
    }

    #[tokio::test]
    async fn generation_errors_propagate() {
        let generator = Recording::replying(None);
        let err = generate_metadata(&generator, "Old", "").await.unwrap_err();
        assert!(matches!(err, MetagenError::GenerationFailed { .. }));
    }
}
