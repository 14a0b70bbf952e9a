use reqwest::Client;
use tracing::{Instrument, Span, info, info_span};
use uuid::Uuid;

use crate::{
    config::{Config, YOUTUBE_API_KEY_ENV},
    error::{MetagenError, Result},
    fetcher::MetadataFetcher,
    generator::{ChatCompletionsGenerator, TextGenerator, generate_metadata},
    reference::resolve,
    transcript::YoutubeTranscriptSource,
    types::{ExistingMetadata, GeneratedMetadata, Generation, VideoReference},
    youtube::YoutubeDataClient,
};

/// Input resolved and enriched, ready to be sent to the model.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub reference: VideoReference,
    pub existing: Option<ExistingMetadata>,
    pub transcript: String,
    /// Fetched title when details were found, the raw input otherwise
    pub source_title: String,
}

impl PreparedRequest {
    /// Pair the request with the model's answer.
    pub fn into_generation(self, generated: GeneratedMetadata) -> Generation {
        Generation {
            reference: self.reference,
            existing: self.existing,
            transcript: self.transcript,
            source_title: self.source_title,
            generated,
        }
    }
}

/// Resolver, fetcher and generator wired together.
pub struct MetadataPipeline {
    fetcher: Option<MetadataFetcher>,
    generator: Box<dyn TextGenerator>,
}

impl MetadataPipeline {
    pub fn new(fetcher: Option<MetadataFetcher>, generator: Box<dyn TextGenerator>) -> Self {
        Self { fetcher, generator }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = Client::new();

        let mut generator =
            ChatCompletionsGenerator::new(client.clone(), config.provider, &config.api_key)
                .with_model(config.model_name());
        if let Some(url) = &config.generator_api_url {
            generator = generator.with_api_url(url);
        }

        let fetcher = config.youtube_api_key.as_ref().map(|key| {
            MetadataFetcher::new(
                YoutubeDataClient::with_base_url(client, key, &config.youtube_api_base),
                Box::new(YoutubeTranscriptSource::new(
                    config.transcript_languages.clone(),
                )),
            )
        });

        Self::new(fetcher, Box::new(generator))
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Resolve the input and, for video ids, look up existing details and the
    /// transcript. Only a missing platform key fails here.
    pub async fn prepare(&self, input: &str) -> Result<PreparedRequest> {
        let reference = resolve(input);

        let Some(video_id) = reference.video_id() else {
            return Ok(PreparedRequest {
                source_title: input.to_string(),
                reference,
                existing: None,
                transcript: String::new(),
            });
        };

        let fetcher = self
            .fetcher
            .as_ref()
            .ok_or_else(|| MetagenError::MissingApiKey {
                env_var: YOUTUBE_API_KEY_ENV.to_string(),
            })?;

        info!(video_id, "Detected YouTube URL, fetching video details");
        let existing = fetcher.fetch_details(video_id).await;

        let (source_title, transcript) = match &existing {
            Some(details) => (
                details.title.clone(),
                fetcher.fetch_transcript(video_id).await,
            ),
            None => (input.to_string(), String::new()),
        };

        Ok(PreparedRequest {
            reference,
            existing,
            transcript,
            source_title,
        })
    }

    pub async fn generate(&self, prepared: &PreparedRequest) -> Result<GeneratedMetadata> {
        generate_metadata(
            self.generator.as_ref(),
            &prepared.source_title,
            &prepared.transcript,
        )
        .await
    }

    /// Span tagging every log line of one generation request.
    pub fn request_span(&self) -> Span {
        info_span!(
            "generation",
            request_id = %Uuid::new_v4(),
            generator = self.generator.name()
        )
    }

    /// One full generation request.
    pub async fn run(&self, input: &str) -> Result<Generation> {
        async {
            let prepared = self.prepare(input).await?;
            let generated = self.generate(&prepared).await?;
            Ok::<_, MetagenError>(prepared.into_generation(generated))
        }
        .instrument(self.request_span())
        .await
    }
}
