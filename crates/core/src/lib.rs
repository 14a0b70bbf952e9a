//! metagen core library
//!
//! Resolves a YouTube title or URL, optionally pulls the video's existing
//! metadata and transcript, prompts a generative model and parses its answer
//! into a title, description and tag list.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod generator;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod reference;
pub mod transcript;
pub mod types;
pub mod youtube;

pub use config::{Config, ConfigOverrides};
pub use error::{MetagenError, Result};
pub use fetcher::MetadataFetcher;
pub use format::{format_existing_readable, format_generated_readable};
pub use generator::{ChatCompletionsGenerator, TextGenerator, generate_metadata};
pub use parse::parse;
pub use pipeline::{MetadataPipeline, PreparedRequest};
pub use prompt::{build_prompt, transcript_excerpt};
pub use provider::{Provider, ProviderConfig, ProviderError};
pub use reference::resolve;
pub use transcript::{TranscriptSegment, TranscriptSource, YoutubeTranscriptSource};
pub use types::{ExistingMetadata, GeneratedMetadata, Generation, VideoReference};
pub use youtube::YoutubeDataClient;
