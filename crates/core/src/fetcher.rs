use tracing::{debug, info, warn};

use crate::{
    transcript::{TranscriptSource, join_segments},
    types::ExistingMetadata,
    youtube::YoutubeDataClient,
};

/// Boundary to the video platform. Lookups here never fail the flow.
pub struct MetadataFetcher {
    details: YoutubeDataClient,
    transcripts: Box<dyn TranscriptSource>,
}

impl MetadataFetcher {
    pub fn new(details: YoutubeDataClient, transcripts: Box<dyn TranscriptSource>) -> Self {
        Self {
            details,
            transcripts,
        }
    }

    /// Existing title, description and tags, or `None` when the video is
    /// unknown or the lookup failed.
    pub async fn fetch_details(&self, video_id: &str) -> Option<ExistingMetadata> {
        match self.details.video_details(video_id).await {
            Ok(Some(details)) => {
                info!(video_id, title = %details.title, "Fetched video details");
                Some(details)
            }
            Ok(None) => {
                warn!(video_id, "No video found for id");
                None
            }
            Err(e) => {
                warn!(video_id, error = %e, "Error fetching YouTube details");
                None
            }
        }
    }

    /// Transcript text, or an empty string when none could be fetched.
    pub async fn fetch_transcript(&self, video_id: &str) -> String {
        match self.transcripts.segments(video_id).await {
            Ok(segments) => {
                let text = join_segments(&segments);
                debug!(video_id, chars = text.chars().count(), "Fetched transcript");
                text
            }
            Err(e) => {
                debug!(video_id, error = %e, "No transcript available");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        error::{MetagenError, Result},
        transcript::TranscriptSegment,
    };

    struct FailingSource;

    #[async_trait]
    impl TranscriptSource for FailingSource {
        async fn segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
            Err(MetagenError::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: "connection reset".to_string(),
            })
        }
    }

    struct FixedSource(Vec<&'static str>);

    #[async_trait]
    impl TranscriptSource for FixedSource {
        async fn segments(&self, _video_id: &str) -> Result<Vec<TranscriptSegment>> {
            Ok(self
                .0
                .iter()
                .map(|t| TranscriptSegment {
                    text: t.to_string(),
                })
                .collect())
        }
    }

    fn fetcher(source: impl TranscriptSource + 'static) -> MetadataFetcher {
        let details =
            YoutubeDataClient::with_base_url(reqwest::Client::new(), "key", "http://127.0.0.1:9");
        MetadataFetcher::new(details, Box::new(source))
    }

    #[tokio::test]
    async fn transcript_failure_collapses_to_empty_string() {
        let text = fetcher(FailingSource).fetch_transcript("dQw4w9WgXcQ").await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn transcript_segments_are_space_joined() {
        let text = fetcher(FixedSource(vec!["never gonna", "give you up"]))
            .fetch_transcript("dQw4w9WgXcQ")
            .await;
        assert_eq!(text, "never gonna give you up");
    }

    #[tokio::test]
    async fn unreachable_details_endpoint_yields_none() {
        let details = fetcher(FixedSource(vec![])).fetch_details("dQw4w9WgXcQ").await;
        assert!(details.is_none());
    }
}
