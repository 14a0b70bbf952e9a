use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::error::{MetagenError, Result};

/// One timed caption fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
}

/// Where transcripts come from.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>>;
}

/// Join segment texts with single spaces.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|seg| seg.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Captions scraped from the public watch page via `yt-transcript-rs`.
pub struct YoutubeTranscriptSource {
    languages: Vec<String>,
}

impl YoutubeTranscriptSource {
    pub fn new(languages: Vec<String>) -> Self {
        Self { languages }
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    async fn segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
        let unavailable = |reason: String| MetagenError::TranscriptUnavailable {
            video_id: video_id.to_string(),
            reason,
        };

        let api =
            YouTubeTranscriptApi::new(None, None, None).map_err(|e| unavailable(e.to_string()))?;
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let fetched = api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        Ok(fetched
            .parts()
            .iter()
            .map(|p| TranscriptSegment {
                text: p.text.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_spaces() {
        let segments = ["hello", "and welcome", "back"]
            .into_iter()
            .map(|t| TranscriptSegment { text: t.into() })
            .collect::<Vec<_>>();
        assert_eq!(join_segments(&segments), "hello and welcome back");
    }

    #[test]
    fn no_segments_join_to_empty() {
        assert_eq!(join_segments(&[]), "");
    }
}
