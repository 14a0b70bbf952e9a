//! YouTube Data API v3 client for existing video metadata.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{MetagenError, Result},
    types::ExistingMetadata,
};

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Clone)]
pub struct YoutubeDataClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl YoutubeDataClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, YOUTUBE_API_BASE)
    }

    pub fn with_base_url(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `videos.list` for a single id. `Ok(None)` when the platform knows no
    /// such video.
    pub async fn video_details(&self, video_id: &str) -> Result<Option<ExistingMetadata>> {
        let url = format!("{}/videos", self.base_url);
        debug!(video_id, "Requesting video snippet");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MetagenError::DetailsFetchFailed {
                video_id: video_id.to_string(),
                reason: format!("YouTube API returned {}: {}", status, body),
            });
        }

        let data: VideoListResponse = response.json().await?;

        Ok(data.items.into_iter().next().map(|item| ExistingMetadata {
            title: item.snippet.title,
            description: item.snippet.description,
            tags: item.snippet.tags,
        }))
    }
}
