use thiserror::Error;

use crate::provider::ProviderError;

#[derive(Error, Debug)]
pub enum MetagenError {
    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Metadata generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("Video details lookup failed for {video_id}: {reason}")]
    DetailsFetchFailed { video_id: String, reason: String },

    #[error("Transcript unavailable for {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

impl MetagenError {
    /// Configuration errors halt the flow before any API call is made.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MetagenError::MissingApiKey { .. } | MetagenError::Provider(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MetagenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_credential_errors_are_configuration() {
        let missing = MetagenError::MissingApiKey {
            env_var: "YOUTUBE_API_KEY".into(),
        };
        let failed = MetagenError::GenerationFailed {
            reason: "500".into(),
        };
        let details = MetagenError::DetailsFetchFailed {
            video_id: "dQw4w9WgXcQ".into(),
            reason: "403".into(),
        };

        assert!(missing.is_configuration());
        assert!(!failed.is_configuration());
        assert!(!details.is_configuration());
    }
}
