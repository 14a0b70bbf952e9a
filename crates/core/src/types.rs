use serde::{Deserialize, Serialize};

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 5000;
pub const MAX_TAGS: usize = 10;

/// Resolved form of user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum VideoReference {
    Title(String),
    Id(String),
}

impl VideoReference {
    pub fn video_id(&self) -> Option<&str> {
        match self {
            VideoReference::Id(id) => Some(id),
            VideoReference::Title(_) => None,
        }
    }
}

/// Metadata already published on the platform for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Title, description and tags produced by one generation request.
///
/// Length limits are enforced by [`GeneratedMetadata::new`]; there is no other
/// way to build a value, so every instance satisfies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedMetadata {
    title: String,
    description: String,
    tags: Vec<String>,
}

impl GeneratedMetadata {
    pub fn new(title: &str, description: &str, mut tags: Vec<String>) -> Self {
        tags.truncate(MAX_TAGS);
        Self {
            title: truncate_chars(title, TITLE_MAX_CHARS).to_string(),
            description: truncate_chars(description, DESCRIPTION_MAX_CHARS).to_string(),
            tags,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Everything one pipeline run produced, for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub reference: VideoReference,
    pub existing: Option<ExistingMetadata>,
    pub transcript: String,
    pub source_title: String,
    pub generated: GeneratedMetadata,
}

/// Longest prefix of `text` holding at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("🎬🎬🎬", 2), "🎬🎬");
    }

    #[test]
    fn constructor_enforces_limits() {
        let tags = (0..15).map(|i| format!("tag{i}")).collect();
        let meta = GeneratedMetadata::new(&"t".repeat(150), &"d".repeat(6000), tags);

        assert_eq!(meta.title().chars().count(), TITLE_MAX_CHARS);
        assert_eq!(meta.description().chars().count(), DESCRIPTION_MAX_CHARS);
        assert_eq!(meta.tags().len(), MAX_TAGS);
        assert_eq!(meta.tags()[0], "tag0");
        assert_eq!(meta.tags()[9], "tag9");
    }

    #[test]
    fn only_ids_expose_a_video_id() {
        assert_eq!(
            VideoReference::Id("dQw4w9WgXcQ".into()).video_id(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(VideoReference::Title("Rust tips".into()).video_id(), None);
    }
}
