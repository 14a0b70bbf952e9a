use crate::types::{DESCRIPTION_MAX_CHARS, MAX_TAGS, TITLE_MAX_CHARS, truncate_chars};

/// Characters of transcript passed to the model as context.
pub const TRANSCRIPT_EXCERPT_CHARS: usize = 1000;

const DESCRIPTION_MIN_CHARS: usize = 250;
const MIN_TAGS: usize = 5;
const TAGS_TOTAL_MAX_CHARS: usize = 500;
const TAG_MAX_CHARS: usize = 30;

pub fn transcript_excerpt(transcript: &str) -> &str {
    truncate_chars(transcript, TRANSCRIPT_EXCERPT_CHARS)
}

/// Build the generation prompt.
///
/// The labels requested here (`Title:`, `Description:`, `Tags:` with one tag
/// per line) are exactly what [`crate::parse::parse`] looks for. Change both
/// together.
pub fn build_prompt(title: &str, transcript_excerpt: &str) -> String {
    format!(
        r#"You are an expert YouTube SEO strategist. Given the video title '{title}' and optional transcript context, generate:
1. An SEO-optimized YouTube video title (max {title_max} characters, aim for 60-70).
2. A compelling video description (min {desc_min}, max {desc_max} characters, include keywords, timestamps, and CTA).
3. A list of {tags_min}-{tags_max} relevant tags (max {tags_total} characters total, each tag max {tag_max} characters).

Context (if available): {transcript_excerpt}...

Ensure the title is engaging and keyword-rich, the description is scannable with bullet points and emojis, and tags are specific and relevant to the topic.

Format the output clearly with 'Title:', 'Description:', and 'Tags:' labels, in that order. Put each tag on its own line after 'Tags:' and write nothing after the tags."#,
        title_max = TITLE_MAX_CHARS,
        desc_min = DESCRIPTION_MIN_CHARS,
        desc_max = DESCRIPTION_MAX_CHARS,
        tags_min = MIN_TAGS,
        tags_max = MAX_TAGS,
        tags_total = TAGS_TOTAL_MAX_CHARS,
        tag_max = TAG_MAX_CHARS,
    )
}
