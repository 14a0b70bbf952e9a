use std::sync::OnceLock;

use regex::Regex;

use crate::types::GeneratedMetadata;

pub const MISSING_DESCRIPTION: &str = "No description generated.";

/// Extract title, description and tags from free-form model output.
///
/// Never fails. Missing labels fall back to `fallback_title`,
/// [`MISSING_DESCRIPTION`] and an empty tag list.
pub fn parse(raw: &str, fallback_title: &str) -> GeneratedMetadata {
    static TITLE_RE: OnceLock<Regex> = OnceLock::new();
    static DESCRIPTION_RE: OnceLock<Regex> = OnceLock::new();
    static TAGS_RE: OnceLock<Regex> = OnceLock::new();

    let title_re =
        TITLE_RE.get_or_init(|| Regex::new(r"Title:\s*(.+)").expect("title regex should compile"));
    let description_re = DESCRIPTION_RE.get_or_init(|| {
        Regex::new(r"(?s)Description:\s*(.+?)Tags:").expect("description regex should compile")
    });
    let tags_re =
        TAGS_RE.get_or_init(|| Regex::new(r"(?s)Tags:\s*(.+)").expect("tags regex should compile"));

    let title = capture(title_re, raw).unwrap_or(fallback_title);
    let description = capture(description_re, raw).unwrap_or(MISSING_DESCRIPTION);
    let tags = capture(tags_re, raw)
        .map(|block| {
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    GeneratedMetadata::new(title, description, tags)
}

fn capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}
