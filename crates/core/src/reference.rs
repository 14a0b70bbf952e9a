use std::sync::OnceLock;

use regex::Regex;

use crate::types::VideoReference;

/// Classify raw input as a video id or a literal title.
///
/// Matches an 11 character `[0-9A-Za-z_-]` token right after `v=` or `/`,
/// which covers `watch?v=ID`, `youtu.be/ID` and `/embed/ID`. The match is
/// purely syntactic. A title containing `/` followed by 11 identifier
/// characters is reported as an id.
pub fn resolve(input: &str) -> VideoReference {
    static VIDEO_ID_RE: OnceLock<Regex> = OnceLock::new();
    let re = VIDEO_ID_RE.get_or_init(|| {
        Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("video id regex should compile")
    });

    match re.captures(input).and_then(|c| c.get(1)) {
        Some(id) => VideoReference::Id(id.as_str().to_string()),
        None => VideoReference::Title(input.to_string()),
    }
}
