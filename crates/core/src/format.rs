use crate::types::{ExistingMetadata, GeneratedMetadata, truncate_chars};

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Format the video's current metadata, with the description cut to a preview
pub fn format_existing_readable(existing: &ExistingMetadata) -> String {
    let mut output = String::new();
    output.push_str("## Original Video Details\n\n");
    output.push_str(&format!("**Title:** {}\n\n", existing.title));
    output.push_str(&format!(
        "**Description:** {}...\n\n",
        truncate_chars(&existing.description, DESCRIPTION_PREVIEW_CHARS)
    ));
    output.push_str(&format!("**Tags:** {}\n", existing.tags.join(", ")));
    output
}

/// Format generated metadata as human-readable markdown with character counts
pub fn format_generated_readable(generated: &GeneratedMetadata) -> String {
    let mut output = String::new();

    output.push_str("## Generated Metadata\n\n");

    output.push_str(&format!(
        "**Optimized Title:** {} ({} characters)\n\n",
        generated.title(),
        generated.title().chars().count()
    ));

    output.push_str(&format!(
        "**Optimized Description:** ({} characters)\n\n",
        generated.description().chars().count()
    ));
    output.push_str(generated.description());
    output.push_str("\n\n");

    // Counted the way the platform counts the tags field: comma separated
    let joined = generated.tags().join(",");
    output.push_str(&format!(
        "**Optimized Tags:** {} ({} characters)\n",
        generated.tags().join(", "),
        joined.chars().count()
    ));

    output
}
