/// Output summaries are cut to this many characters
pub const SUMMARY_MAX_CHARS: usize = 140;

/// Output blocks up to this length start expanded
pub const OUTPUT_OPEN_MAX_CHARS: usize = 240;

/// Keep the first `max_chars` characters and append "..." when cut.
pub fn truncate_with_marker(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether a collapsible output block starts expanded
pub fn output_is_open_by_default(text: &str) -> bool {
    !text.is_empty() && text.chars().count() <= OUTPUT_OPEN_MAX_CHARS
}
