const MAX_VISIBLE_LENGTH: usize = 120;

/// Shortens rendered prompt or note text for safe logging.
///
/// Meeting payloads run to thousands of characters; logs only need enough to
/// correlate a request with its content.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    if trimmed.chars().count() > MAX_VISIBLE_LENGTH {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, trimmed.chars().count())
    } else {
        trimmed.to_string()
    }
}
