//! Text shaping helpers shared by view builders.

const ELLIPSIS: &str = "...";

/// Cuts `text` to at most `max_chars` characters plus an ellipsis.
///
/// Text within the limit is returned unchanged. Longer text is cut at a
/// hard character boundary (not word-aware), trailing whitespace at the cut
/// is trimmed, and `...` is appended.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut truncated = text[..cut].trim_end().to_string();
            truncated.push_str(ELLIPSIS);
            truncated
        }
    }
}

/// Joins the first `limit` items with `", "`, appending `...` when more
/// items exist.
pub fn join_preview(items: &[String], limit: usize) -> String {
    let mut joined = items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > limit {
        joined.push_str(ELLIPSIS);
    }
    joined
}
