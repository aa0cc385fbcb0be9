//! Word counting for abstract text.
//!
//! A word is any maximal run of non-whitespace characters. Leading,
//! trailing and repeated internal whitespace never changes the count, so
//! pasted text with ragged line breaks counts the same as tidy text.

/// Number of words shown by [`word_preview`] when callers have no preference.
pub const DEFAULT_PREVIEW_WORDS: usize = 50;

/// Count whitespace-delimited words in `text`.
///
/// Empty or whitespace-only text counts as zero words. This never fails.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Return the first `max_words` words of `text`, joined by single spaces.
///
/// Appends `...` when the text holds more than `max_words` words.
pub fn word_preview(text: &str, max_words: usize) -> String {
    let mut preview = text
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ");
    if count_words(text) > max_words {
        preview.push_str("...");
    }
    preview
}
