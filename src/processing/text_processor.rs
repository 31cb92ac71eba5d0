//! Text normalization and tokenization

use unicode_segmentation::UnicodeSegmentation;

/// Normalize text into a token stream using Unicode segmentation.
///
/// Tokens are lowercased and must be at least two characters long with at
/// least one alphanumeric character. Stop words are kept; filtering them is
/// keyword-extraction policy, not tokenization.
pub fn normalize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for word in text.unicode_words() {
        let normalized = word.to_lowercase();

        if normalized.chars().count() < 2 {
            continue;
        }
        if normalized.chars().any(|c| c.is_alphanumeric()) {
            tokens.push(normalized);
        }
    }

    tokens
}

/// Count whitespace-separated words, the measure used by the length check.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Byte offset of the first case-insensitive occurrence of an ASCII needle.
pub fn find_ascii_case_insensitive(text: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || needle.len() > text.len() {
        return None;
    }
    let needle_bytes = needle.as_bytes();
    text.as_bytes()
        .windows(needle_bytes.len())
        .position(|window| window.eq_ignore_ascii_case(needle_bytes))
}

/// Whether the byte span `[start, end)` is not flanked by word characters.
///
/// Used to turn substring automaton hits into whole-word matches. The span
/// must lie on character boundaries (always true for ASCII pattern hits).
pub fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    let boundary = |c: char| !c.is_alphanumeric() && c != '_';
    before.map_or(true, boundary) && after.map_or(true, boundary)
}
