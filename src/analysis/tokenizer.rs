//! Word splitting and term validation.
//!
//! The delimiter is the single ASCII space (0x20). Every other byte,
//! including tabs and newlines, is ordinary content. This keeps document
//! text and query text on exactly the same token boundaries.

/// Split `text` into the ordered sequence of maximal runs of non-space
/// bytes. Duplicate words are preserved.
///
/// # Examples
///
/// ```
/// use minnow::analysis::tokenizer::split_words;
///
/// assert_eq!(split_words("cat  in the city"), ["cat", "in", "the", "city"]);
/// assert_eq!(split_words("a\tb"), ["a\tb"]);
/// ```
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Whether `word` contains a byte in the control range [0x00, 0x1F].
pub fn has_control_bytes(word: &str) -> bool {
    word.bytes().any(|b| b < 0x20)
}

/// Whether `word` is acceptable as a standalone term: free of control
/// bytes, not the literal `-`, and not starting with `--`.
pub fn is_valid_word(word: &str) -> bool {
    !has_control_bytes(word) && word != "-" && !word.starts_with("--")
}
