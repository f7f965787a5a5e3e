//! Text normalization and tokenization
//!
//! All text entering the engine passes through [`normalize`] first, so the
//! vectorizer and the short-circuit rule always see the same canonical
//! form. Tokenization splits on non-alphanumeric boundaries and keeps
//! tokens of at least [`MIN_TOKEN_CHARS`] characters; single-character
//! fragments carry no signal for the corpus at hand.

/// Minimum token length (in characters) kept by the tokenizer
pub const MIN_TOKEN_CHARS: usize = 2;

/// Normalize raw input text: Unicode lowercase, trim surrounding whitespace
///
/// # Example
///
/// ```
/// use afecto::preprocessing::normalize;
///
/// assert_eq!(normalize("  Qué Día  "), "qué día");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Tokenize normalized text into vocabulary terms
///
/// Splits on any non-alphanumeric character and drops fragments shorter
/// than [`MIN_TOKEN_CHARS`]. Input is lowercased, so callers may pass raw
/// or normalized text interchangeably.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() >= MIN_TOKEN_CHARS)
        .map(|s| s.to_string())
        .collect()
}

/// Count whitespace-delimited tokens in normalized text
///
/// This is the measure used by the short-circuit rule: it is deliberately
/// coarser than [`tokenize`] (a lone "a" counts as one token here even
/// though the vectorizer would discard it).
pub fn whitespace_token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
