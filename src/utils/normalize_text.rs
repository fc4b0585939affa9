use crate::types::{DocumentRef, NormalizedText};

/// Returns whether the character belongs to the comparison alphabet: CJK unified
/// ideographs (U+4E00..=U+9FA5), ASCII letters and ASCII digits.
pub fn is_allowed_char(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FA5}') || c.is_ascii_alphanumeric()
}

/// Normalizes a raw text document for comparison.
///
/// Every character outside the comparison alphabet (whitespace, punctuation including
/// full-width punctuation, symbols, other scripts) is removed outright, not replaced
/// with a separator. Retained ASCII letters are lowercased.
pub fn normalize_text(text: &DocumentRef) -> NormalizedText {
    text.chars()
        .filter(|&c| is_allowed_char(c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
