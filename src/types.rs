use std::collections::HashSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a borrowed view of a raw text document as read from a source.
pub type DocumentRef = str;

/// Represents a text document after normalization. It only contains CJK ideographs,
/// lowercase ASCII letters and ASCII digits.
pub type NormalizedText = String;

/// The set of distinct characters present in a `NormalizedText`, with multiplicity and
/// order discarded.
pub type CharacterSet = HashSet<char>;

/// A similarity score in the closed interval `[0.0, 1.0]`.
pub type SimilarityScore = f64;
