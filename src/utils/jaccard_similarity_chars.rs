use crate::types::{CharacterSet, SimilarityScore};
use log::debug;

/// Collects the distinct characters of a text.
pub fn character_set(text: &str) -> CharacterSet {
    text.chars().collect()
}

/// Compute the Jaccard similarity between two strings by treating characters as sets.
///
/// Repeated characters, character order and text length have no effect on the result.
/// Two empty texts are considered identical (`1.0`); if only one side is empty there is
/// no possible overlap (`0.0`).
pub fn jaccard_similarity_chars(s1: &str, s2: &str) -> SimilarityScore {
    let set1 = character_set(s1);
    let set2 = character_set(s2);

    match (set1.is_empty(), set2.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let intersection_size = set1.intersection(&set2).count();
    let union_size = set1.len() + set2.len() - intersection_size;

    debug!(
        "Character sets: {} / {} distinct, {} shared",
        set1.len(),
        set2.len(),
        intersection_size
    );

    intersection_size as SimilarityScore / union_size as SimilarityScore
}
