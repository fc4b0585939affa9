#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_PLAGIARISM_CHECKER_CONFIG;
pub mod models;
pub use models::{CheckerArgs, DocumentReader, Error, PlagiarismCheckerConfig, ResultWriter};
pub mod types;
mod utils;
pub use types::{CharacterSet, DocumentRef, NormalizedText, SimilarityScore};
pub use utils::{
    character_set, format_score, is_allowed_char, jaccard_similarity_chars, normalize_text,
};

use log::debug;
use std::path::Path;

/// Scores the similarity of two raw text documents.
///
/// Both texts are normalized, then compared as sets of distinct characters. The result
/// is always within `[0.0, 1.0]`.
pub fn score(text1: &DocumentRef, text2: &DocumentRef) -> SimilarityScore {
    let normalized1 = normalize_text(text1);
    let normalized2 = normalize_text(text2);

    debug!(
        "Normalized lengths: {} / {} chars",
        normalized1.chars().count(),
        normalized2.chars().count()
    );

    jaccard_similarity_chars(&normalized1, &normalized2)
}

/// Reads the two documents and scores them.
pub fn check_plagiarism(
    original_path: &Path,
    plagiarized_path: &Path,
) -> Result<SimilarityScore, Error> {
    let original_text = DocumentReader::read_document(original_path)?;
    let plagiarized_text = DocumentReader::read_document(plagiarized_path)?;

    Ok(score(&original_text, &plagiarized_text))
}

/// Writes the score to `answer_path` using the default precision.
pub fn write_result(similarity: SimilarityScore, answer_path: &Path) -> Result<(), Error> {
    ResultWriter::new(DEFAULT_PLAGIARISM_CHECKER_CONFIG.result_precision)
        .write_result(similarity, answer_path)
}

/// Reads both documents, scores them and writes the formatted score to `answer_path`.
///
/// The answer file is only written once both documents were read successfully.
pub fn check_plagiarism_with_custom_config(
    config: &PlagiarismCheckerConfig,
    original_path: &Path,
    plagiarized_path: &Path,
    answer_path: &Path,
) -> Result<SimilarityScore, Error> {
    let similarity = check_plagiarism(original_path, plagiarized_path)?;

    ResultWriter::new(config.result_precision).write_result(similarity, answer_path)?;

    Ok(similarity)
}
