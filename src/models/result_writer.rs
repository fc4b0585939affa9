use crate::types::SimilarityScore;
use crate::utils::format_score;
use crate::Error;
use log::info;
use std::fs;
use std::path::Path;

/// Writes a formatted similarity score to an answer file.
pub struct ResultWriter {
    precision: usize,
}

impl ResultWriter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// The text that `write_result` puts in the answer file.
    pub fn render(&self, score: SimilarityScore) -> String {
        format_score(score, self.precision)
    }

    /// Creates or truncates `path` and writes the rendered score, without a trailing newline.
    ///
    /// # Errors
    /// Returns `Error::IoError` if the file cannot be written.
    pub fn write_result(&self, score: SimilarityScore, path: &Path) -> Result<(), Error> {
        let rendered = self.render(score);

        info!("Writing result {} to {:?}", rendered, path);
        fs::write(path, rendered)?;

        Ok(())
    }
}
