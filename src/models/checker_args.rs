use crate::Error;
use std::path::PathBuf;

pub const USAGE: &str =
    "Usage: plagiarism-checker-cli <original file> <plagiarized file> <answer file>";

/// The three paths the command line operates on.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckerArgs {
    pub original_path: PathBuf,
    pub plagiarized_path: PathBuf,
    pub answer_path: PathBuf,
}

impl CheckerArgs {
    /// Parses positional arguments, excluding the program name.
    ///
    /// # Errors
    /// Returns `Error::ArgumentError` unless exactly three arguments are given.
    pub fn from_args<I, S>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        let mut paths: Vec<PathBuf> = args.into_iter().map(Into::into).collect();

        if paths.len() != 3 {
            return Err(Error::ArgumentError(format!(
                "expected 3 arguments, got {}. {}",
                paths.len(),
                USAGE
            )));
        }

        let answer_path = paths.remove(2);
        let plagiarized_path = paths.remove(1);
        let original_path = paths.remove(0);

        Ok(Self {
            original_path,
            plagiarized_path,
            answer_path,
        })
    }
}
