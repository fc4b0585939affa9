#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlagiarismCheckerConfig {
    /// Number of decimal places written to the answer file.
    pub result_precision: usize,
    /// Whether the CLI also prints the score to stdout.
    pub echo_result: bool,
}
