use crate::models::PlagiarismCheckerConfig;

pub const DEFAULT_PLAGIARISM_CHECKER_CONFIG: &PlagiarismCheckerConfig =
    &PlagiarismCheckerConfig {
        result_precision: 2,
        echo_result: true,
    };
