#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static ORIGINAL_FILE_NAME: &str = "orig.txt";

pub static PLAGIARIZED_FILE_NAME: &str = "copy.txt";

pub static EXPECTED_FILE_NAME: &str = "expected.txt";
