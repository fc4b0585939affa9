use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, read_dir, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

pub mod constants;
use constants::{
    EXPECTED_FILE_NAME, ORIGINAL_FILE_NAME, PLAGIARIZED_FILE_NAME, TEST_FILES_DIRECTORY,
};

/// A fixture directory holding a document pair and the expected answer file contents.
pub struct TestCase {
    pub name: String,
    pub original_path: PathBuf,
    pub plagiarized_path: PathBuf,
    pub expected: String,
}

impl TestCase {
    /// Loads the case stored in `case_dir`.
    pub fn load(case_dir: &Path) -> io::Result<Self> {
        let expected = fs::read_to_string(case_dir.join(EXPECTED_FILE_NAME))?
            .trim()
            .to_string();

        let name = case_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            name,
            original_path: case_dir.join(ORIGINAL_FILE_NAME),
            plagiarized_path: case_dir.join(PLAGIARIZED_FILE_NAME),
            expected,
        })
    }

    /// Reads both documents of the case as text.
    pub fn read_texts(&self) -> io::Result<(String, String)> {
        Ok((
            fs::read_to_string(&self.original_path)?,
            fs::read_to_string(&self.plagiarized_path)?,
        ))
    }
}

/// Loads every case directory under `tests/test_files`, sorted by name.
pub fn load_test_cases() -> io::Result<Vec<TestCase>> {
    let mut case_dirs: Vec<PathBuf> = read_dir(&*TEST_FILES_DIRECTORY)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_dir())
        .collect();

    case_dirs.sort();

    case_dirs.iter().map(|dir| TestCase::load(dir)).collect()
}

static SCRATCH_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A uniquely named directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(label: &str) -> io::Result<Self> {
        let id = SCRATCH_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "plagiarism_checker_{}_{}_{}",
            label,
            process::id(),
            id
        ));

        fs::create_dir_all(&path)?;

        Ok(Self { path })
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }

    pub fn write_file(&self, file_name: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.path(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn write_gz_file(&self, file_name: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.path(file_name);
        let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        encoder.write_all(contents)?;
        encoder.finish()?;
        Ok(path)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
