use crate::Error;
use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads raw text documents from disk.
///
/// Files are decoded as UTF-8. Malformed byte sequences become U+FFFD, which
/// normalization removes, so a damaged file still yields a comparable document.
/// Files with a `.gz` extension are decompressed first.
pub struct DocumentReader;

impl DocumentReader {
    /// Reads the whole document at `path`.
    ///
    /// # Errors
    /// Returns `Error::IoError` if the file cannot be opened, read or decompressed.
    pub fn read_document(path: &Path) -> Result<String, Error> {
        info!("Reading document {:?}", path);

        let mut bytes = Vec::new();
        let mut file = File::open(path)?;

        if Self::is_gzipped(path) {
            GzDecoder::new(file).read_to_end(&mut bytes)?;
        } else {
            file.read_to_end(&mut bytes)?;
        }

        debug!("Read {} bytes from {:?}", bytes.len(), path);

        Ok(Self::decode(&bytes))
    }

    fn is_gzipped(path: &Path) -> bool {
        path.extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("gz"))
    }

    fn decode(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        let text = "今天是星期天";
        assert_eq!(DocumentReader::decode(text.as_bytes()), text);
    }

    #[test]
    fn test_decode_replaces_malformed_bytes() {
        let bytes = [b'a', 0xFF, b'b'];
        assert_eq!(DocumentReader::decode(&bytes), "a\u{FFFD}b");
    }

    #[test]
    fn test_is_gzipped() {
        assert!(DocumentReader::is_gzipped(Path::new("orig.txt.gz")));
        assert!(DocumentReader::is_gzipped(Path::new("ORIG.GZ")));
        assert!(!DocumentReader::is_gzipped(Path::new("orig.txt")));
        assert!(!DocumentReader::is_gzipped(Path::new("gz")));
    }

    #[test]
    fn test_missing_file() {
        let result = DocumentReader::read_document(Path::new("does/not/exist.txt"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
