//! # Content Readers
//!
//! Where cart text comes from. The orchestrator only ever asks for "the text
//! at this path"; tests swap the filesystem for an in-memory map.
//!
//! Errors are the reader's own `std::io::Error`, returned unchanged:
//! `NotFound` for a missing file, `InvalidData` for bytes that are not UTF-8.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads a whole document as UTF-8 text.
pub trait ContentReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl ContentReader for FsReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Serves documents from memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    files: HashMap<PathBuf, String>,
}

impl MemoryReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        MemoryReader::default()
    }

    /// Adds a document at `path`, replacing any previous one.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl ContentReader for MemoryReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fs_reader_reads_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Product name,Price,Quantity\nCafé,1,1\n").unwrap();

        let text = FsReader.read_to_string(file.path()).unwrap();
        assert!(text.contains("Café"));
    }

    #[test]
    fn test_fs_reader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsReader
            .read_to_string(&dir.path().join("missing.csv"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_fs_reader_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let err = FsReader.read_to_string(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_memory_reader() {
        let reader = MemoryReader::new().with_file("cart.csv", "abc");

        assert_eq!(reader.read_to_string(Path::new("cart.csv")).unwrap(), "abc");
        assert_eq!(
            reader.read_to_string(Path::new("other.csv")).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
