/// File handling utilities
///
/// This module loads the input text into a [`Document`]. The whole file is read
/// at once; the handle is closed as soon as the bytes are in memory.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};

use crate::core::document::Document;
use crate::core::error::{AnalysisError, AnalysisResult};

/// Read a UTF-8 text file into a document.
///
/// Line terminators are normalized the way a text-mode read does it: `\r\n`
/// and lone `\r` both become `\n`.
///
/// # Arguments
///
/// * `file_path` - Path to the input file
///
/// # Returns
///
/// The lines of the file, or an error when the file cannot be read or is not
/// valid UTF-8
pub fn load_document(file_path: &Path) -> AnalysisResult<Document> {
    info!("Opening input file {}...", file_path.display());

    let bytes = read_bytes(file_path).map_err(|source| AnalysisError::FileAccess {
        path: file_path.to_path_buf(),
        source,
    })?;
    debug!("Read {} byte(s) from {}", bytes.len(), file_path.display());

    let text = String::from_utf8(bytes).map_err(|e| AnalysisError::Decode {
        path: file_path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    let document = Document::from_text(&normalize_newlines(&text));
    info!("Input file data copied successfully ({} lines)", document.len());

    Ok(document)
}

fn read_bytes(file_path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(file_path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        ));
    }

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Convert `\r\n` and `\r` line endings to `\n`
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_keeps_line_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, "first line\nsecond line\nlast").unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(document.lines(), &["first line\n", "second line\n", "last"]);
    }

    #[test]
    fn test_load_normalizes_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        fs::write(&path, "one\r\ntwo\rthree\r\n").unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(document.lines(), &["one\n", "two\n", "three\n"]);
    }

    #[test]
    fn test_missing_file_is_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.txt")).unwrap_err();
        match err {
            AnalysisError::FileAccess { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_directory_is_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::FileAccess { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9\n").unwrap();

        let err = load_document(&path).unwrap_err();
        match err {
            AnalysisError::Decode { offset, .. } => assert_eq!(offset, 3),
            other => panic!("unexpected error: {other}"),
        }
    }
}
