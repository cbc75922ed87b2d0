//! Input sources: files named on the command line, or standard input.
//!
//! Each source is read whole into memory and validated as UTF-8 text before
//! tokenization. Binary content (a null byte near the start) and undecodable
//! bytes are reported as [`CountError::UnreadableSource`].

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::constants::{BINARY_DETECTION_BYTES, STDIN_LABEL, STDIN_PATH};
use crate::error::CountError;

/// Where a piece of text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    /// Sources for the given file arguments. No arguments means stdin;
    /// `-` also stands for stdin.
    pub fn from_args(files: &[PathBuf]) -> Vec<Source> {
        if files.is_empty() {
            return vec![Source::Stdin];
        }
        files
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_PATH {
                    Source::Stdin
                } else {
                    Source::File(path.clone())
                }
            })
            .collect()
    }

    /// Label used in output lines: the path as given, or `stdin`.
    pub fn label(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Stdin => STDIN_LABEL.to_string(),
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, Source::Stdin)
    }
}

/// Read a source to a `String`.
pub fn read_source(source: &Source) -> Result<String, CountError> {
    let bytes = match source {
        Source::File(path) => read_file(path),
        Source::Stdin => read_stdin(),
    }
    .map_err(CountError::unreadable)?;

    decode_text(bytes)
}

fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn read_stdin() -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    io::stdin().lock().read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Validate raw bytes as text.
///
/// A null byte in the first [`BINARY_DETECTION_BYTES`] bytes marks the
/// content as binary; otherwise it must be valid UTF-8.
pub fn decode_text(bytes: Vec<u8>) -> Result<String, CountError> {
    let check_len = bytes.len().min(BINARY_DETECTION_BYTES);
    if bytes[..check_len].contains(&0) {
        return Err(CountError::unreadable("binary file detected"));
    }

    String::from_utf8(bytes).map_err(|e| {
        CountError::unreadable(format!(
            "not valid UTF-8 (invalid byte at offset {})",
            e.utf8_error().valid_up_to()
        ))
    })
}
