//! Input sources accepted by the processor

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::Error;

/// Text to analyse, from any source
pub enum Input {
    /// Text already in memory
    Text(String),
    /// UTF-8 file on disk
    File(PathBuf),
    /// Raw bytes, must be UTF-8
    Bytes(Vec<u8>),
    /// Any reader producing UTF-8
    Reader(Box<dyn Read + Send + Sync>),
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Short description of the source for logs
    pub fn describe(&self) -> String {
        match self {
            Input::Text(text) => format!("text ({} bytes)", text.len()),
            Input::File(path) => format!("file {}", path.display()),
            Input::Bytes(bytes) => format!("bytes ({})", bytes.len()),
            Input::Reader(_) => "reader".to_string(),
        }
    }

    /// Resolve the source into a string, failing on I/O errors and non-UTF-8 data
    pub(crate) fn into_text(self) -> Result<String, Error> {
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => fs::read(&path).map_err(|e| {
                Error::Infrastructure(format!("Failed to read file {}: {e}", path.display()))
            })?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|e| Error::Infrastructure(format!("Failed to read from reader: {e}")))?;
                buffer
            }
        };

        String::from_utf8(bytes).map_err(|e| {
            Error::InvalidInput(format!(
                "Invalid UTF-8 encoding at byte {}",
                e.utf8_error().valid_up_to()
            ))
        })
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Input").field(&self.describe()).finish()
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}
