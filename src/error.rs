//! Error types for twotone
//!
//! Decode and degenerate-audio failures are kept apart so callers can tell a
//! bad upload from a silent one. "No tones found" is never an error.

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// The decoder could not parse the input
    #[error("Failed to load audio file: {0}")]
    AudioDecode(String),

    /// The clip is silent or flat and cannot be normalized
    #[error("Degenerate audio: {0}")]
    DegenerateAudio(String),

    /// Input rejected before decoding (extension, size, sample rate)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Detector configuration out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog entry lookup failed
    #[error("Tone entry with id {0} not found")]
    EntryNotFound(u64),

    /// Catalog entry failed validation
    #[error("Invalid tone entry: {0}")]
    InvalidEntry(String),

    /// Catalog file could not be parsed or written
    #[error("Catalog format error: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures caused by the caller's input rather than the system
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            Error::AudioDecode(_) | Error::DegenerateAudio(_) | Error::InvalidInput(_)
        )
    }
}

/// Convenience Result type using the crate Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_input_classification() {
        assert!(Error::AudioDecode("corrupt".into()).is_bad_input());
        assert!(Error::DegenerateAudio("silent".into()).is_bad_input());
        assert!(!Error::EntryNotFound(3).is_bad_input());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            Error::EntryNotFound(42).to_string(),
            "Tone entry with id 42 not found"
        );
    }
}
