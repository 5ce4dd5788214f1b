//! Error types for mmseg.
//!
//! Segmentation itself never fails. Everything here belongs to the load phase.

use std::path::PathBuf;

/// Errors that can occur while loading a dictionary or frequency table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dictionary or frequency file could not be opened or read.
    #[error("dictionary unavailable: {}: {source}", .path.display())]
    DictionaryUnavailable {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dictionary file was readable but contained no words.
    ///
    /// Segmenting with such a dictionary degrades to single-character output.
    #[error("dictionary {} contains no words", .path.display())]
    EmptyDictionary {
        /// The file that was empty.
        path: PathBuf,
    },

    /// A line was not valid UTF-8.
    #[error("line {line}: not valid UTF-8")]
    InvalidEncoding {
        /// 1-based line number.
        line: usize,
    },

    /// A frequency line carried a count that is not a positive integer.
    #[error("line {line}: invalid frequency {value:?} (must be a positive integer)")]
    InvalidFrequency {
        /// 1-based line number.
        line: usize,
        /// The offending count field.
        value: String,
    },

    /// I/O failure on a reader that has no associated path.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for mmseg operations.
pub type Result<T> = std::result::Result<T, Error>;
