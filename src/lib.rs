//! # biblio-backup
//!
//! Converts a CSV export of a personal book-library catalog into the JSON
//! backup document expected by the `BiblioGenius` application.
//!
//! The conversion is a single linear pipeline:
//!
//! 1. Read the CSV source (first line is the header row)
//! 2. Map each row to a [`BookRecord`], skipping blank rows
//! 3. Wrap the records in a [`BackupDocument`] envelope
//! 4. Serialize the envelope as indented JSON and write it to the target
//!
//! ## Example
//!
//! ```rust,no_run
//! use biblio_backup::io::{ConvertOptions, ConvertService};
//!
//! let options = ConvertOptions::new("library.csv", "backup.json");
//! let result = ConvertService::new().convert(&options)?;
//! println!("Converted {} books", result.converted);
//! # Ok::<(), biblio_backup::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use thiserror::Error as ThisError;

pub mod io;
pub mod models;
pub mod observability;

pub use io::{ConvertOptions, ConvertResult, ConvertService};
pub use models::{BackupDocument, BookRecord};

/// Error type for conversion operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `OpenFailed` | Source file is missing, unreadable, or permission is denied |
/// | `ParseFailed` | CSV structure cannot be read, or a field is not valid UTF-8 |
/// | `WriteFailed` | Target file cannot be created, written, or flushed |
/// | `SerializeFailed` | The backup document cannot be encoded as JSON |
/// | `OperationFailed` | Process setup fails (e.g. logging initialization) |
#[derive(Debug, ThisError)]
pub enum Error {
    /// The source could not be opened.
    #[error("cannot open source '{path}': {cause}")]
    OpenFailed {
        /// Path of the source file.
        path: String,
        /// The underlying cause.
        cause: String,
    },

    /// The source could not be parsed into rows and columns.
    ///
    /// `line` is the 1-indexed source line when the CSV reader reports one.
    #[error("malformed CSV{}: {cause}", at_line(.line))]
    ParseFailed {
        /// Line of the offending record, when known.
        line: Option<u64>,
        /// The underlying cause.
        cause: String,
    },

    /// The target could not be written.
    #[error("cannot write target '{path}': {cause}")]
    WriteFailed {
        /// Path of the target file.
        path: String,
        /// The underlying cause.
        cause: String,
    },

    /// The backup document could not be serialized.
    #[error("serialization failed: {0}")]
    SerializeFailed(String),

    /// An operation outside the conversion pipeline failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Builds an [`Error::OpenFailed`] for `path`.
    #[must_use]
    pub fn open(path: &Path, cause: impl ToString) -> Self {
        Self::OpenFailed {
            path: path.display().to_string(),
            cause: cause.to_string(),
        }
    }

    /// Builds an [`Error::WriteFailed`] for `path`.
    #[must_use]
    pub fn write(path: &Path, cause: impl ToString) -> Self {
        Self::WriteFailed {
            path: path.display().to_string(),
            cause: cause.to_string(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::ParseFailed {
            line: e.position().map(csv::Position::line),
            cause: e.to_string(),
        }
    }
}

#[allow(clippy::ref_option)]
fn at_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::open(Path::new("library.csv"), "No such file or directory");
        assert_eq!(
            err.to_string(),
            "cannot open source 'library.csv': No such file or directory"
        );

        let err = Error::ParseFailed {
            line: Some(4),
            cause: "bad quote".to_string(),
        };
        assert_eq!(err.to_string(), "malformed CSV at line 4: bad quote");

        let err = Error::ParseFailed {
            line: None,
            cause: "bad quote".to_string(),
        };
        assert_eq!(err.to_string(), "malformed CSV: bad quote");

        let err = Error::write(Path::new("/ro/backup.json"), "Permission denied");
        assert_eq!(
            err.to_string(),
            "cannot write target '/ro/backup.json': Permission denied"
        );
    }

    #[test]
    fn test_error_is_single_line() {
        let err = Error::SerializeFailed("key must be a string".to_string());
        assert!(!err.to_string().contains('\n'));
    }
}
