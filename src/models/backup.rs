//! Backup envelope.

use super::BookRecord;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema version written to every backup.
pub const BACKUP_VERSION: &str = "1.0";

/// Timestamp layout for `exported_at`: local time, no offset, microseconds.
const EXPORTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Top-level backup document.
///
/// Only `books` is populated from the catalog; `contacts`, `tags` and
/// `collections` are always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    /// Schema version, always [`BACKUP_VERSION`].
    pub version: String,
    /// ISO-8601 local timestamp of the export.
    pub exported_at: String,
    /// Books in source row order.
    pub books: Vec<BookRecord>,
    /// Contacts (unused by catalog imports).
    pub contacts: Vec<Value>,
    /// Tags (unused by catalog imports).
    pub tags: Vec<Value>,
    /// Collections (unused by catalog imports).
    pub collections: Vec<Value>,
}

impl BackupDocument {
    /// Wraps `books` in an envelope stamped with the current local time.
    #[must_use]
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self::with_exported_at(books, Local::now().naive_local())
    }

    /// Wraps `books` in an envelope stamped with `exported_at`.
    #[must_use]
    pub fn with_exported_at(books: Vec<BookRecord>, exported_at: NaiveDateTime) -> Self {
        Self {
            version: BACKUP_VERSION.to_string(),
            exported_at: exported_at.format(EXPORTED_AT_FORMAT).to_string(),
            books,
            contacts: Vec::new(),
            tags: Vec::new(),
            collections: Vec::new(),
        }
    }

    /// Number of books in the document.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}
