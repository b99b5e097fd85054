//! Core traits for conversion.
//!
//! Defines the [`BookSource`] and [`BackupSink`] traits that format adapters
//! implement.

use crate::Result;
use crate::models::{BackupDocument, BookRecord};

/// Source of book records.
///
/// Implementations read one catalog row at a time and yield normalized
/// records in source order, silently passing over blank rows.
pub trait BookSource {
    /// Returns the next record, or `None` when the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or parsed.
    fn next(&mut self) -> Result<Option<BookRecord>>;

    /// Number of blank rows skipped so far.
    fn skipped(&self) -> usize {
        0
    }

    /// Drains the source into a vector.
    ///
    /// # Errors
    ///
    /// Returns the first read or parse error encountered.
    fn read_all(&mut self) -> Result<Vec<BookRecord>> {
        let mut books = Vec::new();
        while let Some(book) = self.next()? {
            books.push(book);
        }
        Ok(books)
    }
}

/// Destination for a finished backup document.
pub trait BackupSink {
    /// Writes the document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn write(&mut self, document: &BackupDocument) -> Result<()>;

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    fn finalize(self: Box<Self>) -> Result<()>;
}
