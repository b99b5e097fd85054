//! JSON backup writer.
//!
//! Produces the indented document the importing application reads: two-space
//! indentation, non-ASCII text written as-is, no trailing newline.

use crate::io::traits::BackupSink;
use crate::models::BackupDocument;
use crate::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON backup sink.
pub struct JsonBackupSink<W: Write> {
    writer: W,
    /// Destination named in write errors.
    target: PathBuf,
}

impl<W: Write> JsonBackupSink<W> {
    /// Creates a new JSON backup sink.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::for_target(writer, Path::new("<output>"))
    }

    /// Creates a sink whose write errors name `target`.
    #[must_use]
    pub fn for_target(writer: W, target: &Path) -> Self {
        Self {
            writer,
            target: target.to_path_buf(),
        }
    }
}

impl<W: Write> BackupSink for JsonBackupSink<W> {
    fn write(&mut self, document: &BackupDocument) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, document).map_err(|e| {
            if e.is_io() {
                Error::write(&self.target, e)
            } else {
                Error::SerializeFailed(e.to_string())
            }
        })
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::write(&self.target, e))
    }
}
