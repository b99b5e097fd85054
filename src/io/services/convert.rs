//! Catalog conversion service.
//!
//! Runs the whole pipeline: read the CSV catalog, map rows to books, wrap them
//! in a backup envelope, and write the JSON document.

use crate::io::formats::{CsvBookSource, JsonBackupSink};
use crate::io::traits::{BackupSink, BookSource};
use crate::models::BackupDocument;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Default catalog path when none is given.
pub const DEFAULT_SOURCE: &str = "library.csv";

/// Default backup path when none is given.
pub const DEFAULT_TARGET: &str = "bibliogenius_backup.json";

/// Options for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// CSV catalog to read.
    pub source: PathBuf,
    /// JSON backup to write. May equal `source`.
    pub target: PathBuf,
    /// Read and map the catalog without writing the backup.
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_TARGET)
    }
}

impl ConvertOptions {
    /// Creates options for converting `source` into `target`.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            dry_run: false,
        }
    }

    /// Enables or disables dry run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    /// Books written to the backup.
    pub converted: usize,
    /// Empty rows skipped.
    pub skipped: usize,
    /// Data rows read from the catalog, blank rows included.
    pub total_rows: usize,
    /// Path the backup was (or would have been) written to.
    pub target: PathBuf,
    /// Whether the run was a dry run.
    pub dry_run: bool,
}

impl ConvertResult {
    /// One-line summary for the user.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.dry_run {
            format!(
                "Dry run: {} books would be written to {}.",
                self.converted,
                self.target.display()
            )
        } else {
            format!(
                "Successfully converted {} books to JSON backup format.",
                self.converted
            )
        }
    }
}

/// Service that converts a CSV catalog into a JSON backup.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertService;

impl ConvertService {
    /// Creates a new conversion service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Converts the catalog at `options.source` into `options.target`.
    ///
    /// The source is read completely and closed before the target is
    /// opened, so both may name the same file.
    ///
    /// # Errors
    ///
    /// - [`Error::OpenFailed`] if the source cannot be opened
    /// - [`Error::ParseFailed`] if the source is not readable CSV
    /// - [`Error::WriteFailed`] if the target cannot be created or written
    /// - [`Error::SerializeFailed`] if the document cannot be encoded
    #[instrument(skip(self, options), fields(source = %options.source.display(), target = %options.target.display()))]
    pub fn convert(&self, options: &ConvertOptions) -> Result<ConvertResult> {
        let (document, stats) = {
            let file = File::open(&options.source).map_err(|e| Error::open(&options.source, e))?;
            Self::read_document(BufReader::new(file))?
        };

        let result = ConvertResult {
            converted: document.book_count(),
            skipped: stats.skipped,
            total_rows: stats.total_rows,
            target: options.target.clone(),
            dry_run: options.dry_run,
        };

        if options.dry_run {
            tracing::info!(books = result.converted, "dry run, backup not written");
            return Ok(result);
        }

        let file = File::create(&options.target).map_err(|e| Error::write(&options.target, e))?;
        let sink = JsonBackupSink::for_target(BufWriter::new(file), &options.target);
        Self::write_document(Box::new(sink), &document)?;

        tracing::info!(
            books = result.converted,
            skipped = result.skipped,
            "backup written"
        );
        Ok(result)
    }

    /// Converts a catalog read from `reader` and writes the backup to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be parsed or the write fails.
    pub fn convert_reader<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<ConvertResult> {
        let (document, stats) = Self::read_document(reader)?;
        Self::write_document(Box::new(JsonBackupSink::new(writer)), &document)?;

        Ok(ConvertResult {
            converted: document.book_count(),
            skipped: stats.skipped,
            total_rows: stats.total_rows,
            target: PathBuf::from("<output>"),
            dry_run: false,
        })
    }

    fn read_document<R: Read>(reader: R) -> Result<(BackupDocument, ReadStats)> {
        let mut source = CsvBookSource::new(reader)?;
        let books = source.read_all()?;
        let stats = ReadStats {
            skipped: source.skipped(),
            total_rows: source.rows_read(),
        };
        tracing::debug!(
            books = books.len(),
            skipped = stats.skipped,
            rows = stats.total_rows,
            "catalog read"
        );

        Ok((BackupDocument::new(books), stats))
    }

    fn write_document(mut sink: Box<dyn BackupSink + '_>, document: &BackupDocument) -> Result<()> {
        sink.write(document)?;
        sink.finalize()
    }
}

/// Row counters gathered while reading a catalog.
struct ReadStats {
    skipped: usize,
    total_rows: usize,
}

/// Resolves the target path, falling back to [`DEFAULT_TARGET`] beside the source.
#[must_use]
pub fn default_target_for(source: &Path) -> PathBuf {
    source
        .parent()
        .map_or_else(|| PathBuf::from(DEFAULT_TARGET), |dir| dir.join(DEFAULT_TARGET))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "Title,Author,ISBN,Publisher,Year,Status,Cover URL
The Hobbit,J.R.R. Tolkien,9780345339683,Houghton Mifflin,1937,read,
,,,,,,
Dune,Frank Herbert,,,c. 1965,,
";

    #[test]
    fn test_convert_reader() {
        let mut output = Vec::new();
        let result = ConvertService::new()
            .convert_reader(CATALOG.as_bytes(), &mut output)
            .unwrap();

        assert_eq!(result.converted, 2);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.total_rows, 3);

        let doc: BackupDocument = serde_json::from_slice(&output).unwrap();
        assert_eq!(doc.version, "1.0");
        let titles: Vec<&str> = doc.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["The Hobbit", "Dune"]);
        assert_eq!(doc.books[1].publication_year, Some(1965));
    }

    #[test]
    fn test_summary() {
        let result = ConvertResult {
            converted: 3,
            skipped: 1,
            total_rows: 4,
            target: PathBuf::from("backup.json"),
            dry_run: false,
        };
        assert_eq!(
            result.summary(),
            "Successfully converted 3 books to JSON backup format."
        );

        let dry = ConvertResult {
            dry_run: true,
            ..result
        };
        assert_eq!(
            dry.summary(),
            "Dry run: 3 books would be written to backup.json."
        );
    }

    #[test]
    fn test_options_default_paths_differ() {
        let options = ConvertOptions::default();
        assert_ne!(options.source, options.target);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_default_target_for() {
        assert_eq!(
            default_target_for(Path::new("exports/library.csv")),
            PathBuf::from("exports/bibliogenius_backup.json")
        );
        assert_eq!(
            default_target_for(Path::new("library.csv")),
            PathBuf::from("bibliogenius_backup.json")
        );
    }
}
