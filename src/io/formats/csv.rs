//! CSV catalog reader.
//!
//! Expects the header row produced by the catalog export:
//! `Title,Author,ISBN,Publisher,Year,Status,Cover URL`. Header names are
//! matched exactly; unknown columns are ignored and missing ones read as
//! absent for every row.

use crate::Result;
use crate::io::normalize::{clean_str, is_blank_row, parse_year};
use crate::io::traits::BookSource;
use crate::models::BookRecord;
use std::io::Read;

/// Maps CSV column indices to book fields.
#[derive(Debug, Default, PartialEq, Eq)]
struct ColumnMap {
    title: Option<usize>,
    author: Option<usize>,
    isbn: Option<usize>,
    publisher: Option<usize>,
    year: Option<usize>,
    status: Option<usize>,
    cover_url: Option<usize>,
}

impl ColumnMap {
    /// Creates a column map from CSV headers.
    ///
    /// When a header name repeats, the last occurrence wins.
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut map = Self::default();

        for (i, header) in headers.iter().enumerate() {
            match header.trim_start_matches('\u{feff}') {
                "Title" => map.title = Some(i),
                "Author" => map.author = Some(i),
                "ISBN" => map.isbn = Some(i),
                "Publisher" => map.publisher = Some(i),
                "Year" => map.year = Some(i),
                "Status" => map.status = Some(i),
                "Cover URL" => map.cover_url = Some(i),
                _ => {}, // Ignore unknown columns
            }
        }

        map
    }
}

/// CSV book source.
///
/// Rows may be shorter or longer than the header row; short rows read the
/// missing columns as absent.
pub struct CsvBookSource<R: Read> {
    reader: csv::Reader<R>,
    column_map: ColumnMap,
    record: csv::StringRecord,
    rows_read: usize,
    skipped: usize,
}

impl<R: Read> CsvBookSource<R> {
    /// Creates a new CSV book source and reads the header row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseFailed`](crate::Error::ParseFailed) if the header
    /// row cannot be read.
    pub fn new(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let column_map = ColumnMap::from_headers(csv_reader.headers()?);
        tracing::debug!(?column_map, "mapped catalog columns");

        Ok(Self {
            reader: csv_reader,
            column_map,
            record: csv::StringRecord::new(),
            rows_read: 0,
            skipped: 0,
        })
    }

    /// Number of data rows read so far, blank rows included.
    #[must_use]
    pub const fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Maps the current record to a book.
    fn parse_record(&self) -> BookRecord {
        let get = |idx: Option<usize>| idx.and_then(|i| self.record.get(i));

        BookRecord::new(clean_str(get(self.column_map.title)).unwrap_or_default())
            .with_author(clean_str(get(self.column_map.author)))
            .with_isbn(clean_str(get(self.column_map.isbn)))
            .with_publisher(clean_str(get(self.column_map.publisher)))
            .with_publication_year(parse_year(get(self.column_map.year)))
            .with_reading_status(clean_str(get(self.column_map.status)))
            .with_cover_url(clean_str(get(self.column_map.cover_url)))
    }
}

impl<R: Read> BookSource for CsvBookSource<R> {
    fn next(&mut self) -> Result<Option<BookRecord>> {
        loop {
            if !self.reader.read_record(&mut self.record)? {
                return Ok(None);
            }
            self.rows_read += 1;

            if is_blank_row(self.record.iter()) {
                self.skipped += 1;
                let line = self.record.position().map(csv::Position::line);
                tracing::debug!(?line, "skipping blank row");
                continue;
            }

            return Ok(Some(self.parse_record()));
        }
    }

    fn skipped(&self) -> usize {
        self.skipped
    }
}
