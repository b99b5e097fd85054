//! Book record types.

use serde::{Deserialize, Serialize};

/// Title used when a row carries no usable title.
pub const UNTITLED_BOOK: &str = "Untitled Book";

/// A single book entry in the backup document.
///
/// Every key is always serialized; absent values are written as `null` so the
/// importing application sees the complete schema for each entry. Fields the
/// CSV export has no data for (`subjects`, `user_rating`, reading dates,
/// `price`, `digital_formats`) keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title, never empty.
    pub title: String,
    /// Author as written in the catalog.
    pub author: Option<String>,
    /// ISBN as written in the catalog (not validated).
    pub isbn: Option<String>,
    /// Publisher name.
    pub publisher: Option<String>,
    /// Year of publication.
    pub publication_year: Option<u64>,
    /// Free-form reading status (e.g. `read`, `to_read`).
    pub reading_status: Option<String>,
    /// URL of a cover image.
    pub cover_url: Option<String>,
    /// Whether the book is owned. Catalog exports only list owned books.
    pub owned: bool,
    /// Subject headings.
    pub subjects: Vec<String>,
    /// User rating.
    pub user_rating: Option<u8>,
    /// When the user started reading.
    pub started_reading_at: Option<String>,
    /// When the user finished reading.
    pub finished_reading_at: Option<String>,
    /// Purchase price.
    pub price: Option<f64>,
    /// Digital formats owned (epub, pdf, ...).
    pub digital_formats: Vec<String>,
}

impl BookRecord {
    /// Creates a record with the given title and every other field at its default.
    ///
    /// An empty or whitespace-only title is replaced with [`UNTITLED_BOOK`].
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let title = if title.trim().is_empty() {
            UNTITLED_BOOK.to_string()
        } else {
            title
        };

        Self {
            title,
            author: None,
            isbn: None,
            publisher: None,
            publication_year: None,
            reading_status: None,
            cover_url: None,
            owned: true,
            subjects: Vec::new(),
            user_rating: None,
            started_reading_at: None,
            finished_reading_at: None,
            price: None,
            digital_formats: Vec::new(),
        }
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    /// Sets the ISBN.
    #[must_use]
    pub fn with_isbn(mut self, isbn: Option<String>) -> Self {
        self.isbn = isbn;
        self
    }

    /// Sets the publisher.
    #[must_use]
    pub fn with_publisher(mut self, publisher: Option<String>) -> Self {
        self.publisher = publisher;
        self
    }

    /// Sets the publication year.
    #[must_use]
    pub const fn with_publication_year(mut self, year: Option<u64>) -> Self {
        self.publication_year = year;
        self
    }

    /// Sets the reading status.
    #[must_use]
    pub fn with_reading_status(mut self, status: Option<String>) -> Self {
        self.reading_status = status;
        self
    }

    /// Sets the cover URL.
    #[must_use]
    pub fn with_cover_url(mut self, url: Option<String>) -> Self {
        self.cover_url = url;
        self
    }
}
