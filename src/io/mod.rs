//! Catalog conversion I/O.
//!
//! Reads a CSV library catalog and writes the JSON backup document.
//!
//! # Architecture
//!
//! - **Normalization** ([`normalize`]) cleans individual fields
//! - **Format adapters** implement [`BookSource`] (CSV) and [`BackupSink`] (JSON)
//! - **Services** ([`ConvertService`]) run the read → map → wrap → write pipeline
//!
//! # Example
//!
//! ```rust,no_run
//! use biblio_backup::io::{ConvertOptions, ConvertService};
//!
//! let result = ConvertService::new()
//!     .convert(&ConvertOptions::new("library.csv", "backup.json"))?;
//! println!("Converted {} books", result.converted);
//! # Ok::<(), biblio_backup::Error>(())
//! ```

pub mod formats;
pub mod normalize;
pub mod services;
pub mod traits;

// Re-exports for convenience
pub use formats::{CsvBookSource, JsonBackupSink};
pub use services::{
    ConvertOptions, ConvertResult, ConvertService, DEFAULT_SOURCE, DEFAULT_TARGET,
    default_target_for,
};
pub use traits::{BackupSink, BookSource};
