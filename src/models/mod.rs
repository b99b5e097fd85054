//! Data models for the library backup document.
//!
//! - [`BookRecord`]: one normalized book entry
//! - [`BackupDocument`]: the top-level envelope holding every collection

mod backup;
mod book;

pub use backup::{BACKUP_VERSION, BackupDocument};
pub use book::{BookRecord, UNTITLED_BOOK};
