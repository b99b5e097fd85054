//! Format adapters.
//!
//! | Format | Direction | Adapter |
//! |--------|-----------|---------|
//! | CSV | read | [`CsvBookSource`] |
//! | JSON | write | [`JsonBackupSink`] |

mod csv;
mod json;

pub use self::csv::CsvBookSource;
pub use self::json::JsonBackupSink;
