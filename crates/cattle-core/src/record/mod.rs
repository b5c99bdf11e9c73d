//! Scan history domain.

mod model;
mod query;

pub use model::{SCAN_DATE_FORMAT, ScanRecord, ScanStats};
pub use query::{RecordPeriod, RecordQuery};
