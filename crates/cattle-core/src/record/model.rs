//! Scan record domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the backend for scan dates.
pub const SCAN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One saved scan as listed by the backend, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: i64,
    pub breed: String,
    pub confidence: f64,
    /// `YYYY-MM-DD HH:MM`
    pub date: String,
    pub location: String,
    /// Relative (`/uploads/...`) or absolute image URL.
    pub image: String,
}

impl ScanRecord {
    /// Parsed scan timestamp; `None` if the backend sent an unexpected layout.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, SCAN_DATE_FORMAT).ok()
    }
}

/// Scan counters for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub total_scans: u64,
    pub this_month: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_timestamp_parses_backend_format() {
        let record = ScanRecord {
            id: 7,
            breed: "Gir".to_string(),
            confidence: 0.91,
            date: "2026-03-09 14:05".to_string(),
            location: "India".to_string(),
            image: "/uploads/7.jpg".to_string(),
        };
        let ts = record.timestamp().unwrap();
        assert_eq!(ts.year(), 2026);
        assert_eq!(ts.month(), 3);
        assert_eq!(ts.minute(), 5);
    }
}
