//! In-memory filtering of scan history.

use chrono::{Datelike, NaiveDate};

use super::model::ScanRecord;

/// Time window for the records list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordPeriod {
    #[default]
    All,
    /// Same calendar year and month as the reference date.
    ThisMonth,
}

/// Search and period filter applied to fetched records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    /// Case-insensitive substring matched against breed, location and id.
    pub search: String,
    pub period: RecordPeriod,
}

impl RecordQuery {
    pub fn new(search: impl Into<String>, period: RecordPeriod) -> Self {
        Self {
            search: search.into(),
            period,
        }
    }

    pub fn matches(&self, record: &ScanRecord, today: NaiveDate) -> bool {
        self.matches_search(record) && self.matches_period(record, today)
    }

    /// Keeps matching records in their original order.
    pub fn apply(&self, records: Vec<ScanRecord>, today: NaiveDate) -> Vec<ScanRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record, today))
            .collect()
    }

    fn matches_search(&self, record: &ScanRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record.breed.to_lowercase().contains(&needle)
            || record.location.to_lowercase().contains(&needle)
            || record.id.to_string().contains(&needle)
    }

    fn matches_period(&self, record: &ScanRecord, today: NaiveDate) -> bool {
        match self.period {
            RecordPeriod::All => true,
            RecordPeriod::ThisMonth => record
                .timestamp()
                .map(|ts| ts.year() == today.year() && ts.month() == today.month())
                .unwrap_or(false),
        }
    }
}
