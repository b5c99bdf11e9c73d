//! Scan workflow phases.

use std::fmt;

use super::confidence::ConfidenceBand;

/// Where a scan attempt currently is.
///
/// `Idle → Captured → Analyzing → ResultHigh | ResultLow`, then back to
/// `Idle` on save or retake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanPhase {
    Idle,
    Captured,
    Analyzing,
    ResultHigh,
    ResultLow,
}

impl ScanPhase {
    pub fn name(&self) -> &'static str {
        match self {
            ScanPhase::Idle => "Idle",
            ScanPhase::Captured => "Captured",
            ScanPhase::Analyzing => "Analyzing",
            ScanPhase::ResultHigh => "ResultHigh",
            ScanPhase::ResultLow => "ResultLow",
        }
    }

    pub fn is_result(&self) -> bool {
        matches!(self, ScanPhase::ResultHigh | ScanPhase::ResultLow)
    }
}

impl From<ConfidenceBand> for ScanPhase {
    fn from(band: ConfidenceBand) -> Self {
        match band {
            ConfidenceBand::High => ScanPhase::ResultHigh,
            ConfidenceBand::Low => ScanPhase::ResultLow,
        }
    }
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
