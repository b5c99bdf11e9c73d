//! Scan domain: the transient capture-to-result session and its routing rule.
//!
//! # Module Structure
//!
//! - `model`: image reference, prediction and the in-progress scan session
//! - `confidence`: the confidence threshold and high/low routing
//! - `phase`: workflow phases
//! - `view`: what a result screen renders from a scan session

mod confidence;
mod model;
mod phase;
mod view;

pub use confidence::{CONFIDENCE_THRESHOLD, ConfidenceBand, route_predictions};
pub use model::{ImageRef, MANUAL_OVERRIDE_CONFIDENCE, Prediction, ScanSession};
pub use phase::ScanPhase;
pub use view::{ScanResultView, format_confidence};
