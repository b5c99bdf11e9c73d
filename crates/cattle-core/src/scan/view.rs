//! Result screen projection.

use super::model::{ImageRef, Prediction, ScanSession};

const UNKNOWN_BREED: &str = "Unknown";

/// Formats a `[0, 1]` score as a whole percentage, e.g. `0.92` → `"92%"`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", (confidence * 100.0).round())
}

/// What a result screen shows for the current scan session.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResultView {
    pub image: Option<ImageRef>,
    /// Top prediction, or `Unknown` at zero confidence when the list is empty.
    pub top: Prediction,
    /// Every prediction after the top one, in backend order.
    pub possible_matches: Vec<Prediction>,
}

impl ScanResultView {
    pub fn from_session(session: &ScanSession) -> Self {
        let top = session
            .top_prediction()
            .cloned()
            .unwrap_or_else(|| Prediction::new(UNKNOWN_BREED, 0.0));
        let possible_matches = session.predictions.iter().skip(1).cloned().collect();

        Self {
            image: session.captured_image.clone(),
            top,
            possible_matches,
        }
    }

    pub fn confidence_label(&self) -> String {
        format_confidence(self.top.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confidence_rounds() {
        assert_eq!(format_confidence(0.92), "92%");
        assert_eq!(format_confidence(0.555), "56%");
        assert_eq!(format_confidence(1.0), "100%");
        assert_eq!(format_confidence(0.0), "0%");
    }

    #[test]
    fn test_format_confidence_rounds_halves_up() {
        assert_eq!(format_confidence(0.625), "63%");
        assert_eq!(format_confidence(0.125), "13%");
        assert_eq!(format_confidence(0.005), "1%");
    }

    #[test]
    fn test_view_splits_top_and_matches() {
        let session = ScanSession {
            captured_image: Some(ImageRef::from("cow.jpg")),
            predictions: vec![
                Prediction::new("Jersey", 0.55),
                Prediction::new("Brown Swiss", 0.30),
            ],
        };
        let view = ScanResultView::from_session(&session);
        assert_eq!(view.top.breed, "Jersey");
        assert_eq!(view.confidence_label(), "55%");
        assert_eq!(view.possible_matches.len(), 1);
        assert_eq!(view.possible_matches[0].breed, "Brown Swiss");
        assert_eq!(format_confidence(view.possible_matches[0].confidence), "30%");
    }

    #[test]
    fn test_view_of_empty_session_has_no_placeholders() {
        let view = ScanResultView::from_session(&ScanSession::default());
        assert_eq!(view.top.breed, "Unknown");
        assert_eq!(view.top.confidence, 0.0);
        assert!(view.possible_matches.is_empty());
    }
}
