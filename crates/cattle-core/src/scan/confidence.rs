//! Confidence routing.
//!
//! The only branching rule of the scan workflow: a classification is
//! accepted automatically when its top score is strictly above
//! [`CONFIDENCE_THRESHOLD`], otherwise it goes to manual review.

use super::model::Prediction;

/// Cutoff separating auto-accepted results from manual review.
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Which result branch a classification lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Low,
}

impl ConfidenceBand {
    /// Band for a single confidence score.
    pub fn for_confidence(confidence: f64) -> Self {
        if confidence > CONFIDENCE_THRESHOLD {
            ConfidenceBand::High
        } else {
            ConfidenceBand::Low
        }
    }
}

/// Routes a classification result by its first element.
///
/// The list is not re-sorted. An empty list is a valid low-confidence
/// outcome.
pub fn route_predictions(predictions: &[Prediction]) -> ConfidenceBand {
    predictions
        .first()
        .map(|top| ConfidenceBand::for_confidence(top.confidence))
        .unwrap_or(ConfidenceBand::Low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(ConfidenceBand::for_confidence(0.7), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::for_confidence(0.7001), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::for_confidence(0.0), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::for_confidence(1.0), ConfidenceBand::High);
    }

    #[test]
    fn test_empty_routes_low() {
        assert_eq!(route_predictions(&[]), ConfidenceBand::Low);
    }

    #[test]
    fn test_routes_on_first_element_only() {
        let predictions = vec![Prediction::new("Jersey", 0.55), Prediction::new("Gir", 0.95)];
        assert_eq!(route_predictions(&predictions), ConfidenceBand::Low);

        let predictions = vec![Prediction::new("Gir", 0.92)];
        assert_eq!(route_predictions(&predictions), ConfidenceBand::High);
    }
}
