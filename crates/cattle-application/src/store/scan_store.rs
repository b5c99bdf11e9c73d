use std::sync::RwLock;

use cattle_core::scan::{ImageRef, Prediction, ScanSession};

/// Holds the in-progress scan. Never persisted.
#[derive(Default)]
pub struct ScanStore {
    state: RwLock<ScanSession>,
}

impl ScanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ScanSession {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Replaces the image; predictions are left as they are.
    pub fn set_captured_image(&self, image: Option<ImageRef>) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .captured_image = image;
    }

    /// Replaces the prediction list wholesale.
    pub fn set_predictions(&self, predictions: Vec<Prediction>) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .predictions = predictions;
    }

    pub fn reset_scan(&self) {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = ScanSession::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_image_keeps_predictions() {
        let store = ScanStore::new();
        store.set_predictions(vec![Prediction::new("Gir", 0.9)]);
        store.set_captured_image(Some(ImageRef::from("/tmp/cow.jpg")));

        let session = store.snapshot();
        assert_eq!(session.captured_image, Some(ImageRef::from("/tmp/cow.jpg")));
        assert_eq!(session.predictions.len(), 1);
    }

    #[test]
    fn test_set_predictions_replaces_list() {
        let store = ScanStore::new();
        store.set_predictions(vec![Prediction::new("Gir", 0.9), Prediction::new("Surti", 0.1)]);
        store.set_predictions(vec![Prediction::new("Murrah", 0.4)]);
        assert_eq!(store.snapshot().predictions, vec![Prediction::new("Murrah", 0.4)]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let store = ScanStore::new();
        store.set_captured_image(Some(ImageRef::from("/tmp/cow.jpg")));
        store.set_predictions(vec![Prediction::new("Gir", 0.9)]);

        store.reset_scan();
        assert_eq!(store.snapshot(), ScanSession::default());
    }
}
