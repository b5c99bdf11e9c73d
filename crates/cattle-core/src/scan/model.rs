//! Scan session domain models.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Confidence recorded for a breed the user picked by hand.
pub const MANUAL_OVERRIDE_CONFIDENCE: f64 = 1.0;

/// Opaque reference to a captured or picked image.
///
/// On a device this is a local file URI; the client only needs to read the
/// bytes back when uploading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// File name used for the multipart upload part.
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.jpg".to_string())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One breed guess returned by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub breed: String,
    /// Score in `[0, 1]`.
    pub confidence: f64,
}

impl Prediction {
    pub fn new(breed: impl Into<String>, confidence: f64) -> Self {
        Self {
            breed: breed.into(),
            confidence,
        }
    }

    /// A user-selected breed, recorded at maximum confidence.
    pub fn manual(breed: impl Into<String>) -> Self {
        Self::new(breed, MANUAL_OVERRIDE_CONFIDENCE)
    }
}

/// The in-progress scan: one captured image and its latest classification.
///
/// Held only for one capture-to-result cycle and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSession {
    pub captured_image: Option<ImageRef>,
    /// Ordered as returned by the backend; index 0 is treated as the top guess.
    pub predictions: Vec<Prediction>,
}

impl ScanSession {
    /// First prediction, if any.
    pub fn top_prediction(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    pub fn is_empty(&self) -> bool {
        self.captured_image.is_none() && self.predictions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_prediction_is_full_confidence() {
        let prediction = Prediction::manual("Gir");
        assert_eq!(prediction.breed, "Gir");
        assert_eq!(prediction.confidence, 1.0);
    }

    #[test]
    fn test_image_file_name() {
        let image = ImageRef::new("/tmp/captures/cow_01.jpg");
        assert_eq!(image.file_name(), "cow_01.jpg");
        assert_eq!(ImageRef::new("/").file_name(), "image.jpg");
    }

    #[test]
    fn test_top_prediction_is_first_element() {
        let session = ScanSession {
            captured_image: Some(ImageRef::from("a.jpg")),
            predictions: vec![Prediction::new("Sahiwal", 0.4), Prediction::new("Gir", 0.6)],
        };
        assert_eq!(session.top_prediction().unwrap().breed, "Sahiwal");
    }
}
