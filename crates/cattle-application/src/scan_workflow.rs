//! Scan workflow use case.
//!
//! Drives one capture-to-result cycle:
//!
//! ```text
//! Idle ──capture──▶ Captured ──confirm_preview──▶ Analyzing ──▶ ResultHigh | ResultLow
//!  ▲                   │  ▲                          │
//!  │                   │  └──────── failure ─────────┘
//!  └──── retake / save ┘      ResultLow ──select_manual_breed──▶ ResultHigh
//! ```
//!
//! Actions outside their phase fail with `InvalidTransition` and leave both
//! the phase and the scan session untouched.

use std::sync::Arc;

use cattle_core::CattleError;
use cattle_core::api::BreedApi;
use cattle_core::error::Result;
use cattle_core::scan::{ImageRef, Prediction, ScanPhase, ScanResultView, route_predictions};

use crate::store::{ScanStore, SessionStore};

pub struct ScanWorkflow {
    api: Arc<dyn BreedApi>,
    scan_store: Arc<ScanStore>,
    session_store: Arc<SessionStore>,
    phase: ScanPhase,
}

impl ScanWorkflow {
    pub fn new(
        api: Arc<dyn BreedApi>,
        scan_store: Arc<ScanStore>,
        session_store: Arc<SessionStore>,
    ) -> Self {
        Self {
            api,
            scan_store,
            session_store,
            phase: ScanPhase::Idle,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Result screen contents; only available in a result phase.
    pub fn result_view(&self) -> Option<ScanResultView> {
        self.phase
            .is_result()
            .then(|| ScanResultView::from_session(&self.scan_store.snapshot()))
    }

    /// Records a captured or picked image and clears any earlier predictions.
    pub fn capture(&mut self, image: ImageRef) -> Result<ScanPhase> {
        self.require(&[ScanPhase::Idle, ScanPhase::Captured], "capture")?;

        tracing::debug!("[ScanWorkflow] Captured {}", image);
        self.scan_store.set_captured_image(Some(image));
        self.scan_store.set_predictions(Vec::new());
        self.phase = ScanPhase::Captured;
        Ok(self.phase)
    }

    /// Sends the captured image for classification and routes on confidence.
    ///
    /// On failure, or when the returned future is dropped mid-request, the
    /// workflow returns to `Captured` with the scan session unchanged, so the
    /// same image can be submitted again.
    pub async fn confirm_preview(&mut self) -> Result<ScanPhase> {
        self.require(&[ScanPhase::Captured], "confirm_preview")?;

        let image = self
            .scan_store
            .snapshot()
            .captured_image
            .ok_or_else(|| CattleError::internal("Captured phase without an image"))?;
        let mobile = self.session_store.effective_mobile();

        let api = self.api.clone();
        let analyzing = AnalyzingGuard::enter(&mut self.phase);
        tracing::info!("[ScanWorkflow] Analyzing {}", image);

        match api.classify_breed(&image, &mobile).await {
            Ok(predictions) => {
                let band = route_predictions(&predictions);
                tracing::info!(
                    "[ScanWorkflow] {} predictions, routed {:?}",
                    predictions.len(),
                    band
                );
                self.scan_store.set_predictions(predictions);
                Ok(analyzing.finish(band.into()))
            }
            Err(e) => {
                tracing::warn!("[ScanWorkflow] Classification failed: {}", e);
                analyzing.finish(ScanPhase::Captured);
                Err(e)
            }
        }
    }

    /// Discards the current scan and starts over.
    pub fn retake(&mut self) -> Result<()> {
        self.require(
            &[ScanPhase::Captured, ScanPhase::ResultHigh, ScanPhase::ResultLow],
            "retake",
        )?;

        self.scan_store.reset_scan();
        self.phase = ScanPhase::Idle;
        Ok(())
    }

    /// Accepts a high-confidence result and returns what was accepted.
    pub fn save(&mut self) -> Result<ScanResultView> {
        self.require(&[ScanPhase::ResultHigh], "save")?;

        let view = ScanResultView::from_session(&self.scan_store.snapshot());
        tracing::info!(
            "[ScanWorkflow] Saved {} ({})",
            view.top.breed,
            view.confidence_label()
        );
        self.scan_store.reset_scan();
        self.phase = ScanPhase::Idle;
        Ok(view)
    }

    /// Replaces a low-confidence result with a breed the user picked.
    pub fn select_manual_breed(&mut self, breed: &str) -> Result<ScanResultView> {
        self.require(&[ScanPhase::ResultLow], "select_manual_breed")?;

        let breed = breed.trim();
        if breed.is_empty() {
            return Err(CattleError::validation("Breed name must not be empty"));
        }

        self.scan_store.set_predictions(vec![Prediction::manual(breed)]);
        self.phase = ScanPhase::ResultHigh;
        tracing::info!("[ScanWorkflow] Manual override: {}", breed);
        Ok(ScanResultView::from_session(&self.scan_store.snapshot()))
    }

    fn require(&self, allowed: &[ScanPhase], action: &'static str) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(CattleError::InvalidTransition {
                phase: self.phase.name(),
                action,
            })
        }
    }
}

/// Holds the workflow in `Analyzing` for the duration of a classification.
///
/// If the request future is dropped before completing, the phase falls back
/// to `Captured` and the late response is never observed.
struct AnalyzingGuard<'a> {
    phase: &'a mut ScanPhase,
    finished: bool,
}

impl<'a> AnalyzingGuard<'a> {
    fn enter(phase: &'a mut ScanPhase) -> Self {
        *phase = ScanPhase::Analyzing;
        Self {
            phase,
            finished: false,
        }
    }

    fn finish(mut self, next: ScanPhase) -> ScanPhase {
        *self.phase = next;
        self.finished = true;
        next
    }
}

impl Drop for AnalyzingGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("[ScanWorkflow] Classification abandoned, back to Captured");
            *self.phase = ScanPhase::Captured;
        }
    }
}
