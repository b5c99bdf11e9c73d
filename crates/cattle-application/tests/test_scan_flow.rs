//! Scan, auth and dashboard flows against a mock backend over real HTTP.

use std::sync::Arc;
use std::time::Duration;

use cattle_application::AppContext;
use cattle_core::config::RootConfig;
use cattle_core::scan::{ImageRef, ScanPhase};
use cattle_infrastructure::InMemoryBlobStore;
use cattle_interaction::BreedApiClient;
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn context_for(server: &MockServer, timeout: Duration) -> AppContext {
    let api = BreedApiClient::new(server.base_url(), timeout).unwrap();
    AppContext::with_parts(
        RootConfig::default(),
        Arc::new(api),
        Arc::new(InMemoryBlobStore::new()),
    )
}

fn write_image(dir: &TempDir) -> ImageRef {
    let path = dir.path().join("cow.jpg");
    std::fs::write(&path, b"fake-jpeg-bytes").unwrap();
    ImageRef::new(path)
}

#[tokio::test]
async fn test_logged_in_high_confidence_scan_is_saved() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/auth/verify");
        then.status(200)
            .json_body(json!({"success": true, "message": "Login successful"}));
    });
    let predict = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .body_includes("9876543210");
        then.status(200).json_body(json!({
            "predictions": [
                {"breed": "Gir", "confidence": 0.92},
                {"breed": "Sahiwal", "confidence": 0.05}
            ]
        }));
    });

    let context = context_for(&server, Duration::from_secs(5));
    context.auth.verify("9876543210", "1234").await.unwrap();

    let mut workflow = context.scan_workflow();
    workflow.capture(write_image(&temp_dir)).unwrap();
    assert_eq!(workflow.confirm_preview().await.unwrap(), ScanPhase::ResultHigh);

    let view = workflow.save().unwrap();
    assert_eq!(view.top.breed, "Gir");
    assert_eq!(view.confidence_label(), "92%");
    assert_eq!(view.possible_matches.len(), 1);
    assert_eq!(workflow.phase(), ScanPhase::Idle);
    assert!(context.scan_store.snapshot().is_empty());
    predict.assert();
}

#[tokio::test]
async fn test_guest_low_confidence_scan_accepts_manual_breed() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let predict = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .body_includes("1234567890");
        then.status(200).json_body(json!({
            "predictions": [
                {"breed": "Jersey", "confidence": 0.55},
                {"breed": "Brown Swiss", "confidence": 0.30}
            ]
        }));
    });

    let context = context_for(&server, Duration::from_secs(5));
    let mut workflow = context.scan_workflow();
    workflow.capture(write_image(&temp_dir)).unwrap();
    assert_eq!(workflow.confirm_preview().await.unwrap(), ScanPhase::ResultLow);
    assert!(workflow.save().is_err());

    let view = workflow.select_manual_breed("Murrah").unwrap();
    assert_eq!(view.top.breed, "Murrah");
    assert_eq!(view.confidence_label(), "100%");
    assert_eq!(workflow.phase(), ScanPhase::ResultHigh);
    predict.assert();
}

#[tokio::test]
async fn test_timeout_returns_to_captured_and_retry_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let mut slow = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .delay(Duration::from_millis(800))
            .json_body(json!({"predictions": []}));
    });

    let context = context_for(&server, Duration::from_millis(200));
    let mut workflow = context.scan_workflow();
    let image = write_image(&temp_dir);
    workflow.capture(image.clone()).unwrap();

    let err = workflow.confirm_preview().await.unwrap_err();
    assert!(err.is_timeout());
    assert!(err.is_retryable());
    assert_eq!(workflow.phase(), ScanPhase::Captured);
    let session = context.scan_store.snapshot();
    assert_eq!(session.captured_image, Some(image));
    assert!(session.predictions.is_empty());

    slow.delete();
    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .json_body(json!({"predictions": [{"breed": "Sahiwal", "confidence": 0.81}]}));
    });

    assert_eq!(workflow.confirm_preview().await.unwrap(), ScanPhase::ResultHigh);
}

#[tokio::test]
async fn test_dashboard_resolves_media_against_backend() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/profile/1234567890");
        then.status(200).json_body(json!({
            "mobile": "1234567890",
            "full_name": null,
            "email": null,
            "location": null,
            "role": null,
            "profile_picture": "/uploads/pfp.jpg"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/stats/1234567890");
        then.status(200)
            .json_body(json!({"total_scans": 4, "this_month": 1}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/scans/1234567890");
        then.status(200).json_body(json!([
            {"id": 4, "breed": "Gir", "confidence": 0.92, "date": "2026-10-02 09:15", "location": "Anand", "image": "/uploads/4.jpg"},
            {"id": 3, "breed": "Murrah", "confidence": 1.0, "date": "2026-09-28 17:40", "location": "Anand", "image": "/uploads/3.jpg"},
            {"id": 2, "breed": "Surti", "confidence": 0.74, "date": "2026-09-10 11:05", "location": "Kheda", "image": "https://cdn.example.org/2.jpg"},
            {"id": 1, "breed": "Banni", "confidence": 0.81, "date": "2026-08-30 08:00", "location": "Kutch", "image": "/uploads/1.jpg"}
        ]));
    });

    let context = context_for(&server, Duration::from_secs(5));
    let dashboard = context.dashboard.load().await.unwrap();

    assert_eq!(dashboard.display_name, "Cattle Officer");
    assert_eq!(
        dashboard.profile_picture,
        Some(format!("{}/uploads/pfp.jpg", server.base_url()))
    );
    assert_eq!(dashboard.stats.total_scans, 4);
    assert_eq!(dashboard.recent_scans.len(), 3);
    assert_eq!(dashboard.recent_scans[0].image, format!("{}/uploads/4.jpg", server.base_url()));
    assert_eq!(dashboard.recent_scans[2].image, "https://cdn.example.org/2.jpg");
}
