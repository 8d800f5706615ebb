//! Video example API tests.

mod common;

use axum::http::StatusCode;

use common::TestContext;
use gloss_practice_backend::models::VideoExample;

#[tokio::test]
async fn test_health() {
    let server = TestContext::new().server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_random_video() {
    let server = TestContext::new().server();

    let response = server.get("/random_video").await;

    response.assert_status_ok();
    let video: VideoExample = response.json();
    assert!(video.video_url.starts_with("https://example.com/"));
    assert!([1, 1523, 88, 9].contains(&video.word_id));
}

#[tokio::test]
async fn test_random_video_payload_fields() {
    let server = TestContext::new().server();

    let body: serde_json::Value = server.get("/random_video").await.json();

    for field in [
        "word_id",
        "common_word",
        "video_url",
        "english_translation",
        "sign_sequence",
        "raw_sentence",
    ] {
        assert!(body.get(field).is_some(), "missing field {}", field);
    }
}

#[tokio::test]
async fn test_random_video_empty_catalog() {
    let server = TestContext::empty().server();

    let response = server.get("/random_video").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
}
