//! End-to-end tests: full router over the real GCS client, upstream served by mockito.
//!
//! Run with: `cargo test -p birdcam-api --test gcs_e2e_test`

use axum_test::TestServer;
use birdcam_api::setup::{build_router, storage::setup_storage};
use birdcam_core::Config;
use serde_json::Value;
use std::time::Duration;

fn config_for(server_url: &str) -> Config {
    let mut config = Config::default();
    config.storage.api_base_url = format!("{}/storage/v1", server_url);
    config.storage.public_base_url = server_url.to_string();
    config.storage.connect_timeout = Duration::from_secs(2);
    config.storage.request_timeout = Duration::from_secs(5);
    config
}

fn server_for(config: Config) -> TestServer {
    let storage = setup_storage(&config).expect("storage");
    let router = build_router(config, storage).expect("router");
    TestServer::new(router).expect("test server")
}

#[tokio::test]
async fn test_listing_through_gcs_client() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("GET", "/storage/v1/b/bird_cam_images/o")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items":[
                {"name":"robin.jpg","size":"2048","updated":"2024-05-01T07:31:20.123Z"},
                {"name":"log.txt","size":"5"}
            ]}"#,
        )
        .create_async()
        .await;

    let config = config_for(&upstream.url());
    let server = server_for(config);

    let response = server.get("/api/media/images").await;
    mock.assert_async().await;
    assert_eq!(response.status_code(), 200);

    let json = response.json::<Value>();
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["name"], "robin.jpg");
    assert_eq!(json[0]["size"], 2048);
    assert_eq!(
        json[0]["url"],
        format!("{}/bird_cam_images/robin.jpg", upstream.url())
    );
}

#[tokio::test]
async fn test_video_proxy_through_gcs_client() {
    let mut upstream = mockito::Server::new_async().await;
    let payload: Vec<u8> = (0..10_000u32).map(|i| (i % 256) as u8).collect();
    let mock = upstream
        .mock("GET", "/bird_cam_videos/dawn.mp4")
        .with_status(200)
        .with_header("content-type", "video/mp4")
        .with_body(payload.clone())
        .create_async()
        .await;

    let server = server_for(config_for(&upstream.url()));

    let response = server.get("/api/video/dawn.mp4").await;
    mock.assert_async().await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("content-type"), "video/mp4");
    assert!(response
        .header("content-disposition")
        .to_str()
        .expect("ascii header")
        .contains("dawn.mp4"));
    assert_eq!(response.as_bytes().as_ref(), payload.as_slice());
}

#[tokio::test]
async fn test_upstream_forbidden_is_not_found() {
    let mut upstream = mockito::Server::new_async().await;
    let _mock = upstream
        .mock("GET", "/bird_cam_videos/secret.mp4")
        .with_status(403)
        .with_body("<Error><Code>AccessDenied</Code></Error>")
        .create_async()
        .await;

    let server = server_for(config_for(&upstream.url()));

    let response = server.get("/api/video/secret.mp4").await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["error"], "Video not found");
}

#[tokio::test]
async fn test_upstream_down_is_server_error() {
    let server = server_for(config_for("http://127.0.0.1:1"));

    let listing = server.get("/api/media/videos").await;
    assert_eq!(listing.status_code(), 500);
    assert_eq!(listing.json::<Value>()["error"], "Failed to fetch media");

    let video = server.get("/api/video/dawn.mp4").await;
    assert_eq!(video.status_code(), 500);
    assert_eq!(video.json::<Value>()["error"], "Failed to fetch video");

    let health = server.get("/api/health").await;
    assert_eq!(health.status_code(), 200);
}
