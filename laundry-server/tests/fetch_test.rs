use laundry_server::errors::FetchError;
use laundry_server::services::{HttpFetcher, SnapshotFetcher};
use serde_json::json;

use crate::common::mock_upstream::{MockUpstream, closed_address, upstream_at};

mod common;

const ROOM: &str = r#"{
    "objects": [
        {"type": "D", "x": 1},
        {"type": "washerB", "status_toggle": 2, "time_remaining": 12.7, "percentage": 0.6, "appliance_desc": "01"},
        {"type": "dryerC", "status_toggle": 0, "appliance_desc": "02"}
    ],
    "roomName": "BERTRAM HALL"
}"#;

#[tokio::test]
async fn test_fetch_returns_objects_verbatim() {
    let upstream = MockUpstream::start(ROOM).await;
    let fetcher = HttpFetcher::new(upstream.upstream());

    let snapshot = fetcher.fetch().await.unwrap();

    assert_eq!(snapshot.objects.len(), 3);
    assert_eq!(snapshot.objects[0], json!({"type": "D", "x": 1}));
    assert_eq!(snapshot.objects[2]["appliance_desc"], "02");
}

#[tokio::test]
async fn test_fetch_sends_fixed_query_and_headers() {
    let upstream = MockUpstream::start(ROOM).await;
    let fetcher = HttpFetcher::new(upstream.upstream());

    fetcher.fetch().await.unwrap();

    let seen = upstream.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);

    let request = &seen[0];
    assert_eq!(request.query["school_desc_key"], "405");
    assert_eq!(request.query["location"], "1362511");
    assert_eq!(request.query["userContact"], "9789088494");
    assert_eq!(request.headers["accept"], "application/json, text/plain, */*");
    assert_eq!(
        request.headers["referer"],
        "https://www.laundryview.com/home/405/1362511"
    );
    assert_eq!(request.headers["user-agent"], "laundry-test");
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let upstream = MockUpstream::start("<html>Service Unavailable</html>").await;
    let fetcher = HttpFetcher::new(upstream.upstream());

    let result = fetcher.fetch().await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_missing_objects_is_shape_error() {
    let upstream = MockUpstream::start(r#"{"error": "unknown location"}"#).await;
    let fetcher = HttpFetcher::new(upstream.upstream());

    let result = fetcher.fetch().await;

    assert!(matches!(result, Err(FetchError::Shape)));
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    let fetcher = HttpFetcher::new(upstream_at(closed_address()));

    let result = fetcher.fetch().await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}
