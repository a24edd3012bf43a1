//! End-to-end streaming tests over real HTTP.

use bytes::Bytes;
use integrations_http::{
    Client, HttpClient, HttpClientConfig, HttpClientError, Request, StreamEvent, StreamEventKind,
};
use tokio::sync::mpsc;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::new(config).unwrap()
}

async fn sse_server(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/stream"))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "text/event-stream"),
        )
        .mount(&server)
        .await;
    server
}

async fn collect(mut rx: mpsc::Receiver<StreamEvent>) -> Vec<StreamEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_data_then_done() {
    // Arrange
    let server = sse_server(200, "data: hello\ndata: [DONE]\n").await;
    let client = client_for(&server);

    // Act
    let rx = client.get_stream(Request::new("/v1/stream")).await.unwrap();
    let events = collect(rx).await;

    // Assert: one Data event, one terminal event, then closure.
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, StreamEventKind::Data);
    assert_eq!(events[0].body, "hello");
    assert_eq!(events[0].status, 200);
    assert!(events[1].is_end_of_stream());
    assert!(events[1].error.is_none());
}

#[tokio::test]
async fn test_error_status_delivered_in_band() {
    // Arrange
    let server = sse_server(500, "server error").await;
    let client = client_for(&server);

    // Act: the opening call itself succeeds.
    let rx = client.get_stream(Request::new("/v1/stream")).await.unwrap();
    let events = collect(rx).await;

    // Assert: exactly one terminal event carrying the full error body.
    assert_eq!(events.len(), 1);
    assert!(events[0].is_end_of_stream());
    assert_eq!(events[0].body, "server error");
    assert_eq!(events[0].status, 500);
    assert!(matches!(
        events[0].error,
        Some(HttpClientError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_comment_line_carries_leading_colon() {
    // Arrange
    let server = sse_server(200, ": keep-alive\ndata: [DONE]\n").await;
    let client = client_for(&server);

    // Act
    let rx = client.get_stream(Request::new("/v1/stream")).await.unwrap();
    let events = collect(rx).await;

    // Assert
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, StreamEventKind::Comment);
    assert_eq!(events[0].body, ": keep-alive");
}

#[tokio::test]
async fn test_all_field_prefixes_classified() {
    // Arrange
    let body = "event: update\nid: 7\nretry: 3000\nunprefixed\ndata: [DONE]\n";
    let server = sse_server(200, body).await;
    let client = client_for(&server);

    // Act
    let rx = client.get_stream(Request::new("/v1/stream")).await.unwrap();
    let events = collect(rx).await;

    // Assert
    let kinds: Vec<StreamEventKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StreamEventKind::Event,
            StreamEventKind::Id,
            StreamEventKind::Retry,
            StreamEventKind::Data,
            StreamEventKind::EndOfStream,
        ]
    );
    assert_eq!(events[0].body, "update");
    assert_eq!(events[1].body, "7");
    assert_eq!(events[2].body, "3000");
    assert_eq!(events[3].body, "unprefixed");
}

#[tokio::test]
async fn test_eof_without_sentinel_reported_distinctly() {
    // Arrange: the body ends cleanly but no [DONE] ever arrives.
    let server = sse_server(200, "data: only\n").await;
    let client = client_for(&server);

    // Act
    let rx = client.get_stream(Request::new("/v1/stream")).await.unwrap();
    let events = collect(rx).await;

    // Assert
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].body, "only");
    assert!(events[1].is_end_of_stream());
    assert_eq!(events[1].error, Some(HttpClientError::UnexpectedEof));
}

#[tokio::test]
async fn test_post_stream_forces_sse_headers() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/stream"))
        .and(header("Accept", "text/event-stream"))
        .and(header("Cache-Control", "no-cache"))
        .and(header("Connection", "keep-alive"))
        .and(body_string("prompt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"data: [DONE]\n".to_vec(), "text/event-stream"),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let rx = client
        .post_stream(
            // Caller-supplied Accept loses to the forced stream header.
            Request::new("/v1/stream").header("Accept", "application/json"),
            Bytes::from("prompt"),
        )
        .await
        .unwrap();
    let events = collect(rx).await;

    // Assert
    assert_eq!(events.len(), 1);
    assert!(events[0].is_end_of_stream());
}

#[tokio::test]
async fn test_headers_repeated_on_every_event() {
    // Arrange
    let server = sse_server(200, "data: a\ndata: b\ndata: [DONE]\n").await;
    let client = client_for(&server);

    // Act
    let rx = client.get_stream(Request::new("/v1/stream")).await.unwrap();
    let events = collect(rx).await;

    // Assert: status and headers captured at open are on each event.
    assert_eq!(events.len(), 3);
    for event in &events {
        assert_eq!(event.status, 200);
        assert_eq!(
            event.headers.get("content-type").map(String::as_str),
            Some("text/event-stream")
        );
    }
}

#[tokio::test]
async fn test_connection_failure_on_open_surfaces_synchronously() {
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .build();
    let client = HttpClient::new(config).unwrap();

    let result = client.get_stream(Request::new("/v1/stream")).await;

    assert!(matches!(result, Err(HttpClientError::Connection { .. })));
}
