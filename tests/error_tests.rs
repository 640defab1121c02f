// Error handling tests: rejected bodies never reach the handler

mod common;

use common::TestServer;
use messages_api::config::AppConfig;
use messages_api::error::ApiError;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn error_type(res: reqwest::Response) -> String {
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["type"], "error");
    body["error"]["type"].as_str().unwrap().to_string()
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        ApiError::MalformedBody("EOF while parsing".to_string()),
        ApiError::InvalidRequest("expected a map".to_string()),
        ApiError::InvalidPath("Invalid UTF-8 in `id`".to_string()),
        ApiError::PayloadTooLarge,
        ApiError::UnsupportedMediaType,
        ApiError::Config("missing file".to_string()),
        ApiError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_error_status_codes() {
    assert_eq!(ApiError::MalformedBody(String::new()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        ApiError::InvalidRequest(String::new()).status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        ApiError::InvalidPath(String::new()).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        ApiError::UnsupportedMediaType.status(),
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    );
    assert_eq!(
        ApiError::Config(String::new()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(server.url("/messages"))
        .header("content-type", "application/json")
        .body("{\"text\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_type(res).await, "invalid_request_error");
    assert!(server.sink.is_empty());
}

#[tokio::test]
async fn test_non_object_body_is_unprocessable() {
    let server = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(server.url("/messages"))
        .header("content-type", "application/json")
        .body("[\"hello\"]")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_type(res).await, "invalid_request_error");
    assert!(server.sink.is_empty());
}

#[tokio::test]
async fn test_missing_content_type_is_unsupported() {
    let server = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(server.url("/messages"))
        .body("{\"text\":\"hello\"}")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(server.sink.is_empty());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = AppConfig::default();
    config.server.body_limit_bytes = 64;
    let server = TestServer::spawn_with(config).await;

    let text = "x".repeat(256);
    let res = reqwest::Client::new()
        .post(server.url("/messages"))
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(error_type(res).await, "request_too_large");
    assert!(server.sink.is_empty());
}

#[tokio::test]
async fn test_oversized_chunked_body_is_rejected() {
    let mut config = AppConfig::default();
    config.server.body_limit_bytes = 64;
    let server = TestServer::spawn_with(config).await;

    // No Content-Length: the limit can only trip while the body streams in
    let addr = server.base_url.trim_start_matches("http://");
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let chunk = format!("{{\"text\":\"{}\"}}", "x".repeat(256));
    let request = format!(
        "POST /messages HTTP/1.1\r\n\
         Host: {}\r\n\
         Content-Type: application/json\r\n\
         Transfer-Encoding: chunked\r\n\
         Connection: close\r\n\r\n\
         {:x}\r\n{}\r\n0\r\n\r\n",
        addr,
        chunk.len(),
        chunk
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    assert!(raw.starts_with("HTTP/1.1 413"), "unexpected response: {}", raw);
    assert!(raw.contains("\"request_too_large\""), "unexpected response: {}", raw);
    assert!(server.sink.is_empty());
}

#[tokio::test]
async fn test_invalid_utf8_id_is_bad_request() {
    let server = TestServer::spawn().await;

    let res = reqwest::get(server.url("/messages/%FF")).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_type(res).await, "invalid_request_error");
    assert!(server.sink.is_empty());
}
