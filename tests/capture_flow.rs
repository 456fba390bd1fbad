//! End-to-end behavior of the response capture.

use std::io::Write;

use axum::http::header::{HeaderValue, CONTENT_TYPE, SET_COOKIE};
use gateway_response::{CaptureError, CloseEvent, CloseNotifier, ResponseCapture, ResponseSink};

mod common;

#[test]
fn test_json_body_without_status() {
    let mut capture = ResponseCapture::new();
    common::json_handler(&mut capture).unwrap();

    let response = capture.into_proxy_response().unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, r#"{"ok":true}"#);
    assert!(!response.is_base64_encoded);
    assert_eq!(
        response.header_values("Content-Type"),
        ["text/plain; charset=utf-8".to_string()]
    );
}

#[test]
fn test_status_only_response() {
    let mut capture = ResponseCapture::new();
    common::not_found_handler(&mut capture).unwrap();

    let response = capture.into_proxy_response().unwrap();
    assert_eq!(response.status_code, 404);
    assert!(response.body.is_empty());
    assert!(response.header("Content-Type").is_none());
}

#[test]
fn test_silent_handler_is_uninitialized() {
    let mut capture = ResponseCapture::new();
    common::silent_handler(&mut capture).unwrap();

    assert_eq!(
        capture.into_proxy_response().unwrap_err(),
        CaptureError::Uninitialized
    );
}

#[test]
fn test_binary_body_round_trips() {
    let mut capture = ResponseCapture::new();
    capture.write_all(&[0xFF, 0xFE, 0x00]).unwrap();

    let response = capture.into_proxy_response().unwrap();
    // The flag reflects the encoding actually applied.
    assert!(response.is_base64_encoded);
    assert_eq!(response.decoded_body().unwrap(), vec![0xFF, 0xFE, 0x00]);
}

#[test]
fn test_binary_body_sniffed_as_image() {
    let png: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\xff\xff";
    let mut capture = ResponseCapture::new();
    capture.write_all(png).unwrap();

    let response = capture.into_proxy_response().unwrap();
    assert_eq!(response.header("content-type"), Some("image/png"));
    assert_eq!(response.decoded_body().unwrap(), png);
}

#[test]
fn test_chunks_accumulate_in_order() {
    let mut capture = ResponseCapture::new();
    common::chunked_handler(&mut capture, &[b"{\"a\":1}\n", b"{\"a\":2}\n", b""]).unwrap();

    let response = capture.into_proxy_response().unwrap();
    assert_eq!(response.body, "{\"a\":1}\n{\"a\":2}\n");
    assert_eq!(response.header("Content-Type"), Some("application/x-ndjson"));
}

#[test]
fn test_multi_value_headers_survive() {
    let mut capture = ResponseCapture::new();
    let headers = capture.headers_mut();
    headers.append(SET_COOKIE, HeaderValue::from_static("session=abc"));
    headers.append(SET_COOKIE, HeaderValue::from_static("theme=dark"));
    headers.append("x-trace", HeaderValue::from_static("1"));
    headers.remove("x-trace");
    capture.write_status(302);

    let response = capture.into_proxy_response().unwrap();
    assert_eq!(
        response.headers.get("Set-Cookie").unwrap(),
        &vec!["session=abc".to_string(), "theme=dark".to_string()]
    );
    assert!(!response.headers.contains_key("X-Trace"));
}

#[test]
fn test_sniffed_type_is_fixed_by_first_write() {
    let mut capture = ResponseCapture::new();
    capture.write_all(b"plain text first").unwrap();
    capture.write_all(b"\x00\x01binary later").unwrap();

    assert_eq!(
        capture.headers().get(CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    let response = capture.into_proxy_response().unwrap();
    // 0x00 and 0x01 are valid UTF-8, so the body still travels as text.
    assert!(!response.is_base64_encoded);
}

#[test]
fn test_every_signal_fires_once_after_finalize() {
    let mut capture = ResponseCapture::new();
    let mut signals: Vec<_> = (0..3).map(|_| capture.close_notify()).collect();
    for _ in 0..5 {
        capture.write_all(b"x").unwrap();
    }
    assert!(signals.iter_mut().all(|s| s.try_event().is_none()));

    capture.into_proxy_response().unwrap();

    for signal in &mut signals {
        assert_eq!(signal.try_event(), Some(CloseEvent::Finalized));
    }
}

#[test]
fn test_dropped_capture_reports_abandoned() {
    let mut capture = ResponseCapture::new();
    let mut signal = capture.close_notify();
    drop(capture);

    assert_eq!(signal.try_event(), Some(CloseEvent::Abandoned));
}

#[tokio::test]
async fn test_waiting_task_sees_close() {
    let mut capture = ResponseCapture::new();
    let signal = capture.close_notify();
    let watcher = tokio::spawn(async move { signal.await });

    capture.write_status(204);
    let response = capture.into_proxy_response().unwrap();

    assert_eq!(watcher.await.unwrap(), CloseEvent::Finalized);
    assert_eq!(response.status_code, 204);
}
