//! Shared handlers for integration testing.

use std::io::{self, Write};

use axum::http::header::{HeaderValue, CONTENT_TYPE};
use gateway_response::ResponseSink;

/// Handler that writes a JSON document without declaring a content type.
#[allow(dead_code)]
pub fn json_handler(sink: &mut dyn ResponseSink) -> io::Result<()> {
    sink.write_all(br#"{"ok":true}"#)
}

/// Handler that only sets a status.
#[allow(dead_code)]
pub fn not_found_handler(sink: &mut dyn ResponseSink) -> io::Result<()> {
    sink.write_status(404);
    Ok(())
}

/// Handler that streams a body in several chunks.
#[allow(dead_code)]
pub fn chunked_handler(sink: &mut dyn ResponseSink, chunks: &[&[u8]]) -> io::Result<()> {
    sink.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/x-ndjson"));
    for chunk in chunks {
        sink.write_all(chunk)?;
    }
    Ok(())
}

/// Handler that never touches the sink.
#[allow(dead_code)]
pub fn silent_handler(_sink: &mut dyn ResponseSink) -> io::Result<()> {
    Ok(())
}
