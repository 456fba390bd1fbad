//! In-memory response sink.
//!
//! # Responsibilities
//! - Record status, headers and body written by a handler
//! - Default the status and sniff the content type on body writes
//! - Fire completion signals and render the final [`ProxyResponse`]
//!
//! # Design Decisions
//! - Body is append-only; nothing is ever truncated or rewound
//! - Finalizing consumes the capture, so it can only happen once
//! - No locking: one handler owns the capture for one request

use std::fmt;
use std::io;

use axum::http::header::{HeaderValue, CONTENT_TYPE};
use axum::http::HeaderMap;

use crate::capture::error::{CaptureError, CaptureResult};
use crate::capture::notify::{CloseNotify, Observers};
use crate::capture::state::StatusState;
use crate::gateway::encoding::encode_body;
use crate::gateway::response::ProxyResponse;
use crate::http::sink::{CloseNotifier, ResponseSink};
use crate::http::sniff::detect_content_type;

/// Buffers a handler's response for delivery through a request/response gateway.
///
/// Create one per request, hand it to the handler as its [`ResponseSink`],
/// then call [`ResponseCapture::into_proxy_response`] exactly once.
///
/// # Single writer
///
/// The capture is driven by one handler on one thread of control. Header
/// access returns the live map with no synchronization around it.
#[derive(Debug, Default)]
pub struct ResponseCapture {
    headers: HeaderMap,
    body: Vec<u8>,
    status: StatusState,
    observers: Observers,
}

impl ResponseCapture {
    /// Create an empty capture: no headers, no body, status unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers recorded so far.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body bytes recorded so far.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Established status, or `None` while unset.
    pub fn status(&self) -> Option<u16> {
        self.status.code()
    }

    /// Render the captured response.
    ///
    /// Fires every completion signal first, then fails with
    /// [`CaptureError::Uninitialized`] if the handler neither wrote a body
    /// nor set a status. Valid UTF-8 bodies are passed through as text;
    /// anything else is base64 encoded and flagged as such.
    pub fn into_proxy_response(mut self) -> CaptureResult<ProxyResponse> {
        self.observers.notify_all();

        let status = self.status.code().ok_or(CaptureError::Uninitialized)?;
        let body = encode_body(self.body);

        Ok(ProxyResponse::from_parts(status, &self.headers, body))
    }

    fn needs_content_type(&self) -> bool {
        self.headers
            .get(CONTENT_TYPE)
            .map_or(true, |value| value.is_empty())
    }
}

impl io::Write for ResponseCapture {
    /// Append to the body. Never writes partially.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.status.on_body_write();

        if self.needs_content_type() {
            let sniffed = detect_content_type(buf);
            self.headers
                .append(CONTENT_TYPE, HeaderValue::from_static(sniffed));
        }

        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    /// Always reaches [`write`](io::Write::write), even for an empty buffer,
    /// so an empty body still counts as a write.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write(buf).map(|_| ())
    }

    /// Formats in full, then writes once. `write!(sink, "")` still counts.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_all(args.to_string().as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ResponseSink for ResponseCapture {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: u16) {
        self.status.on_explicit(status);
    }
}

impl CloseNotifier for ResponseCapture {
    fn close_notify(&mut self) -> CloseNotify {
        self.observers.subscribe()
    }
}
