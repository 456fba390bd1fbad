//! Response sink contracts.
//!
//! # Responsibilities
//! - Define the primitives a handler uses to emit a response (headers, status, body)
//! - Define the close-notification primitive used in place of a transport close event
//!
//! # Design Decisions
//! - Body writes go through `std::io::Write`, so `write!` and `io::copy` work unmodified
//! - Header access is a plain `&mut HeaderMap`: no locking, single writer per request
//! - Status codes are raw `u16` and are never range-checked at this layer

use std::io;

use axum::http::{HeaderMap, StatusCode};

use crate::capture::notify::CloseNotify;

/// Anything a handler can write a response to.
///
/// Implementations are driven by exactly one handler on one thread of control.
/// None of the methods synchronize; callers that share a sink across threads
/// must provide their own exclusion.
pub trait ResponseSink: io::Write {
    /// Live header map of the response.
    ///
    /// Mutations are visible immediately. Names and values are passed through
    /// verbatim; this layer does not validate them beyond what `HeaderMap` enforces.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Set the response status, replacing any earlier value (including one
    /// established implicitly by a body write).
    ///
    /// No range check: codes above 599 are accepted as-is. Negative codes
    /// cannot be represented.
    fn write_status(&mut self, status: u16);

    /// Typed convenience over [`ResponseSink::write_status`].
    fn write_status_code(&mut self, status: StatusCode) {
        self.write_status(status.as_u16());
    }
}

/// A sink that can tell interested parties when the response cycle is over.
pub trait CloseNotifier {
    /// Register a new one-shot completion signal.
    ///
    /// Every call returns an independent signal; each fires exactly once.
    fn close_notify(&mut self) -> CloseNotify;
}
