//! HTTP-facing contracts.
//!
//! # Data Flow
//! ```text
//! handler
//!     → sink.rs (ResponseSink / CloseNotifier contracts)
//!     → sniff.rs (content type when none was declared)
//!
//! axum response
//!     → bridge.rs (replay status, headers, body into any sink)
//! ```

pub mod bridge;
pub mod sink;
pub mod sniff;

pub use bridge::{capture_response, replay, BridgeError};
pub use sink::{CloseNotifier, ResponseSink};
pub use sniff::detect_content_type;
