//! Response capture subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → writer.rs (ResponseCapture as ResponseSink: headers, status, body)
//!     → state.rs (Unset → Set on first write or explicit status)
//!     → notify.rs (completion signals fired on finalize)
//!     → gateway::ProxyResponse (immutable snapshot)
//! ```
//!
//! # Design Decisions
//! - One capture per request, owned by a single handler
//! - Finalize consumes the capture; completion fires before the snapshot is built
//! - The capture does not log; reporting belongs to the gateway layer

pub mod error;
pub mod notify;
pub mod state;
pub mod writer;

pub use error::CaptureError;
pub use notify::{CloseEvent, CloseNotify};
pub use writer::ResponseCapture;
