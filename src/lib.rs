//! Gateway Response Capture Library
//!
//! Collects a handler's status, headers and body in memory and renders them
//! as a single structured record for request/response gateways that have no
//! streaming connection to write to.

pub mod capture;
pub mod config;
pub mod gateway;
pub mod http;
pub mod observability;

pub use capture::{CaptureError, CloseEvent, CloseNotify, ResponseCapture};
pub use config::AdapterConfig;
pub use gateway::{finalize_or_fallback, respond, ProxyResponse};
pub use http::{CloseNotifier, ResponseSink};
