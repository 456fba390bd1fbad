//! Gateway hand-off subsystem.
//!
//! # Data Flow
//! ```text
//! ResponseCapture::into_proxy_response
//!     → encoding.rs (UTF-8 passthrough or base64 + flag)
//!     → response.rs (ProxyResponse record, canonical headers)
//!
//! adapter.rs (gateway entry points)
//!     → success: record + metrics
//!     → failure: fallback.rs (logged, metered fallback record)
//! ```

pub mod adapter;
pub mod encoding;
pub mod fallback;
pub mod response;

pub use adapter::{finalize_or_fallback, respond};
pub use fallback::{gateway_timeout, GatewayError};
pub use response::ProxyResponse;
