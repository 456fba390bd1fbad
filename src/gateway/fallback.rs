//! Fallback records for failed responses.
//!
//! A finalize error must never reach the gateway as a malformed record. The
//! adapter converts it into a minimal record with a configured status.

use thiserror::Error;

use crate::capture::CaptureError;
use crate::config::FallbackConfig;
use crate::gateway::response::ProxyResponse;
use crate::http::BridgeError;
use crate::observability::metrics;

/// Anything that can stop a handler's output from becoming a record.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

impl GatewayError {
    /// Short stable label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            GatewayError::Capture(err) => err.reason(),
            GatewayError::Bridge(err) => err.reason(),
        }
    }
}

/// Record with `504 Gateway Timeout` and nothing else.
pub fn gateway_timeout() -> ProxyResponse {
    ProxyResponse::empty(FallbackConfig::default().status_code)
}

/// Log `err` and build the configured fallback record.
pub fn fallback_response(err: &GatewayError, config: &FallbackConfig) -> ProxyResponse {
    tracing::error!(
        error = %err,
        reason = err.reason(),
        fallback_status = config.status_code,
        "Handler produced no usable response"
    );
    metrics::record_fallback(err.reason());
    ProxyResponse::empty(config.status_code)
}
