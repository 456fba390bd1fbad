//! Metrics collection.
//!
//! Recorded through the `metrics` facade; the embedding process installs
//! whatever recorder/exporter it uses. Without one, recording is a no-op.
//!
//! # Metrics
//! - `gateway_responses_total` (counter): rendered records by status, base64 flag
//! - `gateway_fallbacks_total` (counter): fallback records by failure reason

/// Count a successfully rendered record.
pub fn record_response(status: u16, is_base64_encoded: bool) {
    ::metrics::counter!(
        "gateway_responses_total",
        "status" => status.to_string(),
        "base64" => is_base64_encoded.to_string()
    )
    .increment(1);
}

/// Count a fallback record.
pub fn record_fallback(reason: &'static str) {
    ::metrics::counter!("gateway_fallbacks_total", "reason" => reason).increment(1);
}
