//! Gateway-side entry points.
//!
//! Turn a finished capture (or a framework response) into the record the
//! gateway delivers, falling back instead of failing.

use axum::response::IntoResponse;

use crate::capture::ResponseCapture;
use crate::config::{AdapterConfig, FallbackConfig};
use crate::gateway::fallback::{fallback_response, GatewayError};
use crate::gateway::response::ProxyResponse;
use crate::http::capture_response;
use crate::observability::metrics;

/// Finalize `capture`, substituting the fallback record on error.
pub fn finalize_or_fallback(capture: ResponseCapture, config: &FallbackConfig) -> ProxyResponse {
    match capture.into_proxy_response() {
        Ok(response) => rendered(response),
        Err(err) => fallback_response(&GatewayError::from(err), config),
    }
}

/// Render a framework response into a gateway record.
pub async fn respond(response: impl IntoResponse, config: &AdapterConfig) -> ProxyResponse {
    match try_respond(response, config.bridge.max_body_bytes).await {
        Ok(response) => rendered(response),
        Err(err) => fallback_response(&err, &config.fallback),
    }
}

async fn try_respond(
    response: impl IntoResponse,
    max_body_bytes: usize,
) -> Result<ProxyResponse, GatewayError> {
    let capture = capture_response(response, max_body_bytes).await?;
    Ok(capture.into_proxy_response()?)
}

fn rendered(response: ProxyResponse) -> ProxyResponse {
    tracing::debug!(
        status = response.status_code,
        base64 = response.is_base64_encoded,
        body_len = response.body.len(),
        "Rendered gateway response"
    );
    metrics::record_response(response.status_code, response.is_base64_encoded);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::sink::ResponseSink;
    use axum::http::StatusCode;
    use std::io::Write;

    #[test]
    fn test_finalize_success_passes_through() {
        let mut capture = ResponseCapture::new();
        capture.write_all(b"fine").unwrap();

        let response = finalize_or_fallback(capture, &FallbackConfig::default());
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "fine");
    }

    #[test]
    fn test_finalize_error_falls_back() {
        let response = finalize_or_fallback(ResponseCapture::new(), &FallbackConfig::default());
        assert_eq!(response, ProxyResponse::empty(504));
    }

    #[test]
    fn test_explicit_status_without_body() {
        let mut capture = ResponseCapture::new();
        capture.write_status(404);

        let response = finalize_or_fallback(capture, &FallbackConfig::default());
        assert_eq!(response, ProxyResponse::empty(404));
    }

    #[tokio::test]
    async fn test_respond_with_framework_response() {
        let response = respond((StatusCode::ACCEPTED, "queued"), &AdapterConfig::default()).await;
        assert_eq!(response.status_code, 202);
        assert_eq!(response.body, "queued");
        assert_eq!(response.header("Content-Type"), Some("text/plain; charset=utf-8"));
    }
}
