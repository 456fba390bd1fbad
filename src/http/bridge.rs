//! Replaying framework responses into a sink.
//!
//! # Responsibilities
//! - Copy status and every header of an `axum` response into a [`ResponseSink`]
//! - Collect the body under a size limit and write it through the sink
//!
//! # Design Decisions
//! - Status is written explicitly, so an empty body still yields a valid capture
//! - Empty bodies are not written: no content type is sniffed for them
//! - Headers are appended, never replaced, so repeated values survive

use axum::body::to_bytes;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::capture::ResponseCapture;
use crate::http::sink::ResponseSink;

/// Errors while replaying a framework response.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Body exceeded the limit or the body stream failed.
    #[error("failed to collect response body (limit {limit} bytes): {source}")]
    Body {
        limit: usize,
        #[source]
        source: axum::Error,
    },

    /// The sink rejected the body.
    #[error("failed to write body to sink: {0}")]
    Sink(#[from] std::io::Error),
}

impl BridgeError {
    /// Short stable label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            BridgeError::Body { .. } => "body",
            BridgeError::Sink(_) => "sink",
        }
    }
}

/// Write `response` into `sink` as a handler would.
pub async fn replay<S>(sink: &mut S, response: Response, max_body_bytes: usize) -> Result<(), BridgeError>
where
    S: ResponseSink + ?Sized,
{
    let (parts, body) = response.into_parts();

    sink.write_status(parts.status.as_u16());
    let headers = sink.headers_mut();
    for (name, value) in parts.headers.iter() {
        headers.append(name.clone(), value.clone());
    }

    let bytes = to_bytes(body, max_body_bytes)
        .await
        .map_err(|source| BridgeError::Body {
            limit: max_body_bytes,
            source,
        })?;

    if !bytes.is_empty() {
        sink.write_all(&bytes)?;
    }
    Ok(())
}

/// Run any `IntoResponse` through a fresh [`ResponseCapture`].
pub async fn capture_response(
    response: impl IntoResponse,
    max_body_bytes: usize,
) -> Result<ResponseCapture, BridgeError> {
    let mut capture = ResponseCapture::new();
    replay(&mut capture, response.into_response(), max_body_bytes).await?;
    Ok(capture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{CONTENT_TYPE, SET_COOKIE};
    use axum::http::StatusCode;
    use axum::response::AppendHeaders;

    #[tokio::test]
    async fn test_replay_copies_status_headers_body() {
        let response = (
            StatusCode::CREATED,
            AppendHeaders([(SET_COOKIE, "a=1"), (SET_COOKIE, "b=2")]),
            "made it",
        );
        let capture = capture_response(response, 1024).await.unwrap();

        assert_eq!(capture.status(), Some(201));
        assert_eq!(capture.body(), b"made it");
        assert_eq!(capture.headers().get_all(SET_COOKIE).iter().count(), 2);
        assert_eq!(
            capture.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_empty_body_is_not_sniffed() {
        let capture = capture_response(StatusCode::NO_CONTENT, 1024).await.unwrap();

        assert_eq!(capture.status(), Some(204));
        assert!(capture.body().is_empty());
        assert!(capture.headers().get(CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_body_over_limit() {
        let err = capture_response(vec![7u8; 64], 16).await.unwrap_err();
        assert!(matches!(err, BridgeError::Body { limit: 16, .. }));
        assert_eq!(err.reason(), "body");
    }
}
