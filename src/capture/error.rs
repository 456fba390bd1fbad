//! Capture error definitions.

use thiserror::Error;

/// Errors surfaced when finalizing a captured response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    /// Finalized before any body write or explicit status.
    #[error("response not initialized: no status was set and no body was written")]
    Uninitialized,
}

impl CaptureError {
    /// Short stable label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            CaptureError::Uninitialized => "uninitialized",
        }
    }
}

/// Result type for capture operations.
pub type CaptureResult<T> = Result<T, CaptureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CaptureError::Uninitialized;
        assert!(err.to_string().starts_with("response not initialized"));
        assert_eq!(err.reason(), "uninitialized");
    }
}
