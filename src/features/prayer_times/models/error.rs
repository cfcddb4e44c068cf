use std::time::Duration;

use thiserror::Error;

/// Failure talking to the prayer-time upstream
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Upstream request failed: {0}")]
    Request(String),

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("Malformed upstream response: {0}")]
    Malformed(String),

    #[error("Upstream failed after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        last: Box<UpstreamError>,
    },
}

impl UpstreamError {
    /// True when the failure (or the final failure of a retry run) was a timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            UpstreamError::Timeout(_) => true,
            UpstreamError::Exhausted { last, .. } => last.is_timeout(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            UpstreamError::Malformed(err.to_string())
        } else {
            UpstreamError::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_reports_last_timeout() {
        let err = UpstreamError::Exhausted {
            attempts: 3,
            last: Box::new(UpstreamError::Timeout(Duration::from_secs(8))),
        };
        assert!(err.is_timeout());
        assert!(err.to_string().contains("3 attempts"));

        let err = UpstreamError::Exhausted {
            attempts: 3,
            last: Box::new(UpstreamError::Status(503)),
        };
        assert!(!err.is_timeout());
    }
}
