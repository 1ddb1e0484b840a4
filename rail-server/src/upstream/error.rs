//! Upstream transport error types.

/// Errors from fetching an upstream response. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// HTTP request failed (network, DNS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with an error status
    #[error("upstream error {status}: {body}")]
    Status { status: u16, body: String },

    /// No recorded response for this request
    #[error("no recorded response for {0}")]
    NotRecorded(String),

    /// Recorded responses could not be loaded
    #[error("failed to load recorded responses: {0}")]
    Fixture(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = UpstreamError::Status {
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "upstream error 502: Bad Gateway");

        let err = UpstreamError::NotRecorded("train-12951".into());
        assert_eq!(err.to_string(), "no recorded response for train-12951");
    }
}
