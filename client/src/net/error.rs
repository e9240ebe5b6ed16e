//! Error classification for backend requests.
//!
//! DESIGN
//! ======
//! Pages only distinguish two kinds of failure: those raised by the HTTP
//! layer itself (no response, or a non-2xx status), whose message is shown
//! verbatim, and everything else, which collapses to a page-specific
//! fallback sentence. Both are terminal for the request that produced them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    /// The payload carries the underlying detail for logging only.
    #[error("Network Error")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// Anything else, e.g. a body that does not match the expected shape.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// Whether this failure came from the HTTP transport or response.
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }

    /// Text to show inline on a page: the transport message for HTTP
    /// failures, `fallback` for the rest.
    pub fn page_message(&self, fallback: &str) -> String {
        if self.is_http() { self.to_string() } else { fallback.to_owned() }
    }
}

/// Map a response status to an error when it is outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status })
    }
}
