//! Error types for the HTTP client.
//!
//! Splits failures into the kinds a caller can meaningfully react to:
//! construction problems surface synchronously, transport problems surface
//! synchronously for plain calls, and everything that happens after a stream
//! is confirmed open is delivered in-band on the terminal stream event.

use thiserror::Error;

/// Result type alias for HTTP client operations.
pub type HttpClientResult<T> = Result<T, HttpClientError>;

/// Error taxonomy for HTTP client operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// Configuration error (bad environment values, invalid settings).
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration issue.
        message: String,
    },

    /// Base URL and request path could not be joined into a valid URL.
    #[error("invalid URL: {message}")]
    InvalidUrl {
        /// Description of the join or parse failure.
        message: String,
    },

    /// The request could not be constructed (invalid method/URL/header combination).
    #[error("failed to build request: {message}")]
    RequestConstruction {
        /// Description of the construction failure.
        message: String,
    },

    /// Transport-level send failure (DNS, TCP, TLS).
    #[error("connection error: {message}")]
    Connection {
        /// Description of the transport failure.
        message: String,
    },

    /// The request timed out before a response arrived.
    #[error("request timeout: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
    },

    /// Non-success status code on a stream open.
    ///
    /// Carries the full error body; truncation only ever applies to log
    /// output, never to what the caller receives.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus {
        /// The HTTP status code returned by the server.
        status: u16,
        /// The full response body.
        body: String,
    },

    /// I/O failure while reading lines after streaming began.
    ///
    /// Only ever delivered on the terminal stream event; the opening call
    /// has already returned by the time this can occur.
    #[error("stream read failed: {message}")]
    StreamRead {
        /// Description of the read failure.
        message: String,
    },

    /// The stream ended without the `[DONE]` termination sentinel.
    ///
    /// Distinct from [`HttpClientError::StreamRead`]: the connection closed
    /// cleanly, but the server never signalled graceful end-of-stream.
    #[error("stream ended without termination sentinel")]
    UnexpectedEof,

    /// JSON serialization or deserialization failure.
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of the serde failure.
        message: String,
    },
}

impl From<reqwest::Error> for HttpClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpClientError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_builder() {
            HttpClientError::RequestConstruction {
                message: err.to_string(),
            }
        } else {
            HttpClientError::Connection {
                message: err.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for HttpClientError {
    fn from(err: url::ParseError) -> Self {
        HttpClientError::InvalidUrl {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for HttpClientError {
    fn from(err: serde_json::Error) -> Self {
        HttpClientError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display_omits_body() {
        let error = HttpClientError::UnexpectedStatus {
            status: 503,
            body: "upstream unavailable".to_string(),
        };

        assert_eq!(error.to_string(), "unexpected status code: 503");
    }

    #[test]
    fn test_url_parse_error_maps_to_invalid_url() {
        let err = url::Url::parse("http://[broken").unwrap_err();
        let mapped = HttpClientError::from(err);

        assert!(matches!(mapped, HttpClientError::InvalidUrl { .. }));
    }

    #[test]
    fn test_serde_error_maps_to_serialization() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let mapped = HttpClientError::from(err);

        assert!(matches!(mapped, HttpClientError::Serialization { .. }));
    }

    #[test]
    fn test_unexpected_eof_is_not_a_read_failure() {
        assert_ne!(
            HttpClientError::UnexpectedEof,
            HttpClientError::StreamRead {
                message: "connection reset".to_string()
            }
        );
    }
}
