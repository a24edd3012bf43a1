//! Request and response types for plain and streaming calls.

use std::collections::HashMap;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::errors::HttpClientResult;

/// A single HTTP request.
///
/// Built fresh per call; the client never mutates it after dispatch. The
/// `id` and `session_id` fields become the `X-Request-ID` and
/// `X-Session-ID` correlation headers when non-empty.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Correlation ID for this request.
    pub id: String,
    /// Session ID correlating related requests.
    pub session_id: String,
    /// Request path, joined with the client's base URL when one is set.
    pub path: String,
    /// Query parameters; a key may appear more than once.
    pub query: Vec<(String, String)>,
    /// Per-request header overrides. These win over client defaults.
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Creates a request for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Sets the correlation ID.
    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the session ID.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets a header override for this request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A fully-read HTTP response.
///
/// The body has been read eagerly and the underlying connection released;
/// the caller owns everything here.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Full response body.
    pub body: Bytes,
    /// Response headers.
    pub headers: HashMap<String, String>,
}

impl Response {
    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> HttpClientResult<T> {
        crate::json::from_json(&self.body)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
