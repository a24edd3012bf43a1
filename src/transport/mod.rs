//! HTTP transport layer.
//!
//! Provides the transport abstraction behind the client: one request goes
//! out, and either a fully-read [`Response`] or a [`StreamingResponse`]
//! comes back. Retry and status policy live with the caller, not here.

mod http_transport;

pub use http_transport::ReqwestTransport;

use std::collections::HashMap;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::errors::{HttpClientError, HttpClientResult};
use crate::types::Response;

/// HTTP methods supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Boxed stream of body byte chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpClientError>> + Send>>;

/// A streaming HTTP response: status and headers up front, body as a lazy
/// byte stream handed to the stream pump.
pub struct StreamingResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Lazy body stream. Dropping it releases the connection.
    pub stream: ByteStream,
}

/// Transport seam between the client and the wire.
///
/// Implementations send exactly one request per call and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and reads the full body before returning.
    ///
    /// The underlying connection resource is released before this returns;
    /// the status code is reported as-is, whatever it is.
    async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<Bytes>,
    ) -> HttpClientResult<Response>;

    /// Sends a request and returns the body as a byte stream.
    ///
    /// The connection stays open until the returned stream is dropped.
    async fn send_streaming(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<Bytes>,
    ) -> HttpClientResult<StreamingResponse>;
}
