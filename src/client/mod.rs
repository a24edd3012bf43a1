//! The HTTP client: request building, plain calls, and stream opening.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

use crate::config::{HttpClientConfig, MAX_LOGGED_BODY_BYTES, STREAM_CHANNEL_CAPACITY};
use crate::errors::{HttpClientError, HttpClientResult};
use crate::headers;
use crate::streaming::open_stream;
use crate::transport::{Method, ReqwestTransport, Transport};
use crate::types::{Request, Response, StreamEvent};

/// Headers forced on every stream request, overriding caller-supplied values
/// for the same keys.
const STREAM_HEADERS: [(&str, &str); 3] = [
    ("Accept", "text/event-stream"),
    ("Cache-Control", "no-cache"),
    ("Connection", "keep-alive"),
];

/// Client interface for plain and streaming HTTP calls.
#[async_trait]
pub trait Client: Send + Sync {
    /// Sends a GET request and reads the full response.
    async fn get(&self, request: Request) -> HttpClientResult<Response>;

    /// Opens a GET stream; events arrive on the returned channel.
    async fn get_stream(&self, request: Request) -> HttpClientResult<mpsc::Receiver<StreamEvent>>;

    /// Sends a POST request and reads the full response.
    async fn post(&self, request: Request, body: Bytes) -> HttpClientResult<Response>;

    /// Opens a POST stream; events arrive on the returned channel.
    async fn post_stream(
        &self,
        request: Request,
        body: Bytes,
    ) -> HttpClientResult<mpsc::Receiver<StreamEvent>>;

    /// Sends a PUT request and reads the full response.
    async fn put(&self, request: Request, body: Bytes) -> HttpClientResult<Response>;

    /// Sends a PATCH request and reads the full response.
    async fn patch(&self, request: Request, body: Bytes) -> HttpClientResult<Response>;

    /// Sends a DELETE request and reads the full response.
    async fn delete(&self, request: Request) -> HttpClientResult<Response>;
}

/// HTTP client with default headers, URL joining, and SSE streaming.
///
/// Streaming calls return once the response status is confirmed; from then
/// on events flow through the channel concurrently with network reads, and
/// channel closure is the single termination signal. The last event before
/// closure carries the error field that distinguishes clean end from
/// failure.
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    default_headers: HashMap<String, String>,
    log_bodies: bool,
}

impl HttpClient {
    /// Creates a client over a [`ReqwestTransport`] built from the config.
    pub fn new(config: HttpClientConfig) -> HttpClientResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.effective_timeout())?);
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client over a custom transport.
    pub fn with_transport(config: HttpClientConfig, transport: Arc<dyn Transport>) -> Self {
        let mut default_headers: HashMap<String, String> =
            config.headers.iter().cloned().collect();

        // Identity headers are only stamped when configured.
        let identity = [
            (headers::USER_AGENT, &config.user_agent),
            (headers::CLIENT_PLATFORM, &config.platform),
            (headers::CLIENT_APP_VERSION, &config.app_version),
            (headers::CLIENT_ID, &config.client_id),
            (headers::SERVICE_NAME, &config.service_name),
        ];
        for (name, value) in identity {
            if !value.is_empty() {
                default_headers.insert(name.to_string(), value.clone());
            }
        }

        Self {
            transport,
            base_url: config.base_url,
            default_headers,
            log_bodies: config.log_bodies,
        }
    }

    /// Joins the base URL with the request path and appends the query.
    ///
    /// Path-segment-safe: no double slashes, no dropped segments. With no
    /// base URL configured the path is used verbatim.
    fn build_url(&self, request: &Request) -> HttpClientResult<String> {
        if self.base_url.is_empty() {
            let mut path = request.path.clone();
            if !request.query.is_empty() {
                path.push('?');
                path.push_str(&encode_query(&request.query));
            }
            return Ok(path);
        }

        let mut url = url::Url::parse(&self.base_url)?;
        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|_| HttpClientError::InvalidUrl {
                        message: format!("cannot join path onto base URL: {}", self.base_url),
                    })?;
            segments.pop_if_empty();
            for segment in request.path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }

        Ok(url.into())
    }

    /// Merges headers, later wins: client defaults, then per-request
    /// overrides, then correlation headers from the request IDs.
    fn merge_headers(&self, request: &Request) -> HashMap<String, String> {
        let mut merged = self.default_headers.clone();
        for (name, value) in &request.headers {
            merged.insert(name.clone(), value.clone());
        }
        if !request.id.is_empty() {
            merged.insert(headers::REQUEST_ID.to_string(), request.id.clone());
        }
        if !request.session_id.is_empty() {
            merged.insert(headers::SESSION_ID.to_string(), request.session_id.clone());
        }
        merged
    }

    async fn dispatch(
        &self,
        method: Method,
        request: Request,
        body: Option<Bytes>,
    ) -> HttpClientResult<Response> {
        let url = self.build_url(&request)?;
        let merged = self.merge_headers(&request);

        if self.log_bodies {
            tracing::trace!(
                %method,
                url = %url,
                body = %truncate_body(body.as_deref().unwrap_or_default()),
                "sending request"
            );
        } else {
            tracing::trace!(%method, url = %url, "sending request");
        }

        let response = self.transport.send(method, &url, &merged, body).await?;

        if self.log_bodies {
            tracing::trace!(
                %method,
                url = %url,
                status = response.status,
                body = %truncate_body(&response.body),
                "received response"
            );
        } else {
            tracing::trace!(%method, url = %url, status = response.status, "received response");
        }

        Ok(response)
    }

    async fn dispatch_stream(
        &self,
        method: Method,
        request: Request,
        body: Option<Bytes>,
    ) -> HttpClientResult<mpsc::Receiver<StreamEvent>> {
        let url = self.build_url(&request)?;
        let mut merged = self.merge_headers(&request);
        for (name, value) in STREAM_HEADERS {
            merged.insert(name.to_string(), value.to_string());
        }

        tracing::trace!(%method, url = %url, "opening stream");

        let response = self
            .transport
            .send_streaming(method, &url, &merged, body)
            .await?;

        tracing::trace!(%method, url = %url, status = response.status, "stream response received");

        Ok(open_stream(response, STREAM_CHANNEL_CAPACITY).await)
    }
}

#[async_trait]
impl Client for HttpClient {
    async fn get(&self, request: Request) -> HttpClientResult<Response> {
        self.dispatch(Method::Get, request, None).await
    }

    async fn get_stream(&self, request: Request) -> HttpClientResult<mpsc::Receiver<StreamEvent>> {
        self.dispatch_stream(Method::Get, request, None).await
    }

    async fn post(&self, request: Request, body: Bytes) -> HttpClientResult<Response> {
        self.dispatch(Method::Post, request, Some(body)).await
    }

    async fn post_stream(
        &self,
        request: Request,
        body: Bytes,
    ) -> HttpClientResult<mpsc::Receiver<StreamEvent>> {
        self.dispatch_stream(Method::Post, request, Some(body)).await
    }

    async fn put(&self, request: Request, body: Bytes) -> HttpClientResult<Response> {
        self.dispatch(Method::Put, request, Some(body)).await
    }

    async fn patch(&self, request: Request, body: Bytes) -> HttpClientResult<Response> {
        self.dispatch(Method::Patch, request, Some(body)).await
    }

    async fn delete(&self, request: Request) -> HttpClientResult<Response> {
        self.dispatch(Method::Delete, request, None).await
    }
}

fn encode_query(query: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

/// Caps a body for log output. Delivery to callers is never truncated.
fn truncate_body(body: &[u8]) -> String {
    if body.len() > MAX_LOGGED_BODY_BYTES {
        format!("{}...", String::from_utf8_lossy(&body[..MAX_LOGGED_BODY_BYTES]))
    } else {
        String::from_utf8_lossy(body).into_owned()
    }
}
