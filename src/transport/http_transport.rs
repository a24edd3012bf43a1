//! Reqwest-based transport implementation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;

use super::{Method, StreamingResponse, Transport};
use crate::errors::{HttpClientError, HttpClientResult};
use crate::types::Response;

/// Transport backed by a [`reqwest::Client`].
///
/// The timeout applies per plain request rather than at client level so
/// that long-lived streaming responses are never cut off by it.
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport with the given timeout for plain calls.
    pub fn new(timeout: Duration) -> HttpClientResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| HttpClientError::Configuration {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, timeout })
    }

    /// Creates a transport around an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn build_request(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<Bytes>,
    ) -> reqwest::RequestBuilder {
        let mut request = self.client.request(method.into(), url);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        request
    }

    fn extract_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<Bytes>,
    ) -> HttpClientResult<Response> {
        let request = self
            .build_request(method, url, headers, body)
            .timeout(self.timeout);

        let response = request.send().await?;
        let status = response.status().as_u16();
        let response_headers = Self::extract_headers(response.headers());
        let body = response.bytes().await?;

        Ok(Response {
            status,
            body,
            headers: response_headers,
        })
    }

    async fn send_streaming(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<Bytes>,
    ) -> HttpClientResult<StreamingResponse> {
        // No timeout: a healthy stream stays open as long as the server
        // keeps sending.
        let request = self.build_request(method, url, headers, body);

        let response = request.send().await?;
        let status = response.status().as_u16();
        let response_headers = Self::extract_headers(response.headers());

        let stream = response.bytes_stream().map(|chunk| {
            chunk.map_err(|e| HttpClientError::StreamRead {
                message: e.to_string(),
            })
        });

        Ok(StreamingResponse {
            status,
            headers: response_headers,
            stream: Box::pin(stream),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(30));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_extract_headers_skips_non_utf8() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("text/event-stream"),
        );
        headers.insert(
            reqwest::header::HeaderName::from_static("x-binary"),
            reqwest::header::HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap(),
        );

        let extracted = ReqwestTransport::extract_headers(&headers);

        assert_eq!(
            extracted.get("content-type").map(String::as_str),
            Some("text/event-stream")
        );
        assert!(!extracted.contains_key("x-binary"));
    }
}
