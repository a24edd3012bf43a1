//! Shared HTTP Client Library
//!
//! An HTTP client abstraction for integrations, with plain request/response
//! calls and long-lived Server-Sent Events (SSE) streaming responses.
//!
//! # Features
//!
//! - **Plain calls**: GET/POST/PUT/PATCH/DELETE with default and
//!   per-request headers
//! - **Streaming**: SSE responses parsed line-by-line into typed events,
//!   delivered over a channel while the connection is still open
//! - **Correlation**: request/session/client identity headers stamped from
//!   configuration and per-request IDs
//! - **Observability**: structured `tracing` records with opt-in body
//!   logging
//! - **Async/Await**: built on Tokio and reqwest
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use integrations_http::{Client, HttpClient, HttpClientConfig, Request};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://api.example.com")
//!         .user_agent("my-service/1.0.0")
//!         .build();
//!     let client = HttpClient::new(config)?;
//!
//!     // Plain call
//!     let response = client.get(Request::new("/v1/items")).await?;
//!     println!("{}", response.text());
//!
//!     // Streaming call: iterate events until the channel closes. The last
//!     // event's error field distinguishes clean end from failure.
//!     let mut events = client.get_stream(Request::new("/v1/stream")).await?;
//!     while let Some(event) = events.recv().await {
//!         println!("{:?}: {}", event.kind, event.body);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod errors;
pub mod headers;
pub mod json;
pub mod streaming;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{Client, HttpClient};
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use errors::{HttpClientError, HttpClientResult};
pub use json::{from_json, to_json};
pub use types::{Request, Response, StreamEvent, StreamEventKind};
