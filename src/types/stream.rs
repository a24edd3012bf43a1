//! Typed events delivered on an open stream.

use std::collections::HashMap;

use crate::errors::HttpClientError;

/// The kind of a stream event.
///
/// Closed set so consumers can match exhaustively; one kind per recognized
/// SSE field plus the terminal marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEventKind {
    /// A `data:` line, or an unprefixed line (default classification).
    Data,
    /// An `event:` line naming the event type.
    Event,
    /// An `id:` line carrying the event ID.
    Id,
    /// A `retry:` line carrying the reconnection delay.
    Retry,
    /// A comment line beginning with `:`.
    Comment,
    /// Terminal event: the stream has ended and the channel closes after it.
    EndOfStream,
}

/// One event emitted per classified line of an open stream.
///
/// The status and headers are captured once at stream open and repeated on
/// every event for the consumer's convenience. `error` is present only on
/// terminal events that ended the stream abnormally; a clean `[DONE]`
/// termination carries no error.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamEvent {
    /// HTTP status code of the streaming response.
    pub status: u16,
    /// Response headers captured at stream open.
    pub headers: HashMap<String, String>,
    /// Payload for this line. For terminal error-status events this is the
    /// full error body.
    pub body: String,
    /// Error that terminated the stream, if any.
    pub error: Option<HttpClientError>,
    /// Classification of this event.
    pub kind: StreamEventKind,
}

impl StreamEvent {
    pub(crate) fn new(
        status: u16,
        headers: &HashMap<String, String>,
        kind: StreamEventKind,
        body: String,
    ) -> Self {
        Self {
            status,
            headers: headers.clone(),
            body,
            error: None,
            kind,
        }
    }

    pub(crate) fn terminal(
        status: u16,
        headers: &HashMap<String, String>,
        error: Option<HttpClientError>,
        body: String,
    ) -> Self {
        Self {
            status,
            headers: headers.clone(),
            body,
            error,
            kind: StreamEventKind::EndOfStream,
        }
    }

    /// Returns true if this is the terminal event of the stream.
    pub fn is_end_of_stream(&self) -> bool {
        self.kind == StreamEventKind::EndOfStream
    }
}
