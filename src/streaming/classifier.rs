//! SSE line classification.
//!
//! Each line of the wire format is treated independently (no multi-line
//! event grouping) and matched against the recognized field prefixes in
//! precedence order. First match wins; a line starting with `"data: "` can
//! never fall through to the comment rule, and the `[DONE]` sentinel is
//! checked only after the data prefix has been stripped.

use crate::types::StreamEventKind;

/// Payload value signalling graceful end-of-stream inside a `data:` field.
///
/// A convention from LLM-style streaming APIs, not part of the SSE standard.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Result of classifying one trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Empty line: no event, keep reading.
    Skip,
    /// The `[DONE]` sentinel: terminate the stream gracefully.
    Done,
    /// A typed event to deliver.
    Event {
        /// Kind tag for the event.
        kind: StreamEventKind,
        /// Payload after prefix stripping (full line for comments and
        /// unprefixed lines).
        payload: String,
    },
}

/// Classifies one whitespace-trimmed line.
pub fn classify(line: &str) -> Classification {
    if line.is_empty() {
        return Classification::Skip;
    }

    if let Some(payload) = line.strip_prefix("data: ") {
        if payload == DONE_SENTINEL {
            return Classification::Done;
        }
        return Classification::Event {
            kind: StreamEventKind::Data,
            payload: payload.to_string(),
        };
    }

    if let Some(payload) = line.strip_prefix("event: ") {
        return Classification::Event {
            kind: StreamEventKind::Event,
            payload: payload.to_string(),
        };
    }

    if let Some(payload) = line.strip_prefix("id: ") {
        return Classification::Event {
            kind: StreamEventKind::Id,
            payload: payload.to_string(),
        };
    }

    if let Some(payload) = line.strip_prefix("retry: ") {
        return Classification::Event {
            kind: StreamEventKind::Retry,
            payload: payload.to_string(),
        };
    }

    if line.starts_with(':') {
        // Comments keep the full line, leading colon included.
        return Classification::Event {
            kind: StreamEventKind::Comment,
            payload: line.to_string(),
        };
    }

    // Default classification: deliver the line verbatim as data.
    Classification::Event {
        kind: StreamEventKind::Data,
        payload: line.to_string(),
    }
}
