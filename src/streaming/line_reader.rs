//! Incremental line extraction from a streaming response body.

use futures::StreamExt;

use crate::errors::HttpClientError;
use crate::transport::ByteStream;

/// Outcome of one [`LineReader::next_line`] call.
///
/// End-of-stream and read failure are both terminal but deliberately
/// distinct, so a clean close is never mistaken for a mid-stream failure.
#[derive(Debug)]
pub enum LineOutcome {
    /// One complete line, whitespace-trimmed, delimiter stripped.
    Line(String),
    /// The body ended; no more data. Not an error.
    Eof,
    /// The read failed (connection reset, timeout). Terminal.
    Failed(HttpClientError),
}

/// Buffers a body byte stream and yields one trimmed line at a time.
///
/// Bytes accumulate raw and are decoded only at line granularity, so a
/// multi-byte character split across chunk boundaries survives intact.
/// One reader per response body; the sequence is not restartable once a
/// terminal outcome has been returned. A trailing unterminated line is
/// flushed before [`LineOutcome::Eof`] rather than dropped.
pub struct LineReader {
    stream: ByteStream,
    buffer: Vec<u8>,
    done: bool,
}

impl LineReader {
    /// Creates a reader over a response body stream.
    pub fn new(stream: ByteStream) -> Self {
        Self {
            stream,
            buffer: Vec::new(),
            done: false,
        }
    }

    /// Reads the next line, pulling more chunks from the body as needed.
    pub async fn next_line(&mut self) -> LineOutcome {
        loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&raw).trim().to_string();
                return LineOutcome::Line(line);
            }

            if self.done {
                let trailing = String::from_utf8_lossy(&self.buffer).trim().to_string();
                self.buffer.clear();
                if trailing.is_empty() {
                    return LineOutcome::Eof;
                }
                return LineOutcome::Line(trailing);
            }

            match self.stream.next().await {
                Some(Ok(bytes)) => {
                    self.buffer.extend_from_slice(&bytes);
                }
                Some(Err(err)) => {
                    self.done = true;
                    return LineOutcome::Failed(err);
                }
                None => {
                    self.done = true;
                }
            }
        }
    }
}
