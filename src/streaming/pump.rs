//! The stream pump: background task feeding classified events to a channel.

use futures::StreamExt;
use tokio::sync::mpsc;

use super::classifier::{classify, Classification};
use super::line_reader::{LineOutcome, LineReader};
use crate::errors::HttpClientError;
use crate::transport::StreamingResponse;
use crate::types::StreamEvent;

const SUCCESS_STATUS: u16 = 200;

/// Opens the event channel for a streaming response and starts the pump.
///
/// Returns once the status has been inspected. On a non-success status the
/// full error body is read, exactly one terminal event is enqueued, and the
/// channel is closed without entering the streaming state. On success the
/// read-classify-send loop runs as a spawned task and the consumer reads
/// events concurrently.
///
/// The channel is closed exactly once, always here or in the spawned task,
/// by dropping the sender. No send happens after close.
pub(crate) async fn open_stream(
    response: StreamingResponse,
    capacity: usize,
) -> mpsc::Receiver<StreamEvent> {
    let (tx, rx) = mpsc::channel(capacity.max(1));

    if response.status != SUCCESS_STATUS {
        let StreamingResponse {
            status,
            headers,
            stream,
        } = response;

        let body = read_full_body(stream).await;
        tracing::debug!(status, body_len = body.len(), "stream open rejected");

        let event = StreamEvent::terminal(
            status,
            &headers,
            Some(HttpClientError::UnexpectedStatus {
                status,
                body: body.clone(),
            }),
            body,
        );
        let _ = tx.send(event).await;
        return rx;
    }

    tokio::spawn(pump(response, tx));
    rx
}

/// The read-classify-send loop. Every exit path drops both the sender
/// (closing the channel) and the response body (releasing the connection).
async fn pump(response: StreamingResponse, tx: mpsc::Sender<StreamEvent>) {
    let StreamingResponse {
        status,
        headers,
        stream,
    } = response;

    let mut reader = LineReader::new(stream);

    loop {
        match reader.next_line().await {
            LineOutcome::Line(line) => match classify(&line) {
                Classification::Skip => continue,
                Classification::Done => {
                    let _ = tx
                        .send(StreamEvent::terminal(status, &headers, None, String::new()))
                        .await;
                    break;
                }
                Classification::Event { kind, payload } => {
                    let event = StreamEvent::new(status, &headers, kind, payload);
                    if tx.send(event).await.is_err() {
                        // Consumer dropped the receiver: stop reading and
                        // release the connection.
                        tracing::debug!(status, "stream consumer gone, stopping pump");
                        break;
                    }
                }
            },
            LineOutcome::Eof => {
                tracing::debug!(status, "stream ended without sentinel");
                let _ = tx
                    .send(StreamEvent::terminal(
                        status,
                        &headers,
                        Some(HttpClientError::UnexpectedEof),
                        String::new(),
                    ))
                    .await;
                break;
            }
            LineOutcome::Failed(err) => {
                tracing::debug!(status, error = %err, "stream read failed");
                let _ = tx
                    .send(StreamEvent::terminal(status, &headers, Some(err), String::new()))
                    .await;
                break;
            }
        }
    }
}

/// Drains the body stream into a string, tolerating a read failure partway
/// through; whatever arrived is still delivered to the caller.
async fn read_full_body(mut stream: crate::transport::ByteStream) -> String {
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => body.extend_from_slice(&bytes),
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}
