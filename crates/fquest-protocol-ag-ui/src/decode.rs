//! Incremental decode of the agent's `data: <json>` event stream.

use crate::events::AgentEvent;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde_json::Value;
use tracing::{trace, warn};

/// Push-based decoder for a server-sent event body.
///
/// Network chunks arrive at arbitrary boundaries, including mid-line and
/// mid-codepoint, so the decoder buffers raw bytes and only interprets a
/// line once its terminating `\n` has arrived. Lines that are not parseable
/// JSON records are skipped: the upstream mixes structured events with
/// comments, `event:` fields and keep-alive noise.
#[derive(Debug, Default)]
pub struct SseLineDecoder {
    buf: Vec<u8>,
}

impl SseLineDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, returning every event completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<AgentEvent> {
        self.buf.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            if let Some(event) = parse_line(&line) {
                events.push(event);
            }
        }
        events
    }

    /// Flush the trailing buffer at stream end.
    ///
    /// A final line without a terminating newline is still interpreted;
    /// anything that is not a complete record is discarded.
    pub fn finish(&mut self) -> Vec<AgentEvent> {
        if self.buf.is_empty() {
            return Vec::new();
        }
        let rest = std::mem::take(&mut self.buf);
        parse_line(&rest).into_iter().collect()
    }
}

/// Interpret one raw line; `None` means the line carried no event.
fn parse_line(raw: &[u8]) -> Option<AgentEvent> {
    let line = String::from_utf8_lossy(raw);
    let line = line.trim();
    if line.is_empty() || line.starts_with(':') {
        return None;
    }
    // SSE `event:`/`id:`/`retry:` fields carry no payload we act on.
    if line.starts_with("event:") || line.starts_with("id:") || line.starts_with("retry:") {
        return None;
    }

    let payload = line.strip_prefix("data:").map(str::trim).unwrap_or(line);
    if payload.is_empty() || payload == "[DONE]" {
        return None;
    }

    match serde_json::from_str::<Value>(payload) {
        Ok(value) => Some(AgentEvent::from_value(value)),
        Err(_) => {
            trace!(line = %payload, "skipping non-JSON stream line");
            None
        }
    }
}

/// Adapt a raw byte stream into a lazy, finite sequence of [`AgentEvent`]s.
///
/// The sequence is non-restartable: it consumes the body as it goes. A
/// transport error mid-stream ends the sequence after a warning; whatever
/// was decoded up to that point has already been yielded.
pub fn decode_sse_stream<S, E>(body: S) -> impl Stream<Item = AgentEvent>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
{
    async_stream::stream! {
        let mut decoder = SseLineDecoder::new();
        futures::pin_mut!(body);
        while let Some(chunk) = body.next().await {
            match chunk {
                Ok(bytes) => {
                    for event in decoder.push(&bytes) {
                        yield event;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "agent stream aborted mid-read");
                    return;
                }
            }
        }
        for event in decoder.finish() {
            yield event;
        }
    }
}
