//! AG-UI client protocol: tolerant event decoding and run documents.
//!
//! This crate is the wire layer between the bridge and the remote planning
//! agent. Outbound, it builds the JSON run/resume documents the agent
//! endpoint accepts. Inbound, it turns the agent's `data: <json>` event
//! stream into [`AgentEvent`] records, tolerating arbitrary chunk
//! boundaries and the several field spellings observed across agent
//! runtimes.

pub mod decode;
pub mod events;
pub mod request;

pub use decode::{decode_sse_stream, SseLineDecoder};
pub use events::AgentEvent;
pub use request::{AgentRunRequest, ResumeInterrupt, RunMessage, RunRole, RunState, RunUser};
