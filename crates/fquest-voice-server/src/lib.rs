//! The voice-modality webhook.
//!
//! Speech platforms deliver each transcribed turn as an OpenAI
//! chat-completion request; this service answers every well-formed turn
//! with a single assistant message. Behind the webhook sits the
//! confirmation-interrupt bridge: fresh turns stream through the remote
//! agent and may pause on a confirmable action, follow-up turns resolve
//! that pause from the caller's spoken yes or no.

pub mod http;
pub mod openai;
pub mod session;
pub mod turn;

pub use http::{health_routes, voice_routes, ApiError, AppState};
