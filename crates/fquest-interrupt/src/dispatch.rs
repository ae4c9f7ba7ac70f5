//! Resume dispatch: carrying the human's decision back to the agent.

use crate::detector::{scan_turn, TurnSignal};
use crate::intent::Intent;
use crate::registry::InterruptRegistry;
use crate::request::{ConfirmationOutcome, ConfirmationRequest, ResolvedVia};
use fquest_protocol_ag_ui::{decode_sse_stream, AgentRunRequest, RunMessage};
use reqwest::header::ACCEPT;
use std::sync::Arc;
use tracing::warn;

/// Local acknowledgement on denial. Denial never touches the agent.
pub const DENIAL_REPLY: &str = "No problem, I won't save that.";

/// Spoken when a resumed run streams back no text of its own.
const RESUME_FALLBACK: &str = "Done. Is there anything else I can help with?";

/// Spoken when the resume call fails. The entry is already cleared by then,
/// so a retry is a fresh turn.
const RESUME_APOLOGY: &str =
    "Sorry, something went wrong while finishing that up. Could you try again in a moment?";

const UNCLEAR_PREFIX: &str = "Sorry, I didn't catch that.";

/// Errors talking to the remote agent endpoint.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("agent request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("agent returned status {0}")]
    Status(u16),
}

/// HTTP client for the remote agent's streaming run endpoint.
#[derive(Debug, Clone)]
pub struct AgentClient {
    client: reqwest::Client,
    agent_url: String,
}

impl AgentClient {
    pub fn new(agent_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            agent_url: agent_url.into(),
        }
    }

    pub fn agent_url(&self) -> &str {
        &self.agent_url
    }

    /// POST a run document and consume the streamed response into a
    /// [`TurnSignal`].
    pub async fn run(&self, request: &AgentRunRequest) -> Result<TurnSignal, DispatchError> {
        let response = self
            .client
            .post(&self.agent_url)
            .header(ACCEPT, "text/event-stream")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Status(status.as_u16()));
        }

        let events = decode_sse_stream(response.bytes_stream());
        Ok(scan_turn(events).await)
    }
}

/// What one resolution attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReply {
    /// Text to speak back to the caller.
    pub text: String,
    /// The consumed outcome, absent when the request survived (Unclear).
    pub outcome: Option<ConfirmationOutcome>,
}

/// Resolves a pending request from a classified voice reply.
pub struct ResumeDispatcher {
    agent: AgentClient,
    registry: Arc<dyn InterruptRegistry>,
}

impl ResumeDispatcher {
    pub fn new(agent: AgentClient, registry: Arc<dyn InterruptRegistry>) -> Self {
        Self { agent, registry }
    }

    /// Apply an intent to a pending request.
    ///
    /// Affirm clears the registry entry BEFORE the resume call goes out, so
    /// a concurrent retry observes no pending interrupt; the resume is
    /// at-most-once and never retried. Deny clears locally and never
    /// contacts the agent. Unclear leaves the entry in place and re-asks.
    pub async fn resolve(&self, pending: &ConfirmationRequest, intent: Intent) -> TurnReply {
        match intent {
            Intent::Affirm => self.resume_confirmed(pending).await,
            Intent::Deny => {
                self.registry.clear(&pending.thread_id).await;
                TurnReply {
                    text: DENIAL_REPLY.to_string(),
                    outcome: Some(outcome(pending, false)),
                }
            }
            Intent::Unclear => TurnReply {
                text: format!("{UNCLEAR_PREFIX} {}", pending.prompt_text),
                outcome: None,
            },
        }
    }

    async fn resume_confirmed(&self, pending: &ConfirmationRequest) -> TurnReply {
        self.registry.clear(&pending.thread_id).await;

        let request = AgentRunRequest::new(&pending.thread_id)
            .with_message(RunMessage::user("Yes, please go ahead."))
            .with_resume(&pending.correlation_id, true);

        let text = match self.agent.run(&request).await {
            Ok(signal) if !signal.reply_text.trim().is_empty() => signal.reply_text,
            Ok(_) => RESUME_FALLBACK.to_string(),
            Err(e) => {
                warn!(
                    error = %e,
                    thread_id = %pending.thread_id,
                    correlation_id = %pending.correlation_id,
                    "resume call failed after clearing the pending entry"
                );
                RESUME_APOLOGY.to_string()
            }
        };

        TurnReply {
            text,
            outcome: Some(outcome(pending, true)),
        }
    }
}

fn outcome(pending: &ConfirmationRequest, approved: bool) -> ConfirmationOutcome {
    ConfirmationOutcome {
        correlation_id: pending.correlation_id.clone(),
        approved,
        resolved_via: ResolvedVia::Voice,
    }
}
