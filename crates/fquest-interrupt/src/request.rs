//! The single-owner confirmation request and its one-shot outcome.

use chrono::{DateTime, Utc};
use fquest_actions::ConfirmableAction;
use serde_json::Value;

/// One paused remote action awaiting approval.
///
/// Created the instant the detector recognizes a pause, destroyed the
/// instant it is resolved. At most one exists per thread; a newer detection
/// overwrites an older one (last-detected-wins).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationRequest {
    /// Conversation the request belongs to.
    pub thread_id: String,
    /// The paused action.
    pub action: ConfirmableAction,
    /// Opaque id assigned upstream; echoed back verbatim on resolution.
    pub correlation_id: String,
    /// Arguments the agent proposed (not yet applied).
    pub proposed_args: Value,
    /// Precomputed confirmation question.
    pub prompt_text: String,
    /// Observability only; eviction runs on a separate monotonic clock.
    pub created_at: DateTime<Utc>,
}

impl ConfirmationRequest {
    /// Build a request, precomputing the spoken prompt.
    pub fn new(
        thread_id: impl Into<String>,
        action: ConfirmableAction,
        correlation_id: impl Into<String>,
        proposed_args: Value,
    ) -> Self {
        let prompt_text = fquest_actions::confirmation_prompt(&action, &proposed_args);
        Self {
            thread_id: thread_id.into(),
            action,
            correlation_id: correlation_id.into(),
            proposed_args,
            prompt_text,
            created_at: Utc::now(),
        }
    }
}

/// Which modality resolved a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedVia {
    Voice,
    Visual,
}

/// The resolution of one request. Produced exactly once; producing it is
/// what destroys the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationOutcome {
    pub correlation_id: String,
    pub approved: bool,
    pub resolved_via: ResolvedVia,
}
