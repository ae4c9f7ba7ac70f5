//! Outbound run and resume documents.
//!
//! The agent endpoint accepts one document shape for both a fresh run and a
//! resume: an ordered message list plus a free-form `state` bag. A resume is
//! a fresh run whose state carries `resume_interrupt`, echoing the paused
//! invocation's id together with the human's decision.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Role of an outbound run message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunRole {
    /// System-style instructions delivered on the neutral developer role.
    Developer,
    System,
    Assistant,
    User,
}

/// One message in the outbound run document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunMessage {
    pub id: String,
    pub role: RunRole,
    pub content: String,
}

impl RunMessage {
    fn new(role: RunRole, content: impl Into<String>) -> Self {
        Self {
            id: format!("msg_{}", Uuid::new_v4().simple()),
            role,
            content: content.into(),
        }
    }

    /// Developer-role instruction message.
    pub fn developer(content: impl Into<String>) -> Self {
        Self::new(RunRole::Developer, content)
    }

    /// User message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(RunRole::User, content)
    }

    /// Assistant message (used when replaying prior turns).
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(RunRole::Assistant, content)
    }
}

/// Caller identity forwarded in the run state bag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunUser {
    pub display_name: String,
}

/// Resume marker: tells the agent which paused invocation to continue and
/// whether the human approved it. The id must be echoed verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeInterrupt {
    pub tool_call_id: String,
    pub confirmed: bool,
}

/// Free-form state bag carried alongside the messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RunState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<RunUser>,

    /// Page context the caller was looking at (`current_page`, `page_type`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub page_context: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_interrupt: Option<ResumeInterrupt>,
}

/// The streaming run document POSTed to the agent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentRunRequest {
    #[serde(rename = "threadId")]
    pub thread_id: String,
    #[serde(rename = "runId")]
    pub run_id: String,
    pub messages: Vec<RunMessage>,
    #[serde(default)]
    pub state: RunState,
}

impl AgentRunRequest {
    /// Start an empty run document for a thread, with a fresh run id.
    pub fn new(thread_id: impl Into<String>) -> Self {
        Self {
            thread_id: thread_id.into(),
            run_id: format!("run_{}", Uuid::now_v7().simple()),
            messages: Vec::new(),
            state: RunState::default(),
        }
    }

    /// Append a message.
    pub fn with_message(mut self, message: RunMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Attach caller identity to the state bag.
    pub fn with_user(mut self, display_name: impl Into<String>) -> Self {
        self.state.user = Some(RunUser {
            display_name: display_name.into(),
        });
        self
    }

    /// Attach page context to the state bag.
    pub fn with_page_context(mut self, context: BTreeMap<String, String>) -> Self {
        self.state.page_context = context;
        self
    }

    /// Mark this run as a resume of a paused invocation.
    pub fn with_resume(mut self, tool_call_id: impl Into<String>, confirmed: bool) -> Self {
        self.state.resume_interrupt = Some(ResumeInterrupt {
            tool_call_id: tool_call_id.into(),
            confirmed,
        });
        self
    }
}
