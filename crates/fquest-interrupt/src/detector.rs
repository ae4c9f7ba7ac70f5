//! Interrupt detection over a decoded event stream.

use chrono::Utc;
use fquest_actions::ConfirmableAction;
use fquest_protocol_ag_ui::AgentEvent;
use futures::{Stream, StreamExt};
use serde_json::Value;
use tracing::debug;

/// A pause recognized in the stream, before it becomes a registered request.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedInterrupt {
    pub action: ConfirmableAction,
    /// Upstream id, or a locally generated `call_<millis>` when the event
    /// omitted one.
    pub correlation_id: String,
    pub args: Value,
}

/// Everything one consumption of the agent's stream produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnSignal {
    /// Accumulated assistant text, across every tolerated text shape.
    pub reply_text: String,
    /// The first interrupt observed, if any.
    pub interrupt: Option<DetectedInterrupt>,
}

/// Consume one agent stream, accumulating text and watching for a pause.
///
/// Only the first interrupt is retained: one action is confirmed per
/// conversational turn. A tool start counts only when its name is in the
/// confirmable catalog; an explicit interrupt marker counts for any name,
/// with unknown names confirming through the generic fallback.
pub async fn scan_turn(events: impl Stream<Item = AgentEvent>) -> TurnSignal {
    let mut signal = TurnSignal::default();
    futures::pin_mut!(events);

    while let Some(event) = events.next().await {
        match event {
            AgentEvent::TextContent { delta } => signal.reply_text.push_str(&delta),
            AgentEvent::ToolCallStart { name, call_id, args } => {
                let Some(action) = ConfirmableAction::parse(&name) else {
                    continue;
                };
                retain_first(&mut signal, action, call_id, args);
            }
            AgentEvent::Interrupt { name, call_id, args } => {
                let action = match name {
                    Some(name) => ConfirmableAction::from_interrupt(&name),
                    None => ConfirmableAction::Other(String::new()),
                };
                retain_first(&mut signal, action, call_id, args);
            }
            AgentEvent::Other { .. } => {}
        }
    }

    signal
}

fn retain_first(
    signal: &mut TurnSignal,
    action: ConfirmableAction,
    call_id: Option<String>,
    args: Value,
) {
    if let Some(existing) = &signal.interrupt {
        debug!(
            kept = %existing.action,
            dropped = %action,
            "second interrupt in one stream ignored"
        );
        return;
    }
    signal.interrupt = Some(DetectedInterrupt {
        action,
        correlation_id: call_id.unwrap_or_else(generated_correlation_id),
        args,
    });
}

/// Fallback id for upstreams that omit one. Millisecond resolution is
/// enough: only one interrupt survives per stream.
fn generated_correlation_id() -> String {
    format!("call_{}", Utc::now().timestamp_millis())
}
