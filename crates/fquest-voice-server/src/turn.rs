//! Per-turn orchestration.
//!
//! Exactly one question decides each turn's path: does the registry hold a
//! pending confirmation for this thread? If so the utterance is a reply to
//! the standing question and goes to the dispatcher; otherwise it is a
//! fresh instruction and streams through the agent, which may pause on a
//! new confirmable action.

use crate::http::AppState;
use crate::session::SessionIdentity;
use fquest_interrupt::{classify, ConfirmationRequest, InterruptRegistry};
use fquest_protocol_ag_ui::{AgentRunRequest, RunMessage};
use tracing::{info, warn};

/// Spoken when a fresh run fails or streams back nothing usable.
const TURN_APOLOGY: &str =
    "Sorry, I'm having trouble reaching your assistant right now. Please try again in a moment.";

/// Style guidance sent on every fresh run, on the neutral developer role.
const VOICE_INSTRUCTIONS: &str = "You are speaking with the user over a voice channel. \
Keep replies short and conversational, avoid markdown and lists, and spell out \
anything that would be awkward to hear read aloud.";

/// Process one voice turn into reply text.
///
/// Never fails: every error inside the turn is converted into a spoken
/// apology so the webhook can always answer with a normal completion.
pub async fn process_turn(state: &AppState, session: &SessionIdentity, utterance: &str) -> String {
    if let Some(pending) = state.registry.peek(&session.thread_id).await {
        let intent = classify(utterance);
        info!(
            thread_id = %session.thread_id,
            action = %pending.action,
            intent = ?intent,
            "resolving pending confirmation"
        );
        return state.dispatcher.resolve(&pending, intent).await.text;
    }

    run_fresh_turn(state, session, utterance).await
}

async fn run_fresh_turn(state: &AppState, session: &SessionIdentity, utterance: &str) -> String {
    let mut run = AgentRunRequest::new(&session.thread_id)
        .with_message(RunMessage::developer(VOICE_INSTRUCTIONS))
        .with_message(RunMessage::user(utterance))
        .with_page_context(session.page_context.clone());
    if let Some(name) = &session.display_name {
        run = run.with_user(name);
    }

    let signal = match state.agent.run(&run).await {
        Ok(signal) => signal,
        Err(e) => {
            warn!(error = %e, thread_id = %session.thread_id, "fresh run failed");
            return TURN_APOLOGY.to_string();
        }
    };

    let text = signal.reply_text.trim().to_string();
    let Some(interrupt) = signal.interrupt else {
        if text.is_empty() {
            return TURN_APOLOGY.to_string();
        }
        return text;
    };

    let request = ConfirmationRequest::new(
        &session.thread_id,
        interrupt.action,
        interrupt.correlation_id,
        interrupt.args,
    );
    info!(
        thread_id = %session.thread_id,
        action = %request.action,
        correlation_id = %request.correlation_id,
        "agent paused awaiting confirmation"
    );
    let prompt = request.prompt_text.clone();
    state.registry.put(request).await;

    // The interrupt takes precedence: the prompt always closes the reply.
    if text.is_empty() {
        prompt
    } else {
        format!("{text} {prompt}")
    }
}
