//! Per-action card wiring.
//!
//! The external chat UI delivers tool invocations by registered action
//! name; this module supplies the registration table (one entry per catalog
//! action plus the generic fallback) and turns an invocation into a mounted
//! [`CountdownCard`] styled for its action. A card is mounted only while
//! the invocation is executing, and its responder must be settled exactly
//! once in that window.

use crate::card::{CardConfig, CountdownCard};
use crate::responder::CardResponder;
use fquest_actions::{card_description, card_style, ConfirmableAction};
use serde_json::Value;
use tracing::debug;

/// Lifecycle of a delivered invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationStatus {
    /// The action is paused awaiting a decision.
    Executing,
    /// Already resolved; rendered read-only, no card mounts.
    Complete,
}

/// One delivered tool invocation from the chat UI.
#[derive(Debug)]
pub struct CardInvocation {
    pub action: ConfirmableAction,
    pub status: InvocationStatus,
    pub args: Value,
    pub responder: CardResponder,
}

/// Registration entry the chat UI uses to mount cards.
#[derive(Debug, Clone)]
pub struct CardSpec {
    pub action: ConfirmableAction,
    pub title: &'static str,
    pub color: &'static str,
}

/// One spec per named catalog action, plus the generic fallback.
pub fn registration_table() -> Vec<CardSpec> {
    ConfirmableAction::NAMED
        .into_iter()
        .chain(std::iter::once(ConfirmableAction::Other(String::new())))
        .map(|action| {
            let style = card_style(&action);
            CardSpec {
                action,
                title: style.title,
                color: style.color,
            }
        })
        .collect()
}

/// Mount a card for an executing invocation.
///
/// Completed invocations return `None`: there is no decision left to make,
/// and responding would double-resolve upstream state. Presentation comes
/// from the action catalog; `config` supplies the countdown policy.
pub fn mount_card(invocation: CardInvocation, mut config: CardConfig) -> Option<CountdownCard> {
    if invocation.status == InvocationStatus::Complete {
        debug!(action = %invocation.action, "invocation already complete; not mounting a card");
        return None;
    }

    let style = card_style(&invocation.action);
    config.title = style.title.to_string();
    config.color = style.color.to_string();
    config.description = card_description(&invocation.action, &invocation.args);

    Some(CountdownCard::new(config, invocation.responder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AutoAction;
    use serde_json::json;

    #[test]
    fn table_covers_every_named_action_plus_the_fallback() {
        let table = registration_table();
        assert_eq!(table.len(), 11);
        assert_eq!(
            table.last().unwrap().action,
            ConfirmableAction::Other(String::new())
        );
        for (spec, action) in table.iter().zip(ConfirmableAction::NAMED) {
            assert_eq!(spec.action, action);
        }
    }

    #[tokio::test]
    async fn executing_invocation_mounts_a_styled_card() {
        let (responder, mut rx) = CardResponder::channel();
        let card = mount_card(
            CardInvocation {
                action: ConfirmableAction::SaveJob,
                status: InvocationStatus::Executing,
                args: json!({ "job_title": "Fractional CTO at Meridian" }),
                responder,
            },
            CardConfig {
                countdown_seconds: 10,
                auto_action: AutoAction::Cancel,
                ..CardConfig::default()
            },
        );

        let mut card = card.unwrap();
        assert_eq!(card.config().title, "Save opportunity");
        assert!(card.config().description.contains("Meridian"));
        assert_eq!(card.remaining_seconds(), 10);

        card.approve();
        assert!(rx.try_recv().unwrap().approved);
    }

    #[test]
    fn complete_invocation_does_not_mount() {
        let (responder, _rx) = CardResponder::channel();
        let card = mount_card(
            CardInvocation {
                action: ConfirmableAction::SaveJob,
                status: InvocationStatus::Complete,
                args: json!({}),
                responder,
            },
            CardConfig::default(),
        );
        assert!(card.is_none());
    }
}
