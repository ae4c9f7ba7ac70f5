//! The single-task event loop behind one card.
//!
//! Timer ticks and pointer/click inputs are serialized on one task via
//! `select!`, mirroring a cooperative UI event loop: no input can observe
//! the card mid-tick. Cards are fully independent; one loop per card.

use crate::card::CountdownCard;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

/// UI events a mounted card receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardInput {
    HoverEnter,
    HoverLeave,
    Approve,
    Reject,
}

/// Drive a card to resolution.
///
/// Returns once the card resolves (via click or timeout) or the input
/// channel closes, which stands for the card leaving its awaiting-decision
/// phase unmounted. The outcome itself travels through the card's one-shot
/// responder.
pub async fn drive_card(mut card: CountdownCard, mut inputs: mpsc::UnboundedReceiver<CardInput>) {
    // First tick one full second after mount.
    let start = Instant::now();
    let mut ticker = interval_at(start + Duration::from_secs(1), Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !card.is_resolved() {
        tokio::select! {
            _ = ticker.tick() => card.tick(),
            input = inputs.recv() => match input {
                Some(CardInput::HoverEnter) => card.hover_enter(),
                Some(CardInput::HoverLeave) => card.hover_leave(),
                Some(CardInput::Approve) => card.approve(),
                Some(CardInput::Reject) => card.reject(),
                None => return,
            },
        }
    }
}
