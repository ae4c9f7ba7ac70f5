//! The countdown card state machine.
//!
//! Pure state, no I/O and no clock: something external feeds it one
//! `tick()` per second and the pointer/click inputs. `Idle → Counting →
//! {Paused ⇄ Counting} → Resolved`; every path into Resolved goes through
//! the one-shot responder, so the resolve callback fires exactly once no
//! matter how a click races a timer expiry.

use crate::responder::CardResponder;

/// What to do automatically when the countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoAction {
    /// Approve, same path as an explicit confirm click.
    Confirm,
    /// Reject, same path as an explicit cancel click.
    #[default]
    Cancel,
    /// No timeout; the card waits indefinitely.
    None,
}

/// Card phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Mounted but not yet counting.
    Idle,
    /// Counting down (or waiting inertly when no auto action is set).
    Counting,
    /// Pointer is hovering; the countdown is frozen.
    Paused,
    /// Outcome settled.
    Resolved,
}

/// Presentation and policy for one card.
#[derive(Debug, Clone)]
pub struct CardConfig {
    pub countdown_seconds: u32,
    pub auto_action: AutoAction,
    pub title: String,
    pub description: String,
    /// Accent color hint, passed through to the renderer.
    pub color: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: 15,
            auto_action: AutoAction::Cancel,
            title: String::new(),
            description: String::new(),
            color: String::new(),
        }
    }
}

/// One mounted confirmation card.
#[derive(Debug)]
pub struct CountdownCard {
    config: CardConfig,
    phase: CardPhase,
    remaining_seconds: u32,
    responder: CardResponder,
}

impl CountdownCard {
    /// Mount a card. Idle transitions straight into Counting; with
    /// `AutoAction::None` the phase still reads Counting but ticks never
    /// decrement.
    pub fn new(config: CardConfig, responder: CardResponder) -> Self {
        let remaining_seconds = config.countdown_seconds;
        Self {
            config,
            phase: CardPhase::Counting,
            remaining_seconds,
            responder,
        }
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == CardPhase::Resolved
    }

    /// One second elapsed. Decrements only while Counting with an auto
    /// action configured; reaching zero fires that action.
    pub fn tick(&mut self) {
        if self.phase != CardPhase::Counting {
            return;
        }
        let auto_approved = match self.config.auto_action {
            AutoAction::Confirm => true,
            AutoAction::Cancel => false,
            AutoAction::None => return,
        };
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.resolve(auto_approved);
        }
    }

    /// Pointer entered the card; freeze the countdown.
    pub fn hover_enter(&mut self) {
        if self.phase == CardPhase::Counting {
            self.phase = CardPhase::Paused;
        }
    }

    /// Pointer left the card; resume counting unless already resolved.
    pub fn hover_leave(&mut self) {
        if self.phase == CardPhase::Paused {
            self.phase = CardPhase::Counting;
        }
    }

    /// Explicit confirm click.
    pub fn approve(&mut self) {
        self.resolve(true);
    }

    /// Explicit cancel click.
    pub fn reject(&mut self) {
        self.resolve(false);
    }

    fn resolve(&mut self, approved: bool) {
        if self.phase == CardPhase::Resolved {
            return;
        }
        self.phase = CardPhase::Resolved;
        self.responder.respond(approved);
    }
}
