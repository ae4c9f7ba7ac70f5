//! The confirmation-interrupt bridge.
//!
//! This crate owns the pause-and-resume cycle around human-in-the-loop
//! approvals: it spots the remote agent's pause inside a decoded event
//! stream ([`detector`]), holds the resulting single-owner request per
//! conversation thread ([`registry`]), classifies the spoken reply
//! ([`intent`]), and resumes or cancels the paused computation exactly once
//! ([`dispatch`]).

pub mod detector;
pub mod dispatch;
pub mod intent;
pub mod registry;
pub mod request;

pub use detector::{scan_turn, DetectedInterrupt, TurnSignal};
pub use dispatch::{AgentClient, DispatchError, ResumeDispatcher, TurnReply};
pub use intent::{classify, Intent};
pub use registry::{InterruptRegistry, MemoryInterruptRegistry};
pub use request::{ConfirmationOutcome, ConfirmationRequest, ResolvedVia};
