//! The visual confirmation control.
//!
//! A confirmation card is a countdown timer wrapped around caller-supplied
//! labels: it knows nothing about the action it is approving. The card
//! state machine lives in [`card`], the single-task event loop that drives
//! it in [`driver`], the per-action wiring the chat UI mounts in [`cards`],
//! and the tool-result dedup the renderer uses in [`dedup`].

pub mod card;
pub mod cards;
pub mod dedup;
pub mod driver;
pub mod responder;

pub use card::{AutoAction, CardConfig, CardPhase, CountdownCard};
pub use cards::{mount_card, registration_table, CardInvocation, CardSpec, InvocationStatus};
pub use dedup::{ResultDedup, ToolResultRecord};
pub use driver::{drive_card, CardInput};
pub use responder::{CardOutcome, CardResponder};
