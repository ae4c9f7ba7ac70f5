//! The confirmable-action catalog.
//!
//! Every side-effecting tool the remote agent pauses on is listed here,
//! together with the two human-facing renderings of its pause: a spoken
//! confirmation question (voice modality) and a card presentation — label,
//! color hint, description — (visual modality).

pub mod action;
pub mod prompt;
pub mod style;

pub use action::ConfirmableAction;
pub use prompt::confirmation_prompt;
pub use style::{card_description, card_style, CardStyle};
