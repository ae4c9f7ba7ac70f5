//! One-shot resolution channel.
//!
//! The "respond callback" the chat UI hands over is really a one-shot
//! result channel. Wrapping the sender in an `Option` makes double
//! resolution unrepresentable: the second caller finds the sender gone.

use tokio::sync::oneshot;
use tracing::debug;

/// The resolution a card produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOutcome {
    pub approved: bool,
}

/// Settles a card's outcome exactly once.
#[derive(Debug)]
pub struct CardResponder {
    tx: Option<oneshot::Sender<CardOutcome>>,
}

impl CardResponder {
    /// A responder plus the receiver that will observe the outcome.
    pub fn channel() -> (CardResponder, oneshot::Receiver<CardOutcome>) {
        let (tx, rx) = oneshot::channel();
        (CardResponder { tx: Some(tx) }, rx)
    }

    /// Settle the outcome. Returns `true` the first time; every later call
    /// is a no-op returning `false`.
    pub fn respond(&mut self, approved: bool) -> bool {
        match self.tx.take() {
            Some(tx) => {
                // A dropped receiver still counts as settled.
                let _ = tx.send(CardOutcome { approved });
                true
            }
            None => {
                debug!("card outcome already settled; ignoring");
                false
            }
        }
    }

    /// Whether the outcome has already been settled.
    pub fn is_settled(&self) -> bool {
        self.tx.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn settles_exactly_once() {
        let (mut responder, rx) = CardResponder::channel();
        assert!(!responder.is_settled());

        assert!(responder.respond(true));
        assert!(responder.is_settled());
        assert!(!responder.respond(false));

        assert_eq!(rx.await.unwrap(), CardOutcome { approved: true });
    }

    #[tokio::test]
    async fn surviving_a_dropped_receiver() {
        let (mut responder, rx) = CardResponder::channel();
        drop(rx);
        assert!(responder.respond(false));
        assert!(!responder.respond(true));
    }
}
