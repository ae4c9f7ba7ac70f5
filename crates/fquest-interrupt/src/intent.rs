//! Coarse affirm/deny classification of a spoken reply.

/// What the caller meant, as far as keyword matching can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Affirm,
    Deny,
    Unclear,
}

const AFFIRMATIVE: &[&str] = &[
    "yes", "yeah", "yep", "sure", "ok", "okay", "confirm", "do it", "go ahead", "please",
];

const NEGATIVE: &[&str] = &["no", "nope", "cancel", "stop", "don't", "dont", "never mind"];

/// Classify an utterance. Case- and whitespace-insensitive; a reply that
/// matches neither keyword set is [`Intent::Unclear`] and is never guessed.
pub fn classify(utterance: &str) -> Intent {
    let normalized = utterance.trim().to_lowercase();
    if normalized.is_empty() {
        return Intent::Unclear;
    }
    if AFFIRMATIVE.iter().any(|kw| normalized.contains(kw)) {
        return Intent::Affirm;
    }
    if NEGATIVE.iter().any(|kw| normalized.contains(kw)) {
        return Intent::Deny;
    }
    Intent::Unclear
}
