//! Visual card presentation.
//!
//! Each catalog action gets a distinct title and color hint so the eleven
//! confirmation cards are tellable apart at a glance. Descriptions are
//! args-aware and reuse the argument vocabulary the prompts use.

use crate::action::ConfirmableAction;
use serde::Serialize;
use serde_json::Value;

/// Presentation hints for one confirmation card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardStyle {
    /// Short label shown in the card header.
    pub title: &'static str,
    /// Accent color hint (hex) for the card border and confirm button.
    pub color: &'static str,
}

/// Presentation for a catalog action.
pub fn card_style(action: &ConfirmableAction) -> CardStyle {
    match action {
        ConfirmableAction::RolePreference => CardStyle {
            title: "Save role preference",
            color: "#6366f1",
        },
        ConfirmableAction::Trinity => CardStyle {
            title: "Save engagement type",
            color: "#8b5cf6",
        },
        ConfirmableAction::Experience => CardStyle {
            title: "Save experience",
            color: "#0ea5e9",
        },
        ConfirmableAction::Location => CardStyle {
            title: "Save location",
            color: "#14b8a6",
        },
        ConfirmableAction::SearchPrefs => CardStyle {
            title: "Save search preferences",
            color: "#f59e0b",
        },
        ConfirmableAction::CompleteOnboarding => CardStyle {
            title: "Complete onboarding",
            color: "#22c55e",
        },
        ConfirmableAction::SaveJob => CardStyle {
            title: "Save opportunity",
            color: "#3b82f6",
        },
        ConfirmableAction::UpdateJobStatus => CardStyle {
            title: "Update opportunity status",
            color: "#a855f7",
        },
        ConfirmableAction::ScheduleSession => CardStyle {
            title: "Book coaching session",
            color: "#ec4899",
        },
        ConfirmableAction::CancelSession => CardStyle {
            title: "Cancel session",
            color: "#ef4444",
        },
        ConfirmableAction::Other(_) => CardStyle {
            title: "Confirm action",
            color: "#64748b",
        },
    }
}

/// One-line description rendered under the card title.
///
/// Echoes the spoken confirmation wording minus the yes/no instruction —
/// the card's buttons are the instruction.
pub fn card_description(action: &ConfirmableAction, args: &Value) -> String {
    let prompt = crate::prompt::confirmation_prompt(action, args);
    prompt
        .strip_suffix(" Please reply yes or no.")
        .unwrap_or(&prompt)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn named_actions_have_distinct_titles_and_colors() {
        let mut titles = HashSet::new();
        let mut colors = HashSet::new();
        for action in ConfirmableAction::NAMED {
            let style = card_style(&action);
            assert!(titles.insert(style.title), "duplicate title {}", style.title);
            assert!(colors.insert(style.color), "duplicate color {}", style.color);
        }
    }

    #[test]
    fn description_drops_the_spoken_instruction() {
        let desc = card_description(
            &ConfirmableAction::SaveJob,
            &json!({ "job_title": "Fractional CTO at Meridian" }),
        );
        assert_eq!(desc, "Shall I save the Fractional CTO at Meridian opportunity to your list?");
    }

    #[test]
    fn unknown_actions_use_the_generic_style() {
        let style = card_style(&ConfirmableAction::Other("save_user_fact".to_string()));
        assert_eq!(style.title, "Confirm action");
    }
}
