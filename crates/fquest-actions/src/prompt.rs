//! Spoken confirmation questions.
//!
//! One template per catalog action, interpolating the argument vocabulary
//! the agent's tools actually use. Every prompt ends with an explicit
//! yes/no instruction because the voice reply is classified by keyword,
//! not understood.

use crate::action::ConfirmableAction;
use serde_json::Value;

const YES_NO: &str = "Please reply yes or no.";

/// Render the confirmation question for a paused action.
///
/// Total over the catalog plus the generic fallback; never fails. Missing
/// or oddly-typed arguments degrade to neutral wording rather than erroring.
pub fn confirmation_prompt(action: &ConfirmableAction, args: &Value) -> String {
    let body = match action {
        ConfirmableAction::RolePreference => match str_arg(args, "role") {
            Some(role) => format!(
                "You'd like to focus on {} roles. Shall I save that?",
                role_display(role)
            ),
            None => "Shall I save your role preference?".to_string(),
        },
        ConfirmableAction::Trinity => match str_arg(args, "engagement_type") {
            Some(kind) => format!("You're looking for {kind} engagements. Shall I save that?"),
            None => "Shall I save your engagement preference?".to_string(),
        },
        ConfirmableAction::Experience => {
            let years = int_arg(args, "years");
            let industries = str_arg(args, "industries");
            match (years, industries) {
                (Some(y), Some(i)) => {
                    format!("{y} years of experience across {i}. Shall I save that?")
                }
                (Some(y), None) => format!("{y} years of experience. Shall I save that?"),
                _ => "Shall I save your experience details?".to_string(),
            }
        }
        ConfirmableAction::Location => {
            let location = str_arg(args, "location");
            let remote = str_arg(args, "remote_preference");
            match (location, remote) {
                (Some(l), Some(r)) => {
                    format!("Based in {l}, preferring {r} work. Shall I save that?")
                }
                (Some(l), None) => format!("Based in {l}. Shall I save that?"),
                _ => "Shall I save your location preference?".to_string(),
            }
        }
        ConfirmableAction::SearchPrefs => {
            let min = int_arg(args, "day_rate_min");
            let max = int_arg(args, "day_rate_max");
            let availability = str_arg(args, "availability");
            let mut body = match (min, max) {
                (Some(lo), Some(hi)) => format!("A day rate of {lo} to {hi} pounds"),
                (Some(lo), None) => format!("A day rate from {lo} pounds"),
                _ => "Your search preferences".to_string(),
            };
            if let Some(when) = availability {
                body.push_str(&format!(", available {}", availability_display(when)));
            }
            body.push_str(". Shall I save that?");
            body
        }
        ConfirmableAction::CompleteOnboarding => {
            "That completes your profile. Shall I mark your onboarding as done?".to_string()
        }
        ConfirmableAction::SaveJob => {
            let title = str_arg(args, "job_title").or_else(|| str_arg(args, "job_id"));
            match title {
                Some(t) => format!("Shall I save the {t} opportunity to your list?"),
                None => "Shall I save this opportunity to your list?".to_string(),
            }
        }
        ConfirmableAction::UpdateJobStatus => match str_arg(args, "status") {
            Some(status) => format!("Shall I move this opportunity to {status}?"),
            None => "Shall I update this opportunity's status?".to_string(),
        },
        ConfirmableAction::ScheduleSession => {
            let coach = str_arg(args, "coach_name").or_else(|| str_arg(args, "coach_id"));
            let kind = str_arg(args, "session_type").map(session_display);
            let mut body = match (coach, kind) {
                (Some(c), Some(k)) => format!("Shall I book a {k} with {c}"),
                (Some(c), None) => format!("Shall I book a session with {c}"),
                (None, Some(k)) => format!("Shall I book a {k}"),
                (None, None) => "Shall I book this session".to_string(),
            };
            if let Some(date) = str_arg(args, "preferred_date") {
                body.push_str(&format!(" on {date}"));
            }
            body.push('?');
            body
        }
        ConfirmableAction::CancelSession => {
            match str_arg(args, "coach_name").or_else(|| str_arg(args, "session_id")) {
                Some(which) => format!("Shall I cancel your session with {which}?"),
                None => "Shall I cancel this session?".to_string(),
            }
        }
        ConfirmableAction::Other(_) => "Should I proceed with this action?".to_string(),
    };

    format!("{body} {YES_NO}")
}

/// Upper-case the C-level abbreviations; pass anything else through.
fn role_display(role: &str) -> String {
    match role {
        "cto" | "cfo" | "cmo" | "coo" | "cpo" => role.to_uppercase(),
        other => other.to_string(),
    }
}

fn availability_display(availability: &str) -> String {
    match availability {
        "immediately" => "immediately".to_string(),
        "1_month" => "within a month".to_string(),
        "3_months" => "within three months".to_string(),
        "flexible" => "on a flexible timeline".to_string(),
        other => other.replace('_', " "),
    }
}

fn session_display(session_type: &str) -> String {
    match session_type {
        "intro_call" => "free intro call".to_string(),
        "coaching_session" => "coaching session".to_string(),
        "strategy_deep_dive" => "strategy deep dive".to_string(),
        other => other.replace('_', " "),
    }
}

fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn int_arg(args: &Value, key: &str) -> Option<i64> {
    args.get(key).and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_prompt_upper_cases_the_role_and_asks_yes_no() {
        let prompt =
            confirmation_prompt(&ConfirmableAction::RolePreference, &json!({ "role": "cto" }));
        assert!(prompt.contains("CTO"), "{prompt}");
        assert!(prompt.ends_with("Please reply yes or no."), "{prompt}");
    }

    #[test]
    fn every_action_prompt_ends_with_the_yes_no_instruction() {
        for action in ConfirmableAction::NAMED {
            let prompt = confirmation_prompt(&action, &json!({}));
            assert!(prompt.ends_with("Please reply yes or no."), "{action}: {prompt}");
        }
        let fallback = confirmation_prompt(
            &ConfirmableAction::Other("mystery".to_string()),
            &json!({}),
        );
        assert!(fallback.starts_with("Should I proceed with this action?"));
        assert!(fallback.ends_with("Please reply yes or no."));
    }

    #[test]
    fn search_prefs_interpolates_rate_range_and_availability() {
        let prompt = confirmation_prompt(
            &ConfirmableAction::SearchPrefs,
            &json!({ "day_rate_min": 800, "day_rate_max": 1200, "availability": "1_month" }),
        );
        assert!(prompt.contains("800 to 1200 pounds"), "{prompt}");
        assert!(prompt.contains("within a month"), "{prompt}");
    }

    #[test]
    fn schedule_prompt_names_coach_session_type_and_date() {
        let prompt = confirmation_prompt(
            &ConfirmableAction::ScheduleSession,
            &json!({
                "coach_name": "Amara Osei",
                "session_type": "strategy_deep_dive",
                "preferred_date": "2026-09-02"
            }),
        );
        assert!(prompt.contains("strategy deep dive"), "{prompt}");
        assert!(prompt.contains("Amara Osei"), "{prompt}");
        assert!(prompt.contains("2026-09-02"), "{prompt}");
    }

    #[test]
    fn missing_arguments_degrade_to_neutral_wording() {
        let prompt = confirmation_prompt(&ConfirmableAction::Location, &json!({}));
        assert_eq!(
            prompt,
            "Shall I save your location preference? Please reply yes or no."
        );

        let prompt = confirmation_prompt(
            &ConfirmableAction::Experience,
            &json!({ "years": "twelve" }),
        );
        assert_eq!(
            prompt,
            "Shall I save your experience details? Please reply yes or no."
        );
    }
}
