//! Action names the remote agent pauses on.

use std::fmt;

/// A side-effecting action that requires human approval before it runs.
///
/// The ten named variants are the wire names the agent is configured to
/// interrupt on. Anything else lands on [`ConfirmableAction::Other`], which
/// keeps the raw name for rendering and confirms through the generic
/// fallback prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfirmableAction {
    /// Confirm the caller's C-level role preference.
    RolePreference,
    /// Confirm the engagement type (fractional / interim / advisory / open).
    Trinity,
    /// Confirm years of experience and industries.
    Experience,
    /// Confirm location and remote preference.
    Location,
    /// Confirm day-rate range and availability.
    SearchPrefs,
    /// Mark the onboarding profile complete.
    CompleteOnboarding,
    /// Save a job opportunity to the caller's list.
    SaveJob,
    /// Update the status of a saved job.
    UpdateJobStatus,
    /// Book a session with a coach.
    ScheduleSession,
    /// Cancel a booked session.
    CancelSession,
    /// Any other action the agent chose to pause on.
    Other(String),
}

impl ConfirmableAction {
    /// All named actions, in catalog order. Used to build the visual
    /// registration table.
    pub const NAMED: [ConfirmableAction; 10] = [
        ConfirmableAction::RolePreference,
        ConfirmableAction::Trinity,
        ConfirmableAction::Experience,
        ConfirmableAction::Location,
        ConfirmableAction::SearchPrefs,
        ConfirmableAction::CompleteOnboarding,
        ConfirmableAction::SaveJob,
        ConfirmableAction::UpdateJobStatus,
        ConfirmableAction::ScheduleSession,
        ConfirmableAction::CancelSession,
    ];

    /// Parse a wire name, returning `None` for names outside the known set.
    ///
    /// Used on tool-start events, where only catalog members count as an
    /// interrupt signal.
    pub fn parse(name: &str) -> Option<ConfirmableAction> {
        let action = match name {
            "confirm_role_preference" => ConfirmableAction::RolePreference,
            "confirm_trinity" => ConfirmableAction::Trinity,
            "confirm_experience" => ConfirmableAction::Experience,
            "confirm_location" => ConfirmableAction::Location,
            "confirm_search_prefs" => ConfirmableAction::SearchPrefs,
            "complete_onboarding" => ConfirmableAction::CompleteOnboarding,
            "save_job" => ConfirmableAction::SaveJob,
            "update_job_status" => ConfirmableAction::UpdateJobStatus,
            "schedule_session" => ConfirmableAction::ScheduleSession,
            "cancel_session" => ConfirmableAction::CancelSession,
            _ => return None,
        };
        Some(action)
    }

    /// Resolve a wire name from an explicit interrupt marker.
    ///
    /// Explicit interrupts always demand confirmation, so unknown names fall
    /// back to [`ConfirmableAction::Other`] instead of being dropped.
    pub fn from_interrupt(name: &str) -> ConfirmableAction {
        ConfirmableAction::parse(name).unwrap_or_else(|| ConfirmableAction::Other(name.to_string()))
    }

    /// The wire name the agent uses for this action.
    pub fn wire_name(&self) -> &str {
        match self {
            ConfirmableAction::RolePreference => "confirm_role_preference",
            ConfirmableAction::Trinity => "confirm_trinity",
            ConfirmableAction::Experience => "confirm_experience",
            ConfirmableAction::Location => "confirm_location",
            ConfirmableAction::SearchPrefs => "confirm_search_prefs",
            ConfirmableAction::CompleteOnboarding => "complete_onboarding",
            ConfirmableAction::SaveJob => "save_job",
            ConfirmableAction::UpdateJobStatus => "update_job_status",
            ConfirmableAction::ScheduleSession => "schedule_session",
            ConfirmableAction::CancelSession => "cancel_session",
            ConfirmableAction::Other(name) => name,
        }
    }
}

impl fmt::Display for ConfirmableAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_named_wire_name() {
        for action in ConfirmableAction::NAMED {
            assert_eq!(ConfirmableAction::parse(action.wire_name()), Some(action));
        }
    }

    #[test]
    fn unknown_names_do_not_parse() {
        assert_eq!(ConfirmableAction::parse("find_coaches"), None);
        assert_eq!(ConfirmableAction::parse(""), None);
    }

    #[test]
    fn explicit_interrupts_fall_back_to_other() {
        assert_eq!(
            ConfirmableAction::from_interrupt("save_user_fact"),
            ConfirmableAction::Other("save_user_fact".to_string())
        );
        assert_eq!(
            ConfirmableAction::from_interrupt("save_job"),
            ConfirmableAction::SaveJob
        );
    }

    #[test]
    fn other_keeps_the_raw_wire_name() {
        let action = ConfirmableAction::Other("mystery_tool".to_string());
        assert_eq!(action.wire_name(), "mystery_tool");
        assert_eq!(action.to_string(), "mystery_tool");
    }
}
