//! Caller identity from `custom_session_id`.
//!
//! The speech platform passes a single configurable string per session; the
//! deployment encodes it as pipe-delimited `display name|thread id|page
//! context`, where page context is comma-separated `key:value` pairs.
//! Every segment is optional; a caller with no stable thread id gets a
//! generated anonymous one, scoped to this session only.

use std::collections::BTreeMap;
use uuid::Uuid;

/// Parsed session identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub display_name: Option<String>,
    /// Stable per-user conversation id, shared with the visual modality.
    pub thread_id: String,
    /// What the caller was looking at (`current_page`, `page_type`).
    pub page_context: BTreeMap<String, String>,
}

impl SessionIdentity {
    /// Parse, degrading gracefully on missing segments.
    pub fn parse(custom_session_id: Option<&str>) -> Self {
        let raw = custom_session_id.unwrap_or_default();
        let mut segments = raw.splitn(3, '|');

        let display_name = segments
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let thread_id = segments
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(anonymous_thread_id);

        let mut page_context = BTreeMap::new();
        if let Some(context) = segments.next() {
            for pair in context.split(',') {
                let Some((key, value)) = pair.split_once(':') else {
                    continue;
                };
                let (key, value) = (key.trim(), value.trim());
                if !key.is_empty() && !value.is_empty() {
                    page_context.insert(key.to_string(), value.to_string());
                }
            }
        }

        Self {
            display_name,
            thread_id,
            page_context,
        }
    }
}

fn anonymous_thread_id() -> String {
    format!("anon_{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_segments() {
        let session = SessionIdentity::parse(Some(
            "Dana Whitfield|user-77|current_page:/jobs/123,page_type:job_detail",
        ));
        assert_eq!(session.display_name.as_deref(), Some("Dana Whitfield"));
        assert_eq!(session.thread_id, "user-77");
        assert_eq!(
            session.page_context.get("current_page").map(String::as_str),
            Some("/jobs/123")
        );
        assert_eq!(
            session.page_context.get("page_type").map(String::as_str),
            Some("job_detail")
        );
    }

    #[test]
    fn missing_session_id_yields_an_anonymous_thread() {
        let session = SessionIdentity::parse(None);
        assert_eq!(session.display_name, None);
        assert!(session.thread_id.starts_with("anon_"));
        assert!(session.page_context.is_empty());
    }

    #[test]
    fn name_only_still_generates_a_thread_id() {
        let session = SessionIdentity::parse(Some("Dana"));
        assert_eq!(session.display_name.as_deref(), Some("Dana"));
        assert!(session.thread_id.starts_with("anon_"));
    }

    #[test]
    fn malformed_context_pairs_are_skipped() {
        let session =
            SessionIdentity::parse(Some("|user-1|current_page:/home,notapair,:empty,ok:yes"));
        assert_eq!(session.display_name, None);
        assert_eq!(session.thread_id, "user-1");
        assert_eq!(session.page_context.len(), 2);
        assert_eq!(session.page_context.get("ok").map(String::as_str), Some("yes"));
    }

    #[test]
    fn two_anonymous_sessions_get_distinct_threads() {
        let a = SessionIdentity::parse(None);
        let b = SessionIdentity::parse(None);
        assert_ne!(a.thread_id, b.thread_id);
    }
}
