//! Inbound event model.
//!
//! The remote agent's stream mixes AG-UI events with runtime-specific
//! extras, and different runtimes spell the same field three ways
//! (`toolCallId`, `tool_call_id`, `id`). Classification is therefore done
//! over raw [`Value`]s with alias lookups instead of a strict serde enum:
//! anything we do not recognize becomes [`AgentEvent::Other`] rather than
//! a decode failure.

use serde_json::Value;

/// One decoded record from the agent's event stream.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentEvent {
    /// Incremental assistant text.
    TextContent {
        /// The text fragment to append.
        delta: String,
    },

    /// The agent began invoking a tool.
    ToolCallStart {
        /// Tool name as announced by the agent.
        name: String,
        /// Upstream invocation id, when one was assigned.
        call_id: Option<String>,
        /// Proposed arguments (always a JSON object, `{}` when absent or
        /// unparseable).
        args: Value,
    },

    /// The agent paused at an explicit human-in-the-loop interrupt marker.
    Interrupt {
        /// Action name carried by the marker, when present.
        name: Option<String>,
        /// Upstream invocation id, when one was assigned.
        call_id: Option<String>,
        /// Proposed arguments (always a JSON object).
        args: Value,
    },

    /// Any structured record the bridge does not act on (lifecycle, state
    /// sync, unknown extensions). Retained so callers can log it.
    Other {
        /// The `type` discriminator, when one was present.
        kind: Option<String>,
        /// The full record.
        raw: Value,
    },
}

impl AgentEvent {
    /// Classify a parsed stream record.
    pub fn from_value(value: Value) -> AgentEvent {
        let Some(obj) = value.as_object() else {
            return AgentEvent::Other {
                kind: None,
                raw: value,
            };
        };

        let kind = obj.get("type").and_then(Value::as_str);

        match kind {
            Some("TEXT_MESSAGE_CONTENT") | Some("TextMessageContent") => {
                let delta = str_field(obj, &["delta", "content"])
                    .map(str::to_string)
                    .unwrap_or_default();
                return AgentEvent::TextContent { delta };
            }
            Some("TOOL_CALL_START") | Some("ToolCallStart") => {
                let name = str_field(obj, &["toolCallName", "tool_call_name", "name"])
                    .map(str::to_string);
                let call_id =
                    str_field(obj, &["toolCallId", "tool_call_id", "id"]).map(str::to_string);
                let args = args_field(obj);
                return match name {
                    Some(name) => AgentEvent::ToolCallStart {
                        name,
                        call_id,
                        args,
                    },
                    // A tool start without a name is unusable; keep the raw
                    // record for logging.
                    None => AgentEvent::Other {
                        kind: kind.map(str::to_string),
                        raw: value,
                    },
                };
            }
            Some("INTERRUPT") => return interrupt_from(obj),
            _ => {}
        }

        // Runtimes that do not tag interrupts with a `type` set a boolean
        // `interrupt` flag instead.
        if obj.get("interrupt").and_then(Value::as_bool) == Some(true) {
            return interrupt_from(obj);
        }

        // A bare `content` string with no type and no tool markers is an
        // assistant text fragment.
        if kind.is_none() && !has_tool_marker(obj) {
            if let Some(content) = obj.get("content").and_then(Value::as_str) {
                return AgentEvent::TextContent {
                    delta: content.to_string(),
                };
            }
            // Some runtimes nest the fragment one level down.
            if let Some(content) = obj
                .get("delta")
                .and_then(Value::as_object)
                .and_then(|d| d.get("content"))
                .and_then(Value::as_str)
            {
                return AgentEvent::TextContent {
                    delta: content.to_string(),
                };
            }
        }

        AgentEvent::Other {
            kind: kind.map(str::to_string),
            raw: value,
        }
    }
}

fn interrupt_from(obj: &serde_json::Map<String, Value>) -> AgentEvent {
    AgentEvent::Interrupt {
        name: str_field(obj, &["tool_name", "toolCallName", "name"]).map(str::to_string),
        call_id: str_field(obj, &["tool_call_id", "toolCallId", "id"]).map(str::to_string),
        args: args_field(obj),
    }
}

/// First string value found under any of the given keys.
fn str_field<'a>(obj: &'a serde_json::Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
}

/// Extract proposed arguments as a JSON object.
///
/// Accepts `args` or `arguments`, each either an object or a JSON-encoded
/// string. Anything else collapses to `{}`.
fn args_field(obj: &serde_json::Map<String, Value>) -> Value {
    let raw = obj.get("args").or_else(|| obj.get("arguments"));
    match raw {
        Some(Value::Object(_)) => raw.cloned().unwrap_or_else(empty_object),
        Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(map)) => Value::Object(map),
            _ => empty_object(),
        },
        _ => empty_object(),
    }
}

fn has_tool_marker(obj: &serde_json::Map<String, Value>) -> bool {
    if obj.contains_key("toolCallId") || obj.contains_key("tool_call_id") {
        return true;
    }
    if obj.contains_key("tool_calls") {
        return true;
    }
    obj.get("role").and_then(Value::as_str) == Some("tool")
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}
