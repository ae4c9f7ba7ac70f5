//! Tool-result dedup by stable identity.
//!
//! The chat UI re-delivers the latest tool result on every render pass;
//! the renderer only wants each result once. Identity is assigned once on
//! admission — the upstream id when the result carries one, otherwise a
//! structural hash of the payload — so key order and float formatting
//! differences cannot smuggle a duplicate through.

use serde_json::Value;
use uuid::Uuid;

/// One tool result as delivered to the renderer.
#[derive(Debug, Clone)]
pub struct ToolResultRecord {
    pub tool_name: String,
    /// Upstream result id, when the runtime assigned one.
    pub id: Option<String>,
    pub payload: Value,
}

/// Identity assigned to an admitted result.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResultIdentity {
    Explicit(String),
    Content(u64),
}

/// Suppresses consecutive duplicate deliveries of the same result.
#[derive(Debug, Default)]
pub struct ResultDedup {
    last: Option<ResultIdentity>,
}

impl ResultDedup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a result. Returns `true` when it differs from the previous
    /// admitted one and should be rendered.
    pub fn admit(&mut self, record: &ToolResultRecord) -> bool {
        let identity = identity_of(record);
        if self.last.as_ref() == Some(&identity) {
            return false;
        }
        self.last = Some(identity);
        true
    }

    /// A fresh synthetic id for results that arrive with none and need one
    /// assigned before fan-out.
    pub fn assign_id() -> String {
        format!("result_{}", Uuid::new_v4().simple())
    }
}

fn identity_of(record: &ToolResultRecord) -> ResultIdentity {
    match &record.id {
        Some(id) => ResultIdentity::Explicit(id.clone()),
        None => {
            let mut hash = fnv1a(0xcbf2_9ce4_8422_2325, record.tool_name.as_bytes());
            hash = hash_value(hash, &record.payload);
            ResultIdentity::Content(hash)
        }
    }
}

/// Structural FNV-1a over a JSON value, order-insensitive for object keys.
fn hash_value(mut hash: u64, value: &Value) -> u64 {
    match value {
        Value::Null => fnv1a(hash, b"n"),
        Value::Bool(b) => fnv1a(hash, if *b { b"t" } else { b"f" }),
        Value::Number(n) => {
            // Hash the numeric value, not its source text, so 1.0 and 1
            // collide the way they compare equal.
            let canonical = n
                .as_i64()
                .map(|i| i as f64)
                .or_else(|| n.as_f64())
                .unwrap_or(f64::NAN);
            fnv1a(hash, &canonical.to_bits().to_le_bytes())
        }
        Value::String(s) => {
            hash = fnv1a(hash, b"s");
            fnv1a(hash, s.as_bytes())
        }
        Value::Array(items) => {
            hash = fnv1a(hash, b"a");
            for item in items {
                hash = hash_value(hash, item);
            }
            hash
        }
        Value::Object(map) => {
            // serde_json objects keep insertion order; sort keys so two
            // spellings of the same object hash alike.
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            hash = fnv1a(hash, b"o");
            for key in keys {
                hash = fnv1a(hash, key.as_bytes());
                hash = hash_value(hash, &map[key]);
            }
            hash
        }
    }
}

fn fnv1a(mut hash: u64, bytes: &[u8]) -> u64 {
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
