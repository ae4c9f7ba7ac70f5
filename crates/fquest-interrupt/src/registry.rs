//! The pending-confirmation registry.
//!
//! Logically a key-value store keyed by thread id; the single source of
//! truth for "is something awaiting approval right now". The trait keeps
//! the seam narrow so the in-memory implementation can be swapped for an
//! externalized store when the bridge runs as more than one process.

use crate::request::ConfirmationRequest;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

/// Per-thread slots holding at most one pending request each.
#[async_trait]
pub trait InterruptRegistry: Send + Sync {
    /// Store a pending request, unconditionally replacing any existing one
    /// for the same thread.
    async fn put(&self, request: ConfirmationRequest);

    /// The current pending request for a thread, if any.
    async fn peek(&self, thread_id: &str) -> Option<ConfirmationRequest>;

    /// Remove and return the pending request for a thread.
    async fn clear(&self, thread_id: &str) -> Option<ConfirmationRequest>;
}

struct Slot {
    request: ConfirmationRequest,
    stored_at: Instant,
}

/// In-process registry with TTL eviction.
///
/// Anonymous voice threads get abandoned mid-confirmation all the time;
/// the TTL bounds the memory they leave behind. Eviction is lazy on access
/// and swept opportunistically on `put` — an expired slot is
/// indistinguishable from an empty one.
pub struct MemoryInterruptRegistry {
    slots: RwLock<HashMap<String, Slot>>,
    ttl: Duration,
}

/// Default pending-request lifetime.
pub const DEFAULT_TTL: Duration = Duration::from_secs(900);

impl MemoryInterruptRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn expired(&self, slot: &Slot) -> bool {
        slot.stored_at.elapsed() >= self.ttl
    }
}

impl Default for MemoryInterruptRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[async_trait]
impl InterruptRegistry for MemoryInterruptRegistry {
    async fn put(&self, request: ConfirmationRequest) {
        let mut slots = self.slots.write().await;
        slots.retain(|thread_id, slot| {
            let keep = slot.stored_at.elapsed() < self.ttl;
            if !keep {
                debug!(thread_id = %thread_id, "evicting expired pending confirmation");
            }
            keep
        });
        slots.insert(
            request.thread_id.clone(),
            Slot {
                request,
                stored_at: Instant::now(),
            },
        );
    }

    async fn peek(&self, thread_id: &str) -> Option<ConfirmationRequest> {
        {
            let slots = self.slots.read().await;
            match slots.get(thread_id) {
                Some(slot) if !self.expired(slot) => return Some(slot.request.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: upgrade to a write lock to drop the slot.
        let mut slots = self.slots.write().await;
        if let Some(slot) = slots.get(thread_id) {
            if self.expired(slot) {
                slots.remove(thread_id);
            }
        }
        None
    }

    async fn clear(&self, thread_id: &str) -> Option<ConfirmationRequest> {
        let mut slots = self.slots.write().await;
        let slot = slots.remove(thread_id)?;
        if self.expired(&slot) {
            return None;
        }
        Some(slot.request)
    }
}
