//! State storage implementation
//!
//! This module keeps per-user funnel state in process memory, applies
//! read-modify-write updates atomically per message, and evicts sessions that
//! were abandoned mid-funnel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use chrono::Utc;
use tracing::{debug, warn, info};
use crate::utils::logging;
use super::context::ConversationState;

/// In-memory state storage keyed by transport user id.
///
/// A user without an entry is outside the funnel. Clones share the same map.
#[derive(Clone, Default)]
pub struct StateStorage {
    entries: Arc<Mutex<HashMap<String, ConversationState>>>,
}

impl StateStorage {
    /// Create a new, empty state storage instance
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ConversationState>> {
        // A panic while holding the lock leaves the map itself intact
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` against the user's current state and store whatever it returns
    /// as the next state, all under one lock.
    ///
    /// Returning `None` deletes the entry.
    pub fn apply<R>(
        &self,
        user_id: &str,
        f: impl FnOnce(Option<ConversationState>) -> (Option<ConversationState>, R),
    ) -> R {
        let mut entries = self.lock();
        let current = entries.remove(user_id);
        let (next, result) = f(current);

        match next {
            Some(state) => {
                debug!(user_id = user_id, stage = %state.stage, "Saving funnel state");
                entries.insert(user_id.to_string(), state);
            }
            None => {
                debug!(user_id = user_id, "No funnel state to keep");
            }
        }

        result
    }

    /// Save state for a user, replacing any existing entry
    pub fn save(&self, user_id: &str, state: ConversationState) {
        self.lock().insert(user_id.to_string(), state);
    }

    /// Load a copy of the user's state
    pub fn load(&self, user_id: &str) -> Option<ConversationState> {
        self.lock().get(user_id).cloned()
    }

    /// Delete the user's state, returning it if there was one
    pub fn delete(&self, user_id: &str) -> Option<ConversationState> {
        let removed = self.lock().remove(user_id);

        if removed.is_some() {
            debug!("Deleted funnel state for user {}", user_id);
        } else {
            debug!("No funnel state to delete for user {}", user_id);
        }

        removed
    }

    /// Check if state exists for a user
    pub fn contains(&self, user_id: &str) -> bool {
        self.lock().contains_key(user_id)
    }

    /// Number of users currently mid-funnel
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of every stored entry
    pub fn snapshot(&self) -> HashMap<String, ConversationState> {
        self.lock().clone()
    }

    /// Remove entries untouched for longer than `max_idle`
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let max_idle = match chrono::Duration::from_std(max_idle) {
            Ok(duration) => duration,
            Err(e) => {
                warn!(error = %e, "Idle timeout out of range, skipping eviction");
                return 0;
            }
        };

        let now = Utc::now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|user_id, state| {
            let idle = state.is_idle(max_idle, now);
            if idle {
                debug!(user_id = %user_id, stage = %state.stage, "Evicting idle funnel state");
            }
            !idle
        });

        before - entries.len()
    }
}

impl std::fmt::Debug for StateStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStorage")
            .field("active_sessions", &self.len())
            .finish_non_exhaustive()
    }
}

/// State storage manager with automatic idle eviction
#[derive(Debug)]
pub struct StateStorageManager {
    storage: StateStorage,
    idle_timeout: Duration,
    cleanup_interval: Duration,
    cleanup_handle: Option<tokio::task::JoinHandle<()>>,
}

impl StateStorageManager {
    /// Create a new manager; call [`start_cleanup`](Self::start_cleanup) to begin evicting
    pub fn new(storage: StateStorage, idle_timeout: Duration, cleanup_interval: Duration) -> Self {
        Self {
            storage,
            idle_timeout,
            cleanup_interval,
            cleanup_handle: None,
        }
    }

    /// Start automatic cleanup task
    pub fn start_cleanup(&mut self) {
        if self.cleanup_handle.is_some() {
            warn!("Cleanup task is already running");
            return;
        }

        let storage = self.storage.clone();
        let idle_timeout = self.idle_timeout;
        let interval = self.cleanup_interval;

        let handle = tokio::spawn(async move {
            let mut cleanup_interval = tokio::time::interval(interval);

            loop {
                cleanup_interval.tick().await;
                let evicted = storage.evict_idle(idle_timeout);
                logging::log_evicted_sessions(evicted);
            }
        });

        self.cleanup_handle = Some(handle);
        info!(
            "Started idle eviction task with timeout {:?} and interval {:?}",
            self.idle_timeout, self.cleanup_interval
        );
    }

    /// Stop automatic cleanup task
    pub fn stop_cleanup(&mut self) {
        if let Some(handle) = self.cleanup_handle.take() {
            handle.abort();
            info!("Stopped idle eviction task");
        }
    }

    pub fn is_running(&self) -> bool {
        self.cleanup_handle.is_some()
    }

    /// Get reference to the storage
    pub fn storage(&self) -> &StateStorage {
        &self.storage
    }
}

impl Drop for StateStorageManager {
    fn drop(&mut self) {
        self.stop_cleanup();
    }
}
