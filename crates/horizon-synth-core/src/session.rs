//! Sessions and session-scoped caches.
//!
//! A session is the logical owner of an installed look-and-feel. Everything that
//! would otherwise be a process-wide singleton (the active style factory, for
//! example) is instead looked up through a [`SessionCache`] keyed by
//! [`SessionId`].
//!
//! Entries are held weakly: the cache never keeps a value alive on its own. When
//! the owner of a look-and-feel drops it, the next lookup finds the slot empty
//! and removes it.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::error::{Result, SessionError};
use crate::logging::targets;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for a look-and-feel session.
///
/// Ids are allocated from a process-wide counter and never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Allocate a fresh session id.
    pub fn new() -> Self {
        Self(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Convert the SessionId to a raw u64 value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

/// A mutex-guarded map from session to a weakly-held value.
///
/// Reads and the rare write (installing a new value) take the same lock. The
/// lock is never held while user code runs.
pub struct SessionCache<T> {
    slots: Mutex<HashMap<SessionId, Weak<T>>>,
}

impl<T> SessionCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Associate `value` with `session`, replacing any previous association.
    ///
    /// Returns the previously installed value if it was still alive.
    pub fn install(&self, session: SessionId, value: &Arc<T>) -> Option<Arc<T>> {
        let previous = self
            .slots
            .lock()
            .insert(session, Arc::downgrade(value))
            .and_then(|weak| weak.upgrade());
        tracing::debug!(
            target: targets::SESSION,
            session = session.as_raw(),
            replaced = previous.is_some(),
            "installed session value"
        );
        previous
    }

    /// Look up the value for `session`.
    ///
    /// A slot whose value has been dropped is removed and reported as empty.
    pub fn get(&self, session: SessionId) -> Option<Arc<T>> {
        let mut slots = self.slots.lock();
        let value = slots.get(&session).and_then(Weak::upgrade);
        if value.is_none() && slots.remove(&session).is_some() {
            tracing::trace!(
                target: targets::SESSION,
                session = session.as_raw(),
                "dropped dead session entry"
            );
        }
        value
    }

    /// Look up the value for `session`, failing if nothing live is installed.
    pub fn require(&self, session: SessionId) -> Result<Arc<T>> {
        self.get(session).ok_or(SessionError::NotInstalled(session))
    }

    /// Remove the association for `session`.
    ///
    /// Returns `true` if an entry (live or dead) was removed.
    pub fn invalidate(&self, session: SessionId) -> bool {
        let removed = self.slots.lock().remove(&session).is_some();
        if removed {
            tracing::debug!(
                target: targets::SESSION,
                session = session.as_raw(),
                "invalidated session value"
            );
        }
        removed
    }

    /// Remove every entry whose value has been dropped.
    ///
    /// Returns the number of entries removed.
    pub fn prune(&self) -> usize {
        let mut slots = self.slots.lock();
        let before = slots.len();
        slots.retain(|_, weak| weak.strong_count() > 0);
        before - slots.len()
    }

    /// Get the number of entries, including ones not yet pruned.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    /// Check if the cache has no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}

impl<T> Default for SessionCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SessionCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCache")
            .field("entries", &self.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(SessionId: Send, Sync);
static_assertions::assert_impl_all!(SessionCache<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_unique() {
        let a = SessionId::new();
        let b = SessionId::new();
        assert_ne!(a, b);
        assert!(b.as_raw() > a.as_raw());
    }

    #[test]
    fn install_and_get() {
        let cache = SessionCache::new();
        let session = SessionId::new();
        let value = Arc::new(7);

        assert!(cache.get(session).is_none());
        assert!(cache.install(session, &value).is_none());

        let found = cache.get(session).unwrap();
        assert!(Arc::ptr_eq(&found, &value));
    }

    #[test]
    fn install_replaces_previous() {
        let cache = SessionCache::new();
        let session = SessionId::new();
        let first = Arc::new(1);
        let second = Arc::new(2);

        cache.install(session, &first);
        let previous = cache.install(session, &second).unwrap();
        assert!(Arc::ptr_eq(&previous, &first));
        assert_eq!(*cache.get(session).unwrap(), 2);
    }

    #[test]
    fn sessions_are_isolated() {
        let cache = SessionCache::new();
        let a = SessionId::new();
        let b = SessionId::new();
        let value = Arc::new("a");

        cache.install(a, &value);
        assert!(cache.get(a).is_some());
        assert!(cache.get(b).is_none());
        assert_eq!(cache.require(b), Err(SessionError::NotInstalled(b)));
    }

    #[test]
    fn dropped_values_are_removed_on_lookup() {
        let cache = SessionCache::new();
        let session = SessionId::new();
        let value = Arc::new(String::from("laf"));

        cache.install(session, &value);
        assert_eq!(cache.len(), 1);

        drop(value);
        assert!(cache.get(session).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_and_prune() {
        let cache = SessionCache::new();
        let kept = Arc::new(1);
        let kept_session = SessionId::new();
        let dropped_session = SessionId::new();

        cache.install(kept_session, &kept);
        {
            let short_lived = Arc::new(2);
            cache.install(dropped_session, &short_lived);
        }

        assert_eq!(cache.prune(), 1);
        assert_eq!(cache.len(), 1);

        assert!(cache.invalidate(kept_session));
        assert!(!cache.invalidate(kept_session));
        assert!(cache.is_empty());
    }
}
