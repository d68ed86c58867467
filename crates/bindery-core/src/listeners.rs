//! Listener registrations keyed by module context.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::events::ModuleEvent;
use crate::types::ContextHandle;

/// Callback registered by a module context to observe lifecycle events.
pub trait ModuleListener: Send + Sync {
    /// Called for each delivered lifecycle event.
    fn on_event(&self, event: &ModuleEvent);
}

/// Map of listener registrations, one per module context.
///
/// All accessors hold the internal lock only long enough to copy data in
/// or out; external code never runs under the lock. The event receiver
/// filter relies on this: it copies the context keys out, runs event
/// hooks lock-free, and re-acquires the lock only if registrations must
/// be deleted.
#[derive(Default)]
pub struct ListenerMap {
    inner: Mutex<HashMap<ContextHandle, Arc<dyn ModuleListener>>>,
}

impl ListenerMap {
    /// Create an empty listener map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `context`, replacing any previous
    /// registration for the same context.
    pub fn insert(
        &self,
        context: ContextHandle,
        listener: Arc<dyn ModuleListener>,
    ) -> Option<Arc<dyn ModuleListener>> {
        self.inner.lock().insert(context, listener)
    }

    /// Remove the registration for `context`.
    pub fn remove(&self, context: &ContextHandle) -> Option<Arc<dyn ModuleListener>> {
        self.inner.lock().remove(context)
    }

    /// The listener registered for `context`, if any.
    pub fn get(&self, context: &ContextHandle) -> Option<Arc<dyn ModuleListener>> {
        self.inner.lock().get(context).cloned()
    }

    /// Copy of the currently registered context keys.
    pub fn contexts(&self) -> Vec<ContextHandle> {
        self.inner.lock().keys().copied().collect()
    }

    /// Copy of the current registrations, for lock-free delivery.
    pub fn entries(&self) -> Vec<(ContextHandle, Arc<dyn ModuleListener>)> {
        self.inner
            .lock()
            .iter()
            .map(|(context, listener)| (*context, listener.clone()))
            .collect()
    }

    /// Keep only the registrations whose context satisfies `keep`.
    pub fn retain(&self, mut keep: impl FnMut(&ContextHandle) -> bool) {
        self.inner.lock().retain(|context, _| keep(context));
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the map has no registrations.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl fmt::Debug for ListenerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerMap")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModuleId;

    struct NullListener;

    impl ModuleListener for NullListener {
        fn on_event(&self, _event: &ModuleEvent) {}
    }

    fn context(id: u64) -> ContextHandle {
        ContextHandle(ModuleId::new(id))
    }

    #[test]
    fn test_insert_get_identity() {
        let map = ListenerMap::new();
        let listener: Arc<dyn ModuleListener> = Arc::new(NullListener);
        map.insert(context(1), listener.clone());

        let fetched = map.get(&context(1)).expect("registered");
        assert!(Arc::ptr_eq(&fetched, &listener));
    }

    #[test]
    fn test_insert_replaces_previous_registration() {
        let map = ListenerMap::new();
        let first: Arc<dyn ModuleListener> = Arc::new(NullListener);
        let second: Arc<dyn ModuleListener> = Arc::new(NullListener);
        map.insert(context(1), first.clone());
        let previous = map.insert(context(1), second).expect("replaced");
        assert!(Arc::ptr_eq(&previous, &first));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_retain() {
        let map = ListenerMap::new();
        for id in 1..=3 {
            map.insert(context(id), Arc::new(NullListener));
        }
        map.retain(|ctx| ctx.module_id() != ModuleId::new(2));

        let mut remaining = map.contexts();
        remaining.sort_unstable();
        assert_eq!(remaining, vec![context(1), context(3)]);
    }
}
