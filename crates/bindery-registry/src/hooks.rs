//! Hook registration storage: assigns ids, hands out weak snapshots.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::info;

use bindery_core::config::registry::RegistryConfig;
use bindery_core::types::RegistrationId;
use bindery_hooks::definitions::{EventHook, FindHook, HookEntry};
use bindery_hooks::snapshot::HookSource;

struct Slot<H: ?Sized> {
    id: RegistrationId,
    ranking: i32,
    hook: Arc<H>,
}

/// Registry of hook registrations by capability type.
///
/// Owns the callbacks. Dispatch snapshots only ever receive weak-backed
/// [`HookEntry`] handles, so unregistering invalidates entries already
/// captured by an in-flight dispatch instead of keeping the hook alive.
pub struct HookRegistry {
    next_id: AtomicU64,
    default_ranking: i32,
    find: RwLock<Vec<Slot<dyn FindHook>>>,
    event: RwLock<Vec<Slot<dyn EventHook>>>,
}

impl HookRegistry {
    /// Create an empty registry with default settings.
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Create an empty registry from configuration.
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            default_ranking: config.default_ranking,
            find: RwLock::new(Vec::new()),
            event: RwLock::new(Vec::new()),
        }
    }

    fn next_id(&self) -> RegistrationId {
        RegistrationId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Register a find hook at the configured default ranking.
    pub fn register_find_hook(&self, hook: Arc<dyn FindHook>) -> RegistrationId {
        self.register_find_hook_ranked(hook, self.default_ranking)
    }

    /// Register a find hook. Higher rankings are invoked earlier.
    pub fn register_find_hook_ranked(
        &self,
        hook: Arc<dyn FindHook>,
        ranking: i32,
    ) -> RegistrationId {
        let id = self.next_id();
        self.find.write().push(Slot { id, ranking, hook });
        info!(capability = "find", registration_id = %id, ranking, "hook registered");
        id
    }

    /// Register an event hook at the configured default ranking.
    pub fn register_event_hook(&self, hook: Arc<dyn EventHook>) -> RegistrationId {
        self.register_event_hook_ranked(hook, self.default_ranking)
    }

    /// Register an event hook. Higher rankings are invoked earlier.
    pub fn register_event_hook_ranked(
        &self,
        hook: Arc<dyn EventHook>,
        ranking: i32,
    ) -> RegistrationId {
        let id = self.next_id();
        self.event.write().push(Slot { id, ranking, hook });
        info!(capability = "event", registration_id = %id, ranking, "hook registered");
        id
    }

    /// Remove a registration of either capability type. Returns whether
    /// a registration was removed. The id is never reassigned.
    pub fn unregister(&self, id: RegistrationId) -> bool {
        let mut removed = false;
        {
            let mut find = self.find.write();
            let before = find.len();
            find.retain(|slot| slot.id != id);
            removed |= find.len() != before;
        }
        {
            let mut event = self.event.write();
            let before = event.len();
            event.retain(|slot| slot.id != id);
            removed |= event.len() != before;
        }
        if removed {
            info!(registration_id = %id, "hook unregistered");
        }
        removed
    }

    /// Number of registered find hooks.
    pub fn find_hook_count(&self) -> usize {
        self.find.read().len()
    }

    /// Number of registered event hooks.
    pub fn event_hook_count(&self) -> usize {
        self.event.read().len()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HookSource for HookRegistry {
    fn find_hooks(&self) -> Vec<HookEntry<dyn FindHook>> {
        self.find
            .read()
            .iter()
            .map(|slot| HookEntry::new(slot.id, slot.ranking, Arc::downgrade(&slot.hook)))
            .collect()
    }

    fn event_hooks(&self) -> Vec<HookEntry<dyn EventHook>> {
        self.event
            .read()
            .iter()
            .map(|slot| HookEntry::new(slot.id, slot.ranking, Arc::downgrade(&slot.hook)))
            .collect()
    }
}
