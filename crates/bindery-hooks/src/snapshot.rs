//! Snapshot loading and priority ordering for hook registrations.

use crate::definitions::{EventHook, FindHook, HookEntry};

/// Source of hook registration snapshots, implemented by the service
/// registry.
///
/// Each call must return a point-in-time, internally consistent snapshot
/// of the registrations for that capability type; no ordering guarantee
/// is required, the dispatcher imposes [`ordered`] afterwards. An empty
/// snapshot short-circuits all downstream filtering.
pub trait HookSource: Send + Sync {
    /// Current find-hook registrations.
    fn find_hooks(&self) -> Vec<HookEntry<dyn FindHook>>;

    /// Current event-hook registrations.
    fn event_hooks(&self) -> Vec<HookEntry<dyn EventHook>>;
}

/// Sort a snapshot into invocation order: ranking descending, then
/// registration id ascending among equal rankings.
///
/// Recomputed for every dispatch call: rankings and membership can
/// change between calls, so the derived order is call-scoped state and
/// is never cached.
pub fn ordered<H: ?Sized>(mut entries: Vec<HookEntry<H>>) -> Vec<HookEntry<H>> {
    entries.sort_by(|a, b| {
        b.ranking()
            .cmp(&a.ranking())
            .then_with(|| a.id().cmp(&b.id()))
    });
    entries
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bindery_core::CoreResult;
    use bindery_core::types::{ContextHandle, ModuleHandle, RegistrationId};

    use super::*;
    use crate::shrinkable::ShrinkableVec;

    struct Noop;

    impl FindHook for Noop {
        fn find(
            &self,
            _context: &ContextHandle,
            _modules: &mut ShrinkableVec<'_, ModuleHandle>,
        ) -> CoreResult<()> {
            Ok(())
        }
    }

    fn entry(hook: &Arc<Noop>, id: u64, ranking: i32) -> HookEntry<Noop> {
        HookEntry::new(RegistrationId::new(id), ranking, Arc::downgrade(hook))
    }

    #[test]
    fn test_ranking_descending_then_id_ascending() {
        let hook = Arc::new(Noop);
        let snapshot = vec![
            entry(&hook, 1, 5),
            entry(&hook, 2, 5),
            entry(&hook, 3, 10),
        ];

        let order: Vec<u64> = ordered(snapshot)
            .iter()
            .map(|e| e.id().value())
            .collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_snapshot_stays_empty() {
        let snapshot: Vec<HookEntry<Noop>> = Vec::new();
        assert!(ordered(snapshot).is_empty());
    }
}
