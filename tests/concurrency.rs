//! Concurrent dispatch calls on disjoint candidate sets must not
//! interfere with each other.

use std::sync::Arc;
use std::thread;

use bindery::{
    ContextHandle, CoreResult, FindHook, HookRegistry, ModuleHandle, ModuleHooks, ModuleId,
    ShrinkableVec,
};

/// Hides every module whose symbolic name marks it as hidden.
struct HideMarked;

impl FindHook for HideMarked {
    fn find(
        &self,
        _context: &ContextHandle,
        modules: &mut ShrinkableVec<'_, ModuleHandle>,
    ) -> CoreResult<()> {
        modules.retain(|module| !module.symbolic_name.ends_with(".hidden"));
        Ok(())
    }
}

#[test]
fn concurrent_filters_each_satisfy_the_subset_property() {
    let registry = Arc::new(HookRegistry::new());
    registry.register_find_hook(Arc::new(HideMarked));
    let hooks = Arc::new(ModuleHooks::new(registry));

    let threads = 8;
    let modules_per_thread = 50u64;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let hooks = hooks.clone();
            thread::spawn(move || {
                let base = t as u64 * modules_per_thread;
                let mut candidates: Vec<ModuleHandle> = (0..modules_per_thread)
                    .map(|i| {
                        let id = base + i;
                        let name = if i % 2 == 0 {
                            format!("org.example.mod{id}")
                        } else {
                            format!("org.example.mod{id}.hidden")
                        };
                        ModuleHandle::new(ModuleId::new(id), name)
                    })
                    .collect();
                let original = candidates.clone();

                let caller = ContextHandle(ModuleId::new(base));
                hooks.filter_modules(&caller, &mut candidates);

                // Subset of this thread's own input, in original order.
                assert!(candidates.iter().all(|m| original.contains(m)));
                // Exactly the unmarked half survives.
                assert_eq!(candidates.len(), (modules_per_thread as usize) / 2);
                assert!(
                    candidates
                        .iter()
                        .all(|m| !m.symbolic_name.ends_with(".hidden"))
                );
                // No cross-thread leakage: every survivor belongs to
                // this thread's id range.
                assert!(
                    candidates
                        .iter()
                        .all(|m| m.id.value() >= base && m.id.value() < base + modules_per_thread)
                );
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("filter thread panicked");
    }
}

#[test]
fn concurrent_registration_and_dispatch_do_not_interfere() {
    let registry = Arc::new(HookRegistry::new());
    registry.register_find_hook(Arc::new(HideMarked));
    let hooks = Arc::new(ModuleHooks::new(registry.clone()));

    let churn = {
        let registry = registry.clone();
        thread::spawn(move || {
            for _ in 0..100 {
                let id = registry.register_find_hook(Arc::new(HideMarked));
                registry.unregister(id);
            }
        })
    };

    let filter = thread::spawn(move || {
        for round in 0..100u64 {
            let mut candidates = vec![
                ModuleHandle::new(ModuleId::new(round), format!("org.example.mod{round}")),
                ModuleHandle::new(
                    ModuleId::new(round + 1000),
                    format!("org.example.mod{round}.hidden"),
                ),
            ];
            let caller = ContextHandle(ModuleId::new(round));
            hooks.filter_modules(&caller, &mut candidates);

            // Whatever the registration churn, the visible module
            // survives and the hidden one never does.
            assert_eq!(candidates.len(), 1);
            assert_eq!(candidates[0].id, ModuleId::new(round));
        }
    });

    churn.join().expect("churn thread panicked");
    filter.join().expect("filter thread panicked");
}
