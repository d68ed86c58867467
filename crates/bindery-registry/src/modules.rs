//! Installed-module registry with hook-filtered visibility.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::info;

use bindery_core::types::{ContextHandle, ModuleHandle, ModuleId};
use bindery_hooks::ModuleHooks;

/// Registry of installed modules.
///
/// Plain accessors return the raw installed set; the `visible_*`
/// accessors run the candidates through the find-hook dispatch so a
/// caller context only sees what the registered hooks let it see.
pub struct ModuleRegistry {
    next_id: AtomicU64,
    modules: RwLock<BTreeMap<ModuleId, ModuleHandle>>,
}

impl ModuleRegistry {
    /// Create an empty module registry.
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            modules: RwLock::new(BTreeMap::new()),
        }
    }

    /// Install a module and return its handle.
    pub fn install(&self, symbolic_name: impl Into<String>) -> ModuleHandle {
        let id = ModuleId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let handle = ModuleHandle::new(id, symbolic_name);
        self.modules.write().insert(id, handle.clone());
        info!(module_id = %id, name = %handle.symbolic_name, "module installed");
        handle
    }

    /// Uninstall a module by id.
    pub fn uninstall(&self, id: ModuleId) -> Option<ModuleHandle> {
        let removed = self.modules.write().remove(&id);
        if let Some(handle) = &removed {
            info!(module_id = %id, name = %handle.symbolic_name, "module uninstalled");
        }
        removed
    }

    /// The installed module with `id`, unfiltered.
    pub fn get(&self, id: ModuleId) -> Option<ModuleHandle> {
        self.modules.read().get(&id).cloned()
    }

    /// All installed modules in installation order, unfiltered.
    pub fn all(&self) -> Vec<ModuleHandle> {
        self.modules.read().values().cloned().collect()
    }

    /// Number of installed modules.
    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    /// Whether no modules are installed.
    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }

    /// All installed modules still visible to `context` after find
    /// hooks run.
    pub fn visible_modules(
        &self,
        hooks: &ModuleHooks,
        context: &ContextHandle,
    ) -> Vec<ModuleHandle> {
        let mut candidates = self.all();
        hooks.filter_modules(context, &mut candidates);
        candidates
    }

    /// One module by id, subject to visibility filtering for `context`.
    pub fn visible_module(
        &self,
        hooks: &ModuleHooks,
        context: &ContextHandle,
        id: ModuleId,
    ) -> Option<ModuleHandle> {
        hooks.filter_module(context, self.get(id))
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bindery_core::CoreResult;
    use bindery_core::types::ContextHandle;
    use bindery_hooks::definitions::FindHook;
    use bindery_hooks::shrinkable::ShrinkableVec;

    use super::*;
    use crate::hooks::HookRegistry;

    struct HidePrefix(&'static str);

    impl FindHook for HidePrefix {
        fn find(
            &self,
            _context: &ContextHandle,
            modules: &mut ShrinkableVec<'_, ModuleHandle>,
        ) -> CoreResult<()> {
            modules.retain(|module| !module.symbolic_name.starts_with(self.0));
            Ok(())
        }
    }

    #[test]
    fn test_install_assigns_increasing_ids() {
        let registry = ModuleRegistry::new();
        let a = registry.install("org.example.a");
        let b = registry.install("org.example.b");
        assert!(b.id > a.id);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_uninstall() {
        let registry = ModuleRegistry::new();
        let handle = registry.install("org.example.a");
        assert_eq!(registry.uninstall(handle.id), Some(handle.clone()));
        assert_eq!(registry.get(handle.id), None);
    }

    #[test]
    fn test_visible_modules_respects_find_hooks() {
        let modules = ModuleRegistry::new();
        let shell = modules.install("org.example.shell");
        modules.install("internal.secrets");
        let caller = shell.context();

        let hook_registry = Arc::new(HookRegistry::new());
        hook_registry.register_find_hook(Arc::new(HidePrefix("internal.")));
        let hooks = ModuleHooks::new(hook_registry);

        let visible = modules.visible_modules(&hooks, &caller);
        assert_eq!(visible, vec![shell]);
    }

    #[test]
    fn test_visible_module_missing_id_short_circuits() {
        let modules = ModuleRegistry::new();
        let caller = ContextHandle(ModuleId::new(1));
        let hooks = ModuleHooks::new(Arc::new(HookRegistry::new()));
        assert_eq!(
            modules.visible_module(&hooks, &caller, ModuleId::new(42)),
            None
        );
    }
}
