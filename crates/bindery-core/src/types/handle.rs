//! Handles to modules and their execution contexts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::ModuleId;

/// Handle to an installed module, the unit of visibility filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleHandle {
    /// Module identifier assigned at install time.
    pub id: ModuleId,
    /// Symbolic name of the module.
    pub symbolic_name: String,
}

impl ModuleHandle {
    /// Create a handle for an installed module.
    pub fn new(id: ModuleId, symbolic_name: impl Into<String>) -> Self {
        Self {
            id,
            symbolic_name: symbolic_name.into(),
        }
    }

    /// The execution context belonging to this module.
    pub fn context(&self) -> ContextHandle {
        ContextHandle(self.id)
    }
}

impl fmt::Display for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.symbolic_name, self.id)
    }
}

/// Identifies one module's execution context.
///
/// Comparable and hashable so receiver sets can be deduplicated and
/// sorted before event hooks see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextHandle(pub ModuleId);

impl ContextHandle {
    /// The module this context belongs to.
    pub fn module_id(self) -> ModuleId {
        self.0
    }
}

impl fmt::Display for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "context:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_derives_from_module() {
        let module = ModuleHandle::new(ModuleId::new(3), "org.example.shell");
        assert_eq!(module.context().module_id(), ModuleId::new(3));
    }

    #[test]
    fn test_context_ordering_matches_module_ids() {
        let a = ContextHandle(ModuleId::new(1));
        let b = ContextHandle(ModuleId::new(2));
        assert!(a < b);
    }
}
