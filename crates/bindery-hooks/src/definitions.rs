//! Hook capability contracts and snapshot entries.

use std::fmt;
use std::sync::{Arc, Weak};

use bindery_core::CoreResult;
use bindery_core::events::ModuleEvent;
use bindery_core::types::{ContextHandle, ModuleHandle, RegistrationId};

use crate::shrinkable::ShrinkableVec;

/// Hook capability filtering module visibility for a given caller
/// context.
///
/// Implementations may remove entries from `modules` to make them
/// invisible to `context`; the view cannot be grown or reordered.
/// Returning an error (or panicking) is logged by the dispatcher and
/// never aborts the dispatch sequence.
pub trait FindHook: Send + Sync {
    /// Narrow the set of modules visible to `context`.
    fn find(
        &self,
        context: &ContextHandle,
        modules: &mut ShrinkableVec<'_, ModuleHandle>,
    ) -> CoreResult<()>;
}

/// Hook capability filtering which listener contexts receive a
/// lifecycle event.
///
/// Same removal-only contract as [`FindHook`], applied to receiver
/// context handles instead of modules.
pub trait EventHook: Send + Sync {
    /// Narrow the set of contexts that will receive `event`.
    fn event(
        &self,
        event: &ModuleEvent,
        receivers: &mut ShrinkableVec<'_, ContextHandle>,
    ) -> CoreResult<()>;
}

/// One hook registration as captured by a dispatch snapshot.
///
/// The registry owns the callback; a snapshot entry holds only a weak
/// reference. An entry captured by an in-flight dispatch resolves to
/// `None` if its registration is unregistered concurrently, which is an
/// expected, harmless race rather than an error.
pub struct HookEntry<H: ?Sized> {
    ranking: i32,
    id: RegistrationId,
    hook: Weak<H>,
}

impl<H: ?Sized> HookEntry<H> {
    /// Create a snapshot entry for a registered hook.
    pub fn new(id: RegistrationId, ranking: i32, hook: Weak<H>) -> Self {
        Self { ranking, id, hook }
    }

    /// The registration identifier, assigned at registration time and
    /// never reused.
    pub fn id(&self) -> RegistrationId {
        self.id
    }

    /// Caller-assigned priority. Higher rankings are invoked earlier.
    pub fn ranking(&self) -> i32 {
        self.ranking
    }

    /// Resolve to the live callback, or `None` if the registration has
    /// been unregistered since the snapshot was taken.
    pub fn resolve(&self) -> Option<Arc<H>> {
        self.hook.upgrade()
    }
}

impl<H: ?Sized> Clone for HookEntry<H> {
    fn clone(&self) -> Self {
        Self {
            ranking: self.ranking,
            id: self.id,
            hook: self.hook.clone(),
        }
    }
}

impl<H: ?Sized> fmt::Debug for HookEntry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookEntry")
            .field("id", &self.id)
            .field("ranking", &self.ranking)
            .field("live", &(self.hook.strong_count() > 0))
            .finish()
    }
}
