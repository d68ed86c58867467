//! Fault-isolated, priority-ordered hook dispatch.
//!
//! Callers hand in a candidate set; the dispatcher loads a registration
//! snapshot, orders it, and walks it through a per-invocation failure
//! boundary. A hook can only shrink the set it is given, and a
//! misbehaving hook is logged and skipped rather than aborting the
//! sequence or escaping to the caller. `filter_modules` and
//! `filter_event_receivers` therefore have no failure modes of their
//! own.

use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::warn;

use bindery_core::CoreResult;
use bindery_core::events::ModuleEvent;
use bindery_core::listeners::ListenerMap;
use bindery_core::types::{ContextHandle, ModuleHandle, RegistrationId};

use crate::definitions::{FindHook, HookEntry};
use crate::shrinkable::ShrinkableVec;
use crate::snapshot::{HookSource, ordered};

const FIND_HOOK: &str = "find";
const EVENT_HOOK: &str = "event";

/// Dispatches find and event hooks against candidate sets.
pub struct ModuleHooks {
    source: Arc<dyn HookSource>,
}

impl ModuleHooks {
    /// Create a dispatcher reading snapshots from `source`.
    pub fn new(source: Arc<dyn HookSource>) -> Self {
        Self { source }
    }

    /// Filter a single module for visibility from `context`.
    ///
    /// `None` in, `None` out, without loading a snapshot or resolving
    /// any callback. With no find hooks registered the handle passes
    /// through unchanged.
    pub fn filter_module(
        &self,
        context: &ContextHandle,
        module: Option<ModuleHandle>,
    ) -> Option<ModuleHandle> {
        let module = module?;
        let snapshot = self.source.find_hooks();
        if snapshot.is_empty() {
            return Some(module);
        }
        let mut candidates = vec![module];
        run_find_hooks(snapshot, context, &mut candidates);
        candidates.pop()
    }

    /// Filter `candidates` in place, removing every module some find
    /// hook made invisible to `context`. Survivors keep their relative
    /// order.
    pub fn filter_modules(&self, context: &ContextHandle, candidates: &mut Vec<ModuleHandle>) {
        let snapshot = self.source.find_hooks();
        if snapshot.is_empty() {
            return;
        }
        run_find_hooks(snapshot, context, candidates);
    }

    /// Remove from `listeners` every registration whose context an
    /// event hook excluded from delivery of `event`.
    ///
    /// The live map is locked twice at most, briefly: once to copy the
    /// context keys out, and once (only if a hook removed something) to
    /// delete the excluded registrations. No hook ever runs under the
    /// map's lock; a reentrant hook touching the same map cannot
    /// deadlock.
    pub fn filter_event_receivers(&self, event: &ModuleEvent, listeners: &ListenerMap) {
        let snapshot = self.source.event_hooks();
        if snapshot.is_empty() {
            return;
        }
        let snapshot = ordered(snapshot);

        let mut receivers = listeners.contexts();
        receivers.sort_unstable();
        receivers.dedup();
        let original = receivers.clone();

        {
            let mut view = ShrinkableVec::new(&mut receivers);
            for entry in &snapshot {
                // Unregistered between snapshot and invocation: skip.
                let Some(hook) = entry.resolve() else { continue };
                guarded(EVENT_HOOK, entry.id(), || hook.event(event, &mut view));
            }
        }

        // Delete exactly what the hooks removed. A registration added to
        // the live map while the hooks ran is in neither set and stays.
        if receivers.len() != original.len() {
            let surviving: HashSet<ContextHandle> = receivers.into_iter().collect();
            let removed: HashSet<ContextHandle> = original
                .into_iter()
                .filter(|context| !surviving.contains(context))
                .collect();
            listeners.retain(|context| !removed.contains(context));
        }
    }
}

fn run_find_hooks(
    snapshot: Vec<HookEntry<dyn FindHook>>,
    context: &ContextHandle,
    candidates: &mut Vec<ModuleHandle>,
) {
    let snapshot = ordered(snapshot);
    let mut view = ShrinkableVec::new(candidates);
    for entry in &snapshot {
        let Some(hook) = entry.resolve() else { continue };
        guarded(FIND_HOOK, entry.id(), || hook.find(context, &mut view));
    }
}

/// Invoke one hook callback behind a failure boundary.
///
/// A recognized failure (`Err`) and an opaque one (panic) are both
/// logged with the failing registration's identifier and swallowed;
/// control always returns to the dispatch loop. The boundary covers
/// exactly one invocation so one hook's failure cannot mask another's.
fn guarded<F>(capability: &'static str, id: RegistrationId, call: F)
where
    F: FnOnce() -> CoreResult<()>,
{
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(())) => {}
        Ok(Err(error)) => {
            warn!(
                capability,
                registration_id = %id,
                error = %error,
                "hook invocation failed"
            );
        }
        Err(payload) => {
            warn!(
                capability,
                registration_id = %id,
                detail = panic_detail(payload.as_ref()),
                "hook invocation panicked"
            );
        }
    }
}

/// Best-effort message extraction from a caught panic payload.
pub fn panic_detail(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "opaque panic payload"
    }
}
