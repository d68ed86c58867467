//! Lifecycle event publication through the receiver filter.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};

use bindery_core::events::ModuleEvent;
use bindery_core::listeners::{ListenerMap, ModuleListener};
use bindery_core::types::ContextHandle;
use bindery_hooks::ModuleHooks;
use bindery_hooks::dispatcher::panic_detail;

/// Publishes module lifecycle events to subscribed listener contexts,
/// letting event hooks veto delivery per context.
pub struct EventPublisher {
    hooks: Arc<ModuleHooks>,
    listeners: ListenerMap,
}

impl EventPublisher {
    /// Create a publisher dispatching through `hooks`.
    pub fn new(hooks: Arc<ModuleHooks>) -> Self {
        Self {
            hooks,
            listeners: ListenerMap::new(),
        }
    }

    /// Register `listener` for `context`, replacing any previous
    /// registration for the same context.
    pub fn subscribe(&self, context: ContextHandle, listener: Arc<dyn ModuleListener>) {
        self.listeners.insert(context, listener);
        debug!(context = %context, "listener subscribed");
    }

    /// Remove the registration for `context`. Returns whether a
    /// registration existed.
    pub fn unsubscribe(&self, context: &ContextHandle) -> bool {
        self.listeners.remove(context).is_some()
    }

    /// The live listener registrations.
    pub fn listeners(&self) -> &ListenerMap {
        &self.listeners
    }

    /// Publish `event` to every subscribed context the event hooks let
    /// through.
    ///
    /// Event hooks prune the live listener map, so a context an event
    /// hook excludes also misses future events until it resubscribes.
    /// Delivery happens against a lock-free copy of the surviving
    /// registrations, and each listener call is isolated the same way
    /// hook calls are: a panicking listener is logged and skipped.
    pub fn publish(&self, event: &ModuleEvent) {
        self.hooks.filter_event_receivers(event, &self.listeners);

        for (context, listener) in self.listeners.entries() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener.on_event(event)));
            if let Err(payload) = outcome {
                warn!(
                    context = %context,
                    event_kind = %event.kind,
                    detail = panic_detail(payload.as_ref()),
                    "listener panicked during event delivery"
                );
            }
        }
    }
}
