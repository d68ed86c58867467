//! # bindery
//!
//! Facade crate for the Bindery modular runtime core. Re-exports the
//! extension-point dispatch machinery: registered find/event hooks can
//! narrow module visibility and lifecycle-event delivery in
//! deterministic priority order, behind a per-invocation fault
//! boundary.

pub use bindery_core::config::RuntimeConfig;
pub use bindery_core::error::{CoreError, ErrorKind};
pub use bindery_core::events::{ModuleEvent, ModuleEventKind};
pub use bindery_core::listeners::{ListenerMap, ModuleListener};
pub use bindery_core::logging;
pub use bindery_core::result::CoreResult;
pub use bindery_core::types::{ContextHandle, ModuleHandle, ModuleId, RegistrationId};
pub use bindery_hooks::{EventHook, FindHook, HookEntry, HookSource, ModuleHooks, ShrinkableVec};
pub use bindery_registry::{EventPublisher, HookRegistry, ModuleRegistry};
