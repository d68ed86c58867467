//! # bindery-hooks
//!
//! The extension-point dispatch core of Bindery. Provides:
//!
//! - Remove-only [`ShrinkableVec`] views handed to untrusted hook code
//! - [`FindHook`] / [`EventHook`] capability contracts and weak-backed
//!   snapshot entries
//! - Priority-ordered snapshot loading via [`HookSource`]
//! - The fault-isolated dispatcher [`ModuleHooks`]

pub mod definitions;
pub mod dispatcher;
pub mod shrinkable;
pub mod snapshot;

pub use definitions::{EventHook, FindHook, HookEntry};
pub use dispatcher::ModuleHooks;
pub use shrinkable::ShrinkableVec;
pub use snapshot::HookSource;
