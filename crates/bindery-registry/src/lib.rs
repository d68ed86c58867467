//! # bindery-registry
//!
//! In-process registry side of Bindery: hook registration storage
//! (the dispatch core's snapshot source), the installed-module registry,
//! and the lifecycle event publisher. Together these exercise the
//! dispatch core end to end.

pub mod hooks;
pub mod modules;
pub mod publisher;

pub use hooks::HookRegistry;
pub use modules::ModuleRegistry;
pub use publisher::EventPublisher;
