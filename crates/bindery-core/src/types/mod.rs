//! Shared typed identifiers and handles.

pub mod handle;
pub mod id;

pub use handle::{ContextHandle, ModuleHandle};
pub use id::{ModuleId, RegistrationId};
