//! Module lifecycle events.
//!
//! Events are published through the event publisher and delivered to
//! listener contexts that survive event-hook filtering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::ModuleHandle;

/// Lifecycle transitions a module can go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleEventKind {
    /// The module has been installed.
    Installed,
    /// The module's dependencies have been resolved.
    Resolved,
    /// The module is about to be started.
    Starting,
    /// The module has been started.
    Started,
    /// The module is about to be stopped.
    Stopping,
    /// The module has been stopped.
    Stopped,
    /// The module's dependencies have been unresolved.
    Unresolved,
    /// The module has been uninstalled.
    Uninstalled,
}

impl ModuleEventKind {
    /// Returns the string name of this event kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Installed => "installed",
            Self::Resolved => "resolved",
            Self::Starting => "starting",
            Self::Started => "started",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
            Self::Unresolved => "unresolved",
            Self::Uninstalled => "uninstalled",
        }
    }
}

impl std::fmt::Display for ModuleEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A module lifecycle event with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The lifecycle transition.
    pub kind: ModuleEventKind,
    /// The module the event is about.
    pub module: ModuleHandle,
}

impl ModuleEvent {
    /// Create a new lifecycle event for `module`.
    pub fn new(kind: ModuleEventKind, module: ModuleHandle) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            module,
        }
    }
}
