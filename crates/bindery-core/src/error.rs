//! Unified error types for Bindery.
//!
//! All crates map their internal errors into [`CoreError`] for consistent
//! propagation through the ? operator. Hook implementations return
//! `CoreResult<()>`, so a recognized hook failure is an `Err` carrying
//! one of these.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A hook callback reported a failure.
    Hook,
    /// A hook or listener registration is invalid or no longer present.
    Registration,
    /// A listener-related error occurred.
    Listener,
    /// A module-related error occurred.
    Module,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal runtime error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hook => write!(f, "HOOK"),
            Self::Registration => write!(f, "REGISTRATION"),
            Self::Listener => write!(f, "LISTENER"),
            Self::Module => write!(f, "MODULE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified error used throughout Bindery.
///
/// Crate-specific errors are mapped into `CoreError` using `From` impls
/// or explicit `.map_err()` calls, giving the runtime a single error type
/// at its boundaries.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct CoreError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CoreError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a hook-failure error.
    pub fn hook(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Hook, message)
    }

    /// Create a registration error.
    pub fn registration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Registration, message)
    }

    /// Create a listener error.
    pub fn listener(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Listener, message)
    }

    /// Create a module error.
    pub fn module(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Module, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for CoreError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = CoreError::hook("callback refused");
        assert_eq!(err.to_string(), "HOOK: callback refused");
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::other("inner");
        let err = CoreError::with_source(ErrorKind::Internal, "outer", io);
        let cloned = err.clone();
        assert!(err.source.is_some());
        assert!(cloned.source.is_none());
        assert_eq!(cloned.kind, ErrorKind::Internal);
    }
}
