//! # bindery-core
//!
//! Core crate for the Bindery modular runtime. Contains typed
//! identifiers, module lifecycle events, the listener map, configuration
//! schemas, logging setup, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Bindery crates.

pub mod config;
pub mod error;
pub mod events;
pub mod listeners;
pub mod logging;
pub mod result;
pub mod types;

pub use error::CoreError;
pub use result::CoreResult;
