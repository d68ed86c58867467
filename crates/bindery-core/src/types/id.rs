//! Newtype wrappers around `u64` for runtime-assigned identifiers.
//!
//! Using distinct types prevents accidentally passing a `ModuleId` where
//! a `RegistrationId` is expected. Both are assigned from monotonically
//! increasing counters and are never reused; the ordering derived here is
//! therefore registration/installation order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `u64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create an identifier from a raw value.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Return the inner value.
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for an installed module.
    ModuleId
);

define_id!(
    /// Unique identifier for a hook registration. Assigned at
    /// registration time, used as an ordering tie-break, never reused.
    RegistrationId
);
