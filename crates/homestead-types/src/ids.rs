//! Type-safe identifier wrappers around opaque string keys.
//!
//! Land plots, collectible placements, and buds are keyed by strings chosen
//! by the client (`"0"`, `"1"`, ...). Wrapping them prevents a patch index
//! from being passed where a placement id is expected. All serialize
//! transparently as plain strings so snapshots keep their wire shape.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the inner key.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Key of a fruit patch in [`GameState::fruit_patches`](crate::GameState::fruit_patches).
    PatchIndex
}

define_id! {
    /// Identifier of a single collectible placement record.
    PlacementId
}

define_id! {
    /// Token number of a companion bud, kept as the string key it has on the wire.
    BudId
}
