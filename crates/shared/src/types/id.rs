//! Typed IDs for type-safe references to catalog entities.
//!
//! Using typed IDs prevents accidentally passing an `ItemId` where an
//! `AccountId` is expected. The upstream catalog keys everything by
//! integer, so these wrap `i64` rather than minting identifiers locally;
//! zero means "unselected".

use serde::{Deserialize, Serialize};

use super::field::parse_identifier;

/// Macro to generate typed ID wrappers.
macro_rules! entity_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wraps an existing catalog identifier.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Parses a form-field value, defaulting to the unselected
            /// sentinel (zero) on malformed input.
            #[must_use]
            pub fn from_field(input: &str) -> Self {
                Self(parse_identifier(input))
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Returns `true` when no catalog entity has been selected.
            #[must_use]
            pub const fn is_unselected(self) -> bool {
                self.0 == 0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

entity_id!(ItemId, "Identifier for a catalog product or service item.");
entity_id!(UnitId, "Identifier for a unit of measure.");
entity_id!(
    AccountId,
    "Identifier for a chart of accounts entry on a journal line."
);
