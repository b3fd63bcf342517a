//! Identifiers for stored records
//!
//! Each record kind gets its own uuid newtype. On disk the id is the bare
//! uuid; for people it is written `<prefix>-<uuid>`, and listings use the
//! eight-digit [`short`](TransactionId::short) form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CashbookError;

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Text written before the uuid when shown to people
            pub const PREFIX: &'static str = $prefix;

            /// A fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// `<prefix>-` plus the first eight hex digits
            pub fn short(&self) -> String {
                let simple = self.0.simple().to_string();
                format!("{}-{}", Self::PREFIX, &simple[..8])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", Self::PREFIX, self.0.hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = CashbookError;

            /// Accepts the displayed form or a bare uuid
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bare = s
                    .strip_prefix(Self::PREFIX)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .unwrap_or(s);
                Uuid::parse_str(bare).map(Self).map_err(|e| {
                    CashbookError::Parse(format!("Invalid {} id '{}': {}", Self::PREFIX, s, e))
                })
            }
        }
    };
}

record_id!(
    /// Identifier of a stored transaction
    TransactionId,
    "txn"
);
record_id!(
    /// Identifier of a stored category
    CategoryId,
    "cat"
);
