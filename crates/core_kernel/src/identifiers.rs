//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers around UUIDs provides type safety and prevents
//! accidental mixing of different identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declares a UUID-backed identifier displayed as `PREFIX-<uuid>`
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident => $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            /// A random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// A time-ordered identifier; later calls sort after earlier ones
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", Self::PREFIX, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            /// Accepts `PREFIX-<uuid>` or a bare UUID
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .strip_prefix(Self::PREFIX)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .unwrap_or(s);
                Uuid::parse_str(raw).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

uuid_id!(
    /// An account in the chart of accounts
    AccountId => "ACC"
);
uuid_id!(
    /// A posted journal entry
    JournalEntryId => "JE"
);
uuid_id!(
    /// A recorded business transaction
    TransactionId => "TXN"
);

/// Identifier of a proforma template
///
/// Templates are authored by hand and referenced by slug (`sales-with-tax`),
/// so unlike the UUID identifiers above this wraps a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl From<String> for TemplateId {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

impl PartialEq<str> for TemplateId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_entry_id_display() {
        let id = JournalEntryId::new();
        assert!(id.to_string().starts_with("JE-"));
    }

    #[test]
    fn test_id_parsing() {
        let original = AccountId::new_v7();
        let parsed: AccountId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id = TransactionId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_template_id_compares_with_str() {
        let id = TemplateId::from("sales-with-tax");
        assert!(id == *"sales-with-tax");
        assert_eq!(id.to_string(), "sales-with-tax");
    }
}
