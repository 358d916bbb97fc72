//! Domain identifier types with proper encapsulation.
//!
//! Every persisted entity is keyed by a UUID v4 string. Seed fixtures may
//! pin readable ids (`cl_habit_1`), so construction from arbitrary strings
//! is allowed as well.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier with a generated UUID.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Wrap an existing identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a registered user.
    UserId
);
string_id!(
    /// Identifier of a user's pet.
    PetId
);
string_id!(
    /// Identifier of a catalog entry.
    ItemId
);
string_id!(
    /// Identifier of an inventory row (a user's stack of one catalog item).
    InventoryId
);
string_id!(
    /// Identifier of an equipment assignment.
    EquippedId
);
string_id!(
    /// Identifier of a habit.
    HabitId
);
string_id!(
    /// Identifier of a daily.
    DailyId
);
string_id!(
    /// Identifier of a group.
    GroupId
);
string_id!(
    /// Identifier of a challenge.
    ChallengeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_uuids() {
        let a = UserId::generate();
        let b = UserId::generate();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn fixture_ids_keep_their_text() {
        let id = HabitId::new("cl_habit_1");
        assert_eq!(id.as_str(), "cl_habit_1");
        assert_eq!(id.to_string(), "cl_habit_1");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = InventoryId::from("row-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"row-7\"");
        let back: InventoryId = serde_json::from_str("\"row-7\"").unwrap();
        assert_eq!(back, id);
    }
}
