//! Game domain: users, pets, the item catalog, inventories, tasks and the
//! social layer (groups and challenges).
//!
//! Everything here is storage- and transport-agnostic. The SQLite adapter
//! maps rows to these types and the REST layer serializes them directly,
//! using the camelCase field names the web client expects.

/// Declares a fieldless enum persisted as upper-case text.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The stored text form.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Parse the stored text form.
            ///
            /// # Errors
            /// Returns [`DomainError::UnknownVariant`](crate::domain::error::DomainError::UnknownVariant)
            /// for unrecognised text.
            pub fn parse(value: &str) -> Result<Self, crate::domain::error::DomainError> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    other => Err(crate::domain::error::DomainError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::domain::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(&s.to_ascii_uppercase())
            }
        }
    };
}

pub mod error;
pub mod id;
pub mod inventory;
pub mod item;
pub mod pet;
pub mod social;
pub mod task;
pub mod user;

pub use error::DomainError;
pub use id::{
    ChallengeId, DailyId, EquippedId, GroupId, HabitId, InventoryId, ItemId, PetId, UserId,
};
pub use inventory::{InventoryEntry, ItemFilter};
pub use item::{EquipmentSlot, ItemType, NewPetItem, PetItem, PetStat};
pub use pet::{EquippedItem, Pet, PetStats, PetView};
pub use social::{Challenge, Group, GroupMessage, NewChallenge, UserGroupRole};
pub use task::{Daily, Difficulty, Habit, HabitCompletion, Reward, TaskPlan, Todo};
pub use user::{Credentials, NewAccount, Profile, Purchase};
