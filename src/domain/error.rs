//! Game-rule violations.
//!
//! The display strings double as the user-facing messages the REST API puts
//! in its `{ "message": ... }` error bodies, so they read as sentences.
//!
//! # Examples
//!
//! ```
//! use habitpet::domain::error::DomainError;
//! use habitpet::domain::item::ItemType;
//!
//! let err = ItemType::parse("WEAPON").unwrap_err();
//! assert!(matches!(err, DomainError::UnknownVariant { kind: "item type", .. }));
//! ```

use thiserror::Error;

/// Errors raised when a request breaks a rule of the game economy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The inventory row does not exist or belongs to another user.
    #[error("Item not found in your inventory.")]
    NotInInventory,

    /// Customization items are equipped, not consumed.
    #[error("This item cannot be used. Try equipping it instead.")]
    NotUsable,

    /// Only customization items with a slot can be equipped.
    #[error("Only customization items can be equipped.")]
    NotEquippable,

    /// The user cannot pay for the item.
    #[error("Not enough gold: {item} costs {cost}, you have {gold}.")]
    InsufficientGold {
        /// Catalog name of the item.
        item: String,
        /// Price in gold.
        cost: i32,
        /// Gold the user holds.
        gold: i32,
    },

    /// No catalog entry with this name or id.
    #[error("Item not found: {0}")]
    UnknownItem(String),

    /// No habit with this id belongs to the user.
    #[error("Habit not found.")]
    UnknownHabit,

    /// The authenticated user no longer exists.
    #[error("User not found.")]
    UnknownUser,

    /// The user has no pet.
    #[error("Pet not found.")]
    MissingPet,

    /// A stored or submitted enum value is not recognised.
    #[error("unknown {kind} value: {value}")]
    UnknownVariant {
        /// Which enumeration was being parsed.
        kind: &'static str,
        /// The offending text.
        value: String,
    },

    /// Quantities granted or bought must be positive.
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(i32),
}
