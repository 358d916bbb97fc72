//! Accounts and their wallets.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::UserId;
use super::inventory::InventoryEntry;
use super::item::PetItem;
use super::task::TaskPlan;

/// Gold every new account starts with.
pub const STARTING_GOLD: i32 = 500;

/// Gems every new account starts with.
pub const STARTING_GEMS: i32 = 10;

/// What the header shows about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub gold: i32,
    pub gems: i32,
}

impl Profile {
    /// Deduct the price of `item` from the user's gold.
    ///
    /// # Errors
    /// Returns [`DomainError::InsufficientGold`] when the balance would go
    /// negative; the balance is left untouched.
    pub fn charge(&mut self, item: &PetItem) -> Result<(), DomainError> {
        if self.gold < item.cost {
            return Err(DomainError::InsufficientGold {
                item: item.name.clone(),
                cost: item.cost,
                gold: self.gold,
            });
        }
        self.gold -= item.cost;
        Ok(())
    }
}

/// Stored login material for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: UserId,
    pub password_hash: String,
}

/// Everything needed to open an account: the user row, its pet and its
/// starting tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub gold: i32,
    pub gems: i32,
    pub pet_name: String,
    pub tasks: TaskPlan,
}

impl NewAccount {
    /// An account with the starting wallet and a pet named after the user.
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        tasks: TaskPlan,
    ) -> Self {
        let username = username.into();
        Self {
            email: email.into(),
            pet_name: format!("{username}'s Pet"),
            username,
            password_hash: password_hash.into(),
            gold: STARTING_GOLD,
            gems: STARTING_GEMS,
            tasks,
        }
    }
}

/// Result of buying one unit of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub entry: InventoryEntry,
    pub gold: i32,
}
