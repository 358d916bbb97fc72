//! Inventory rows and the client-side type filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::InventoryId;
use super::item::{ItemType, PetItem};

/// One stack of a catalog item owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub id: InventoryId,
    pub item: PetItem,
    pub quantity: i32,
}

/// Which item types an inventory listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemFilter {
    #[default]
    All,
    Only(ItemType),
}

impl ItemFilter {
    /// Filter buttons in display order.
    pub const BUTTONS: [ItemFilter; 5] = [
        ItemFilter::All,
        ItemFilter::Only(ItemType::Food),
        ItemFilter::Only(ItemType::Treat),
        ItemFilter::Only(ItemType::Toy),
        ItemFilter::Only(ItemType::Customization),
    ];

    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ItemFilter::All => "All",
            ItemFilter::Only(ItemType::Food) => "Food",
            ItemFilter::Only(ItemType::Treat) => "Treats",
            ItemFilter::Only(ItemType::Toy) => "Toys",
            ItemFilter::Only(ItemType::Customization) => "Customization",
        }
    }

    #[must_use]
    pub fn matches(self, entry: &InventoryEntry) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Only(ty) => entry.item.item_type == ty,
        }
    }

    /// Positions of the entries this filter keeps, in list order.
    #[must_use]
    pub fn select(self, entries: &[InventoryEntry]) -> Vec<usize> {
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.matches(entry))
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl fmt::Display for ItemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemFilter::All => f.write_str("ALL"),
            ItemFilter::Only(ty) => f.write_str(ty.as_str()),
        }
    }
}

impl FromStr for ItemFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(ItemFilter::All);
        }
        // Accept the plural button captions too ("treats", "toys").
        let normalized = s.to_ascii_uppercase();
        let singular = normalized.strip_suffix('S').unwrap_or(&normalized);
        ItemType::parse(&normalized)
            .or_else(|_| ItemType::parse(singular))
            .map(ItemFilter::Only)
            .map_err(|_| DomainError::UnknownVariant {
                kind: "item filter",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::ItemId;

    fn entry(id: &str, ty: ItemType) -> InventoryEntry {
        InventoryEntry {
            id: InventoryId::new(id),
            item: PetItem {
                id: ItemId::new(format!("item-{id}")),
                name: id.to_string(),
                description: String::new(),
                item_type: ty,
                cost: 1,
                stat_effect: None,
                effect_value: None,
                equipment_slot: None,
                image_url: None,
            },
            quantity: 1,
        }
    }

    fn sample() -> Vec<InventoryEntry> {
        vec![
            entry("apple", ItemType::Food),
            entry("hat", ItemType::Customization),
            entry("candy", ItemType::Treat),
            entry("steak", ItemType::Food),
        ]
    }

    #[test]
    fn all_keeps_every_entry_in_order() {
        assert_eq!(ItemFilter::All.select(&sample()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn type_filter_keeps_exactly_matching_entries() {
        let entries = sample();
        for ty in ItemType::ALL {
            let kept = ItemFilter::Only(*ty).select(&entries);
            let expected: Vec<usize> = (0..entries.len())
                .filter(|&i| entries[i].item.item_type == *ty)
                .collect();
            assert_eq!(kept, expected, "filter {ty}");
        }
    }

    #[test]
    fn toy_filter_on_toyless_inventory_is_empty() {
        assert!(ItemFilter::Only(ItemType::Toy).select(&sample()).is_empty());
    }

    #[test]
    fn parses_captions_and_type_names() {
        assert_eq!("all".parse::<ItemFilter>().unwrap(), ItemFilter::All);
        assert_eq!(
            "treats".parse::<ItemFilter>().unwrap(),
            ItemFilter::Only(ItemType::Treat)
        );
        assert_eq!(
            "CUSTOMIZATION".parse::<ItemFilter>().unwrap(),
            ItemFilter::Only(ItemType::Customization)
        );
        assert!("weapons".parse::<ItemFilter>().is_err());
    }

    #[test]
    fn button_labels_follow_display_order() {
        let labels: Vec<_> = ItemFilter::BUTTONS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Food", "Treats", "Toys", "Customization"]);
    }
}
