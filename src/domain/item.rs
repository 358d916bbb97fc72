//! The pet item catalog.

use serde::{Deserialize, Serialize};

use super::id::ItemId;

text_enum!(
    /// What kind of item a catalog entry is; drives Use vs Equip.
    ItemType, "item type" {
        Food => "FOOD",
        Treat => "TREAT",
        Toy => "TOY",
        Customization => "CUSTOMIZATION",
    }
);

text_enum!(
    /// Pet stat a consumable item raises.
    PetStat, "pet stat" {
        Hunger => "HUNGER",
        Happiness => "HAPPINESS",
        Energy => "ENERGY",
    }
);

text_enum!(
    /// Where a customization item sits on the pet.
    EquipmentSlot, "equipment slot" {
        Hat => "HAT",
        Glasses => "GLASSES",
        Background => "BACKGROUND",
    }
);

/// A catalog entry, purchasable with gold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub cost: i32,
    pub stat_effect: Option<PetStat>,
    pub effect_value: Option<i32>,
    pub equipment_slot: Option<EquipmentSlot>,
    pub image_url: Option<String>,
}

impl PetItem {
    /// Consumables are everything that is not a customization.
    #[must_use]
    pub fn is_consumable(&self) -> bool {
        self.item_type != ItemType::Customization
    }

    /// The slot this item occupies when equipped, if it can be equipped.
    #[must_use]
    pub fn equip_slot(&self) -> Option<EquipmentSlot> {
        match self.item_type {
            ItemType::Customization => self.equipment_slot,
            _ => None,
        }
    }
}

/// Catalog entry before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPetItem {
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub cost: i32,
    pub stat_effect: Option<PetStat>,
    pub effect_value: Option<i32>,
    pub equipment_slot: Option<EquipmentSlot>,
    pub image_url: Option<String>,
}

impl NewPetItem {
    /// A consumable that raises `stat` by `value`.
    pub fn consumable(
        name: impl Into<String>,
        description: impl Into<String>,
        item_type: ItemType,
        cost: i32,
        stat: PetStat,
        value: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            item_type,
            cost,
            stat_effect: Some(stat),
            effect_value: Some(value),
            equipment_slot: None,
            image_url: None,
        }
    }

    /// A customization item worn in `slot`.
    pub fn customization(
        name: impl Into<String>,
        description: impl Into<String>,
        cost: i32,
        slot: EquipmentSlot,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            item_type: ItemType::Customization,
            cost,
            stat_effect: None,
            effect_value: None,
            equipment_slot: Some(slot),
            image_url: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
