//! Pets, their stats and the items they wear.

use serde::{Deserialize, Serialize};

use super::id::{EquippedId, PetId, UserId};
use super::item::{EquipmentSlot, PetItem, PetStat};

/// Upper bound of every pet stat.
pub const STAT_MAX: i32 = 100;

/// Stat value a freshly adopted pet starts with.
pub const STAT_START: i32 = 50;

/// A pet's wellbeing meters, each in `0..=STAT_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetStats {
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
}

impl Default for PetStats {
    fn default() -> Self {
        Self {
            hunger: STAT_START,
            happiness: STAT_START,
            energy: STAT_START,
        }
    }
}

impl PetStats {
    #[must_use]
    pub fn get(&self, stat: PetStat) -> i32 {
        match stat {
            PetStat::Hunger => self.hunger,
            PetStat::Happiness => self.happiness,
            PetStat::Energy => self.energy,
        }
    }

    /// Add `delta` to `stat`, clamped to the stat range.
    pub fn apply(&mut self, stat: PetStat, delta: i32) {
        let slot = match stat {
            PetStat::Hunger => &mut self.hunger,
            PetStat::Happiness => &mut self.happiness,
            PetStat::Energy => &mut self.energy,
        };
        *slot = slot.saturating_add(delta).clamp(0, STAT_MAX);
    }
}

/// A user's pet. Every user owns exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub user_id: UserId,
    pub name: String,
    #[serde(flatten)]
    pub stats: PetStats,
}

impl Pet {
    /// Consume `item`, applying its stat effect. Items without an effect
    /// leave the stats unchanged.
    pub fn feed(&mut self, item: &PetItem) {
        if let (Some(stat), Some(value)) = (item.stat_effect, item.effect_value) {
            self.stats.apply(stat, value);
        }
    }
}

/// A customization item occupying one of a pet's slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub id: EquippedId,
    pub slot: EquipmentSlot,
    pub item: PetItem,
}

/// A pet together with everything it wears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetView {
    #[serde(flatten)]
    pub pet: Pet,
    pub equipped: Vec<EquippedItem>,
}

impl PetView {
    /// The item worn in `slot`, if any.
    #[must_use]
    pub fn worn(&self, slot: EquipmentSlot) -> Option<&EquippedItem> {
        self.equipped.iter().find(|e| e.slot == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::ItemId;
    use crate::domain::item::ItemType;

    fn food(value: i32) -> PetItem {
        PetItem {
            id: ItemId::new("steak"),
            name: "Steak".into(),
            description: String::new(),
            item_type: ItemType::Food,
            cost: 15,
            stat_effect: Some(PetStat::Hunger),
            effect_value: Some(value),
            equipment_slot: None,
            image_url: None,
        }
    }

    fn pet() -> Pet {
        Pet {
            id: PetId::new("p1"),
            user_id: UserId::new("u1"),
            name: "alice's Pet".into(),
            stats: PetStats::default(),
        }
    }

    #[test]
    fn feeding_raises_the_targeted_stat() {
        let mut pet = pet();
        pet.feed(&food(30));
        assert_eq!(pet.stats.hunger, 80);
        assert_eq!(pet.stats.happiness, STAT_START);
    }

    #[test]
    fn stats_clamp_at_the_ceiling() {
        let mut pet = pet();
        pet.feed(&food(30));
        pet.feed(&food(30));
        assert_eq!(pet.stats.hunger, STAT_MAX);
    }

    #[test]
    fn negative_effects_clamp_at_zero() {
        let mut stats = PetStats::default();
        stats.apply(PetStat::Energy, -500);
        assert_eq!(stats.get(PetStat::Energy), 0);
    }

    #[test]
    fn items_without_effect_do_nothing() {
        let mut pet = pet();
        let mut hat = food(10);
        hat.stat_effect = None;
        pet.feed(&hat);
        assert_eq!(pet.stats, PetStats::default());
    }

    #[test]
    fn pet_json_flattens_stats() {
        let json = serde_json::to_value(pet()).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["hunger"], STAT_START);
    }
}
