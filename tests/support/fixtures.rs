use habitpet::domain::{
    EquipmentSlot, InventoryEntry, InventoryId, ItemId, ItemType, PetItem, PetStat,
};

pub fn item(name: &str, item_type: ItemType) -> PetItem {
    let customization = item_type == ItemType::Customization;
    PetItem {
        id: ItemId::new(format!("item-{}", name.to_lowercase().replace(' ', "-"))),
        name: name.to_string(),
        description: format!("{name} for testing."),
        item_type,
        cost: 10,
        stat_effect: (!customization).then_some(PetStat::Hunger),
        effect_value: (!customization).then_some(10),
        equipment_slot: customization.then_some(EquipmentSlot::Hat),
        image_url: None,
    }
}

pub fn entry(id: &str, name: &str, item_type: ItemType, quantity: i32) -> InventoryEntry {
    InventoryEntry {
        id: InventoryId::new(id),
        item: item(name, item_type),
        quantity,
    }
}

/// Apple x3, Candy x1, Ball x2 and a Top Hat.
pub fn mixed_inventory() -> Vec<InventoryEntry> {
    vec![
        entry("inv-apple", "Apple", ItemType::Food, 3),
        entry("inv-candy", "Candy", ItemType::Treat, 1),
        entry("inv-ball", "Ball", ItemType::Toy, 2),
        entry("inv-hat", "Top Hat", ItemType::Customization, 1),
    ]
}
