use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use habitpet::domain::{
    EquipmentSlot, EquippedId, EquippedItem, InventoryEntry, InventoryId, ItemId, ItemType, Pet,
    PetId, PetItem, PetStats, PetView, Profile, Purchase, UserId,
};
use habitpet::error::{ApiError, Error, Result};
use habitpet::port::outbound::api::PetApi;

#[derive(Default)]
struct Script {
    inventories: VecDeque<Result<Vec<InventoryEntry>>>,
    actions: VecDeque<Result<()>>,
    calls: Vec<String>,
}

/// Pet API double that replays queued responses and records calls.
///
/// Clones share the script, so a test can keep one handle after moving
/// another into a page.
#[derive(Clone, Default)]
pub struct ScriptedPetApi {
    script: Arc<Mutex<Script>>,
}

impl ScriptedPetApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_inventory(&self, entries: Vec<InventoryEntry>) -> &Self {
        self.lock().inventories.push_back(Ok(entries));
        self
    }

    pub fn push_inventory_error(&self, err: Error) -> &Self {
        self.lock().inventories.push_back(Err(err));
        self
    }

    pub fn push_action_ok(&self) -> &Self {
        self.lock().actions.push_back(Ok(()));
        self
    }

    /// Queue a failed use/equip, as the REST client would report it.
    pub fn push_action_failure(&self, status: u16, message: Option<&str>) -> &Self {
        self.lock().actions.push_back(Err(ApiError {
            status,
            message: message.map(str::to_string),
        }
        .into()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().expect("lock script")
    }

    fn next_action(&self, call: String) -> Result<()> {
        let mut script = self.lock();
        script.calls.push(call);
        script
            .actions
            .pop_front()
            .unwrap_or_else(|| Err(Error::Connection("no scripted action".into())))
    }
}

fn user_id() -> UserId {
    UserId::new("user-1")
}

fn pet() -> Pet {
    Pet {
        id: PetId::new("pet-1"),
        user_id: user_id(),
        name: "alice's Pet".into(),
        stats: PetStats::default(),
    }
}

#[async_trait]
impl PetApi for ScriptedPetApi {
    async fn profile(&self) -> Result<Profile> {
        self.lock().calls.push("profile".into());
        Ok(Profile {
            id: user_id(),
            email: "alice@example.com".into(),
            username: "alice".into(),
            gold: 500,
            gems: 10,
        })
    }

    async fn pet(&self) -> Result<PetView> {
        self.lock().calls.push("pet".into());
        Ok(PetView {
            pet: pet(),
            equipped: Vec::new(),
        })
    }

    async fn inventory(&self) -> Result<Vec<InventoryEntry>> {
        let mut script = self.lock();
        script.calls.push("inventory".into());
        script
            .inventories
            .pop_front()
            .unwrap_or_else(|| Err(Error::Connection("no scripted inventory".into())))
    }

    async fn use_item(&self, entry: &InventoryId) -> Result<Pet> {
        self.next_action(format!("use {entry}")).map(|()| pet())
    }

    async fn equip_item(&self, entry: &InventoryId) -> Result<EquippedItem> {
        self.next_action(format!("equip {entry}")).map(|()| EquippedItem {
            id: EquippedId::new("equipped-1"),
            slot: EquipmentSlot::Hat,
            item: PetItem {
                id: ItemId::new("item-hat"),
                name: "Top Hat".into(),
                description: String::new(),
                item_type: ItemType::Customization,
                cost: 100,
                stat_effect: None,
                effect_value: None,
                equipment_slot: Some(EquipmentSlot::Hat),
                image_url: None,
            },
        })
    }

    async fn catalog(&self) -> Result<Vec<PetItem>> {
        self.lock().calls.push("catalog".into());
        Ok(Vec::new())
    }

    async fn buy(&self, item: &ItemId) -> Result<Purchase> {
        self.lock().calls.push(format!("buy {item}"));
        Err(Error::Connection("buying is not scripted".into()))
    }
}
