//! Database seeding.
//!
//! Populates the catalog, public challenges and two example accounts with
//! some history. Reference data is matched by unique name, so running the
//! seeder again adds nothing. Back-dated logs are written only when alice's
//! account is new and group chat only when the group is. Her starting items
//! are granted whenever she lacks the Top Hat, so a run that stopped between
//! creating her account and granting them is completed by the next one.

pub mod data;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::info;

use self::data::SeedUser;
use crate::application::auth::PasswordHasher;
use crate::domain::{
    Challenge, DailyId, DomainError, EquipmentSlot, GroupMessage, HabitId, NewAccount, NewPetItem,
    PetItem, Profile, UserGroupRole,
};
use crate::error::Result;
use crate::port::outbound::store::{PetStore, SeedStore};

/// What a seeding run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub items_created: usize,
    pub challenges_created: usize,
    pub users_created: Vec<String>,
    pub group_created: bool,
    pub memberships_added: usize,
    pub messages_posted: usize,
    pub challenge_joins: usize,
}

/// Writes the fixture data through the store ports.
pub struct Seeder<'a, S> {
    store: &'a S,
    hasher: PasswordHasher,
    now: DateTime<Utc>,
    catalog: Vec<NewPetItem>,
}

impl<'a, S: SeedStore + PetStore> Seeder<'a, S> {
    pub fn new(store: &'a S, hasher: PasswordHasher) -> Self {
        Self {
            store,
            hasher,
            now: Utc::now(),
            catalog: data::pet_items(),
        }
    }

    /// Pin the clock that back-dated logs are measured from.
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Seed `items` instead of the standard catalog. Alice's starting
    /// items must be among them.
    #[must_use]
    pub fn with_catalog(mut self, items: Vec<NewPetItem>) -> Self {
        self.catalog = items;
        self
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first store or hashing error. Steps already applied stay
    /// applied.
    pub async fn run(&self) -> Result<SeedReport> {
        info!("Starting the seeding process");
        let mut report = SeedReport::default();

        info!("Seeding pet items");
        let items = self.seed_items(&mut report).await?;

        info!("Seeding public challenges");
        let challenges = self.seed_challenges(&mut report).await?;

        info!(user = "alice", "Seeding user");
        let (alice, alice_created) = self.seed_user(data::alice(), &mut report).await?;

        info!(user = "bob", "Seeding user");
        let (bob, _) = self.seed_user(data::bob(), &mut report).await?;

        if alice_created {
            info!("Seeding historical logs for alice");
            self.seed_logs(&alice).await?;
        } else {
            info!("alice already existed, keeping her logs");
        }

        let top_hat = find_item(&items, data::TOP_HAT)?;
        if self.holds(&alice, top_hat).await? {
            info!("alice already has her starting items");
        } else {
            info!("Seeding inventory for alice");
            let apple = find_item(&items, data::APPLE)?;
            self.store.grant_item(&alice.id, &apple.id, 3).await?;

            info!("Equipping Top Hat on alice's pet");
            let pet = self.store.pet(&alice.id).await?;
            self.store
                .equip_on_pet(&pet.pet.id, &top_hat.id, EquipmentSlot::Hat)
                .await?;
            // Granted last: owning the hat marks the whole step as done.
            self.store.grant_item(&alice.id, &top_hat.id, 1).await?;
        }

        info!("Seeding groups and memberships");
        let group = self
            .store
            .upsert_group(data::GROUP_NAME, data::GROUP_DESCRIPTION, &alice.id)
            .await?;
        report.group_created = group.created;
        if self
            .store
            .join_group(&group.value.id, &bob.id, UserGroupRole::Member)
            .await?
        {
            report.memberships_added += 1;
        }

        if group.created {
            info!("Seeding group messages");
            let messages = [
                GroupMessage::new(alice.id.clone(), "Hey everyone, welcome to the group!"),
                GroupMessage::new(bob.id.clone(), "Glad to be here!"),
            ];
            report.messages_posted = self.store.post_messages(&group.value.id, &messages).await?;
        }

        info!("Seeding challenge participations");
        for (challenge, user) in challenges.iter().zip([&alice, &bob]) {
            if self.store.join_challenge(&challenge.id, &user.id).await? {
                report.challenge_joins += 1;
            }
        }

        info!(
            items = report.items_created,
            challenges = report.challenges_created,
            users = report.users_created.len(),
            "Seeding finished successfully"
        );
        Ok(report)
    }

    async fn seed_items(&self, report: &mut SeedReport) -> Result<Vec<PetItem>> {
        let mut items = Vec::new();
        for item in &self.catalog {
            let upserted = self.store.upsert_item(item).await?;
            if upserted.created {
                report.items_created += 1;
            }
            items.push(upserted.value);
        }
        Ok(items)
    }

    async fn seed_challenges(&self, report: &mut SeedReport) -> Result<Vec<Challenge>> {
        let mut challenges = Vec::new();
        for challenge in data::challenges() {
            let upserted = self.store.find_or_create_challenge(&challenge).await?;
            if upserted.created {
                report.challenges_created += 1;
            }
            challenges.push(upserted.value);
        }
        Ok(challenges)
    }

    async fn seed_user(&self, user: SeedUser, report: &mut SeedReport) -> Result<(Profile, bool)> {
        let hash = self.hasher.hash(data::DEFAULT_PASSWORD)?;
        let account = NewAccount::new(user.email, user.username, hash, user.tasks);
        let upserted = self.store.upsert_account(&account).await?;
        if upserted.created {
            report.users_created.push(upserted.value.username.clone());
        }
        Ok((upserted.value, upserted.created))
    }

    /// Whether `user` owns a stack of `item`. Customization items are never
    /// consumed, so a missing Top Hat means the starting grant never ran.
    async fn holds(&self, user: &Profile, item: &PetItem) -> Result<bool> {
        let inventory = self.store.inventory(&user.id).await?;
        Ok(inventory.iter().any(|entry| entry.item.id == item.id))
    }

    async fn seed_logs(&self, user: &Profile) -> Result<()> {
        let habit = HabitId::new(data::EXERCISE_HABIT);
        let daily = DailyId::new(data::MEDITATION_DAILY);
        for days in [2, 1] {
            self.store
                .record_habit_log(&user.id, &habit, self.now - Duration::days(days))
                .await?;
        }
        self.store
            .record_daily_log(
                &user.id,
                &daily,
                self.now - Duration::days(1),
                Some(data::DAILY_LOG_NOTE),
            )
            .await
    }
}

fn find_item<'i>(items: &'i [PetItem], name: &str) -> Result<&'i PetItem> {
    items
        .iter()
        .find(|item| item.name == name)
        .ok_or_else(|| DomainError::UnknownItem(name.to_string()).into())
}
