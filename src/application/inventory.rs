//! Inventory page view model.
//!
//! The page fetches the signed-in user's inventory once when mounted and
//! again whenever the shared [`PetUpdates`] revision moves. Filtering is
//! local: switching filters never touches the network.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::{InventoryEntry, InventoryId, ItemFilter, ItemType};
use crate::port::outbound::alert::Alerter;
use crate::port::outbound::api::PetApi;

pub const LOADING_MESSAGE: &str = "Loading inventory...";
pub const FETCH_ERROR: &str = "Failed to fetch inventory.";
pub const EMPTY_MESSAGE: &str =
    "No items of this type in your inventory. Visit the shop to get new items!";
pub const USE_SUCCESS: &str = "Item used successfully!";
pub const USE_FALLBACK: &str = "Could not use item.";
pub const EQUIP_SUCCESS: &str = "Item equipped successfully!";
pub const EQUIP_FALLBACK: &str = "Could not equip item.";

/// Shared "the pet changed" signal.
///
/// Every successful action bumps the revision; pages holding a
/// subscription refetch on their next [`InventoryPage::sync`].
#[derive(Clone)]
pub struct PetUpdates {
    tx: Arc<watch::Sender<u64>>,
}

impl PetUpdates {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn notify(&self) {
        self.tx.send_modify(|revision| *revision += 1);
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.tx.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl Default for PetUpdates {
    fn default() -> Self {
        Self::new()
    }
}

/// What a card's button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Use,
    Equip,
}

impl CardAction {
    #[must_use]
    pub fn for_type(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Customization => CardAction::Equip,
            _ => CardAction::Use,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CardAction::Use => "Use",
            CardAction::Equip => "Equip",
        }
    }
}

/// One rendered inventory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: InventoryId,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub action: CardAction,
}

impl From<&InventoryEntry> for ItemCard {
    fn from(entry: &InventoryEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.item.name.clone(),
            description: entry.item.description.clone(),
            quantity: entry.quantity,
            image_url: entry.item.image_url.clone(),
            action: CardAction::for_type(entry.item.item_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: ItemFilter,
    pub active: bool,
}

/// Rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryView {
    Loading,
    Failed(String),
    Ready {
        filters: Vec<FilterButton>,
        /// Empty when nothing matches the active filter.
        cards: Vec<ItemCard>,
    },
}

impl fmt::Display for InventoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryView::Loading => f.write_str(LOADING_MESSAGE),
            InventoryView::Failed(message) => f.write_str(message),
            InventoryView::Ready { filters, cards } => {
                writeln!(f, "My Inventory")?;
                let buttons: Vec<String> = filters
                    .iter()
                    .map(|b| {
                        if b.active {
                            format!("[*{}]", b.filter.label())
                        } else {
                            format!("[{}]", b.filter.label())
                        }
                    })
                    .collect();
                write!(f, "{}", buttons.join(" "))?;
                if cards.is_empty() {
                    return write!(f, "\n{EMPTY_MESSAGE}");
                }
                for card in cards {
                    write!(
                        f,
                        "\n{} (x{}) [{}] {}",
                        card.name,
                        card.quantity,
                        card.action.label(),
                        card.id
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Result of a use/equip click: the alert that was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub succeeded: bool,
    pub alert: String,
}

/// Inventory page state and actions.
pub struct InventoryPage<A, N> {
    api: A,
    alerter: N,
    updates: PetUpdates,
    revision: watch::Receiver<u64>,
    loading: bool,
    error: Option<String>,
    inventory: Vec<InventoryEntry>,
    filter: ItemFilter,
    visible: Vec<usize>,
}

impl<A: PetApi, N: Alerter> InventoryPage<A, N> {
    /// A page in its initial state: loading, no error, empty, showing all.
    pub fn new(api: A, alerter: N, updates: PetUpdates) -> Self {
        let revision = updates.subscribe();
        Self {
            api,
            alerter,
            updates,
            revision,
            loading: true,
            error: None,
            inventory: Vec::new(),
            filter: ItemFilter::All,
            visible: Vec::new(),
        }
    }

    /// First fetch after the page appears.
    pub async fn mount(&mut self) {
        self.revision.borrow_and_update();
        self.fetch().await;
    }

    /// Refetch if the pet changed since the last fetch. Returns whether a
    /// fetch happened.
    pub async fn sync(&mut self) -> bool {
        if !self.revision.has_changed().unwrap_or(false) {
            return false;
        }
        self.revision.borrow_and_update();
        self.fetch().await;
        true
    }

    async fn fetch(&mut self) {
        self.loading = true;
        match self.api.inventory().await {
            Ok(entries) => {
                debug!(count = entries.len(), "Inventory fetched");
                self.inventory = entries;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Inventory fetch failed");
                self.error = Some(FETCH_ERROR.to_string());
            }
        }
        self.loading = false;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = self.filter.select(&self.inventory);
    }

    pub fn set_filter(&mut self, filter: ItemFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.refilter();
        }
    }

    #[must_use]
    pub fn filter(&self) -> ItemFilter {
        self.filter
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.inventory
    }

    /// Entries passing the active filter, in fetch order.
    pub fn visible(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.visible.iter().map(|&idx| &self.inventory[idx])
    }

    #[must_use]
    pub fn updates(&self) -> &PetUpdates {
        &self.updates
    }

    /// Consume one unit of an inventory row.
    pub async fn use_item(&mut self, entry: &InventoryId) -> ActionOutcome {
        let result = self.api.use_item(entry).await.map(|_| ());
        self.finish(result, USE_SUCCESS, USE_FALLBACK)
    }

    /// Equip the customization item of an inventory row.
    pub async fn equip_item(&mut self, entry: &InventoryId) -> ActionOutcome {
        let result = self.api.equip_item(entry).await.map(|_| ());
        self.finish(result, EQUIP_SUCCESS, EQUIP_FALLBACK)
    }

    /// Run the card action matching the row's item type.
    pub async fn activate(&mut self, entry: &InventoryId) -> ActionOutcome {
        let action = self
            .inventory
            .iter()
            .find(|e| &e.id == entry)
            .map_or(CardAction::Use, |e| CardAction::for_type(e.item.item_type));
        match action {
            CardAction::Use => self.use_item(entry).await,
            CardAction::Equip => self.equip_item(entry).await,
        }
    }

    fn finish(
        &self,
        result: crate::error::Result<()>,
        success: &str,
        fallback: &str,
    ) -> ActionOutcome {
        let outcome = match result {
            Ok(()) => ActionOutcome {
                succeeded: true,
                alert: success.to_string(),
            },
            Err(e) => {
                warn!(error = %e, "Inventory action failed");
                ActionOutcome {
                    succeeded: false,
                    alert: format!("Error: {}", e.server_message().unwrap_or(fallback)),
                }
            }
        };
        self.alerter.alert(&outcome.alert);
        if outcome.succeeded {
            self.updates.notify();
        }
        outcome
    }

    #[must_use]
    pub fn render(&self) -> InventoryView {
        if self.loading {
            return InventoryView::Loading;
        }
        if let Some(error) = &self.error {
            return InventoryView::Failed(error.clone());
        }
        let filters = ItemFilter::BUTTONS
            .into_iter()
            .map(|filter| FilterButton {
                filter,
                active: filter == self.filter,
            })
            .collect();
        let cards = self.visible().map(ItemCard::from).collect();
        InventoryView::Ready { filters, cards }
    }
}
