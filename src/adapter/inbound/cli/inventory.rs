//! Handlers for the pet pages: `inventory`, `pet`, `use` and `equip`.
//!
//! Each command drives the same view models a browser would: the header
//! from the signed-in profile and the inventory page over the REST client.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::InventoryArgs;
use crate::adapter::inbound::cli::{output, session};
use crate::adapter::outbound::alert::{ConsoleAlerter, LogAlerter};
use crate::api::HttpPetApi;
use crate::application::header::{Header, View};
use crate::application::inventory::{
    ActionOutcome, InventoryPage, InventoryView, ItemCard, PetUpdates,
};
use crate::domain::{EquipmentSlot, InventoryId, PetView};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::alert::Alerter;
use crate::port::outbound::api::PetApi;

type Page = InventoryPage<HttpPetApi, Box<dyn Alerter>>;

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: i32,
    #[tabled(rename = "Action")]
    action: &'static str,
}

impl From<&ItemCard> for CardRow {
    fn from(card: &ItemCard) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name.clone(),
            quantity: card.quantity,
            action: card.action.label(),
        }
    }
}

#[derive(Tabled)]
struct SlotRow {
    #[tabled(rename = "Slot")]
    slot: &'static str,
    #[tabled(rename = "Wearing")]
    item: String,
}

/// Alerts print on the terminal unless output is scripted or silenced.
fn alerter() -> Box<dyn Alerter> {
    if output::is_json() || output::is_quiet() {
        Box::new(LogAlerter)
    } else {
        Box::new(ConsoleAlerter::new(output::is_colored()))
    }
}

async fn open_page(config: &Config) -> Result<Page> {
    let api = session::client(config)?;
    let mut page = InventoryPage::new(api, alerter(), PetUpdates::new());
    page.mount().await;
    Ok(page)
}

/// Execute `inventory`.
pub async fn execute(config: &Config, args: &InventoryArgs) -> Result<()> {
    let api = session::client(config)?;
    let pb = output::spinner("Loading inventory");
    let user = match api.profile().await {
        Ok(user) => user,
        Err(e) => {
            output::spinner_fail(&pb, "Could not load your profile");
            return Err(e);
        }
    };

    let mut page = InventoryPage::new(api, alerter(), PetUpdates::new());
    page.mount().await;
    page.set_filter(args.filter);
    pb.finish_and_clear();

    // Navigation happens through other subcommands, so the header's buttons
    // are display-only here.
    let header = Header::new(&user, args.view, |_: View| {}, || {});
    let header_view = header.render();
    let rendered = page.render();

    if output::is_json() {
        let cards: Vec<_> = page.visible().cloned().collect();
        output::json_output(json!({
            "command": "inventory",
            "header": {
                "title": header_view.title,
                "view": args.view.key(),
                "currency": header_view.currency.map(|c| json!({ "gold": c.gold, "gems": c.gems })),
            },
            "filter": page.filter().to_string(),
            "error": page.error(),
            "items": cards,
        }));
        return page_result(&rendered);
    }

    output::lines(&header_view.to_string());
    print_page(&rendered);
    page_result(&rendered)
}

fn print_page(view: &InventoryView) {
    match view {
        InventoryView::Ready { filters, cards } if !cards.is_empty() => {
            output::section("My Inventory");
            let buttons: Vec<String> = filters
                .iter()
                .map(|b| {
                    if b.active {
                        output::highlight(format!("[{}]", b.filter.label()))
                    } else {
                        output::muted(format!("[{}]", b.filter.label()))
                    }
                })
                .collect();
            output::lines(&buttons.join(" "));
            output::table(cards.iter().map(CardRow::from).collect());
        }
        other => {
            output::lines("");
            output::lines(&other.to_string());
        }
    }
}

fn page_result(view: &InventoryView) -> Result<()> {
    match view {
        InventoryView::Failed(message) => Err(Error::Connection(message.clone())),
        _ => Ok(()),
    }
}

/// Execute `pet`.
pub async fn execute_pet(config: &Config) -> Result<()> {
    let api = session::client(config)?;
    let view = api.pet().await?;

    if output::is_json() {
        output::json_output(json!({ "command": "pet", "pet": view }));
        return Ok(());
    }
    print_pet(&view);
    Ok(())
}

fn print_pet(view: &PetView) {
    output::section(&view.pet.name);
    output::field("Hunger", view.pet.stats.hunger);
    output::field("Happiness", view.pet.stats.happiness);
    output::field("Energy", view.pet.stats.energy);

    let rows = EquipmentSlot::ALL
        .iter()
        .map(|&slot| SlotRow {
            slot: slot.as_str(),
            item: view
                .worn(slot)
                .map_or_else(|| output::muted("-"), |e| e.item.name.clone()),
        })
        .collect();
    output::table(rows);
}

/// Execute `use`.
pub async fn execute_use(config: &Config, id: &str) -> Result<()> {
    let mut page = open_page(config).await?;
    let outcome = page.use_item(&InventoryId::new(id)).await;
    report(&mut page, "use", id, &outcome).await
}

/// Execute `equip`.
pub async fn execute_equip(config: &Config, id: &str) -> Result<()> {
    let mut page = open_page(config).await?;
    let outcome = page.equip_item(&InventoryId::new(id)).await;
    report(&mut page, "equip", id, &outcome).await
}

async fn report(page: &mut Page, command: &str, id: &str, outcome: &ActionOutcome) -> Result<()> {
    // A successful action bumps the pet revision; pick up the new quantities.
    page.sync().await;
    let remaining = page
        .inventory()
        .iter()
        .find(|e| e.id.as_str() == id)
        .map_or(0, |e| e.quantity);

    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "id": id,
            "succeeded": outcome.succeeded,
            "alert": outcome.alert,
            "remaining": remaining,
        }));
        return Ok(());
    }
    if outcome.succeeded {
        output::field("Remaining", remaining);
    }
    Ok(())
}
