//! Handlers for `shop` and `buy`.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::{output, session};
use crate::domain::{DomainError, PetItem};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::api::PetApi;

#[derive(Tabled)]
struct ShopRow {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Type")]
    item_type: &'static str,
    #[tabled(rename = "Cost")]
    cost: i32,
    #[tabled(rename = "Effect")]
    effect: String,
}

impl From<&PetItem> for ShopRow {
    fn from(item: &PetItem) -> Self {
        let effect = match (item.stat_effect, item.effect_value, item.equip_slot()) {
            (Some(stat), Some(value), _) => format!("+{value} {}", stat.as_str().to_lowercase()),
            (_, _, Some(slot)) => format!("{} slot", slot.as_str().to_lowercase()),
            _ => String::new(),
        };
        Self {
            name: item.name.clone(),
            item_type: item.item_type.as_str(),
            cost: item.cost,
            effect,
        }
    }
}

/// Find a catalog entry by id, or by name ignoring case.
fn lookup<'a>(catalog: &'a [PetItem], wanted: &str) -> Option<&'a PetItem> {
    catalog
        .iter()
        .find(|item| item.id.as_str() == wanted)
        .or_else(|| {
            catalog
                .iter()
                .find(|item| item.name.eq_ignore_ascii_case(wanted.trim()))
        })
}

/// Execute `shop`.
pub async fn execute_list(config: &Config) -> Result<()> {
    let api = session::client(config)?;
    let catalog = api.catalog().await?;

    if output::is_json() {
        output::json_output(json!({ "command": "shop", "items": catalog }));
        return Ok(());
    }

    output::section("Item Shop");
    if catalog.is_empty() {
        output::note("The shop is empty.");
        return Ok(());
    }
    output::table(catalog.iter().map(ShopRow::from).collect());
    output::hint("run `habitpet buy <item>` with a name or id");
    Ok(())
}

/// Execute `buy`.
pub async fn execute_buy(config: &Config, wanted: &str) -> Result<()> {
    let api = session::client(config)?;
    let catalog = api.catalog().await?;
    let item = lookup(&catalog, wanted)
        .ok_or_else(|| DomainError::UnknownItem(wanted.to_string()))?;

    let purchase = api.buy(&item.id).await?;

    if output::is_json() {
        output::json_output(json!({ "command": "buy", "purchase": purchase }));
        return Ok(());
    }
    output::success(&format!("Bought {}", purchase.entry.item.name));
    output::field("Owned", purchase.entry.quantity);
    output::field("Gold", purchase.gold);
    Ok(())
}
