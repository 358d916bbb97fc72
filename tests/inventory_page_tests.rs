mod harness;
mod support;

use habitpet::application::inventory::{
    CardAction, InventoryPage, InventoryView, PetUpdates, EMPTY_MESSAGE, EQUIP_FALLBACK,
    EQUIP_SUCCESS, FETCH_ERROR, USE_FALLBACK, USE_SUCCESS,
};
use habitpet::domain::{InventoryId, ItemFilter, ItemType};
use habitpet::error::Error;

use harness::recording_alerter::RecordingAlerter;
use harness::scripted_api::ScriptedPetApi;
use support::fixtures::{entry, mixed_inventory};

type Page = InventoryPage<ScriptedPetApi, RecordingAlerter>;

fn page(api: &ScriptedPetApi, alerter: &RecordingAlerter) -> Page {
    InventoryPage::new(api.clone(), alerter.clone(), PetUpdates::new())
}

fn card_names(view: &InventoryView) -> Vec<String> {
    match view {
        InventoryView::Ready { cards, .. } => cards.iter().map(|c| c.name.clone()).collect(),
        other => panic!("expected a ready view, got {other:?}"),
    }
}

fn inventory_fetches(api: &ScriptedPetApi) -> usize {
    api.calls().iter().filter(|c| *c == "inventory").count()
}

#[tokio::test]
async fn starts_loading_then_shows_everything() {
    let api = ScriptedPetApi::new();
    api.push_inventory(mixed_inventory());
    let alerter = RecordingAlerter::new();
    let mut page = page(&api, &alerter);

    assert!(page.is_loading());
    assert_eq!(page.render(), InventoryView::Loading);
    assert_eq!(page.filter(), ItemFilter::All);

    page.mount().await;

    assert!(!page.is_loading());
    assert_eq!(page.error(), None);
    let view = page.render();
    assert_eq!(card_names(&view), vec!["Apple", "Candy", "Ball", "Top Hat"]);
    let InventoryView::Ready { filters, cards } = view else {
        unreachable!()
    };
    assert_eq!(filters.len(), 5);
    assert!(filters[0].active && filters.iter().skip(1).all(|b| !b.active));
    assert_eq!(cards[3].action, CardAction::Equip);
    assert!(cards[..3].iter().all(|c| c.action == CardAction::Use));
    assert!(alerter.alerts().is_empty());
}

#[tokio::test]
async fn filters_select_exactly_one_type_without_refetching() {
    let api = ScriptedPetApi::new();
    api.push_inventory(mixed_inventory());
    let mut page = page(&api, &RecordingAlerter::new());
    page.mount().await;

    let expected = [
        (ItemType::Food, "Apple"),
        (ItemType::Treat, "Candy"),
        (ItemType::Toy, "Ball"),
        (ItemType::Customization, "Top Hat"),
    ];
    for (ty, name) in expected {
        page.set_filter(ItemFilter::Only(ty));
        assert_eq!(card_names(&page.render()), vec![name], "filter {ty}");
    }

    page.set_filter(ItemFilter::All);
    assert_eq!(page.visible().count(), 4);
    assert_eq!(inventory_fetches(&api), 1);
}

#[tokio::test]
async fn empty_match_points_to_the_shop() {
    let api = ScriptedPetApi::new();
    api.push_inventory(vec![entry("inv-apple", "Apple", ItemType::Food, 1)]);
    let mut page = page(&api, &RecordingAlerter::new());
    page.mount().await;

    page.set_filter(ItemFilter::Only(ItemType::Toy));

    let view = page.render();
    assert!(card_names(&view).is_empty());
    assert!(view.to_string().ends_with(EMPTY_MESSAGE));
    assert!(view.to_string().contains("[*Toys]"));
}

#[tokio::test]
async fn fetch_failure_shows_the_error_message() {
    let api = ScriptedPetApi::new();
    api.push_inventory_error(Error::Connection("refused".into()));
    let mut page = page(&api, &RecordingAlerter::new());

    page.mount().await;

    assert!(!page.is_loading());
    assert_eq!(page.error(), Some(FETCH_ERROR));
    assert_eq!(page.render(), InventoryView::Failed(FETCH_ERROR.into()));
    assert!(page.inventory().is_empty());
}

#[tokio::test]
async fn successful_use_alerts_and_refetches_on_sync() {
    let api = ScriptedPetApi::new();
    api.push_inventory(mixed_inventory())
        .push_action_ok()
        .push_inventory(vec![entry("inv-apple", "Apple", ItemType::Food, 2)]);
    let alerter = RecordingAlerter::new();
    let mut page = page(&api, &alerter);
    page.mount().await;

    let outcome = page.use_item(&InventoryId::new("inv-apple")).await;

    assert!(outcome.succeeded);
    assert_eq!(alerter.alerts(), vec![USE_SUCCESS]);
    assert_eq!(page.updates().revision(), 1);

    assert!(page.sync().await);
    assert_eq!(page.inventory().len(), 1);
    assert_eq!(page.inventory()[0].quantity, 2);
    assert!(!page.sync().await);
    assert_eq!(inventory_fetches(&api), 2);
    assert!(api.calls().contains(&"use inv-apple".to_string()));
}

#[tokio::test]
async fn failed_use_shows_the_server_message_and_keeps_the_list() {
    let api = ScriptedPetApi::new();
    api.push_inventory(mixed_inventory()).push_action_failure(
        400,
        Some("This item cannot be used. Try equipping it instead."),
    );
    let alerter = RecordingAlerter::new();
    let mut page = page(&api, &alerter);
    page.mount().await;

    let outcome = page.use_item(&InventoryId::new("inv-hat")).await;

    assert!(!outcome.succeeded);
    assert_eq!(
        alerter.last().as_deref(),
        Some("Error: This item cannot be used. Try equipping it instead.")
    );
    assert_eq!(page.updates().revision(), 0);
    assert!(!page.sync().await);
    assert_eq!(page.inventory().len(), 4);
}

#[tokio::test]
async fn failures_without_a_message_use_the_fallback() {
    let api = ScriptedPetApi::new();
    api.push_inventory(mixed_inventory())
        .push_action_failure(502, None)
        .push_action_failure(500, None);
    let alerter = RecordingAlerter::new();
    let mut page = page(&api, &alerter);
    page.mount().await;

    page.use_item(&InventoryId::new("inv-apple")).await;
    page.equip_item(&InventoryId::new("inv-hat")).await;

    assert_eq!(
        alerter.alerts(),
        vec![
            format!("Error: {USE_FALLBACK}"),
            format!("Error: {EQUIP_FALLBACK}"),
        ]
    );
}

#[tokio::test]
async fn activate_equips_customizations_and_uses_the_rest() {
    let api = ScriptedPetApi::new();
    api.push_inventory(mixed_inventory())
        .push_action_ok()
        .push_action_ok();
    let alerter = RecordingAlerter::new();
    let mut page = page(&api, &alerter);
    page.mount().await;

    page.activate(&InventoryId::new("inv-hat")).await;
    page.activate(&InventoryId::new("inv-ball")).await;

    let calls = api.calls();
    assert!(calls.contains(&"equip inv-hat".to_string()));
    assert!(calls.contains(&"use inv-ball".to_string()));
    assert_eq!(alerter.alerts(), vec![EQUIP_SUCCESS, USE_SUCCESS]);
}

#[tokio::test]
async fn a_later_successful_fetch_clears_the_error() {
    let api = ScriptedPetApi::new();
    api.push_inventory_error(Error::Connection("refused".into()))
        .push_action_ok()
        .push_inventory(mixed_inventory());
    let mut page = page(&api, &RecordingAlerter::new());
    page.mount().await;
    assert_eq!(page.error(), Some(FETCH_ERROR));

    page.use_item(&InventoryId::new("inv-apple")).await;
    page.sync().await;

    assert_eq!(page.error(), None);
    assert_eq!(page.visible().count(), 4);
}

#[tokio::test]
async fn pages_sharing_updates_refetch_after_each_others_actions() {
    let updates = PetUpdates::new();
    let shop_api = ScriptedPetApi::new();
    shop_api.push_inventory(mixed_inventory()).push_action_ok();
    let list_api = ScriptedPetApi::new();
    list_api
        .push_inventory(mixed_inventory())
        .push_inventory(vec![entry("inv-apple", "Apple", ItemType::Food, 3)]);

    let mut acting = InventoryPage::new(shop_api, RecordingAlerter::new(), updates.clone());
    let mut watching = InventoryPage::new(list_api.clone(), RecordingAlerter::new(), updates);
    acting.mount().await;
    watching.mount().await;

    assert!(!watching.sync().await);
    acting.use_item(&InventoryId::new("inv-candy")).await;
    assert!(watching.sync().await);

    assert_eq!(watching.inventory().len(), 1);
    assert_eq!(inventory_fetches(&list_api), 2);
}
