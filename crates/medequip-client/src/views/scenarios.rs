//! End-to-end view flows against the recording transport.

use reqwest::Method;

use super::{inventory, items};
use super::{InventoryView, ItemCommand, ItemField, ItemsView, NoticeKind};
use crate::api::ApiClient;
use crate::format::StockBadge;
use crate::models::Item;
use crate::testing::{item, record, MockTransport};

fn xray() -> Item {
    item(5, "X-Ray Unit", "X-Ray Machine", 50000.0)
}

async fn reload_items(view: &mut ItemsView, api: &ApiClient<MockTransport>) {
    view.load_started();
    let result = items::fetch(api).await;
    view.load_finished(result);
}

async fn reload_inventory(view: &mut InventoryView, api: &ApiClient<MockTransport>) {
    view.load_started();
    let result = inventory::fetch(api).await;
    view.load_finished(result);
}

#[tokio::test]
async fn test_create_item_shows_zero_stock() {
    let mock = MockTransport::new();
    let api = mock.client();
    mock.respond_json(Method::GET, "/items", &Vec::<Item>::new());
    mock.respond(Method::GET, "/inventory", 200, "[]");

    let mut view = ItemsView::new();
    reload_items(&mut view, &api).await;
    assert!(view.rows().is_empty());

    view.open_create();
    view.set_field(ItemField::Name, "X-Ray Unit".into());
    view.set_field(ItemField::ItemType, "X-Ray Machine".into());
    view.set_field(ItemField::Cost, "50000".into());
    let cmd = view.prepare_submit().unwrap();

    mock.respond_json(Method::POST, "/items", &xray());
    mock.respond_json(Method::GET, "/items", &vec![xray()]);
    mock.clear_log();

    items::execute(&api, &cmd).await.unwrap();
    view.mutation_succeeded(&cmd);
    reload_items(&mut view, &api).await;

    assert_eq!(mock.calls(), vec!["POST /items", "GET /items", "GET /inventory"]);
    assert!(view.form().is_none());
    let rows = view.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].item.name, "X-Ray Unit");
    assert_eq!(rows[0].quantity, 0);
    assert_eq!(rows[0].badge, StockBadge::Danger);
}

#[tokio::test]
async fn test_duplicate_name_keeps_modal_open() {
    let mock = MockTransport::new();
    let api = mock.client();
    mock.respond(Method::POST, "/items", 400, r#"{"detail":"Item name already exists"}"#);

    let mut view = ItemsView::new();
    view.open_create();
    view.set_field(ItemField::Name, "X-Ray Unit".into());
    view.set_field(ItemField::ItemType, "X-Ray Machine".into());
    view.set_field(ItemField::Cost, "50000".into());
    let cmd = view.prepare_submit().unwrap();

    let err = items::execute(&api, &cmd).await.unwrap_err();
    view.mutation_failed(&cmd, &err);

    assert!(view.form().is_some());
    let notice = view.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Item name already exists");
    // No reload after a failed mutation
    assert_eq!(mock.calls(), vec!["POST /items"]);
}

#[tokio::test]
async fn test_add_inventory_shows_warning_badge() {
    let mock = MockTransport::new();
    let api = mock.client();
    mock.respond_json(Method::GET, "/items", &vec![xray()]);
    mock.respond(Method::GET, "/inventory", 200, "[]");
    mock.respond_json(Method::POST, "/inventory", &record(1, &xray(), 3));

    let mut view = InventoryView::new();
    reload_inventory(&mut view, &api).await;

    view.open_add();
    view.select_item(Some(5));
    view.set_quantity("3".into());
    let cmd = view.prepare_submit().unwrap();

    mock.respond_json(Method::GET, "/inventory", &vec![record(1, &xray(), 3)]);
    inventory::execute(&api, &cmd).await.unwrap();
    view.mutation_succeeded();
    reload_inventory(&mut view, &api).await;

    let rows = view.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.quantity, 3);
    assert_eq!(rows[0].badge, StockBadge::Warning);
    assert!(view.modal().is_none());

    let post = &mock.requests()[2];
    assert_eq!(post.body.as_ref().unwrap()["item_id"], 5);
    assert_eq!(post.body.as_ref().unwrap()["quantity"], 3);
}

#[tokio::test]
async fn test_invalid_inventory_forms_send_nothing() {
    let mock = MockTransport::new();
    let api = mock.client();
    mock.respond_json(Method::GET, "/items", &vec![xray()]);
    mock.respond_json(Method::GET, "/inventory", &vec![record(1, &xray(), 3)]);

    let mut view = InventoryView::new();
    reload_inventory(&mut view, &api).await;
    mock.clear_log();

    // Remove 5 from a record holding 3
    let rec = view.inventory()[0].clone();
    view.open_remove(&rec);
    view.set_quantity("5".into());
    assert!(view.prepare_submit().is_err());

    // Add with nothing selected, then with a zero quantity
    view.open_add();
    assert!(view.prepare_submit().is_err());
    view.select_item(Some(5));
    view.set_quantity("0".into());
    assert!(view.prepare_submit().is_err());

    assert_eq!(mock.request_count(), 0);
    assert_eq!(view.inventory()[0].quantity, 3);
    assert_eq!(view.notice().unwrap().kind, NoticeKind::Validation);
}

#[tokio::test]
async fn test_remove_then_reload() {
    let mock = MockTransport::new();
    let api = mock.client();
    mock.respond_json(Method::GET, "/items", &vec![xray()]);
    mock.respond_json(Method::GET, "/inventory", &vec![record(1, &xray(), 3)]);
    mock.respond(Method::DELETE, "/inventory/5", 200, r#"{"message":"Removed 2 items from inventory"}"#);

    let mut view = InventoryView::new();
    reload_inventory(&mut view, &api).await;
    let rec = view.inventory()[0].clone();
    view.open_remove(&rec);
    view.set_quantity("2".into());
    let cmd = view.prepare_submit().unwrap();

    mock.respond_json(Method::GET, "/inventory", &vec![record(1, &xray(), 1)]);
    mock.clear_log();
    inventory::execute(&api, &cmd).await.unwrap();
    view.mutation_succeeded();
    reload_inventory(&mut view, &api).await;

    let requests = mock.requests();
    assert_eq!(requests[0].url(api.root()), "http://localhost:8000/api/inventory/5?quantity=2");
    assert_eq!(mock.calls(), vec!["DELETE /inventory/5", "GET /inventory", "GET /items"]);
    assert_eq!(view.rows()[0].badge, StockBadge::Danger);
}

#[tokio::test]
async fn test_delete_with_orphaned_inventory() {
    let mock = MockTransport::new();
    let api = mock.client();
    mock.respond(Method::DELETE, "/items/5", 200, r#"{"message":"Item deleted successfully"}"#);
    // Backend deleted the item but left its stock record behind
    mock.respond_json(Method::GET, "/items", &Vec::<Item>::new());
    mock.respond_json(Method::GET, "/inventory", &vec![record(1, &xray(), 3)]);

    let mut items_view = ItemsView::new();
    let cmd = ItemCommand::Delete { id: 5 };
    items::execute(&api, &cmd).await.unwrap();
    items_view.mutation_succeeded(&cmd);
    reload_items(&mut items_view, &api).await;
    assert!(items_view.rows().is_empty());

    let mut inventory_view = InventoryView::new();
    reload_inventory(&mut inventory_view, &api).await;
    let rows = inventory_view.rows();
    assert_eq!(rows[0].record.item.name, "X-Ray Unit");
    assert!(inventory_view.items().is_empty());
}

#[tokio::test]
async fn test_delete_refused_surfaces_detail() {
    let mock = MockTransport::new();
    let api = mock.client();
    mock.respond(
        Method::DELETE,
        "/items/5",
        400,
        r#"{"detail":"Cannot delete item that exists in inventory. Remove from inventory first."}"#,
    );

    let mut view = ItemsView::new();
    let cmd = ItemCommand::Delete { id: 5 };
    let err = items::execute(&api, &cmd).await.unwrap_err();
    view.mutation_failed(&cmd, &err);
    assert_eq!(
        view.notice().unwrap().text,
        "Cannot delete item that exists in inventory. Remove from inventory first."
    );
}

#[tokio::test]
async fn test_partial_load_failure_fails_both() {
    let mock = MockTransport::new();
    let api = mock.client();
    mock.respond_json(Method::GET, "/items", &vec![xray()]);
    mock.fail(Method::GET, "/inventory");

    let mut view = ItemsView::new();
    reload_items(&mut view, &api).await;

    assert!(!view.is_loading());
    assert!(view.items().is_empty());
    assert_eq!(view.notice().unwrap().text, "Error loading items data");
}
