//! Items View State
//!
//! Catalog CRUD with the current stock of each item joined in from the
//! inventory list.

use crate::api::{ApiClient, Transport};
use crate::error::{ApiError, ApiResult, FormError};
use crate::format::{self, StockBadge};
use crate::models::{InventoryRecord, Item, ItemPayload};

use super::{clear_load_failure, Notice};

const LOAD_FAILED: &str = "Error loading items data";

/// Both lists the items page depends on
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemsData {
    pub items: Vec<Item>,
    pub inventory: Vec<InventoryRecord>,
}

/// Which text input changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    ItemType,
    Cost,
    Description,
}

/// Contents of the add/edit modal.
///
/// `editing == None` means create mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemForm {
    editing: Option<Item>,
    pub name: String,
    pub item_type: String,
    /// Kept as typed; parsed on submit
    pub cost: String,
    pub description: String,
}

impl ItemForm {
    fn for_item(item: &Item) -> Self {
        Self {
            editing: Some(item.clone()),
            name: item.name.clone(),
            item_type: item.item_type.clone(),
            cost: item.cost.to_string(),
            description: item.description.clone().unwrap_or_default(),
        }
    }

    pub fn editing(&self) -> Option<&Item> {
        self.editing.as_ref()
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Edit Item" } else { "Add New Item" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() { "Update" } else { "Create" }
    }

    pub fn value(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
            ItemField::ItemType => &self.item_type,
            ItemField::Cost => &self.cost,
            ItemField::Description => &self.description,
        }
    }

    fn payload(&self) -> Result<ItemPayload, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::invalid("Item name is required"));
        }
        if self.item_type.trim().is_empty() {
            return Err(FormError::invalid("Item type is required"));
        }
        let cost = self
            .cost
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite() && *c >= 0.0)
            .ok_or_else(|| FormError::invalid("Cost must be a non-negative number"))?;

        Ok(ItemPayload {
            name: self.name.clone(),
            item_type: self.item_type.clone(),
            cost,
            description: Some(self.description.clone()),
        })
    }
}

/// Mutation ready to send
#[derive(Debug, Clone, PartialEq)]
pub enum ItemCommand {
    Create(ItemPayload),
    Update { id: u32, payload: ItemPayload },
    Delete { id: u32 },
}

impl ItemCommand {
    /// Shown when the server gives no detail
    pub fn failure_message(&self) -> &'static str {
        match self {
            ItemCommand::Create(_) => "Error creating item",
            ItemCommand::Update { .. } => "Error updating item",
            ItemCommand::Delete { .. } => "Error deleting item",
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub item: Item,
    pub cost: String,
    pub quantity: u32,
    pub badge: StockBadge,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemsView {
    items: Vec<Item>,
    inventory: Vec<InventoryRecord>,
    loading: bool,
    form: Option<ItemForm>,
    notice: Option<Notice>,
}

impl Default for ItemsView {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            inventory: Vec::new(),
            loading: true,
            form: None,
            notice: None,
        }
    }
}

impl ItemsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> Option<&ItemForm> {
        self.form.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Notice for the page banner; hidden behind an open form
    pub fn page_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|_| self.form.is_none())
    }

    /// Notice shown inside the open form
    pub fn form_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|_| self.form.is_some())
    }

    // ========================
    // Loading
    // ========================

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result. Loading always ends, whatever the outcome.
    pub fn load_finished(&mut self, result: ApiResult<ItemsData>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.items = data.items;
                self.inventory = data.inventory;
                clear_load_failure(&mut self.notice);
            }
            Err(err) => {
                tracing::error!(error = %err, "Error loading items data");
                self.notice = Some(Notice::load_failed(LOAD_FAILED));
            }
        }
    }

    // ========================
    // Modal
    // ========================

    pub fn open_create(&mut self) {
        self.form = Some(ItemForm::default());
        self.notice = None;
    }

    pub fn open_edit(&mut self, item: &Item) {
        self.form = Some(ItemForm::for_item(item));
        self.notice = None;
    }

    pub fn close_modal(&mut self) {
        self.form = None;
    }

    pub fn set_field(&mut self, field: ItemField, value: String) {
        if let Some(form) = self.form.as_mut() {
            match field {
                ItemField::Name => form.name = value,
                ItemField::ItemType => form.item_type = value,
                ItemField::Cost => form.cost = value,
                ItemField::Description => form.description = value,
            }
        }
    }

    /// Validate the open form and turn it into a command.
    ///
    /// A rejected form leaves a validation notice and keeps the modal open.
    pub fn prepare_submit(&mut self) -> Result<ItemCommand, FormError> {
        let form = self.form.as_ref().ok_or(FormError::NoForm)?;
        let result = form.payload().map(|payload| match form.editing() {
            Some(item) => ItemCommand::Update { id: item.id, payload },
            None => ItemCommand::Create(payload),
        });
        if let Err(err) = &result {
            self.notice = Some(Notice::validation(err.to_string()));
        }
        result
    }

    // ========================
    // Mutations
    // ========================

    /// The caller reloads afterwards; nothing is patched locally
    pub fn mutation_succeeded(&mut self, command: &ItemCommand) {
        match command {
            ItemCommand::Create(_) | ItemCommand::Update { .. } => self.form = None,
            ItemCommand::Delete { .. } => {}
        }
        self.notice = None;
    }

    /// Modal stays open so the user can retry
    pub fn mutation_failed(&mut self, command: &ItemCommand, err: &ApiError) {
        let fallback = command.failure_message();
        tracing::error!(error = %err, "{}", fallback);
        self.notice = Some(Notice::error(err.user_message(fallback)));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ========================
    // Derived display
    // ========================

    /// Stock of the first inventory record for `item_id`, zero if none
    pub fn quantity_for(&self, item_id: u32) -> u32 {
        self.inventory
            .iter()
            .find(|r| r.item_id == item_id)
            .map(|r| r.quantity)
            .unwrap_or(0)
    }

    pub fn rows(&self) -> Vec<ItemRow> {
        self.items
            .iter()
            .map(|item| {
                let quantity = self.quantity_for(item.id);
                ItemRow {
                    item: item.clone(),
                    cost: format::currency(item.cost),
                    quantity,
                    badge: StockBadge::for_catalog(quantity),
                    description: format::description_or_na(item),
                }
            })
            .collect()
    }
}

// ========================
// Network
// ========================

/// Load items and inventory concurrently; either failing fails both
pub async fn fetch<T: Transport>(api: &ApiClient<T>) -> ApiResult<ItemsData> {
    let (items, inventory) = futures::try_join!(api.list_items(), api.list_inventory())?;
    Ok(ItemsData {
        items: items.data,
        inventory: inventory.data,
    })
}

pub async fn execute<T: Transport>(api: &ApiClient<T>, command: &ItemCommand) -> ApiResult<()> {
    match command {
        ItemCommand::Create(payload) => {
            let created = api.create_item(payload).await?;
            tracing::info!(id = created.data.id, name = %created.data.name, "item created");
        }
        ItemCommand::Update { id, payload } => {
            api.update_item(*id, payload).await?;
            tracing::info!(id, "item updated");
        }
        ItemCommand::Delete { id } => {
            api.delete_item(*id).await?;
            tracing::info!(id, "item deleted");
        }
    }
    Ok(())
}
