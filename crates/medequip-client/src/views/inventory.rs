//! Inventory View State
//!
//! Add stock for a catalog item, or remove stock from an existing record.

use crate::api::{ApiClient, Transport};
use crate::error::{ApiError, ApiResult, FormError};
use crate::format::{self, StockBadge};
use crate::models::{InventoryRecord, Item, NewInventory};

use super::{clear_load_failure, Notice};

const LOAD_FAILED: &str = "Error loading inventory data";
const ADD_INVALID: &str = "Please select an item and enter a valid quantity";
const REMOVE_INVALID: &str = "Please enter a valid quantity to remove";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryData {
    pub inventory: Vec<InventoryRecord>,
    pub items: Vec<Item>,
}

/// Open modal. A remove modal always carries the record it acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryModal {
    Add {
        item_id: Option<u32>,
        quantity: String,
    },
    Remove {
        record: InventoryRecord,
        quantity: String,
    },
}

impl InventoryModal {
    pub fn quantity(&self) -> &str {
        match self {
            InventoryModal::Add { quantity, .. } | InventoryModal::Remove { quantity, .. } => quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryCommand {
    Add(NewInventory),
    Remove { item_id: u32, quantity: u32 },
}

impl InventoryCommand {
    pub fn failure_message(&self) -> &'static str {
        match self {
            InventoryCommand::Add(_) => "Error adding item to inventory",
            InventoryCommand::Remove { .. } => "Error removing item from inventory",
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub record: InventoryRecord,
    pub cost: String,
    pub badge: StockBadge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryView {
    inventory: Vec<InventoryRecord>,
    items: Vec<Item>,
    loading: bool,
    modal: Option<InventoryModal>,
    notice: Option<Notice>,
}

impl Default for InventoryView {
    fn default() -> Self {
        Self {
            inventory: Vec::new(),
            items: Vec::new(),
            loading: true,
            modal: None,
            notice: None,
        }
    }
}

impl InventoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inventory(&self) -> &[InventoryRecord] {
        &self.inventory
    }

    /// Full catalog, for the add picker
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn modal(&self) -> Option<&InventoryModal> {
        self.modal.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Notice for the page banner; hidden behind an open modal
    pub fn page_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|_| self.modal.is_none())
    }

    /// Notice shown inside the open modal
    pub fn modal_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|_| self.modal.is_some())
    }

    // ========================
    // Loading
    // ========================

    pub fn load_started(&mut self) {
        self.loading = true;
    }

    pub fn load_finished(&mut self, result: ApiResult<InventoryData>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.inventory = data.inventory;
                self.items = data.items;
                clear_load_failure(&mut self.notice);
            }
            Err(err) => {
                tracing::error!(error = %err, "Error loading inventory data");
                self.notice = Some(Notice::load_failed(LOAD_FAILED));
            }
        }
    }

    // ========================
    // Modals
    // ========================

    pub fn open_add(&mut self) {
        self.modal = Some(InventoryModal::Add {
            item_id: None,
            quantity: "1".to_string(),
        });
        self.notice = None;
    }

    pub fn open_remove(&mut self, record: &InventoryRecord) {
        self.modal = Some(InventoryModal::Remove {
            record: record.clone(),
            quantity: "1".to_string(),
        });
        self.notice = None;
    }

    /// Pick from the catalog; ignored outside the add modal
    pub fn select_item(&mut self, id: Option<u32>) {
        let known = id.filter(|id| self.items.iter().any(|item| item.id == *id));
        if let Some(InventoryModal::Add { item_id, .. }) = self.modal.as_mut() {
            *item_id = known;
        }
    }

    pub fn set_quantity(&mut self, value: String) {
        match self.modal.as_mut() {
            Some(InventoryModal::Add { quantity, .. }) | Some(InventoryModal::Remove { quantity, .. }) => {
                *quantity = value;
            }
            None => {}
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Validate the open modal.
    ///
    /// Add needs a selected item and `q >= 1`; remove needs `1 <= q <= current`.
    /// Anything else leaves a validation notice and sends nothing.
    pub fn prepare_submit(&mut self) -> Result<InventoryCommand, FormError> {
        let result = match self.modal.as_ref().ok_or(FormError::NoForm)? {
            InventoryModal::Add { item_id, quantity } => match (item_id, parse_quantity(quantity)) {
                (Some(item_id), Some(q)) if q >= 1 => Ok(InventoryCommand::Add(NewInventory {
                    item_id: *item_id,
                    quantity: q,
                })),
                _ => Err(FormError::invalid(ADD_INVALID)),
            },
            InventoryModal::Remove { record, quantity } => match parse_quantity(quantity) {
                Some(q) if q >= 1 && q <= record.quantity => Ok(InventoryCommand::Remove {
                    item_id: record.item_id,
                    quantity: q,
                }),
                _ => Err(FormError::invalid(REMOVE_INVALID)),
            },
        };
        if let Err(err) = &result {
            self.notice = Some(Notice::validation(err.to_string()));
        }
        result
    }

    // ========================
    // Mutations
    // ========================

    pub fn mutation_succeeded(&mut self) {
        self.modal = None;
        self.notice = None;
    }

    /// Inventory failures show the generic message only
    pub fn mutation_failed(&mut self, command: &InventoryCommand, err: &ApiError) {
        let message = command.failure_message();
        tracing::error!(error = %err, "{}", message);
        self.notice = Some(Notice::error(message));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn rows(&self) -> Vec<InventoryRow> {
        self.inventory
            .iter()
            .map(|record| InventoryRow {
                record: record.clone(),
                cost: format::currency(record.item.cost),
                badge: StockBadge::for_inventory(record.quantity),
            })
            .collect()
    }
}

/// Whole numbers only; "2.5" or "-1" are not quantities
fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

// ========================
// Network
// ========================

/// Load inventory and the catalog concurrently
pub async fn fetch<T: Transport>(api: &ApiClient<T>) -> ApiResult<InventoryData> {
    let (inventory, items) = futures::try_join!(api.list_inventory(), api.list_items())?;
    Ok(InventoryData {
        inventory: inventory.data,
        items: items.data,
    })
}

pub async fn execute<T: Transport>(api: &ApiClient<T>, command: &InventoryCommand) -> ApiResult<()> {
    match command {
        InventoryCommand::Add(body) => {
            let record = api.add_inventory(body).await?;
            tracing::info!(item_id = body.item_id, added = body.quantity, now = record.data.quantity, "stock added");
        }
        InventoryCommand::Remove { item_id, quantity } => {
            api.remove_inventory(*item_id, Some(*quantity)).await?;
            tracing::info!(item_id, removed = quantity, "stock removed");
        }
    }
    Ok(())
}
