//! Wire Models
//!
//! Data structures matching the backend's JSON bodies. All entities are
//! server-owned; the client only holds re-fetched copies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Catalog entry for a piece of medical equipment (not a stock count)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Free text, e.g. "MRI Machine"
    pub item_type: String,
    pub cost: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for creating or fully replacing an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub item_type: String,
    pub cost: f64,
    pub description: Option<String>,
}

/// Stock entry linking an item to a quantity on hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: u32,
    pub item_id: u32,
    pub quantity: u32,
    /// Denormalized snapshot of the item, not independently mutable
    pub item: Item,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /inventory`: creates the record or increments it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventory {
    pub item_id: u32,
    pub quantity: u32,
}

/// Body for `PUT /inventory/{item_id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryQuantity {
    pub quantity: u32,
}

/// Line of a historical order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: u32,
    pub item_id: u32,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
    pub item: Item,
}

/// Historical purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub order_date: String,
    pub total_amount: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderLine>,
}

impl Order {
    /// Units across all lines
    pub fn unit_count(&self) -> u32 {
        self.order_items.iter().map(|line| line.quantity).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub item_id: u32,
    pub quantity: u32,
}

/// Body for `POST /orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub items: Vec<OrderLineRequest>,
}

/// One week bucket of the backend's order aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyOrderStats {
    pub week_start: String,
    pub week_end: String,
    pub total_orders: u32,
    pub total_amount: f64,
    /// Units ordered per item name
    #[serde(default)]
    pub item_counts: BTreeMap<String, u32>,
}
