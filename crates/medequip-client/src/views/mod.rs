//! View State
//!
//! Each page owns one state struct and changes it only through named
//! transitions. Network work lives in free async functions next to each
//! state so the UI can await them and feed the result back in.

pub mod inventory;
pub mod items;
pub mod orders;

#[cfg(test)]
mod scenarios;

pub use inventory::{InventoryCommand, InventoryData, InventoryModal, InventoryRow, InventoryView};
pub use items::{ItemCommand, ItemField, ItemForm, ItemRow, ItemsData, ItemsView};
pub use orders::{OrderRow, OrdersData, OrdersView, WeeklyRow, WeeklyTotals, WEEK_WINDOWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The page's data could not be fetched; the next good load clears it
    Load,
    /// A mutation failed
    Error,
    /// Form input was rejected before sending
    Validation,
}

/// User-facing message shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn load_failed(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Load,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn validation(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Validation,
            text: text.into(),
        }
    }
}

/// Fresh data makes an earlier load failure stale; other notices stay
pub(crate) fn clear_load_failure(notice: &mut Option<Notice>) {
    if notice.as_ref().is_some_and(|n| n.kind == NoticeKind::Load) {
        *notice = None;
    }
}
