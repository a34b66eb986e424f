//! UI Components
//!
//! Shared widgets plus one component per routed page.

mod delete_confirm_button;
mod modal;
mod notice_banner;
mod quantity_badge;
mod inventory_page;
mod items_page;
mod orders_page;

pub use delete_confirm_button::DeleteConfirmButton;
pub use modal::Modal;
pub use notice_banner::NoticeBanner;
pub use quantity_badge::QuantityBadge;
pub use inventory_page::InventoryPage;
pub use items_page::ItemsPage;
pub use orders_page::OrdersPage;
