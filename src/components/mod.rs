//! UI Components
//!
//! Leptos components for the inventory page. They only read the store and
//! send gestures; every decision is made by the dispatcher.

mod toolbar;
mod inventory_table;
mod item_modal;
mod status_banner;

pub use toolbar::Toolbar;
pub use inventory_table::InventoryTable;
pub use item_modal::ItemModal;
pub use status_banner::StatusBanner;
