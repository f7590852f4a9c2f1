//! Application State Store
//!
//! Visible state the dispatcher publishes, read by the components through
//! Leptos reactive_stores.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::dispatcher::InventoryView;
use crate::download::{self, CsvDownload};
use crate::modal::ModalSession;
use crate::table::TableRow;

#[derive(Clone, Debug, Default, Store)]
pub struct InventoryState {
    /// Rows from the last successful list
    pub rows: Vec<TableRow>,
    /// The modal as the controller last left it
    pub session: ModalSession,
    /// Last-resort failure report outside the modal
    pub status: Option<String>,
}

/// Type alias for the store
pub type InventoryStore = Store<InventoryState>;

/// Get the store from context
pub fn use_inventory_store() -> InventoryStore {
    expect_context::<InventoryStore>()
}

/// [`InventoryView`] that writes into the store
#[derive(Clone, Copy)]
pub struct StoreView {
    store: InventoryStore,
}

impl StoreView {
    pub fn new(store: InventoryStore) -> Self {
        Self { store }
    }
}

impl InventoryView for StoreView {
    fn show_rows(&self, rows: &[TableRow]) {
        *self.store.rows().write() = rows.to_vec();
    }

    fn show_modal(&self, session: &ModalSession) {
        *self.store.session().write() = session.clone();
    }

    fn download(&self, file: &CsvDownload) -> Result<(), String> {
        download::trigger_download(file)
    }

    fn report(&self, message: Option<String>) {
        *self.store.status().write() = message;
    }
}
