//! Table View Synchronizer
//!
//! Rebuilds the visible row set from a repository snapshot.

use crate::models::Item;

/// One visible table row. `id` is the key edit/delete gestures carry back.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: String,
}

/// `<For>` only rebuilds rows whose key is new, so the key covers every
/// displayed field, not just the id
pub type RowKey = (String, String, String, String);

impl TableRow {
    pub fn render_key(&self) -> RowKey {
        (
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.quantity.clone(),
        )
    }
}

impl From<&Item> for TableRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

/// Rows currently shown, always the last successful `list()` snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    rows: Vec<TableRow>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row with one row per item, in service order
    pub fn render(&mut self, items: &[Item]) {
        self.rows.clear();
        self.rows.extend(items.iter().map(TableRow::from));
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn row(&self, id: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
