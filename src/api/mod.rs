//! Inventory Service Client
//!
//! One operation per REST endpoint. Every call is attempted exactly once and
//! failures are handed back to the caller untouched.

mod http;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{Item, ItemPatch, NewItem};

pub use http::HttpItemRepository;

/// Item CRUD and CSV export against the remote inventory service
///
/// Futures are not `Send`: on wasm32 they sit on top of `fetch`.
#[async_trait(?Send)]
pub trait ItemRepository {
    /// `GET /api/items`
    async fn list(&self) -> ClientResult<Vec<Item>>;

    /// `GET /api/items/{id}`, `NotFound` when the service does not know the id
    async fn get(&self, id: &str) -> ClientResult<Item>;

    /// `POST /api/items`
    async fn create(&self, fields: &NewItem) -> ClientResult<Item>;

    /// `PUT /api/items/{id}` with only the keys that should change
    async fn update(&self, id: &str, patch: &ItemPatch) -> ClientResult<Item>;

    /// `DELETE /api/items/{id}`
    async fn remove(&self, id: &str) -> ClientResult<()>;

    /// `GET /api/export`
    async fn export_csv(&self) -> ClientResult<String>;
}
