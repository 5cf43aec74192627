//! External service boundaries.
//!
//! The session talks to the outside world through two traits: a
//! [`CatalogLookup`] that resolves a food by id, and an [`OrderSink`] that
//! accepts finished orders and favorite markings.

mod json_store;
mod memory;

pub use json_store::{JsonStore, StoredOrder};
pub use memory::{InMemoryCatalog, InMemorySink};

use async_trait::async_trait;

use crate::catalog::Item;
use crate::error::FoodError;
use crate::ids::FoodId;
use crate::order::OrderPayload;

/// Resolves catalog items.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Fetch a food and its extras.
    async fn get_item(&self, id: FoodId) -> Result<Item, FoodError>;
}

/// Accepts orders and favorites.
#[async_trait]
pub trait OrderSink: Send + Sync {
    /// Place an order.
    async fn submit_order(&self, order: &OrderPayload) -> Result<(), FoodError>;

    /// Mark a food as favorite.
    async fn mark_favorite(&self, item: &Item) -> Result<(), FoodError>;
}
