//! In-process catalog and sink.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::{CatalogLookup, OrderSink};
use crate::catalog::Item;
use crate::error::FoodError;
use crate::ids::FoodId;
use crate::order::OrderPayload;

/// Catalog backed by a map of items.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: HashMap<FoodId, Item>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, replacing any item with the same id.
    pub fn with_item(mut self, item: Item) -> Self {
        self.insert(item);
        self
    }

    pub fn insert(&mut self, item: Item) {
        self.items.insert(item.id, item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn get_item(&self, id: FoodId) -> Result<Item, FoodError> {
        self.items
            .get(&id)
            .cloned()
            .ok_or(FoodError::FoodNotFound(id.get()))
    }
}

/// Sink that records what it receives.
///
/// Can be switched to reject every call, which is how hosts exercise the
/// navigation policy without a real backend.
#[derive(Debug, Default)]
pub struct InMemorySink {
    orders: Mutex<Vec<OrderPayload>>,
    favorites: Mutex<Vec<Item>>,
    reject: AtomicBool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every request.
    pub fn rejecting() -> Self {
        let sink = Self::default();
        sink.set_reject(true);
        sink
    }

    pub fn set_reject(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    /// Orders received so far, oldest first.
    pub async fn orders(&self) -> Vec<OrderPayload> {
        self.orders.lock().await.clone()
    }

    /// Favorites received so far, oldest first.
    pub async fn favorites(&self) -> Vec<Item> {
        self.favorites.lock().await.clone()
    }

    fn check(&self, what: &str) -> Result<(), FoodError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(FoodError::SinkRejected(format!("{what} refused")));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderSink for InMemorySink {
    async fn submit_order(&self, order: &OrderPayload) -> Result<(), FoodError> {
        self.check("order")?;
        let mut orders = self.orders.lock().await;
        orders.push(order.clone());
        debug!(count = orders.len(), product_id = %order.product_id, "order recorded");
        Ok(())
    }

    async fn mark_favorite(&self, item: &Item) -> Result<(), FoodError> {
        self.check("favorite")?;
        self.favorites.lock().await.push(item.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn item(id: u64) -> Item {
        Item {
            id: FoodId::new(id),
            name: format!("Food {id}"),
            price: Money::new(1000, Currency::BRL),
            ..Item::default()
        }
    }

    #[tokio::test]
    async fn test_catalog_lookup() {
        let catalog = InMemoryCatalog::new().with_item(item(1)).with_item(item(2));
        assert_eq!(catalog.len(), 2);

        let found = catalog.get_item(FoodId::new(2)).await.unwrap();
        assert_eq!(found.name, "Food 2");

        let missing = catalog.get_item(FoodId::new(9)).await;
        assert!(matches!(missing, Err(FoodError::FoodNotFound(9))));
    }

    #[tokio::test]
    async fn test_sink_records() {
        let sink = InMemorySink::new();
        sink.mark_favorite(&item(1)).await.unwrap();
        assert_eq!(sink.favorites().await.len(), 1);
        assert!(sink.orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_rejecting_sink() {
        let sink = InMemorySink::rejecting();
        let err = sink.mark_favorite(&item(1)).await.unwrap_err();
        assert!(matches!(err, FoodError::SinkRejected(_)));
        assert!(sink.favorites().await.is_empty());

        sink.set_reject(false);
        assert!(sink.mark_favorite(&item(1)).await.is_ok());
    }
}
