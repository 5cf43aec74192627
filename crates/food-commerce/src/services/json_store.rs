//! File-backed catalog and sink over a `db.json` document.
//!
//! The document has the layout of a json-server fixture:
//!
//! ```json
//! { "foods": [ ... ], "orders": [ ... ], "favorites": [ ... ] }
//! ```
//!
//! Collections the store does not know about are carried through unchanged.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{CatalogLookup, OrderSink};
use crate::catalog::{FoodRecord, Item};
use crate::error::FoodError;
use crate::ids::{FoodId, OrderId};
use crate::money::Currency;
use crate::order::OrderPayload;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    foods: Vec<FoodRecord>,
    #[serde(default)]
    orders: Vec<StoredOrder>,
    #[serde(default)]
    favorites: Vec<FoodRecord>,
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

/// An order as persisted in the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredOrder {
    pub id: OrderId,
    /// Missing on orders written by other clients of the same file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// The serialized [`OrderPayload`] fields.
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

/// Catalog and sink persisted in a single JSON file.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    currency: Currency,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Open the store at `path`. Prices in the file are read in `currency`.
    pub fn new(path: impl Into<PathBuf>, currency: Currency) -> Self {
        Self {
            path: path.into(),
            currency,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty document if the file does not exist yet.
    pub async fn init(&self) -> Result<bool, FoodError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        self.write(&Document::default()).await?;
        info!(path = %self.path.display(), "created empty store");
        Ok(true)
    }

    /// Every food record in the catalog.
    pub async fn foods(&self) -> Result<Vec<FoodRecord>, FoodError> {
        Ok(self.read().await?.foods)
    }

    /// Every persisted order, oldest first.
    pub async fn orders(&self) -> Result<Vec<StoredOrder>, FoodError> {
        Ok(self.read().await?.orders)
    }

    /// Every favorite food.
    pub async fn favorites(&self) -> Result<Vec<FoodRecord>, FoodError> {
        Ok(self.read().await?.favorites)
    }

    async fn read(&self) -> Result<Document, FoodError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            FoodError::Storage(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn write(&self, document: &Document) -> Result<(), FoodError> {
        let content = serde_json::to_string_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), "store written");
        Ok(())
    }
}

#[async_trait]
impl CatalogLookup for JsonStore {
    async fn get_item(&self, id: FoodId) -> Result<Item, FoodError> {
        let record = self
            .read()
            .await?
            .foods
            .into_iter()
            .find(|food| food.id == id)
            .ok_or(FoodError::FoodNotFound(id.get()))?;
        Item::from_record(record, self.currency)
    }
}

#[async_trait]
impl OrderSink for JsonStore {
    async fn submit_order(&self, order: &OrderPayload) -> Result<(), FoodError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read().await?;

        let next_id = document
            .orders
            .iter()
            .map(|o| o.id.get())
            .max()
            .map_or(1, |max| max + 1);

        let body = match serde_json::to_value(order)? {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(FoodError::Serialization(format!(
                    "order payload is not an object: {other}"
                )))
            }
        };

        document.orders.push(StoredOrder {
            id: OrderId::new(next_id),
            created_at: Some(Utc::now()),
            body,
        });
        self.write(&document).await?;

        info!(order_id = next_id, product_id = %order.product_id, "order stored");
        Ok(())
    }

    async fn mark_favorite(&self, item: &Item) -> Result<(), FoodError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read().await?;

        let record = item.to_record();
        match document.favorites.iter_mut().find(|f| f.id == record.id) {
            Some(existing) => *existing = record,
            None => document.favorites.push(record),
        }
        self.write(&document).await?;

        info!(food_id = %item.id, "favorite stored");
        Ok(())
    }
}
