//! Selection, pricing and order composition for single-item food orders.
//!
//! A user picks one food from the catalog, chooses how many units of it and
//! of each extra they want, watches the total update, and confirms. This
//! crate holds that state machine and nothing else:
//!
//! - **Selection**: extra ledger (quantities floor at 0) and base quantity
//!   counter (floors at 1), as pure transitions on [`SelectionState`]
//! - **Pricing**: total = extras subtotal + base price * base quantity
//! - **Order**: the payload posted on confirm, selected extras only
//! - **Favorite**: sends the food to the sink's favorites
//! - **Session**: drives a screen against [`CatalogLookup`] and [`OrderSink`]
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use food_commerce::prelude::*;
//!
//! let store = JsonStore::new("db.json", Currency::BRL);
//! let mut session = FoodDetailsSession::new(Arc::new(LocaleFormatter::pt_br()));
//!
//! session.load(&store, FoodId::new(1)).await?;
//! session.increment_extra(ExtraId::new(2));
//! session.increment_food();
//! println!("Total: {}", session.cart_total()?);
//!
//! let navigation = session.finish_order(&store).await?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod favorite;
pub mod format;
pub mod order;
pub mod pricing;
pub mod selection;
pub mod services;
pub mod session;

pub use error::FoodError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::FoodError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{ExtraOption, ExtraRecord, FoodRecord, Item};
    pub use crate::favorite::FavoriteToggle;
    pub use crate::format::{LocaleFormatter, MoneyFormatter, SymbolFormatter};
    pub use crate::order::{compose, OrderExtra, OrderPayload};
    pub use crate::pricing::{compute_total, total_amount, ExtraPricing, PriceBreakdown};
    pub use crate::selection::{BaseQuantity, SelectionAction, SelectionState};
    pub use crate::services::{
        CatalogLookup, InMemoryCatalog, InMemorySink, JsonStore, OrderSink, StoredOrder,
    };
    pub use crate::session::{FoodDetailsSession, Navigation, NavigationPolicy, Route};
}
