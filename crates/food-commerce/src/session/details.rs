//! Food details session.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::{ExtraOption, Item};
use crate::error::FoodError;
use crate::favorite::FavoriteToggle;
use crate::format::{MoneyFormatter, SymbolFormatter};
use crate::ids::{ExtraId, FoodId};
use crate::money::Money;
use crate::order::OrderPayload;
use crate::pricing::PriceBreakdown;
use crate::selection::{BaseQuantity, SelectionAction, SelectionState};
use crate::services::{CatalogLookup, OrderSink};
use crate::session::{Navigation, NavigationPolicy, Route};

/// Drives one food details screen: load, edit, submit.
///
/// Owns the selection exclusively; every mutation takes `&mut self` and
/// completes before the next one starts.
pub struct FoodDetailsSession {
    state: SelectionState,
    favorite: FavoriteToggle,
    formatter: Arc<dyn MoneyFormatter>,
    policy: NavigationPolicy,
    loaded: bool,
}

impl Default for FoodDetailsSession {
    fn default() -> Self {
        Self::new(Arc::new(SymbolFormatter))
    }
}

impl FoodDetailsSession {
    pub fn new(formatter: Arc<dyn MoneyFormatter>) -> Self {
        Self {
            state: SelectionState::default(),
            favorite: FavoriteToggle::new(),
            formatter,
            policy: NavigationPolicy::default(),
            loaded: false,
        }
    }

    pub fn with_policy(mut self, policy: NavigationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fetch the food and seed the selection from it.
    ///
    /// Items that break [`Item::validate`] are rejected. On failure the
    /// previous state is kept and the error is returned.
    pub async fn load(&mut self, lookup: &dyn CatalogLookup, id: FoodId) -> Result<(), FoodError> {
        let item = lookup
            .get_item(id)
            .await
            .and_then(|item| item.validate().map(|()| item))
            .map_err(|e| {
                warn!(food_id = %id, error = %e, "food lookup failed");
                e
            })?;
        info!(food_id = %item.id, extras = item.extras.len(), "food loaded");
        self.state = SelectionState::new(item);
        self.loaded = true;
        Ok(())
    }

    /// Whether a lookup has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn item(&self) -> &Item {
        &self.state.item
    }

    pub fn extras(&self) -> &[ExtraOption] {
        &self.state.extras
    }

    pub fn base_quantity(&self) -> BaseQuantity {
        self.state.base_quantity
    }

    pub fn policy(&self) -> NavigationPolicy {
        self.policy
    }

    /// Apply one user action.
    pub fn dispatch(&mut self, action: SelectionAction) {
        self.state = self.state.apply(action);
        debug!(%action, base_quantity = %self.state.base_quantity, "selection updated");
    }

    pub fn increment_extra(&mut self, id: ExtraId) {
        self.dispatch(SelectionAction::IncrementExtra(id));
    }

    pub fn decrement_extra(&mut self, id: ExtraId) {
        self.dispatch(SelectionAction::DecrementExtra(id));
    }

    pub fn increment_food(&mut self) {
        self.dispatch(SelectionAction::IncrementFood);
    }

    pub fn decrement_food(&mut self) {
        self.dispatch(SelectionAction::DecrementFood);
    }

    /// Unit price of the food, formatted.
    pub fn formatted_price(&self) -> String {
        self.formatter.format(&self.state.item.price)
    }

    /// Formatted total of the current selection.
    pub fn cart_total(&self) -> Result<String, FoodError> {
        self.state.total(self.formatter.as_ref())
    }

    pub fn pricing(&self) -> Result<PriceBreakdown, FoodError> {
        self.state.pricing()
    }

    /// Format an arbitrary amount with the session's formatter.
    pub fn format(&self, amount: &Money) -> String {
        self.formatter.format(amount)
    }

    pub fn compose_order(&self) -> OrderPayload {
        self.state.compose_order()
    }

    /// Compose the order, send it to `sink`, and signal navigation to Orders.
    pub async fn finish_order(&self, sink: &dyn OrderSink) -> Result<Navigation, FoodError> {
        if !self.loaded {
            warn!("submitting order before the food finished loading");
        }

        let order = self.compose_order();
        match sink.submit_order(&order).await {
            Ok(()) => info!(food_id = %order.product_id, extras = order.extras.len(), "order submitted"),
            Err(e) if self.policy == NavigationPolicy::Always => {
                warn!(food_id = %order.product_id, error = %e, "order not accepted, navigating anyway")
            }
            Err(e) => return Err(e),
        }
        Ok(Navigation::reset_to(Route::Orders))
    }

    /// Mark the food as favorite and signal navigation to Favorites.
    pub async fn toggle_favorite(&self, sink: &dyn OrderSink) -> Result<Navigation, FoodError> {
        self.favorite
            .toggle(&self.state.item, sink, self.policy)
            .await
    }

    /// Icon glyph for the favorite button.
    pub fn favorite_icon(&self) -> &'static str {
        self.favorite.icon_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LocaleFormatter;
    use crate::money::Currency;
    use crate::services::{InMemoryCatalog, InMemorySink};

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new().with_item(Item {
            id: FoodId::new(1),
            name: "Ao molho".to_string(),
            price: Money::new(1000, Currency::BRL),
            extras: vec![
                ExtraOption::new(ExtraId::new(1), "Bacon", Money::new(200, Currency::BRL)),
                ExtraOption::new(ExtraId::new(2), "Frango", Money::new(300, Currency::BRL)),
            ],
            ..Item::default()
        })
    }

    fn session() -> FoodDetailsSession {
        FoodDetailsSession::new(Arc::new(LocaleFormatter::pt_br()))
    }

    #[tokio::test]
    async fn test_fresh_session_totals_zero() {
        let session = session();
        assert!(!session.is_loaded());
        assert_eq!(session.cart_total().unwrap(), "R$ 0,00");
        assert_eq!(session.base_quantity().get(), 1);
    }

    #[tokio::test]
    async fn test_load_and_edit() {
        let mut session = session();
        session.load(&catalog(), FoodId::new(1)).await.unwrap();
        assert_eq!(session.formatted_price(), "R$ 10,00");

        session.increment_extra(ExtraId::new(1));
        session.increment_extra(ExtraId::new(1));
        session.increment_extra(ExtraId::new(2));
        session.increment_food();
        assert_eq!(session.cart_total().unwrap(), "R$ 27,00");

        session.decrement_food();
        session.decrement_food();
        assert_eq!(session.base_quantity().get(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_default_state() {
        let mut session = session();
        let err = session.load(&catalog(), FoodId::new(7)).await.unwrap_err();
        assert!(matches!(err, FoodError::FoodNotFound(7)));
        assert!(!session.is_loaded());
        assert_eq!(session.cart_total().unwrap(), "R$ 0,00");
    }

    #[tokio::test]
    async fn test_load_rejects_duplicate_extra_ids() {
        let catalog = InMemoryCatalog::new().with_item(Item {
            id: FoodId::new(3),
            name: "Dupes".to_string(),
            price: Money::new(1000, Currency::BRL),
            extras: vec![
                ExtraOption::new(ExtraId::new(1), "Bacon", Money::new(200, Currency::BRL)),
                ExtraOption::new(ExtraId::new(1), "Frango", Money::new(300, Currency::BRL)),
            ],
            ..Item::default()
        });

        let mut session = session();
        let err = session.load(&catalog, FoodId::new(3)).await.unwrap_err();
        assert!(matches!(err, FoodError::InvalidCatalog(_)));
        assert!(!session.is_loaded());

        session.increment_extra(ExtraId::new(1));
        assert!(session.extras().is_empty());
        assert!(session.compose_order().extras.is_empty());
    }

    #[tokio::test]
    async fn test_finish_order_navigates_to_orders() {
        let mut session = session();
        session.load(&catalog(), FoodId::new(1)).await.unwrap();
        session.increment_extra(ExtraId::new(2));

        let sink = InMemorySink::new();
        let nav = session.finish_order(&sink).await.unwrap();

        assert_eq!(nav, Navigation::reset_to(Route::Orders));
        let orders = sink.orders().await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].extras.len(), 1);
    }

    #[tokio::test]
    async fn test_finish_order_policy() {
        let mut session = session();
        session.load(&catalog(), FoodId::new(1)).await.unwrap();
        let sink = InMemorySink::rejecting();

        assert!(session.finish_order(&sink).await.is_ok());

        let session = session.with_policy(NavigationPolicy::OnSuccess);
        assert!(matches!(
            session.finish_order(&sink).await,
            Err(FoodError::SinkRejected(_))
        ));
    }

    #[tokio::test]
    async fn test_toggle_favorite() {
        let mut session = session();
        session.load(&catalog(), FoodId::new(1)).await.unwrap();
        let sink = InMemorySink::new();

        let nav = session.toggle_favorite(&sink).await.unwrap();
        assert_eq!(nav.route, Route::Favorites);
        assert_eq!(sink.favorites().await[0].id, FoodId::new(1));
        assert_eq!(session.favorite_icon(), "favorite-border");
    }
}
