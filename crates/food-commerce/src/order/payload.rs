//! Order payload types and composition.

use crate::catalog::{ExtraOption, Item};
use crate::ids::{CategoryId, ExtraId, FoodId};
use crate::money::{self, Money};
use crate::selection::{ledger, BaseQuantity, SelectionState};
use serde::Serialize;

/// The body posted to the order sink when the user confirms.
///
/// The base quantity is not part of the payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderPayload {
    pub product_id: FoodId,
    pub name: String,
    pub description: String,
    #[serde(with = "money::decimal")]
    pub price: Money,
    pub category: CategoryId,
    pub thumbnail_url: String,
    /// Selected extras only, in catalog order.
    pub extras: Vec<OrderExtra>,
}

/// An extra included in an order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderExtra {
    pub id: ExtraId,
    pub name: String,
    #[serde(with = "money::decimal")]
    pub value: Money,
    pub quantity: u32,
}

impl From<&ExtraOption> for OrderExtra {
    fn from(extra: &ExtraOption) -> Self {
        Self {
            id: extra.id,
            name: extra.name.clone(),
            value: extra.value,
            quantity: extra.quantity,
        }
    }
}

/// Build the order payload for the current selection.
///
/// Extras with quantity 0 are dropped. `_base_quantity` is accepted so the
/// signature mirrors the pricing functions, but it is not carried into the
/// payload.
pub fn compose(item: &Item, extras: &[ExtraOption], _base_quantity: BaseQuantity) -> OrderPayload {
    OrderPayload {
        product_id: item.id,
        name: item.name.clone(),
        description: item.description.clone(),
        price: item.price,
        category: item.category,
        thumbnail_url: item.thumbnail_url.clone(),
        extras: ledger::selected(extras).map(OrderExtra::from).collect(),
    }
}

impl OrderPayload {
    /// Total units of extras in the order.
    pub fn extra_count(&self) -> u64 {
        self.extras.iter().map(|e| u64::from(e.quantity)).sum()
    }
}

impl SelectionState {
    /// Compose the order payload for this selection.
    pub fn compose_order(&self) -> OrderPayload {
        compose(&self.item, &self.extras, self.base_quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use crate::selection::SelectionAction;

    fn state() -> SelectionState {
        let item = Item {
            id: FoodId::new(1),
            name: "Ao molho".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            thumbnail_url: "thumb.png".to_string(),
            image_url: "full.png".to_string(),
            price: Money::new(1000, Currency::BRL),
            category: CategoryId::new(2),
            extras: vec![
                ExtraOption::new(ExtraId::new(1), "Bacon", Money::new(200, Currency::BRL)),
                ExtraOption::new(ExtraId::new(2), "Frango", Money::new(300, Currency::BRL)),
                ExtraOption::new(ExtraId::new(3), "Queijo", Money::new(150, Currency::BRL)),
            ],
        };
        SelectionState::new(item).apply_all([
            SelectionAction::IncrementExtra(ExtraId::new(1)),
            SelectionAction::IncrementExtra(ExtraId::new(1)),
            SelectionAction::IncrementExtra(ExtraId::new(2)),
            SelectionAction::IncrementFood,
        ])
    }

    fn quantities(payload: &OrderPayload) -> Vec<(u64, u32)> {
        payload.extras.iter().map(|e| (e.id.get(), e.quantity)).collect()
    }

    #[test]
    fn test_compose_keeps_selected_extras_in_order() {
        let payload = state().compose_order();
        assert_eq!(quantities(&payload), vec![(1, 2), (2, 1)]);
        assert_eq!(payload.extra_count(), 3);
    }

    #[test]
    fn test_compose_drops_extra_back_at_zero() {
        let payload = state()
            .apply(SelectionAction::DecrementExtra(ExtraId::new(2)))
            .compose_order();
        assert_eq!(quantities(&payload), vec![(1, 2)]);
    }

    #[test]
    fn test_compose_maps_item_fields() {
        let payload = state().compose_order();
        assert_eq!(payload.product_id, FoodId::new(1));
        assert_eq!(payload.name, "Ao molho");
        assert_eq!(payload.category, CategoryId::new(2));
        assert_eq!(payload.thumbnail_url, "thumb.png");
        assert_eq!(payload.price, Money::new(1000, Currency::BRL));
    }

    #[test]
    fn test_payload_wire_shape() {
        let json = serde_json::to_value(state().compose_order()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "product_id": 1,
                "name": "Ao molho",
                "description": "Macarrão ao molho branco",
                "price": 10.0,
                "category": 2,
                "thumbnail_url": "thumb.png",
                "extras": [
                    { "id": 1, "name": "Bacon", "value": 2.0, "quantity": 2 },
                    { "id": 2, "name": "Frango", "value": 3.0, "quantity": 1 }
                ]
            })
        );
        // no base quantity on the wire
        assert!(json.get("quantity").is_none());
    }

    #[test]
    fn test_compose_on_default_state() {
        let payload = SelectionState::default().compose_order();
        assert!(payload.extras.is_empty());
        assert!(payload.price.is_zero());
    }
}
