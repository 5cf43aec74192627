//! Food item and extra option types.

use std::collections::HashSet;

use crate::error::FoodError;
use crate::ids::{CategoryId, ExtraId, FoodId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A food as it arrives from the catalog API.
///
/// Prices are decimals on the wire; [`Item::from_record`] converts them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: CategoryId,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub extras: Vec<ExtraRecord>,
}

/// An extra as it arrives from the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraRecord {
    pub id: ExtraId,
    pub name: String,
    pub value: f64,
    /// Ignored on load: every extra starts unselected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// The orderable food being configured.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub thumbnail_url: String,
    /// Base price of one unit.
    pub price: Money,
    pub category: CategoryId,
    /// Extras offered for this food, in catalog order.
    pub extras: Vec<ExtraOption>,
}

impl Item {
    /// Build an item from a catalog record.
    ///
    /// Rejects negative or non-finite prices and anything [`Item::validate`]
    /// rejects. Every extra starts at quantity 0 regardless of what the record says.
    pub fn from_record(record: FoodRecord, currency: Currency) -> Result<Self, FoodError> {
        let price = non_negative(record.price, currency, "price")?;

        let extras = record
            .extras
            .into_iter()
            .map(|extra| {
                Ok(ExtraOption {
                    id: extra.id,
                    value: non_negative(extra.value, currency, "extra value")?,
                    name: extra.name,
                    quantity: 0,
                })
            })
            .collect::<Result<Vec<_>, FoodError>>()?;

        let item = Self {
            id: record.id,
            name: record.name,
            description: record.description,
            image_url: record.image_url,
            thumbnail_url: record.thumbnail_url,
            price,
            category: record.category,
            extras,
        };
        item.validate()?;
        Ok(item)
    }

    /// Check the invariants the selection relies on: extra ids are unique
    /// and no price is negative or in another currency.
    pub fn validate(&self) -> Result<(), FoodError> {
        if self.price.is_negative() {
            return Err(FoodError::InvalidCatalog(format!(
                "negative price in food {}",
                self.id
            )));
        }

        let mut seen = HashSet::with_capacity(self.extras.len());
        for extra in &self.extras {
            if !seen.insert(extra.id) {
                return Err(FoodError::InvalidCatalog(format!(
                    "duplicate extra id {} in food {}",
                    extra.id, self.id
                )));
            }
            if extra.value.is_negative() {
                return Err(FoodError::InvalidCatalog(format!(
                    "negative value for extra {} in food {}",
                    extra.id, self.id
                )));
            }
            if extra.value.currency != self.price.currency {
                return Err(FoodError::CurrencyMismatch {
                    expected: self.price.currency.code().to_string(),
                    got: extra.value.currency.code().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Convert back to the wire shape, e.g. to post it as a favorite.
    pub fn to_record(&self) -> FoodRecord {
        FoodRecord {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.to_decimal(),
            category: self.category,
            image_url: self.image_url.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            extras: self
                .extras
                .iter()
                .map(|extra| ExtraRecord {
                    id: extra.id,
                    name: extra.name.clone(),
                    value: extra.value.to_decimal(),
                    quantity: None,
                })
                .collect(),
        }
    }

    /// Currency of the base price.
    pub fn currency(&self) -> Currency {
        self.price.currency
    }
}

/// An add-on with its selected quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraOption {
    pub id: ExtraId,
    pub name: String,
    /// Price of one unit of this extra.
    pub value: Money,
    pub quantity: u32,
}

impl ExtraOption {
    pub fn new(id: ExtraId, name: impl Into<String>, value: Money) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            quantity: 0,
        }
    }

    /// Whether the user picked at least one of this extra.
    pub fn is_selected(&self) -> bool {
        self.quantity > 0
    }

    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

fn non_negative(amount: f64, currency: Currency, field: &str) -> Result<Money, FoodError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(FoodError::InvalidCatalog(format!(
            "{field} must be a non-negative number, got {amount}"
        )));
    }
    Money::from_decimal(amount, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FoodRecord {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Ao molho",
            "description": "Macarrão ao molho branco",
            "price": 19.9,
            "category": 1,
            "image_url": "https://example.com/full.png",
            "thumbnail_url": "https://example.com/thumb.png",
            "extras": [
                { "id": 1, "name": "Bacon", "value": 1.5, "quantity": 4 },
                { "id": 2, "name": "Frango", "value": 2 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_from_record_resets_quantities() {
        let item = Item::from_record(record(), Currency::BRL).unwrap();
        assert_eq!(item.price, Money::new(1990, Currency::BRL));
        assert_eq!(item.extras.len(), 2);
        assert!(item.extras.iter().all(|e| e.quantity == 0));
        assert_eq!(item.extras[0].value.minor_units, 150);
    }

    #[test]
    fn test_from_record_rejects_duplicate_extras() {
        let mut rec = record();
        rec.extras[1].id = ExtraId::new(1);
        let err = Item::from_record(rec, Currency::BRL).unwrap_err();
        assert!(matches!(err, FoodError::InvalidCatalog(_)));
    }

    #[test]
    fn test_validate_built_item() {
        let mut item = Item::from_record(record(), Currency::BRL).unwrap();
        assert!(item.validate().is_ok());

        item.extras[1].id = ExtraId::new(1);
        assert!(matches!(item.validate(), Err(FoodError::InvalidCatalog(_))));

        item.extras[1].id = ExtraId::new(2);
        item.extras[1].value = Money::new(200, Currency::USD);
        assert!(matches!(
            item.validate(),
            Err(FoodError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_from_record_rejects_negative_price() {
        let mut rec = record();
        rec.price = -1.0;
        assert!(Item::from_record(rec, Currency::BRL).is_err());
    }

    #[test]
    fn test_to_record_keeps_fields() {
        let item = Item::from_record(record(), Currency::BRL).unwrap();
        let back = item.to_record();
        assert_eq!(back.price, 19.9);
        assert_eq!(back.extras[1].value, 2.0);
        assert_eq!(back.extras[0].quantity, None);
        assert_eq!(back.thumbnail_url, "https://example.com/thumb.png");
    }

    #[test]
    fn test_default_item_is_free() {
        let item = Item::default();
        assert!(item.price.is_zero());
        assert!(item.extras.is_empty());
    }
}
