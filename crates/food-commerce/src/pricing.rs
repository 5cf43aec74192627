//! Order total calculations.
//!
//! Totals are derived on every call from the item, the extras and the base
//! quantity. Nothing is cached.

use crate::catalog::{ExtraOption, Item};
use crate::error::FoodError;
use crate::format::MoneyFormatter;
use crate::ids::ExtraId;
use crate::money::Money;
use crate::selection::{BaseQuantity, SelectionState};
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBreakdown {
    /// Base price times base quantity.
    pub items_subtotal: Money,
    /// Sum of value times quantity over the extras.
    pub extras_subtotal: Money,
    /// Items subtotal plus extras subtotal.
    pub total: Money,
    /// Per-extra pricing, selected extras only.
    pub extras: Vec<ExtraPricing>,
}

impl PriceBreakdown {
    /// Whether any extra contributes to the total.
    pub fn has_extras(&self) -> bool {
        !self.extras.is_empty()
    }
}

/// Pricing for a single extra.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraPricing {
    pub extra_id: ExtraId,
    pub unit_value: Money,
    pub quantity: u32,
    /// unit_value * quantity
    pub subtotal: Money,
}

/// Total price of the selection, unformatted.
///
/// `sum(extra.value * extra.quantity) + item.price * base_quantity`
pub fn total_amount(
    item: &Item,
    extras: &[ExtraOption],
    base_quantity: BaseQuantity,
) -> Result<Money, FoodError> {
    breakdown(item, extras, base_quantity).map(|b| b.total)
}

/// Total price of the selection, passed through `formatter`.
pub fn compute_total(
    item: &Item,
    extras: &[ExtraOption],
    base_quantity: BaseQuantity,
    formatter: &dyn MoneyFormatter,
) -> Result<String, FoodError> {
    total_amount(item, extras, base_quantity).map(|total| formatter.format(&total))
}

/// Full breakdown of the selection's price.
pub fn breakdown(
    item: &Item,
    extras: &[ExtraOption],
    base_quantity: BaseQuantity,
) -> Result<PriceBreakdown, FoodError> {
    let currency = item.currency();

    let lines = extras
        .iter()
        .filter(|extra| extra.is_selected())
        .map(|extra| {
            Ok(ExtraPricing {
                extra_id: extra.id,
                unit_value: extra.value,
                quantity: extra.quantity,
                subtotal: extra.value.try_multiply(i64::from(extra.quantity))?,
            })
        })
        .collect::<Result<Vec<_>, FoodError>>()?;

    let extras_subtotal = Money::try_sum(lines.iter().map(|l| &l.subtotal), currency)?;
    let items_subtotal = item
        .price
        .try_multiply(i64::from(base_quantity.get()))?;
    let total = extras_subtotal.try_add(&items_subtotal)?;

    Ok(PriceBreakdown {
        items_subtotal,
        extras_subtotal,
        total,
        extras: lines,
    })
}

impl SelectionState {
    /// Price breakdown of this selection.
    pub fn pricing(&self) -> Result<PriceBreakdown, FoodError> {
        breakdown(&self.item, &self.extras, self.base_quantity)
    }

    /// Formatted total of this selection.
    pub fn total(&self, formatter: &dyn MoneyFormatter) -> Result<String, FoodError> {
        compute_total(&self.item, &self.extras, self.base_quantity, formatter)
    }
}
