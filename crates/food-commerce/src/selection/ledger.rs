//! Extra ledger: per-extra quantity transitions.
//!
//! Both operations are pure. They return a new sequence in which at most one
//! extra differs from the input; an unknown id returns an equal copy.

use crate::catalog::ExtraOption;
use crate::ids::ExtraId;

/// Add one unit of the extra with `id`.
pub fn increment(extras: &[ExtraOption], id: ExtraId) -> Vec<ExtraOption> {
    update(extras, id, |quantity| quantity.saturating_add(1))
}

/// Remove one unit of the extra with `id`. Quantities floor at 0.
pub fn decrement(extras: &[ExtraOption], id: ExtraId) -> Vec<ExtraOption> {
    update(extras, id, |quantity| quantity.saturating_sub(1))
}

/// Extras the user picked, in load order.
pub fn selected(extras: &[ExtraOption]) -> impl Iterator<Item = &ExtraOption> {
    extras.iter().filter(|extra| extra.is_selected())
}

/// Quantity currently selected for `id`, if the extra exists.
pub fn quantity_of(extras: &[ExtraOption], id: ExtraId) -> Option<u32> {
    extras.iter().find(|extra| extra.id == id).map(|extra| extra.quantity)
}

fn update(extras: &[ExtraOption], id: ExtraId, f: impl Fn(u32) -> u32) -> Vec<ExtraOption> {
    extras
        .iter()
        .map(|extra| {
            if extra.id == id {
                extra.with_quantity(f(extra.quantity))
            } else {
                extra.clone()
            }
        })
        .collect()
}
