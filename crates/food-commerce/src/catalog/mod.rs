//! Catalog module.
//!
//! Contains the food item, its extras, and their wire representations.

mod item;

pub use item::{ExtraOption, ExtraRecord, FoodRecord, Item};
