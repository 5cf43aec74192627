//! Session module.
//!
//! Ties the selection, pricing, composer and favorite toggle to the service
//! boundaries for one food details screen.

mod details;
mod navigation;

pub use details::FoodDetailsSession;
pub use navigation::{Navigation, NavigationPolicy, Route};
