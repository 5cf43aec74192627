//! Selection module.
//!
//! The mutable part of a food details session: extra quantities, the base
//! quantity, and the reducer-style transitions between states.

pub mod ledger;
mod quantity;
mod state;

pub use quantity::BaseQuantity;
pub use state::{SelectionAction, SelectionState};
