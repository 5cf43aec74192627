//! Order module.
//!
//! Contains the payload sent to the order sink and the composer that builds
//! it from a selection.

mod payload;

pub use payload::{compose, OrderExtra, OrderPayload};
