//! Quantity counter for the base item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many units of the base item are ordered. Never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BaseQuantity(u32);

impl BaseQuantity {
    pub const ONE: BaseQuantity = BaseQuantity(1);

    /// Returns `None` for zero.
    pub fn new(quantity: u32) -> Option<Self> {
        (quantity >= 1).then_some(Self(quantity))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// One more unit. No upper bound beyond `u32::MAX`.
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer unit, unless already at one.
    pub fn decrement(self) -> Self {
        if self.0 > 1 {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl Default for BaseQuantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for BaseQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for BaseQuantity {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "base quantity must be at least 1".to_string())
    }
}

impl From<BaseQuantity> for u32 {
    fn from(quantity: BaseQuantity) -> Self {
        quantity.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one() {
        assert_eq!(BaseQuantity::default().get(), 1);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let q = BaseQuantity::ONE.decrement();
        assert_eq!(q.get(), 1);

        let q = BaseQuantity::new(3).unwrap().decrement().decrement().decrement();
        assert_eq!(q.get(), 1);
    }

    #[test]
    fn test_increment_has_no_bound() {
        let n = 250;
        let q = (0..n).fold(BaseQuantity::ONE, |q, _| q.increment());
        assert_eq!(q.get(), 1 + n);
    }

    #[test]
    fn test_zero_rejected() {
        assert!(BaseQuantity::new(0).is_none());
        assert!(serde_json::from_str::<BaseQuantity>("0").is_err());
        assert_eq!(serde_json::from_str::<BaseQuantity>("4").unwrap().get(), 4);
    }
}
