//! Selection state and its transitions.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{ExtraOption, Item};
use crate::ids::ExtraId;
use crate::selection::{ledger, BaseQuantity};

/// The in-session record of what the user has chosen.
///
/// Before the catalog lookup completes this holds a default item with no
/// extras and a zero price.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    pub item: Item,
    /// Extras with their selected quantities, in catalog order.
    pub extras: Vec<ExtraOption>,
    pub base_quantity: BaseQuantity,
}

impl SelectionState {
    /// Seed a fresh selection from a loaded item: every extra unselected,
    /// one unit of the base item.
    pub fn new(item: Item) -> Self {
        let extras = item
            .extras
            .iter()
            .map(|extra| extra.with_quantity(0))
            .collect();
        Self {
            item,
            extras,
            base_quantity: BaseQuantity::ONE,
        }
    }

    /// Apply one user action, producing the next state.
    pub fn apply(&self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::IncrementExtra(id) => Self {
                extras: ledger::increment(&self.extras, id),
                ..self.clone()
            },
            SelectionAction::DecrementExtra(id) => Self {
                extras: ledger::decrement(&self.extras, id),
                ..self.clone()
            },
            SelectionAction::IncrementFood => Self {
                base_quantity: self.base_quantity.increment(),
                ..self.clone()
            },
            SelectionAction::DecrementFood => Self {
                base_quantity: self.base_quantity.decrement(),
                ..self.clone()
            },
        }
    }

    /// Apply a sequence of actions in order.
    pub fn apply_all(&self, actions: impl IntoIterator<Item = SelectionAction>) -> Self {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.apply(action))
    }

    pub fn extra_quantity(&self, id: ExtraId) -> Option<u32> {
        ledger::quantity_of(&self.extras, id)
    }
}

/// A user action on the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionAction {
    IncrementExtra(ExtraId),
    DecrementExtra(ExtraId),
    IncrementFood,
    DecrementFood,
}

impl fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionAction::IncrementExtra(id) => write!(f, "extra+{}", id),
            SelectionAction::DecrementExtra(id) => write!(f, "extra-{}", id),
            SelectionAction::IncrementFood => write!(f, "food+"),
            SelectionAction::DecrementFood => write!(f, "food-"),
        }
    }
}

impl FromStr for SelectionAction {
    type Err = String;

    /// Parses `extra+ID`, `extra-ID`, `food+` and `food-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "food+" => return Ok(SelectionAction::IncrementFood),
            "food-" => return Ok(SelectionAction::DecrementFood),
            _ => {}
        }

        let parse_id = |raw: &str| {
            raw.parse::<ExtraId>()
                .map_err(|e| format!("invalid extra id '{}': {}", raw, e))
        };

        if let Some(raw) = s.strip_prefix("extra+") {
            Ok(SelectionAction::IncrementExtra(parse_id(raw)?))
        } else if let Some(raw) = s.strip_prefix("extra-") {
            Ok(SelectionAction::DecrementExtra(parse_id(raw)?))
        } else {
            Err(format!(
                "unknown action '{}' (expected extra+ID, extra-ID, food+ or food-)",
                s
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::FoodId;
    use crate::money::{Currency, Money};

    fn item() -> Item {
        Item {
            id: FoodId::new(1),
            name: "Veggie".to_string(),
            price: Money::new(1000, Currency::BRL),
            extras: vec![
                ExtraOption::new(ExtraId::new(1), "Bacon", Money::new(200, Currency::BRL))
                    .with_quantity(5),
                ExtraOption::new(ExtraId::new(2), "Frango", Money::new(300, Currency::BRL)),
            ],
            ..Item::default()
        }
    }

    #[test]
    fn test_new_seeds_zero_quantities() {
        let state = SelectionState::new(item());
        assert_eq!(state.extra_quantity(ExtraId::new(1)), Some(0));
        assert_eq!(state.base_quantity, BaseQuantity::ONE);
    }

    #[test]
    fn test_apply_actions() {
        let state = SelectionState::new(item()).apply_all([
            SelectionAction::IncrementExtra(ExtraId::new(1)),
            SelectionAction::IncrementExtra(ExtraId::new(1)),
            SelectionAction::IncrementExtra(ExtraId::new(2)),
            SelectionAction::IncrementFood,
        ]);

        assert_eq!(state.extra_quantity(ExtraId::new(1)), Some(2));
        assert_eq!(state.extra_quantity(ExtraId::new(2)), Some(1));
        assert_eq!(state.base_quantity.get(), 2);
    }

    #[test]
    fn test_floors_hold() {
        let start = SelectionState::new(item());
        let state = start.apply_all([
            SelectionAction::DecrementFood,
            SelectionAction::DecrementExtra(ExtraId::new(2)),
        ]);
        assert_eq!(state, start);
    }

    #[test]
    fn test_default_state_ignores_actions_on_extras() {
        let state = SelectionState::default().apply(SelectionAction::IncrementExtra(ExtraId::new(1)));
        assert!(state.extras.is_empty());
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            "extra+3".parse::<SelectionAction>().unwrap(),
            SelectionAction::IncrementExtra(ExtraId::new(3))
        );
        assert_eq!(
            "extra-3".parse::<SelectionAction>().unwrap(),
            SelectionAction::DecrementExtra(ExtraId::new(3))
        );
        assert_eq!("food+".parse::<SelectionAction>().unwrap(), SelectionAction::IncrementFood);
        assert_eq!("food-".parse::<SelectionAction>().unwrap(), SelectionAction::DecrementFood);
        assert!("extra+x".parse::<SelectionAction>().is_err());
        assert!("drink+".parse::<SelectionAction>().is_err());
    }

    #[test]
    fn test_action_display_round_trips() {
        let action = SelectionAction::DecrementExtra(ExtraId::new(8));
        assert_eq!(action.to_string().parse::<SelectionAction>().unwrap(), action);
    }
}
