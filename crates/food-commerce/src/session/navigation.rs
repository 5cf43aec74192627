//! Navigation signals emitted after submit and favorite.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Views the food details screen can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Orders,
    Favorites,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Orders => "Orders",
            Route::Favorites => "Favorites",
        }
    }

    /// Tab index the host's navigator expects for this view.
    pub fn index(&self) -> usize {
        match self {
            Route::Orders => 1,
            Route::Favorites => 2,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reset the navigation history to a fresh stack rooted at `route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub route: Route,
    pub index: usize,
    /// The new history, root first.
    pub routes: Vec<Route>,
}

impl Navigation {
    pub fn reset_to(route: Route) -> Self {
        Self {
            route,
            index: route.index(),
            routes: vec![route],
        }
    }
}

/// When to navigate after a sink call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationPolicy {
    /// Navigate whatever the sink answers. Failures are only logged.
    #[default]
    Always,
    /// Navigate only when the sink accepted the request.
    OnSuccess,
}

impl NavigationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationPolicy::Always => "always",
            NavigationPolicy::OnSuccess => "on_success",
        }
    }
}

impl std::str::FromStr for NavigationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(NavigationPolicy::Always),
            "on_success" | "on-success" => Ok(NavigationPolicy::OnSuccess),
            other => Err(format!("unknown navigation policy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_to() {
        let nav = Navigation::reset_to(Route::Orders);
        assert_eq!(nav.index, 1);
        assert_eq!(nav.routes, vec![Route::Orders]);

        let nav = Navigation::reset_to(Route::Favorites);
        assert_eq!(nav.index, 2);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("always".parse::<NavigationPolicy>().unwrap(), NavigationPolicy::Always);
        assert_eq!(
            "on-success".parse::<NavigationPolicy>().unwrap(),
            NavigationPolicy::OnSuccess
        );
        assert!("sometimes".parse::<NavigationPolicy>().is_err());
    }
}
