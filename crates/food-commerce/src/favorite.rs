//! Favorite toggle.

use tracing::{info, warn};

use crate::catalog::Item;
use crate::error::FoodError;
use crate::services::OrderSink;
use crate::session::{Navigation, NavigationPolicy, Route};

/// Icon shown when the food is marked favorite.
pub const FAVORITE_ICON: &str = "favorite";
/// Icon shown otherwise.
pub const NOT_FAVORITE_ICON: &str = "favorite-border";

/// Favorite marker for the food on screen.
///
/// `is_favorite` only selects the icon. Toggling sends the item to the sink
/// and navigates to Favorites; it does not flip the flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FavoriteToggle {
    is_favorite: bool,
}

impl FavoriteToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn icon_name(&self) -> &'static str {
        if self.is_favorite {
            FAVORITE_ICON
        } else {
            NOT_FAVORITE_ICON
        }
    }

    /// Mark `item` as favorite and signal navigation to the Favorites view.
    ///
    /// With [`NavigationPolicy::Always`] a sink failure is logged and the
    /// navigation is still returned. With [`NavigationPolicy::OnSuccess`] the
    /// failure is returned instead.
    pub async fn toggle(
        &self,
        item: &Item,
        sink: &dyn OrderSink,
        policy: NavigationPolicy,
    ) -> Result<Navigation, FoodError> {
        match sink.mark_favorite(item).await {
            Ok(()) => info!(food_id = %item.id, "marked favorite"),
            Err(e) if policy == NavigationPolicy::Always => {
                warn!(food_id = %item.id, error = %e, "favorite not accepted, navigating anyway")
            }
            Err(e) => return Err(e),
        }
        Ok(Navigation::reset_to(Route::Favorites))
    }
}
