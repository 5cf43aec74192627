//! Mark a food as favorite.

use anyhow::Result;
use serde_json::json;

use super::FavoriteArgs;
use crate::context::Context;

/// Run the favorite command.
pub async fn run(args: FavoriteArgs, ctx: &Context) -> Result<()> {
    let session = super::load_session(ctx, args.id).await?;
    let store = ctx.store()?;

    let navigation = session.toggle_favorite(&store).await?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "id": session.item().id,
            "name": session.item().name,
            "navigation": navigation,
        }));
        return Ok(());
    }

    ctx.output.success(&format!("Added {} to favorites", session.item().name));
    ctx.output.kv("Next", navigation.route.as_str());

    Ok(())
}
