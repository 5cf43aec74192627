//! Show a food and its extras.

use anyhow::Result;
use serde_json::json;

use super::ShowArgs;
use crate::context::Context;
use crate::output::quantity_badge;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let session = super::load_session(ctx, args.id).await?;
    let item = session.item();

    if ctx.output.is_json() {
        let extras: Vec<_> = item
            .extras
            .iter()
            .map(|extra| {
                json!({
                    "id": extra.id,
                    "name": extra.name,
                    "value": session.format(&extra.value),
                })
            })
            .collect();
        ctx.output.json(&json!({
            "id": item.id,
            "name": item.name,
            "description": item.description,
            "category": item.category,
            "price": session.formatted_price(),
            "extras": extras,
            "favorite_icon": session.favorite_icon(),
        }));
        return Ok(());
    }

    ctx.output.header(&item.name);
    if !item.description.is_empty() {
        ctx.output.kv("Description", &item.description);
    }
    ctx.output.kv("Category", &item.category.to_string());
    ctx.output.kv("Price", &session.formatted_price());

    if item.extras.is_empty() {
        ctx.output.info("No extras available");
        return Ok(());
    }

    ctx.output.header("Extras");
    let widths = [4, 24, 12, 4];
    ctx.output.table_row(&["ID", "Name", "Value", "Qty"], &widths);
    for extra in session.extras() {
        let id = extra.id.to_string();
        let value = session.format(&extra.value);
        let quantity = quantity_badge(extra.quantity);
        ctx.output
            .table_row(&[&id, &extra.name, &value, &quantity], &widths);
    }

    Ok(())
}
