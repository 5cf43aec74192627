//! Compose and submit an order.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use serde_json::json;

use food_commerce::session::FoodDetailsSession;

use super::OrderArgs;
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let mut session = super::load_session(ctx, args.id).await?;
    apply_selection(&mut session, &args)?;

    let pricing = session.pricing()?;
    let total = session.cart_total()?;
    let order = session.compose_order();

    if ctx.output.is_json() && args.dry_run {
        ctx.output.json(&json!({ "order": order, "total": total }));
        return Ok(());
    }

    ctx.output.header(&format!("Order: {}", session.item().name));
    ctx.output.kv("Unit price", &session.formatted_price());
    ctx.output.kv("Quantity", &session.base_quantity().to_string());
    for extra in &pricing.extras {
        let name = session
            .extras()
            .iter()
            .find(|e| e.id == extra.extra_id)
            .map(|e| e.name.as_str())
            .unwrap_or_default();
        ctx.output.kv(
            &format!("+ {} x{}", name, extra.quantity),
            &session.format(&extra.subtotal),
        );
    }
    if pricing.has_extras() {
        ctx.output.kv("Extras", &session.format(&pricing.extras_subtotal));
    }
    ctx.output.kv("Total", &total);

    if args.dry_run {
        ctx.output.info("");
        ctx.output.json(&order);
        ctx.output.success("Dry run, nothing submitted");
        return Ok(());
    }

    if !args.yes && !ctx.output.is_json() {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt("Place this order?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let store = ctx.store()?;
    let spinner = ctx.output.spinner("Submitting order...");
    let navigation = session.finish_order(&store).await;
    spinner.finish_and_clear();
    let navigation = navigation?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "order": order,
            "total": total,
            "navigation": navigation,
        }));
        return Ok(());
    }

    ctx.output.success("Order placed");
    ctx.output.kv("Next", navigation.route.as_str());

    Ok(())
}

/// Apply `--extra`, `--quantity` and `--action` in that order.
fn apply_selection(session: &mut FoodDetailsSession, args: &OrderArgs) -> Result<()> {
    for &(id, quantity) in &args.extras {
        if session.state().extra_quantity(id).is_none() {
            bail!("Food {} has no extra {}", session.item().id, id);
        }
        for _ in 0..quantity {
            session.increment_extra(id);
        }
    }

    for _ in 1..args.quantity {
        session.increment_food();
    }

    for &action in &args.actions {
        session.dispatch(action);
    }

    Ok(())
}
