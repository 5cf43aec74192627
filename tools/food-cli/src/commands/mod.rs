//! CLI command implementations.

pub mod config;
pub mod favorite;
pub mod order;
pub mod show;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use food_commerce::selection::SelectionAction;
use food_commerce::session::FoodDetailsSession;
use food_commerce::{ExtraId, FoodId};

use crate::context::Context;

/// Upper bound for `--quantity` and the QTY of `--extra`.
pub const MAX_QUANTITY: u32 = 99;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Food ID.
    pub id: FoodId,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Food ID.
    pub id: FoodId,

    /// Extra quantity as ID=QTY, QTY up to 99. Repeatable.
    #[arg(short, long = "extra", value_parser = parse_extra)]
    pub extras: Vec<(ExtraId, u32)>,

    /// Units of the food (1 to 99).
    #[arg(
        short,
        long,
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_QUANTITY))
    )]
    pub quantity: u32,

    /// Raw actions applied after --extra and --quantity: extra+ID, extra-ID, food+, food-.
    #[arg(short, long = "action", allow_hyphen_values = true)]
    pub actions: Vec<SelectionAction>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Print the order without submitting it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the favorite command.
#[derive(Args)]
pub struct FavoriteArgs {
    /// Food ID.
    pub id: FoodId,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Parse `ID=QTY`.
fn parse_extra(raw: &str) -> Result<(ExtraId, u32), String> {
    let (id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got '{}'", raw))?;
    let id = id
        .parse::<ExtraId>()
        .map_err(|e| format!("invalid extra id '{}': {}", id, e))?;
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity '{}': {}", quantity, e))?;
    if quantity > MAX_QUANTITY {
        return Err(format!(
            "quantity {} exceeds the maximum of {}",
            quantity, MAX_QUANTITY
        ));
    }
    Ok((id, quantity))
}

/// Open a session on food `id`, showing a spinner while the store is read.
pub(crate) async fn load_session(ctx: &Context, id: FoodId) -> Result<FoodDetailsSession> {
    let store = ctx.store()?;
    let mut session = ctx.session()?;

    let spinner = ctx.output.spinner(&format!("Loading food {}...", id));
    let loaded = session.load(&store, id).await;
    spinner.finish_and_clear();

    loaded.with_context(|| format!("Failed to load food {} from {}", id, store.path().display()))?;
    ctx.output.debug(&format!("Loaded from {}", store.path().display()));
    Ok(session)
}
