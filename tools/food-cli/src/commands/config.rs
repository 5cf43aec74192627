//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[store]");
    ctx.output.kv("path", &ctx.config.store.path);

    ctx.output.info("[pricing]");
    ctx.output.kv("currency", &ctx.config.pricing.currency);
    ctx.output.kv("locale", &ctx.config.pricing.locale);

    ctx.output.info("[session]");
    ctx.output.kv("navigation", ctx.config.session.navigation.as_str());

    ctx.output.info("[log]");
    ctx.output.kv("level", &ctx.config.log.level);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    let store = ctx.store()?;
    if store.init().await? {
        ctx.output
            .success(&format!("Created empty store: {}", store.path().display()));
    }

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.config.validate()?;

    let store = ctx.store()?;
    if !store.path().exists() {
        ctx.output
            .warn(&format!("Store not found: {}", store.path().display()));
    }

    ctx.output.success("Configuration is valid");
    Ok(())
}
