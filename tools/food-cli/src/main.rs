//! Food CLI - browse the catalog and compose single-item orders.
//!
//! Commands:
//! - `food show` - Show a food, its extras and its unit price
//! - `food order` - Select extras and quantity, then submit the order
//! - `food favorite` - Mark a food as favorite
//! - `food config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, FavoriteArgs, OrderArgs, ShowArgs};

/// Food CLI - Compose and submit food orders
#[derive(Parser)]
#[command(name = "food")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a food and its extras
    Show(ShowArgs),

    /// Compose and submit an order for one food
    Order(OrderArgs),

    /// Mark a food as favorite
    Favorite(FavoriteArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    init_tracing(&ctx.config.log.level, cli.verbose);
    ctx.log_resolution();

    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Favorite(args) => commands::favorite::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
