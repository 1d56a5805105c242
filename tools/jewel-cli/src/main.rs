//! Jewel CLI - Operator tool for The Lab Jewel storefront.
//!
//! Commands:
//! - `jewel check` - Validate the embedded catalog, string tables and config
//! - `jewel browse` - Run the listing filter/sort engine
//! - `jewel show` - Print one diamond
//! - `jewel link` - Build a messaging link
//! - `jewel render` - Render a page as the storefront would serve it

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CheckArgs, LinkArgs, RenderArgs, ShowArgs};

/// Jewel CLI - Inspect and validate The Lab Jewel storefront
#[derive(Parser)]
#[command(name = "jewel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Site config file path (default: site.toml if found)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog, string tables and site config
    Check(CheckArgs),

    /// Filter and sort the catalog like the listing page
    Browse(BrowseArgs),

    /// Show one diamond
    Show(ShowArgs),

    /// Print a messaging link
    Link(LinkArgs),

    /// Render a page to stdout
    Render(RenderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args, &ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Link(args) => commands::link::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
