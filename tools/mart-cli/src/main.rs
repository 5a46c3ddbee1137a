//! Mart CLI - Command line client for the mart storefront backend.
//!
//! Commands:
//! - `mart home` - Banners, categories and hot panels
//! - `mart feed` - Page through the "guess you like" feed
//! - `mart hot` - Browse a hot recommendation list
//! - `mart cart` - List and change the cart
//! - `mart order` - Show one order or list orders
//! - `mart pay` - Request payment parameters
//! - `mart login` - Log in and obtain a token
//! - `mart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CartArgs, ConfigArgs, FeedArgs, HomeArgs, HotArgs, LoginArgs, OrderArgs, PayArgs,
};

/// Mart CLI - Talk to the storefront backend
#[derive(Parser)]
#[command(name = "mart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Environment from the config file to use
    #[arg(short, long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show home page content
    Home(HomeArgs),

    /// Page through the recommendation feed
    Feed(FeedArgs),

    /// Browse a hot recommendation list
    Hot(HotArgs),

    /// Manage the cart
    Cart(CartArgs),

    /// Show orders
    Order(OrderArgs),

    /// Request payment for an order
    Pay(PayArgs),

    /// Log in
    Login(LoginArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.env.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Home(args) => commands::home::run(args, &ctx).await,
        Commands::Feed(args) => commands::feed::run(args, &ctx).await,
        Commands::Hot(args) => commands::hot::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Pay(args) => commands::pay::run(args, &ctx).await,
        Commands::Login(args) => commands::login::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
