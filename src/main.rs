//! Checkout CLI
//!
//! Prices the cart described by a YAML fixture and prints its invoice, or
//! lists the fixture's catalog.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use checkout::{catalog::Catalog, fixtures::Fixture, invoice::Invoice};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "checkout", about = "Checkout pricing engine", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the invoice for the fixture's cart
    Invoice(FixtureArgs),

    /// List the fixture's products and coupons
    Catalog(FixtureArgs),
}

#[derive(Debug, Args)]
struct FixtureArgs {
    /// Path to the YAML fixture
    fixture: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Commands::Invoice(args) => {
            let fixture = Fixture::from_path(&args.fixture)?;
            let inventory = fixture.inventory()?;
            let mut cart = inventory.new_cart();

            fixture.fill_cart(&mut cart)?;

            info!(lines = cart.len(), total = %cart.total(), "priced cart");

            Invoice::from_cart(&cart).write_to(&mut handle)?;
        }
        Commands::Catalog(args) => {
            let inventory = Fixture::from_path(&args.fixture)?.inventory()?;

            write!(handle, "{}", Catalog::new(&inventory))?;
        }
    }

    handle.flush()?;

    Ok(())
}

fn build_env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

fn init_logging(log_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .with(build_env_filter(log_level))
        .try_init()?;

    Ok(())
}
