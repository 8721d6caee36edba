//! Marketplace Simulation - Main Application Entry Point
//!
//! Runs a scripted marketplace: a bank holding customer accounts, a seller
//! with an inventory, and two buyers purchasing from it. The narrative goes
//! to stdout; diagnostics go to stderr.
//!
//! # Architecture
//!
//! - **Models**: accounts, items, buyers and purchase receipts
//! - **Services**: the bank, the seller and the purchase workflow
//! - **Simulation**: the fixed startup scenario
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Run the scenario; a missing seeded account exits with status 1

use std::io;

use marketplace_simulation::{config::Config, error::AppError, simulation};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info"); stderr keeps stdout for the narrative
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().map_err(AppError::from)?;
    tracing::info!(bank_name = %config.bank_name, "Configuration loaded");

    let market = simulation::run(&config, &mut io::stdout().lock())?;
    tracing::info!(
        customers = market.bank.customers().len(),
        items = market.seller.inventory().len(),
        buyers = market.buyers.len(),
        "Simulation complete"
    );

    Ok(())
}
