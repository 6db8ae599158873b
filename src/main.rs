//! Inventory Reconciler CLI
//!
//! Reads an inventory and a transaction list, applies the transactions, and
//! writes the updated inventory, a low-stock report, and an error log.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --inventory inventario.txt --transactions transacciones.txt --threshold 10
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use chrono::Local;
use clap::Parser;
use inventory_reconciler::{
    create_output, read_catalog, read_transactions, reconcile, write_catalog, write_error_log,
    write_low_stock_report, Config, ReconcileError, Result,
};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let config = Config::parse();
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| ReconcileError::Open {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn run(config: &Config) -> Result<()> {
    // Both inputs must parse before anything is applied or written.
    let products = read_catalog(open_input(&config.inventory)?)?;
    let transactions = read_transactions(open_input(&config.transactions)?)?;
    info!(
        "Loaded {} products and {} transactions",
        products.len(),
        transactions.len()
    );

    let result = reconcile(products, &transactions);
    info!(
        "Applied {} transactions, {} rejected",
        result.applied(),
        result.failed()
    );

    write_catalog(create_output(&config.output)?, &result.products)?;
    let low = write_low_stock_report(
        create_output(&config.report)?,
        &result.products,
        config.threshold,
    )?;
    write_error_log(
        create_output(&config.error_log)?,
        &result.errors,
        Local::now().naive_local(),
    )?;

    println!("Done.");
    println!("Updated inventory -> {}", config.output.display());
    println!(
        "Low stock report ({} products) -> {}",
        low,
        config.report.display()
    );
    println!(
        "Errors ({}) -> {}",
        result.failed(),
        config.error_log.display()
    );

    Ok(())
}
