//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;

/// Apply stock transactions to a product inventory
#[derive(Parser, Debug, Clone)]
#[command(name = "inventory-reconciler")]
#[command(
    about = "Apply stock transactions to a product inventory and report low stock and rejected transactions",
    long_about = None
)]
pub struct Config {
    /// Inventory input (id,name,category,price,stock)
    #[arg(long, value_name = "FILE", default_value = "inventario.txt")]
    pub inventory: PathBuf,

    /// Transactions input (kind,product_id,quantity,date)
    #[arg(long, value_name = "FILE", default_value = "transacciones.txt")]
    pub transactions: PathBuf,

    /// Updated inventory output
    #[arg(long, value_name = "FILE", default_value = "inventario_actualizado.txt")]
    pub output: PathBuf,

    /// Low-stock report output
    #[arg(long, value_name = "FILE", default_value = "productos_bajo_stock.txt")]
    pub report: PathBuf,

    /// Error log output
    #[arg(long = "error-log", value_name = "FILE", default_value = "errores.log")]
    pub error_log: PathBuf,

    /// Products with stock strictly below this value are reported
    #[arg(long, value_name = "UNITS", default_value_t = 10, allow_negative_numbers = true)]
    pub threshold: i64,
}
