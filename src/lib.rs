//! # Inventory Reconciler
//!
//! Applies an ordered list of stock transactions (sales, purchases, returns)
//! to a product inventory, then reports the updated inventory, the products
//! running low, and every transaction that could not be applied.
//!
//! ## Design Principles
//!
//! - **In-memory engine**: [`reconcile`] never touches files; readers and
//!   writers live in their own modules
//! - **Non-fatal transaction failures**: unknown products, insufficient stock
//!   and unknown kinds are collected, never raised
//! - **Fatal input defects**: a malformed numeric field aborts before any
//!   transaction is applied
//! - **Exact prices**: `rust_decimal`, rendered with two decimal places
//!
//! ## Example
//!
//! ```
//! use inventory_reconciler::{read_catalog, read_transactions, reconcile};
//! use std::io::Cursor;
//!
//! let catalog = "id,name,category,price,stock\nP1,Pen,Office,1.25,5\n";
//! let txs = "kind,product,quantity,date\nsale,P1,2,2024-01-01\nsale,P9,1,2024-01-02\n";
//!
//! let products = read_catalog(Cursor::new(catalog)).unwrap();
//! let transactions = read_transactions(Cursor::new(txs)).unwrap();
//! let result = reconcile(products, &transactions);
//!
//! assert_eq!(result.products[0].stock, 3);
//! assert_eq!(result.errors.len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
mod input;
pub mod price;
pub mod product;
pub mod report;
pub mod transaction;

pub use catalog::{read_catalog, write_catalog};
pub use config::Config;
pub use engine::{reconcile, Reconciler, Reconciliation};
pub use error::{ReconcileError, Result, TransactionError};
pub use price::Price;
pub use product::Product;
pub use report::{create_output, write_error_log, write_low_stock_report};
pub use transaction::{read_transactions, Transaction, TxKind};
