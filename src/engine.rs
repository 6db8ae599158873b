//! Reconciliation engine.
//!
//! Applies an ordered transaction sequence to a catalog. Each transaction is
//! handled on its own against the current (possibly already mutated) stock;
//! failures are collected as [`TransactionError`] records and never stop the
//! run. Only stock quantities change. No product is added, removed, or
//! otherwise edited.

use crate::error::TransactionError;
use crate::product::Product;
use crate::transaction::{Transaction, TxKind};
use log::{debug, warn};
use std::collections::HashMap;

/// Applies transactions to a catalog it owns for the duration of a run.
///
/// The identifier index is built once in [`Reconciler::new`] and stays valid
/// because the product set never changes afterwards.
///
/// # Duplicate identifiers
///
/// Identifiers are expected to be unique. If they are not, the last product
/// with a given identifier receives every transaction for it; earlier
/// duplicates are left untouched.
pub struct Reconciler {
    /// Products in input order.
    products: Vec<Product>,

    /// Product identifier to position in `products`.
    index: HashMap<String, usize>,

    /// Failures in processing order.
    errors: Vec<TransactionError>,

    applied: usize,
}

impl Reconciler {
    /// Takes ownership of the catalog and indexes it.
    pub fn new(products: Vec<Product>) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if let Some(shadowed) = index.insert(product.id.clone(), pos) {
                warn!(
                    "Duplicate product id {} at positions {} and {}, using the later one",
                    product.id, shadowed, pos
                );
            }
        }

        Reconciler {
            products,
            index,
            errors: Vec::new(),
            applied: 0,
        }
    }

    /// Applies one transaction.
    ///
    /// On failure the error is recorded and a reference to it returned; the
    /// catalog is left as it was.
    pub fn apply(&mut self, tx: &Transaction) -> std::result::Result<(), &TransactionError> {
        if self.record(tx) {
            return Ok(());
        }
        Err(&self.errors[self.errors.len() - 1])
    }

    /// Applies one transaction, keeping any failure in `errors`. Returns
    /// `true` on success.
    fn record(&mut self, tx: &Transaction) -> bool {
        match self.try_apply(tx) {
            Ok(()) => {
                self.applied += 1;
                true
            }
            Err(e) => {
                warn!("{}", e);
                self.errors.push(e);
                false
            }
        }
    }

    fn try_apply(&mut self, tx: &Transaction) -> std::result::Result<(), TransactionError> {
        let pos = match self.index.get(&tx.product_id) {
            Some(&pos) => pos,
            None => {
                return Err(TransactionError::ProductNotFound {
                    product_id: tx.product_id.clone(),
                    kind: tx.kind.clone(),
                    date: tx.date.clone(),
                });
            }
        };

        let product = &mut self.products[pos];

        match &tx.kind {
            TxKind::Sale => {
                let stock = product.stock;
                if !product.sell(tx.quantity) {
                    return Err(TransactionError::InsufficientStock {
                        product_id: product.id.clone(),
                        stock,
                        requested: tx.quantity,
                        date: tx.date.clone(),
                    });
                }
            }
            TxKind::Purchase | TxKind::Return => product.restock(tx.quantity),
            TxKind::Unknown(code) => {
                return Err(TransactionError::UnknownKind {
                    kind: code.clone(),
                    product_id: tx.product_id.clone(),
                    date: tx.date.clone(),
                });
            }
        }

        debug!(
            "Applied {} of {} to {}, stock now {}",
            tx.kind, tx.quantity, product.id, product.stock
        );

        Ok(())
    }

    /// Current state of the catalog.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Failures recorded so far.
    pub fn errors(&self) -> &[TransactionError] {
        &self.errors
    }

    /// Looks up a product by identifier.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    /// Ends the run and hands the catalog back with the collected errors.
    pub fn finish(self) -> Reconciliation {
        Reconciliation {
            products: self.products,
            errors: self.errors,
            applied: self.applied,
        }
    }
}

/// Outcome of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The catalog after every transaction was applied, in input order.
    pub products: Vec<Product>,

    /// One entry per failed transaction, in processing order.
    pub errors: Vec<TransactionError>,

    applied: usize,
}

impl Reconciliation {
    /// Number of transactions applied successfully.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Number of transactions that failed.
    pub fn failed(&self) -> usize {
        self.errors.len()
    }
}

/// Applies `transactions`, in order, to `products` and returns the mutated
/// catalog together with the ordered error records.
pub fn reconcile(products: Vec<Product>, transactions: &[Transaction]) -> Reconciliation {
    let mut reconciler = Reconciler::new(products);
    for tx in transactions {
        reconciler.record(tx);
    }
    reconciler.finish()
}
