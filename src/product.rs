//! Product (catalog entry) model and stock operations.
//!
//! Only `stock` ever changes once a product has been read; identifier, name,
//! category and price are fixed for the lifetime of a run.

use crate::price::Price;
use serde::Serialize;

/// A single catalog entry.
///
/// Field order matches the column order of the written catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Identifier, unique within a catalog.
    pub id: String,

    pub name: String,

    pub category: String,

    /// Unit price, rendered with two decimal places.
    pub price: Price,

    /// Units on hand. Signed because input may already carry negative values.
    pub stock: i64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        stock: i64,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
        }
    }

    /// Removes `quantity` units from stock.
    ///
    /// Returns `false` and leaves stock untouched when fewer than `quantity`
    /// units are on hand.
    pub fn sell(&mut self, quantity: i64) -> bool {
        if self.stock < quantity {
            return false;
        }

        self.stock = self.stock.saturating_sub(quantity);
        true
    }

    /// Adds `quantity` units to stock. Used for both purchases and returns.
    pub fn restock(&mut self, quantity: i64) {
        self.stock = self.stock.saturating_add(quantity);
    }

    /// Returns `true` if stock is strictly below `threshold`.
    pub fn is_below(&self, threshold: i64) -> bool {
        self.stock < threshold
    }
}
