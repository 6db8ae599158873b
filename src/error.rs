//! Error types for the inventory reconciler.
//!
//! [`ReconcileError`] covers structural failures that abort a run.
//! [`TransactionError`] is the per-transaction error record produced by the
//! engine; it never aborts anything.

use crate::transaction::TxKind;
use thiserror::Error;

/// Result type alias for fallible I/O-facing operations.
pub type Result<T> = std::result::Result<T, ReconcileError>;

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// Failed to open, read, or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV layer error (bad quoting, invalid UTF-8, ...)
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A numeric field could not be parsed
    #[error("Invalid {field} '{value}' at line {line}: {message}")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
        message: String,
    },

    /// Failed to open an input file, with the path for context
    #[error("Cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A transaction that could not be applied to the catalog.
///
/// The `Display` form is the human-readable error record written to the
/// error log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Product {product_id} not found for {kind} transaction (date: {date})")]
    ProductNotFound {
        product_id: String,
        kind: TxKind,
        date: String,
    },

    #[error(
        "Insufficient stock for sale. Product: {product_id}, current stock: {stock}, requested: {requested} (date: {date})"
    )]
    InsufficientStock {
        product_id: String,
        stock: i64,
        requested: i64,
        date: String,
    },

    #[error("Unknown transaction type '{kind}' for product {product_id} (date: {date})")]
    UnknownKind {
        kind: String,
        product_id: String,
        date: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(
        TransactionError::ProductNotFound {
            product_id: "P999".to_string(),
            kind: TxKind::Purchase,
            date: "2024-01-05".to_string(),
        },
        "Product P999 not found for purchase transaction (date: 2024-01-05)"
    )]
    #[case::insufficient_stock(
        TransactionError::InsufficientStock {
            product_id: "P001".to_string(),
            stock: 2,
            requested: 5,
            date: "2024-01-06".to_string(),
        },
        "Insufficient stock for sale. Product: P001, current stock: 2, requested: 5 (date: 2024-01-06)"
    )]
    #[case::unknown_kind(
        TransactionError::UnknownKind {
            kind: "AJUSTE".to_string(),
            product_id: "P001".to_string(),
            date: "2024-01-07".to_string(),
        },
        "Unknown transaction type 'AJUSTE' for product P001 (date: 2024-01-07)"
    )]
    fn test_transaction_error_display(#[case] error: TransactionError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_invalid_field_display() {
        let err = ReconcileError::InvalidField {
            line: 3,
            field: "price",
            value: "abc".to_string(),
            message: "Invalid decimal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid price 'abc' at line 3: Invalid decimal"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ReconcileError = io_error.into();
        assert!(matches!(error, ReconcileError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
