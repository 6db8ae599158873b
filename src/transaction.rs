//! Transaction model and transaction reader.

use crate::error::Result;
use crate::input::{csv_reader, line_of, parse_field, text_field};
use log::debug;
use std::fmt;
use std::io::Read;

/// Number of columns in a transaction record: kind, product, quantity, date.
pub const TRANSACTION_FIELDS: usize = 4;

/// Transaction kind.
///
/// Unrecognized codes are kept verbatim so they can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxKind {
    /// Removes stock, refused if it would go negative.
    Sale,

    /// Adds stock.
    Purchase,

    /// Adds stock. Kept apart from `Purchase` for reporting only.
    Return,

    /// Any other code, as read.
    Unknown(String),
}

impl TxKind {
    /// Maps a wire code to a kind.
    ///
    /// Matching is exact: `VENTA`, `COMPRA` and `DEVOLUCION`, or the English
    /// `sale`, `purchase` and `return`. Any other spelling, including a
    /// different case, is kept as `Unknown`.
    pub fn parse(code: &str) -> Self {
        match code {
            "VENTA" | "sale" => TxKind::Sale,
            "COMPRA" | "purchase" => TxKind::Purchase,
            "DEVOLUCION" | "return" => TxKind::Return,
            other => TxKind::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Sale => f.write_str("sale"),
            TxKind::Purchase => f.write_str("purchase"),
            TxKind::Return => f.write_str("return"),
            TxKind::Unknown(code) => f.write_str(code),
        }
    }
}

/// An inventory-affecting transaction. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TxKind,

    /// Identifier of the targeted product.
    pub product_id: String,

    pub quantity: i64,

    /// Opaque date string, carried into error messages only.
    pub date: String,
}

impl Transaction {
    pub fn new(
        kind: TxKind,
        product_id: impl Into<String>,
        quantity: i64,
        date: impl Into<String>,
    ) -> Self {
        Transaction {
            kind,
            product_id: product_id.into(),
            quantity,
            date: date.into(),
        }
    }
}

/// Reads transactions from delimited text.
///
/// The first record is a header. Records with fewer than
/// [`TRANSACTION_FIELDS`] fields are skipped. A quantity that is not an
/// integer aborts the read.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = csv_reader(reader);
    let mut transactions = Vec::new();

    for (row_idx, result) in csv_reader.byte_records().enumerate() {
        let record = result?;
        let line = line_of(&record, row_idx as u64 + 2);

        if record.len() < TRANSACTION_FIELDS {
            debug!(
                "Line {}: skipping transaction record with {} fields",
                line,
                record.len()
            );
            continue;
        }

        let quantity = parse_field::<i64>(&record, 2, "quantity", line)?;
        transactions.push(Transaction {
            kind: TxKind::parse(&text_field(&record, 0)),
            product_id: text_field(&record, 1),
            quantity,
            date: text_field(&record, 3),
        });
    }

    debug!("Read {} transactions", transactions.len());
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReconcileError;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case::venta("VENTA", TxKind::Sale)]
    #[case::sale("sale", TxKind::Sale)]
    #[case::compra("COMPRA", TxKind::Purchase)]
    #[case::purchase("purchase", TxKind::Purchase)]
    #[case::devolucion("DEVOLUCION", TxKind::Return)]
    #[case::ret("return", TxKind::Return)]
    #[case::lowercase_venta("venta", TxKind::Unknown("venta".to_string()))]
    #[case::capitalized_purchase("Purchase", TxKind::Unknown("Purchase".to_string()))]
    #[case::padded(" VENTA", TxKind::Unknown(" VENTA".to_string()))]
    #[case::accented("DEVOLUCIÓN", TxKind::Unknown("DEVOLUCIÓN".to_string()))]
    #[case::unknown("AJUSTE", TxKind::Unknown("AJUSTE".to_string()))]
    fn test_kind_parse(#[case] code: &str, #[case] expected: TxKind) {
        assert_eq!(TxKind::parse(code), expected);
    }

    #[test]
    fn test_unknown_kind_keeps_original_spelling() {
        let kind = TxKind::parse("Ajuste");
        assert_eq!(kind.to_string(), "Ajuste");
    }

    #[test]
    fn test_misspelled_codes_read_as_unknown() {
        let csv = "tipo,id_producto,cantidad,fecha
venta,P001,2,2024-01-10
Compra,P001,1,2024-01-11
";
        let txs = read_transactions(Cursor::new(csv)).unwrap();
        assert_eq!(txs[0].kind, TxKind::Unknown("venta".to_string()));
        assert_eq!(txs[1].kind, TxKind::Unknown("Compra".to_string()));
    }

    #[test]
    fn test_read_transactions() {
        let csv = "tipo,id_producto,cantidad,fecha
VENTA,P001,3,2024-01-10
COMPRA,P002,10,2024-01-11
";
        let txs = read_transactions(Cursor::new(csv)).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0], Transaction::new(TxKind::Sale, "P001", 3, "2024-01-10"));
        assert_eq!(
            txs[1],
            Transaction::new(TxKind::Purchase, "P002", 10, "2024-01-11")
        );
    }

    #[test]
    fn test_short_records_are_skipped() {
        let csv = "tipo,id_producto,cantidad,fecha
VENTA,P001,3
COMPRA,P002,10,2024-01-11
";
        let txs = read_transactions(Cursor::new(csv)).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].product_id, "P002");
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let txs = read_transactions(Cursor::new("tipo,id_producto,cantidad,fecha\n")).unwrap();
        assert!(txs.is_empty());
    }

    #[test]
    fn test_bad_quantity_aborts_with_line() {
        let csv = "tipo,id_producto,cantidad,fecha
VENTA,P001,3,2024-01-10
VENTA,P001,tres,2024-01-10
";
        let err = read_transactions(Cursor::new(csv)).unwrap_err();
        match err {
            ReconcileError::InvalidField { line, field, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(field, "quantity");
                assert_eq!(value, "tres");
            }
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_quantity_is_accepted() {
        let csv = "tipo,id_producto,cantidad,fecha\nCOMPRA,P001,-4,2024-01-10\n";
        let txs = read_transactions(Cursor::new(csv)).unwrap();
        assert_eq!(txs[0].quantity, -4);
    }
}
