//! Catalog reader and writer.

use crate::error::Result;
use crate::input::{csv_reader, line_of, parse_field, text_field};
use crate::price::Price;
use crate::product::Product;
use log::debug;
use std::io::{Read, Write};

/// Number of columns in a catalog record: id, name, category, price, stock.
pub const CATALOG_FIELDS: usize = 5;

/// Reads a catalog from delimited text.
///
/// The first record is a header. Records with fewer than
/// [`CATALOG_FIELDS`] fields are skipped. A malformed price or stock aborts
/// the read with the offending line.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<Product>> {
    let mut csv_reader = csv_reader(reader);
    let mut products = Vec::new();

    for (row_idx, result) in csv_reader.byte_records().enumerate() {
        let record = result?;
        let line = line_of(&record, row_idx as u64 + 2);

        if record.len() < CATALOG_FIELDS {
            debug!(
                "Line {}: skipping catalog record with {} fields",
                line,
                record.len()
            );
            continue;
        }

        let price = parse_field::<Price>(&record, 3, "price", line)?;
        let stock = parse_field::<i64>(&record, 4, "stock", line)?;
        products.push(Product {
            id: text_field(&record, 0),
            name: text_field(&record, 1),
            category: text_field(&record, 2),
            price,
            stock,
        });
    }

    debug!("Read {} products", products.len());
    Ok(products)
}

/// Writes the catalog as delimited text, in catalog order.
///
/// Columns: `id,name,category,price,stock`. Price always carries two decimal
/// places.
pub fn write_catalog<W: Write>(writer: W, products: &[Product]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if products.is_empty() {
        // serialize() only emits the header alongside the first record
        csv_writer.write_record(["id", "name", "category", "price", "stock"])?;
    }

    for product in products {
        csv_writer.serialize(product)?;
    }

    csv_writer.flush()?;
    Ok(())
}
