//! Text outputs: the low-stock alert report and the error log.
//!
//! Both write to a caller-supplied sink, so nothing here touches
//! process-wide state.

use crate::error::{Result, TransactionError};
use crate::product::Product;
use chrono::NaiveDateTime;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const REPORT_TITLE: &str = "LOW STOCK ALERT";

/// Timestamp layout of error-log lines, e.g. `2024/01/31 18:04:05`.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Writes every product whose stock is strictly below `threshold`, in
/// catalog order, followed by a count line. Returns the count.
pub fn write_low_stock_report<W: Write>(
    mut writer: W,
    products: &[Product],
    threshold: i64,
) -> Result<usize> {
    writeln!(writer, "{}", REPORT_TITLE)?;
    writeln!(writer, "{}", "=".repeat(REPORT_TITLE.len()))?;

    let mut count = 0;
    for product in products.iter().filter(|p| p.is_below(threshold)) {
        writeln!(
            writer,
            "ID: {} | {} | Current stock: {} units",
            product.id, product.name, product.stock
        )?;
        count += 1;
    }

    writeln!(writer, "Total low-stock products: {}", count)?;
    writer.flush()?;
    Ok(count)
}

/// Writes one `[ERROR]` line per error record, stamped with `timestamp`.
pub fn write_error_log<W: Write>(
    mut writer: W,
    errors: &[TransactionError],
    timestamp: NaiveDateTime,
) -> Result<()> {
    let stamp = timestamp.format(LOG_TIMESTAMP_FORMAT);
    for error in errors {
        writeln!(writer, "{} [ERROR]: {}", stamp, error)?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates `path` for writing, creating missing parent directories first.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}
