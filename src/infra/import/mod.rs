use std::path::Path;

use crate::usecase::ports::source::TableSource;

pub mod csv;
pub mod detect;
pub mod mapping;
pub mod signature;
pub mod xlsx;

/// Picks a reader by file extension; anything that is not an Excel
/// workbook is treated as delimited text.
pub fn open_source(path: &Path) -> Box<dyn TableSource> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" | "xls" => Box::new(xlsx::XlsxSource::new(path)),
        _ => Box::new(csv::CsvSource::new(path)),
    }
}
