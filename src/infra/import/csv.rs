use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::usecase::ports::source::{SourceError, TableSource};

/// Reads a delimited file as raw rows, header row included. Short or long
/// records are kept as-is; the column mapper decides what they mean.
pub fn read_csv_rows(csv_path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record
            .with_context(|| format!("failed to parse csv record: {}", csv_path.display()))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(rows)
}

pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for CsvSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn read_rows(&mut self) -> Result<Vec<Vec<String>>, SourceError> {
        read_csv_rows(&self.path).map_err(|err| SourceError::Message(err.to_string()))
    }
}
