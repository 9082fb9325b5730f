use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::usecase::ports::source::{SourceError, TableSource};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        // error cells carry nothing a template column could match
        Data::Error(_) => String::new(),
        Data::Empty => String::new(),
    }
}

/// Reads the first worksheet of a workbook as stringified rows, header row
/// included.
pub fn read_xlsx_rows(xlsx_path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open workbook: {}", xlsx_path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("workbook has no worksheets: {}", xlsx_path.display()))?
        .with_context(|| format!("failed to read first worksheet: {}", xlsx_path.display()))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(rows)
}

pub struct XlsxSource {
    path: PathBuf,
}

impl XlsxSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for XlsxSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn read_rows(&mut self) -> Result<Vec<Vec<String>>, SourceError> {
        read_xlsx_rows(&self.path).map_err(|err| SourceError::Message(err.to_string()))
    }
}
