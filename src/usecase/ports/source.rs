#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Message(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// A tabular resource the import layer can read row-by-row: the first row
/// is expected to be the header row, every later row a data row.
pub trait TableSource: Send + Sync {
    fn label(&self) -> String;

    fn read_rows(&mut self) -> Result<Vec<Vec<String>>, SourceError>;
}
