use crate::domain::Table;

/// Parses an uploaded workbook into a [`Table`] taken from its first sheet.
pub trait SpreadsheetReader: Send + Sync {
    fn read_table(&self, data: &[u8]) -> Result<Table, SpreadsheetError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpreadsheetError {
    #[error("{0}")]
    Unreadable(String),
    #[error("workbook has no worksheets")]
    NoWorksheet,
}
