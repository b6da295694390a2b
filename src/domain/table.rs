/// A parsed worksheet. The first sheet row supplies the column headers;
/// every following row is a data row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<Column>,
    pub row_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: String,
    pub cells: Vec<Option<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>, row_count: usize) -> Self {
        Self { columns, row_count }
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.columns.is_empty()
    }
}

impl Column {
    pub fn new(header: impl Into<String>, cells: Vec<Option<String>>) -> Self {
        Self {
            header: header.into(),
            cells,
        }
    }

    /// Header used when the header cell of column `index` is blank.
    pub fn unnamed_header(index: usize) -> String {
        format!("Unnamed: {}", index)
    }
}
