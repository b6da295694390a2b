use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::application::ports::{SpreadsheetError, SpreadsheetReader};
use crate::domain::{Column, Table};

/// Reads the first worksheet of any workbook format calamine detects
/// (xlsx, xlsm, xlsb, xls, ods).
pub struct CalamineReader;

impl SpreadsheetReader for CalamineReader {
    fn read_table(&self, data: &[u8]) -> Result<Table, SpreadsheetError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
            .map_err(|e| SpreadsheetError::Unreadable(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(SpreadsheetError::NoWorksheet)?
            .map_err(|e| SpreadsheetError::Unreadable(e.to_string()))?;

        // calamine trims leading blank rows and columns from the range; index
        // from cell A1 so row 1 is always the header row and column A column 0.
        let Some((end_row, end_col)) = range.end() else {
            return Ok(Table::default());
        };

        let columns: Vec<Column> = (0..=end_col)
            .map(|col| {
                let header = range
                    .get_value((0, col))
                    .and_then(cell_text)
                    .unwrap_or_else(|| Column::unnamed_header(col as usize));
                let cells = (1..=end_row)
                    .map(|row| range.get_value((row, col)).and_then(cell_text))
                    .collect();
                Column::new(header, cells)
            })
            .collect();

        let row_count = end_row as usize;

        tracing::debug!(
            columns = columns.len(),
            rows = row_count,
            "Parsed worksheet"
        );

        Ok(Table::new(columns, row_count))
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
