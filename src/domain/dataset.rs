use super::table::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub name: String,
    pub courses: Vec<String>,
}

/// Course names grouped by subject, in sheet column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    subjects: Vec<Subject>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("The uploaded Excel file is empty")]
    EmptyTable,
    #[error("No valid subjects found in the file")]
    EmptyDataset,
}

impl Dataset {
    /// Builds the dataset from a parsed table, dropping empty cells.
    pub fn from_table(table: &Table) -> Result<Self, ExtractionError> {
        if table.is_empty() {
            return Err(ExtractionError::EmptyTable);
        }

        let subjects = table
            .columns
            .iter()
            .map(|column| Subject {
                name: column.header.clone(),
                courses: column.cells.iter().flatten().cloned().collect(),
            })
            .collect();

        Ok(Self { subjects })
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn course_count(&self) -> usize {
        self.subjects.iter().map(|s| s.courses.len()).sum()
    }
}
