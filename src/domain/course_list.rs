use super::dataset::{Dataset, ExtractionError};

/// Every course name of a dataset in column-then-row order. Subject
/// boundaries are not tracked and duplicates are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseList {
    names: Vec<String>,
}

impl CourseList {
    pub fn flatten(dataset: &Dataset) -> Result<Self, ExtractionError> {
        let names: Vec<String> = dataset
            .subjects()
            .iter()
            .flat_map(|subject| subject.courses.iter().cloned())
            .collect();

        Self::from_names(names)
    }

    pub fn from_names(names: Vec<String>) -> Result<Self, ExtractionError> {
        if names.is_empty() {
            return Err(ExtractionError::EmptyDataset);
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn as_strs(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }
}
