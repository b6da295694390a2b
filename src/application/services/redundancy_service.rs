use std::sync::Arc;

use crate::application::ports::{Embedder, EmbedderError, SpreadsheetError, SpreadsheetReader};
use crate::domain::{
    CourseList, Dataset, Embedding, ExtractionError, RedundancyDetector, RedundantPair,
    SimilarityMatrix,
};

pub struct RedundancyService<R>
where
    R: SpreadsheetReader + ?Sized,
{
    reader: Arc<R>,
    embedder: Arc<dyn Embedder>,
    detector: RedundancyDetector,
}

impl<R> RedundancyService<R>
where
    R: SpreadsheetReader + ?Sized,
{
    pub fn new(reader: Arc<R>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            reader,
            embedder,
            detector: RedundancyDetector::default(),
        }
    }

    /// Parses the workbook, flattens its course names and reports every
    /// redundant pair.
    pub async fn check_redundancy(&self, data: &[u8]) -> Result<RedundancyReport, RedundancyError> {
        let table = self.reader.read_table(data)?;
        let dataset = Dataset::from_table(&table)?;
        let courses = CourseList::flatten(&dataset)?;

        tracing::debug!(
            subjects = dataset.subjects().len(),
            courses = courses.len(),
            "Extracted course list"
        );

        let pairs = self.find_redundancies(&courses).await?;

        tracing::info!(
            courses = courses.len(),
            comparisons = RedundancyDetector::comparison_count(courses.len()),
            redundancies = pairs.len(),
            "Redundancy check completed"
        );

        Ok(RedundancyReport {
            subject_count: dataset.subjects().len(),
            course_count: courses.len(),
            pairs,
        })
    }

    pub async fn find_redundancies(
        &self,
        courses: &CourseList,
    ) -> Result<Vec<RedundantPair>, RedundancyError> {
        let embeddings = self
            .embedder
            .embed_batch(&courses.as_strs())
            .await
            .map_err(RedundancyError::Embedding)?;

        validate_embeddings(&embeddings, courses.len()).map_err(RedundancyError::Embedding)?;

        let matrix = SimilarityMatrix::from_embeddings(&embeddings);
        Ok(self.detector.detect(courses, &matrix))
    }
}

fn validate_embeddings(embeddings: &[Embedding], expected: usize) -> Result<(), EmbedderError> {
    if embeddings.len() != expected {
        return Err(EmbedderError::InvalidResponse(format!(
            "expected {} embeddings, got {}",
            expected,
            embeddings.len()
        )));
    }

    if let Some(first) = embeddings.first() {
        let dimensions = first.dimensions();
        if embeddings.iter().any(|e| e.dimensions() != dimensions) {
            return Err(EmbedderError::InvalidResponse(
                "embeddings have mixed dimensions".to_string(),
            ));
        }
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct RedundancyReport {
    pub subject_count: usize,
    pub course_count: usize,
    pub pairs: Vec<RedundantPair>,
}

#[derive(Debug, thiserror::Error)]
pub enum RedundancyError {
    #[error("Failed to read Excel file: {0}")]
    Spreadsheet(#[from] SpreadsheetError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("embedding: {0}")]
    Embedding(EmbedderError),
}
