use super::embedding::Embedding;

/// Square, symmetric matrix of pairwise cosine similarities, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn from_embeddings(embeddings: &[Embedding]) -> Self {
        let size = embeddings.len();
        let mut values = vec![0.0; size * size];

        for i in 0..size {
            values[i * size + i] = 1.0;
            for j in (i + 1)..size {
                let similarity = embeddings[i].cosine_similarity(&embeddings[j]);
                values[i * size + j] = similarity;
                values[j * size + i] = similarity;
            }
        }

        Self { size, values }
    }

    /// Builds a matrix from explicit rows. Returns `None` unless every row
    /// has exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }
}
