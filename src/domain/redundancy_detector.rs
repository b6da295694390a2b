use super::course_list::CourseList;
use super::redundant_pair::RedundantPair;
use super::similarity_matrix::SimilarityMatrix;

/// Pairs must score strictly above this to be reported.
pub const SIMILARITY_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone, Copy)]
pub struct RedundancyDetector {
    threshold: f64,
}

impl Default for RedundancyDetector {
    fn default() -> Self {
        Self::new(SIMILARITY_THRESHOLD)
    }
}

impl RedundancyDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scans the strict upper triangle (ascending `i`, then ascending `j`)
    /// and keeps every pair above the threshold. The matrix must be sized
    /// to the course list.
    pub fn detect(&self, courses: &CourseList, matrix: &SimilarityMatrix) -> Vec<RedundantPair> {
        debug_assert_eq!(courses.len(), matrix.size());
        let n = courses.len().min(matrix.size());
        let mut pairs = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                let similarity = matrix.get(i, j);
                if similarity > self.threshold {
                    if let (Some(a), Some(b)) = (courses.get(i), courses.get(j)) {
                        pairs.push(RedundantPair::new(a, b, similarity));
                    }
                }
            }
        }

        pairs
    }

    /// Number of unordered pairs a scan over `n` courses compares.
    pub fn comparison_count(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }
}
