#[derive(Debug, Clone, PartialEq)]
pub struct RedundantPair {
    pub course_a: String,
    pub course_b: String,
    pub similarity: f64,
}

impl RedundantPair {
    pub fn new(course_a: &str, course_b: &str, similarity: f64) -> Self {
        Self {
            course_a: course_a.to_string(),
            course_b: course_b.to_string(),
            similarity: round_similarity(similarity),
        }
    }
}

/// Rounds to two decimal places, halves away from zero.
pub fn round_similarity(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
