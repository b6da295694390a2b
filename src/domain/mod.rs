mod course_list;
mod dataset;
mod embedding;
mod redundancy_detector;
mod redundant_pair;
mod similarity_matrix;
mod table;

pub use course_list::CourseList;
pub use dataset::{Dataset, ExtractionError, Subject};
pub use embedding::Embedding;
pub use redundancy_detector::{RedundancyDetector, SIMILARITY_THRESHOLD};
pub use redundant_pair::{RedundantPair, round_similarity};
pub use similarity_matrix::SimilarityMatrix;
pub use table::{Column, Table};
