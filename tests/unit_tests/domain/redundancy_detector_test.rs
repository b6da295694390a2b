use course_redundancy::domain::{
    CourseList, RedundancyDetector, RedundantPair, SIMILARITY_THRESHOLD, SimilarityMatrix,
    round_similarity,
};

fn courses(names: &[&str]) -> CourseList {
    CourseList::from_names(names.iter().map(|n| n.to_string()).collect()).unwrap()
}

/// Symmetric matrix with a unit diagonal and `value` everywhere else.
fn uniform_matrix(size: usize, value: f64) -> SimilarityMatrix {
    let rows = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| if i == j { 1.0 } else { value })
                .collect()
        })
        .collect();
    SimilarityMatrix::from_rows(rows).unwrap()
}

#[test]
fn given_default_detector_when_created_then_uses_fixed_threshold() {
    assert_eq!(RedundancyDetector::default().threshold(), 0.75);
    assert_eq!(SIMILARITY_THRESHOLD, 0.75);
}

#[test]
fn given_similarity_exactly_at_threshold_when_detecting_then_pair_is_not_reported() {
    let list = courses(&["Calculus", "Calculus I"]);
    let matrix = uniform_matrix(2, 0.75);

    let pairs = RedundancyDetector::default().detect(&list, &matrix);

    assert!(pairs.is_empty());
}

#[test]
fn given_similarity_just_above_threshold_when_detecting_then_pair_is_reported() {
    let list = courses(&["Calculus", "Calculus I"]);
    let matrix = uniform_matrix(2, 0.7500001);

    let pairs = RedundancyDetector::default().detect(&list, &matrix);

    assert_eq!(pairs, vec![RedundantPair::new("Calculus", "Calculus I", 0.75)]);
    assert_eq!(pairs[0].similarity, 0.75);
}

#[test]
fn given_all_pairs_similar_when_detecting_then_reports_each_unordered_pair_once() {
    let names = ["A", "B", "C", "D", "E"];
    let list = courses(&names);
    let matrix = uniform_matrix(names.len(), 0.9);

    let pairs = RedundancyDetector::default().detect(&list, &matrix);

    assert_eq!(pairs.len(), RedundancyDetector::comparison_count(names.len()));
    assert_eq!(pairs.len(), 10);
    for pair in &pairs {
        let i = names.iter().position(|n| *n == pair.course_a).unwrap();
        let j = names.iter().position(|n| *n == pair.course_b).unwrap();
        assert!(i < j, "pair ({}, {}) is not in upper triangle", i, j);
    }
}

#[test]
fn given_mixed_similarities_when_detecting_then_preserves_scan_order() {
    let list = courses(&["A", "B", "C"]);
    let matrix = SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.8, 0.9],
        vec![0.8, 1.0, 0.76],
        vec![0.9, 0.76, 1.0],
    ])
    .unwrap();

    let pairs = RedundancyDetector::default().detect(&list, &matrix);

    let order: Vec<(&str, &str)> = pairs
        .iter()
        .map(|p| (p.course_a.as_str(), p.course_b.as_str()))
        .collect();
    assert_eq!(order, vec![("A", "B"), ("A", "C"), ("B", "C")]);
}

#[test]
fn given_single_course_when_detecting_then_reports_nothing() {
    let list = courses(&["Calculus"]);
    let matrix = uniform_matrix(1, 1.0);

    assert!(RedundancyDetector::default().detect(&list, &matrix).is_empty());
    assert_eq!(RedundancyDetector::comparison_count(1), 0);
}

#[test]
fn given_same_inputs_when_detecting_twice_then_results_are_identical() {
    let list = courses(&["A", "B", "C"]);
    let matrix = uniform_matrix(3, 0.8);
    let detector = RedundancyDetector::default();

    assert_eq!(detector.detect(&list, &matrix), detector.detect(&list, &matrix));
}

#[test]
fn given_values_when_rounding_then_keeps_two_decimals() {
    assert_eq!(round_similarity(0.8361), 0.84);
    assert_eq!(round_similarity(0.8349), 0.83);
    assert_eq!(round_similarity(0.99999999), 1.0);
}

#[test]
fn given_exact_midpoint_when_rounding_then_rounds_half_away_from_zero() {
    // 0.125 and 0.625 are exact in binary, so these are true midpoints.
    assert_eq!(round_similarity(0.125), 0.13);
    assert_eq!(round_similarity(0.625), 0.63);
    assert_eq!(round_similarity(-0.125), -0.13);
}
