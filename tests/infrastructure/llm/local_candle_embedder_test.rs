use course_redundancy::application::ports::Embedder;
use course_redundancy::infrastructure::llm::LocalCandleEmbedder;
use course_redundancy::presentation::config::PoolingStrategy;

const SMALL_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

fn load_small_model() -> LocalCandleEmbedder {
    LocalCandleEmbedder::new(SMALL_MODEL, PoolingStrategy::Mean).expect("Failed to load model")
}

#[test]
#[ignore = "requires network access to the Hugging Face hub"]
fn given_invalid_model_id_when_creating_embedder_then_returns_error() {
    let result = LocalCandleEmbedder::new("nonexistent/model-that-does-not-exist", PoolingStrategy::Cls);
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "downloads model weights from the Hugging Face hub"]
async fn given_local_model_when_embedding_batch_then_returns_one_unit_vector_per_text() {
    let embedder = load_small_model();

    let texts = &["Intro to Programming", "Organic Chemistry", "World History"];
    let embeddings = embedder
        .embed_batch(texts)
        .await
        .expect("Failed to embed batch");

    assert_eq!(embeddings.len(), 3);
    for embedding in &embeddings {
        assert_eq!(embedding.dimensions(), 384);
        let norm: f32 = embedding.values.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-3);
    }
}

#[tokio::test]
#[ignore = "downloads model weights from the Hugging Face hub"]
async fn given_identical_course_names_when_embedded_then_similarity_rounds_to_one() {
    let embedder = load_small_model();

    let embeddings = embedder
        .embed_batch(&["Intro to Programming", "Intro to Programming"])
        .await
        .expect("Failed to embed");

    let similarity = embeddings[0].cosine_similarity(&embeddings[1]);
    assert!((similarity - 1.0).abs() < 1e-4, "got {}", similarity);
}

#[tokio::test]
#[ignore = "downloads model weights from the Hugging Face hub"]
async fn given_related_and_unrelated_courses_when_embedded_then_related_pair_scores_higher() {
    let embedder = load_small_model();

    let embeddings = embedder
        .embed_batch(&[
            "Introduction to Programming",
            "Programming Fundamentals",
            "Renaissance Art History",
        ])
        .await
        .expect("Failed to embed");

    let related = embeddings[0].cosine_similarity(&embeddings[1]);
    let unrelated = embeddings[0].cosine_similarity(&embeddings[2]);
    assert!(
        related > unrelated,
        "related {} should exceed unrelated {}",
        related,
        unrelated
    );
}

#[tokio::test]
#[ignore = "downloads model weights from the Hugging Face hub"]
async fn given_empty_batch_when_embedding_then_returns_empty_vec() {
    let embedder = load_small_model();

    let texts: &[&str] = &[];
    let embeddings = embedder
        .embed_batch(texts)
        .await
        .expect("Failed to embed empty batch");

    assert!(embeddings.is_empty());
}
