use crate::application::ports::EmbedderError;

/// Runs CPU-bound inference on tokio's blocking pool so a forward pass never
/// stalls the async workers serving other requests.
pub async fn run_blocking<T, F>(work: F) -> Result<T, EmbedderError>
where
    F: FnOnce() -> Result<T, EmbedderError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| EmbedderError::InferenceFailed(format!("task join error: {e}")))?
}
