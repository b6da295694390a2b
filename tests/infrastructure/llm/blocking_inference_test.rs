use std::sync::mpsc;
use std::time::Duration;

use course_redundancy::application::ports::EmbedderError;
use course_redundancy::infrastructure::llm::run_blocking;

// Single-threaded runtime: if the work ran on the runtime thread, the task
// that sends on the channel could never be polled and the receive would time out.
#[tokio::test(flavor = "current_thread")]
async fn given_blocking_work_when_run_then_runtime_keeps_serving_other_tasks() {
    let (tx, rx) = mpsc::channel::<u32>();

    let sender = tokio::spawn(async move {
        tokio::task::yield_now().await;
        tx.send(42).unwrap();
    });

    let result = run_blocking(move || {
        rx.recv_timeout(Duration::from_secs(5))
            .map_err(|e| EmbedderError::InferenceFailed(e.to_string()))
    })
    .await;

    sender.await.unwrap();
    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn given_work_error_when_run_then_error_is_returned_unchanged() {
    let result: Result<(), _> =
        run_blocking(|| Err(EmbedderError::InferenceFailed("tokenization: bad input".into()))).await;

    match result {
        Err(EmbedderError::InferenceFailed(msg)) => assert_eq!(msg, "tokenization: bad input"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn given_panicking_work_when_run_then_inference_failed_is_returned() {
    let result: Result<(), _> = run_blocking(|| panic!("forward pass exploded")).await;

    match result {
        Err(EmbedderError::InferenceFailed(msg)) => assert!(msg.starts_with("task join error")),
        other => panic!("unexpected result: {:?}", other),
    }
}
