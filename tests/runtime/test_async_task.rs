//! Tests for the async task runtime primitive.

use repostats::AsyncTask;

#[tokio::test]
async fn spawn_async_resolves_with_result() {
    let task = AsyncTask::spawn_async(async { 42 });
    assert_eq!(task.await.unwrap(), 42);
}

#[tokio::test]
async fn tasks_resolve_independently_of_await_order() {
    let first = AsyncTask::spawn_async(async { "first" });
    let second = AsyncTask::spawn_async(async { "second" });

    assert_eq!(second.await.unwrap(), "second");
    assert_eq!(first.await.unwrap(), "first");
}

#[tokio::test]
async fn task_runs_even_when_awaited_late() {
    let task = AsyncTask::spawn_async(async { 7 * 6 });
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert_eq!(task.await.unwrap(), 42);
}
