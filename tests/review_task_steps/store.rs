//! Task store that can be told to reject a specific write.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use turnover::property::domain::UnitId;
use turnover::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// In-memory task store with an optional injected write failure.
#[derive(Debug, Default)]
pub struct FlakyTaskRepository {
    inner: InMemoryTaskRepository,
    writes: AtomicUsize,
    reject_write: AtomicUsize,
}

impl FlakyTaskRepository {
    /// Makes the `attempt`-th call to `store` fail. Counting starts at one.
    pub fn reject_write_number(&self, attempt: usize) {
        self.reject_write.store(attempt, Ordering::SeqCst);
    }
}

#[async_trait]
impl TaskRepository for FlakyTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let attempt = self.writes.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt == self.reject_write.load(Ordering::SeqCst) {
            return Err(TaskRepositoryError::persistence(std::io::Error::other(
                "task store unavailable",
            )));
        }
        self.inner.store(task).await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.inner.update(task).await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.inner.delete(id).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.inner.find_by_id(id).await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.inner.list_all().await
    }

    async fn find_by_unit(&self, unit_id: UnitId) -> TaskRepositoryResult<Vec<Task>> {
        self.inner.find_by_unit(unit_id).await
    }
}
