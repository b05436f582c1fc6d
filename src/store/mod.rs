// store/mod.rs — concurrency-safe in-memory task storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::Task;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task not found")]
    NotFound,
    /// Produced by alternative backends or test stubs; the in-memory
    /// store never returns it.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Storage seam for task records. Object-safe so the service can run
/// against the in-memory store or a test stub with injected failures.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create(&self, task: Task) -> Result<(), StoreError>;
    async fn get_all(&self) -> Result<Vec<Task>, StoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Task, StoreError>;
    async fn update(&self, task: Task) -> Result<(), StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Flat map keyed by task id behind a single reader/writer lock.
/// Writers serialize against everything; readers run concurrently.
/// Lock hold time is O(1) beyond the map operation itself.
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<HashMap<String, Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    /// Insert-or-overwrite; duplicate ids are not detected here.
    async fn create(&self, task: Task) -> Result<(), StoreError> {
        self.tasks.write().await.insert(task.id.clone(), task);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Task>, StoreError> {
        // Owned snapshot — later writes never alias into the result.
        Ok(self.tasks.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Task, StoreError> {
        self.tasks
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, task: Task) -> Result<(), StoreError> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&task.id) {
            Some(slot) => {
                *slot = task;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.tasks
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
