// service/mod.rs — business rules: validation, id assignment, derived fields.
//
// The only component aware of domain rules. Everything below it is a
// dumb map; everything above it is transport.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::models::{CreateTaskRequest, Status, Task, UpdateTaskRequest};
use crate::store::{StoreError, TaskStore};

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("title is required")]
    InvalidTitle,
    #[error("invalid status")]
    InvalidStatus,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct TaskService {
    store: Arc<dyn TaskStore>,
    /// Collision guard for ids minted within the same timestamp tick.
    id_counter: AtomicU64,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            id_counter: AtomicU64::new(0),
        }
    }

    /// Mints a process-unique id: unix nanos plus a per-service
    /// monotonic counter, so rapid-succession creates never collide.
    fn generate_id(&self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = self.id_counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{nanos}-{seq}")
    }

    /// Creates a task with status `todo` and a fresh id.
    pub async fn create_task(&self, req: CreateTaskRequest) -> Result<Task, TaskError> {
        if req.title.is_empty() {
            return Err(TaskError::InvalidTitle);
        }

        let task = Task {
            id: self.generate_id(),
            title: req.title,
            description: req.description,
            status: Status::Todo,
            completed: false,
        };
        self.store.create(task.clone()).await?;
        info!(id = %task.id, "task created");
        Ok(task)
    }

    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn get_task_by_id(&self, id: &str) -> Result<Task, TaskError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Applies only the fields present in the patch; absent fields are
    /// left untouched. A sent-but-empty title is rejected. `completed`
    /// is recomputed whenever the status changes.
    pub async fn update_task(
        &self,
        id: &str,
        patch: UpdateTaskRequest,
    ) -> Result<Task, TaskError> {
        let mut task = self.store.get_by_id(id).await?;

        if let Some(title) = patch.title {
            if title.is_empty() {
                return Err(TaskError::InvalidTitle);
            }
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            let status = Status::parse(&status).ok_or(TaskError::InvalidStatus)?;
            task.status = status;
            task.completed = status == Status::Done;
        }

        self.store.update(task.clone()).await?;
        Ok(task)
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), TaskError> {
        self.store.delete(id).await?;
        info!(id = %id, "task deleted");
        Ok(())
    }
}
