// models.rs — Task record and request payload types.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Parses a wire value. Anything outside the three known states
    /// returns `None` so the caller can reject it as a validation
    /// error rather than a decode failure.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Self::Todo),
            "in_progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

/// The stored task record. `completed` is derived: true iff
/// `status == Done`, recomputed by the service on every status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub status: Status,
    pub completed: bool,
}

/// Body of `POST /tasks`. A body with no `title` decodes to an empty
/// one and is rejected by the service (decode first, validate second).
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `PUT /tasks/{id}`. `None` means the field was not sent —
/// distinct from sent-but-empty. `status` stays a raw string so
/// unknown values surface as `invalid status`, not a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
