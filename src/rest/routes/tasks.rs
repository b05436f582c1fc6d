// rest/routes/tasks.rs — task CRUD handlers and failure mapping.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::models::{CreateTaskRequest, Task, UpdateTaskRequest};
use crate::service::TaskError;
use crate::store::StoreError;
use crate::AppContext;

const MSG_INTERNAL_SERVER_ERROR: &str = "Internal server error";
const MSG_INVALID_REQUEST_BODY: &str = "Invalid request body";
const MSG_TASK_ID_REQUIRED: &str = "Task ID is required";
const MSG_TASK_NOT_FOUND: &str = "Task not found";

type ApiError = (StatusCode, Json<Value>);

fn error_body(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

/// Maps the service taxonomy onto transport codes. Validation failures
/// carry their own message; anything unclassified becomes a generic
/// 500 with no internal detail exposed.
fn map_task_error(err: &TaskError) -> ApiError {
    match err {
        TaskError::Store(StoreError::NotFound) => {
            error_body(StatusCode::NOT_FOUND, MSG_TASK_NOT_FOUND)
        }
        TaskError::InvalidTitle | TaskError::InvalidStatus => {
            error_body(StatusCode::BAD_REQUEST, &err.to_string())
        }
        TaskError::Store(_) => {
            error_body(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) =
        body.map_err(|_| error_body(StatusCode::BAD_REQUEST, MSG_INVALID_REQUEST_BODY))?;

    match ctx.service.create_task(req).await {
        Ok(task) => Ok((StatusCode::CREATED, Json(task))),
        Err(err) => Err(map_task_error(&err)),
    }
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Result<Json<Vec<Task>>, ApiError> {
    match ctx.service.get_all_tasks().await {
        Ok(tasks) => Ok(Json(tasks)),
        Err(err) => Err(map_task_error(&err)),
    }
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    match ctx.service.get_task_by_id(&id).await {
        Ok(task) => Ok(Json(task)),
        Err(err) => Err(map_task_error(&err)),
    }
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(patch) =
        body.map_err(|_| error_body(StatusCode::BAD_REQUEST, MSG_INVALID_REQUEST_BODY))?;

    match ctx.service.update_task(&id, patch).await {
        Ok(task) => Ok(Json(task)),
        Err(err) => Err(map_task_error(&err)),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match ctx.service.delete_task(&id).await {
        // Content-Type is declared on every response, the empty 204
        // included.
        Ok(()) => Ok((
            StatusCode::NO_CONTENT,
            [(header::CONTENT_TYPE, "application/json")],
        )
            .into_response()),
        Err(err) => Err(map_task_error(&err)),
    }
}

/// Handler for the empty-id form (`/tasks/`) of id-addressed methods.
pub async fn missing_task_id() -> ApiError {
    error_body(StatusCode::BAD_REQUEST, MSG_TASK_ID_REQUIRED)
}
