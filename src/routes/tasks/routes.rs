use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::dto::{CreateTask, DeleteQuery, OwnerQuery, UpdateTask, UserIdQuery, UsernameQuery};
use super::model::Task;
use crate::error::{ApiError, ApiResult};
use crate::routes::ApiResponse;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Query(owner): Query<OwnerQuery>,
    Json(body): Json<CreateTask>,
) -> ApiResult<impl IntoResponse> {
    if body.title.is_empty() || body.description.is_empty() {
        return Err(ApiError::Unprocessable("All fields required".to_string()));
    }

    let mut store = state.store();
    if !store.user_exists(owner.user_id) {
        return Err(ApiError::NotFound(format!(
            "user {} not found",
            owner.user_id
        )));
    }

    let task = store.create_task(owner.user_id, body.title, body.description);
    tracing::info!(task_id = task.id, user_id = task.user_id, "task created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(task, "Task created successfully")),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<UpdateTask>,
) -> ApiResult<impl IntoResponse> {
    if body.title.is_none() && body.description.is_none() {
        return Err(ApiError::Unprocessable(
            "At least one field required".to_string(),
        ));
    }

    let mut store = state.store();
    match store.update_task(body.id, body.title, body.description) {
        Some(task) => Ok(Json(ApiResponse::new(task, "Task updated successfully"))),
        None => Err(ApiError::NotFound(format!("task {} not found", body.id))),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    if store.delete_task(query.user_id, query.task_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "task {} not found for user {}",
            query.task_id, query.user_id
        )))
    }
}

pub async fn all(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store();
    Json(ApiResponse::new(store.all_tasks().clone(), "All tasks"))
}

pub async fn by_id(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    if !store.user_exists(query.id) {
        return Err(ApiError::NotFound(format!("user {} not found", query.id)));
    }

    Ok(Json(ApiResponse::new(
        owned_tasks(store.tasks_for_user(query.id)),
        "Tasks for user",
    )))
}

pub async fn by_username(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    let user = store
        .find_user_by_username(&query.username)
        .ok_or_else(|| ApiError::NotFound(format!("user {} not found", query.username)))?;

    Ok(Json(ApiResponse::new(
        owned_tasks(store.tasks_for_user(user.id)),
        "Tasks for user",
    )))
}

// A user who exists but has never had a task lists as empty, not as an error.
fn owned_tasks(seq: Option<&Vec<Task>>) -> Vec<Task> {
    seq.cloned().unwrap_or_default()
}
