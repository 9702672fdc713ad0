use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::CreateUserRequest;
use crate::error::{ApiError, ApiResult};
use crate::routes::ApiResponse;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest(
            "username and password are required".to_string(),
        ));
    }

    let mut store = state.store();
    match store.create_user(payload.username, payload.password) {
        Some(user) => {
            tracing::info!(user_id = user.id, "user created");
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::new(user, "User created successfully")),
            ))
        }
        None => Err(ApiError::Conflict("username already taken".to_string())),
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store();
    Json(ApiResponse::new(store.all_users().clone(), "All users"))
}
