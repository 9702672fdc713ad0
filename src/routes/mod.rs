use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

mod health;
pub mod tasks;
pub mod users;

use crate::state::AppState;

/// Success envelope used by every data-carrying endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health))
        .route(
            "/tasks",
            post(tasks::routes::create)
                .patch(tasks::routes::update)
                .delete(tasks::routes::delete),
        )
        .route("/tasks/all", get(tasks::routes::all))
        .route("/tasks/by_id", get(tasks::routes::by_id))
        .route("/tasks/by_username", get(tasks::routes::by_username))
        .route("/users", post(users::routes::create).get(users::routes::list))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Todo App" }))
}
