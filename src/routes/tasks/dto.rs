use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdateTask {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct OwnerQuery {
    pub user_id: u64,
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    pub user_id: u64,
    pub task_id: u64,
}

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub id: u64,
}

#[derive(Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}
