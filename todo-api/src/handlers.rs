use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::ApiError,
    model::{TodoId, TodoItem},
    store::TodoStore,
};

pub const ALIVE_MESSAGE: &str = "Service is running...";

/// Canonical location of a stored item.
pub fn item_location(id: TodoId) -> String {
    format!("/todoitems/{id}")
}

pub async fn alive() -> &'static str {
    ALIVE_MESSAGE
}

pub async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<TodoItem>> {
    Json(store.list_all().await)
}

pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<TodoId>,
) -> Result<Json<TodoItem>, ApiError> {
    store.find_by_id(id).await.map(Json).ok_or(ApiError::NotFound(id))
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    Json(input): Json<TodoItem>,
) -> impl IntoResponse {
    let item = store.insert(input).await;
    tracing::debug!(id = item.id, "todo item created");
    (
        StatusCode::CREATED,
        [(header::LOCATION, item_location(item.id))],
        Json(item),
    )
}

pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<TodoId>,
    Json(input): Json<TodoItem>,
) -> Result<Json<TodoItem>, ApiError> {
    if input.id != id {
        return Err(ApiError::IdMismatch { path: id, body: input.id });
    }
    if !store.exists_by_id(id).await {
        return Err(ApiError::NotFound(id));
    }
    // The item may have been deleted since the existence check.
    if !store.replace(input.clone()).await {
        return Err(ApiError::NotFound(id));
    }
    tracing::debug!(id, "todo item updated");
    Ok(Json(input))
}

pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    if store.find_by_id(id).await.is_none() {
        return Err(ApiError::NotFound(id));
    }
    store.remove_by_id(id).await.ok_or(ApiError::NotFound(id))?;
    tracing::debug!(id, "todo item deleted");
    Ok(StatusCode::NO_CONTENT)
}
