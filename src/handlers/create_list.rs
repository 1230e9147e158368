use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateListRequest, TodoList};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /lists handler - Create a new to-do list
///
/// The list id is generated server-side; any id in the request body is
/// ignored by the schema.
#[utoipa::path(
    post,
    path = routes::LISTS,
    request_body = CreateListRequest,
    responses(
        (status = 200, description = "List created", body = TodoList),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "lists"
)]
pub async fn create_list_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateListRequest>,
) -> Result<(StatusCode, Json<TodoList>), ApiError> {
    let list = state.db.insert_list(request.name).await?;

    tracing::info!("Created list '{}' with id: {}", list.name, list.id);
    Ok((StatusCode::OK, Json(list)))
}
