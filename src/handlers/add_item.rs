use crate::db::AddItemOutcome;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{AddItemRequest, TodoItem};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /items handler - Add an item to an existing list
///
/// The referenced list must exist and the description must be unique
/// within it. Both checks run in the same transaction as the insert.
/// New items start unchecked.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Item created", body = TodoItem),
        (status = 400, description = "Duplicate description or malformed body", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn add_item_handler(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let list_id = request.list_id;
    let description = request.description.clone();
    match state.db.add_item(list_id, request.description).await? {
        AddItemOutcome::Created(item) => {
            tracing::info!("Added item {} to list {}", item.id, item.list_id);
            Ok((StatusCode::OK, Json(item)))
        }
        AddItemOutcome::ListNotFound => {
            tracing::info!("Rejected item for unknown list {}", list_id);
            Err(ApiError::ListNotFound(list_id))
        }
        AddItemOutcome::DuplicateDescription => {
            tracing::info!("Rejected duplicate item for list {}", list_id);
            Err(ApiError::DuplicateItem(description))
        }
    }
}
