use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};
use uuid::Uuid;

/// DELETE /items/:id handler - Delete an item
///
/// Deleting an id that matches no row is a successful no-op, so the
/// operation is idempotent.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "UUID of the item")
    ),
    responses(
        (status = 200, description = "Item deleted (or no-op for unknown id)"),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    state.db.delete_item(id).await?;

    tracing::info!("Deleted item: {}", id);
    Ok(StatusCode::OK)
}
