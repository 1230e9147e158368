use crate::error::{ApiError, ErrorResponse};
use crate::models::UpdateItemRequest;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// PUT /items/:id handler - Update an item's description and checked state
///
/// The update is unconditional: an id that matches no row still
/// returns 200. The affected-row count is not inspected.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "UUID of the item")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Update applied (or no-op for unknown id)"),
        (status = 400, description = "Invalid UUID format or malformed body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_item_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(request): Json<UpdateItemRequest>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    state
        .db
        .update_item(id, request.description, request.is_checked)
        .await?;

    tracing::info!("Updated item: {}", id);
    Ok(StatusCode::OK)
}
