use crate::error::{ApiError, ErrorResponse};
use crate::models::GetListResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// GET /lists/:id handler - Fetch a list and all of its items
///
/// Items come back in database-default order; no ordering is part of
/// the contract. A list with no items yields an empty array.
#[utoipa::path(
    get,
    path = routes::LIST,
    params(
        ("id" = String, Path, description = "UUID of the list")
    ),
    responses(
        (status = 200, description = "List found", body = GetListResponse),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "lists"
)]
pub async fn get_list_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<GetListResponse>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    let Some(list) = state.db.fetch_list(id).await? else {
        tracing::info!("List not found: {}", id);
        return Err(ApiError::ListNotFound(id));
    };

    let items = state.db.fetch_items(id).await?;

    tracing::info!("Fetched list {} with {} items", id, items.len());
    Ok((StatusCode::OK, Json(GetListResponse { list, items })))
}
