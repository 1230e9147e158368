use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named container of to-do items.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct TodoList {
    pub id: Uuid,
    pub name: String,
}

/// A single to-do entry belonging to exactly one list.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct TodoItem {
    pub id: Uuid,
    pub list_id: Uuid,
    pub description: String,
    pub is_checked: bool,
}

/// Request body for POST /lists. The list id is always generated
/// server-side; any client-supplied id is ignored.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateListRequest {
    pub name: String,
}

/// Request body for POST /items. The item id and is_checked flag are
/// server-controlled (is_checked starts false).
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddItemRequest {
    pub list_id: Uuid,
    pub description: String,
}

/// Request body for PUT /items/{id}. Only description and is_checked
/// are mutable; id and list_id in the body would be ignored, so they
/// are not part of the schema.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateItemRequest {
    pub description: String,
    pub is_checked: bool,
}

/// Response body for GET /lists/{id}. `items` is present (possibly
/// empty) even for a list with no items.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GetListResponse {
    pub list: TodoList,
    pub items: Vec<TodoItem>,
}
