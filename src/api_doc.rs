use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{
    AddItemRequest, CreateListRequest, GetListResponse, TodoItem, TodoList, UpdateItemRequest,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-api",
        version = "1.0.0",
        description = "A minimal to-do list API backed by PostgreSQL"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create_list::create_list_handler,
        handlers::add_item::add_item_handler,
        handlers::get_list::get_list_handler,
        handlers::update_item::update_item_handler,
        handlers::delete_item::delete_item_handler
    ),
    components(
        schemas(
            TodoList,
            TodoItem,
            CreateListRequest,
            AddItemRequest,
            UpdateItemRequest,
            GetListResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "lists", description = "To-do list operations"),
        (name = "items", description = "To-do item operations")
    )
)]
pub struct ApiDoc;
