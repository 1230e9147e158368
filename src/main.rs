mod api_doc;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use api_doc::ApiDoc;
use axum::routing::{get, post, put};
use axum::Router;
use config::Config;
use db::Db;
use state::AppState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::LISTS, post(handlers::create_list_handler))
        .route(routes::LIST, get(handlers::get_list_handler))
        .route(routes::ITEMS, post(handlers::add_item_handler))
        .route(
            routes::ITEM,
            put(handlers::update_item_handler).delete(handlers::delete_item_handler),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("todo-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let db = Db::from_config(&config).await?;

    let state = AppState { db };

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
