use crate::db::Db;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}
