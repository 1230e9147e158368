// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const LISTS: &str = "/lists";
pub const LIST: &str = "/lists/{id}";
pub const ITEMS: &str = "/items";
pub const ITEM: &str = "/items/{id}";
