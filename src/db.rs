use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::models::{TodoItem, TodoList};

/// Outcome of the add-item operation. The existence and uniqueness
/// checks run inside the same transaction as the insert, so callers
/// see exactly one of these.
#[derive(Debug)]
pub enum AddItemOutcome {
    Created(TodoItem),
    ListNotFound,
    DuplicateDescription,
}

/// Shareable Postgres client for use across async handlers.
///
/// Wraps a connection pool; handlers receive a clone through the
/// application state rather than reaching for a global handle.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Connect to Postgres using the DB_* configuration.
    ///
    /// Connection failure here is fatal to startup; there is no retry
    /// or backoff.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url())
            .await
            .context("Failed to connect to Postgres")?;

        tracing::info!(
            "Connected to Postgres database '{}' at {}:{}",
            config.db_name,
            config.db_host,
            config.db_port
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool. Used by tests, which build their pools
    /// lazily so the 400 paths can be exercised without a database.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lightweight connectivity probe for the health endpoint.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new list with a server-generated id.
    pub async fn insert_list(&self, name: String) -> Result<TodoList, sqlx::Error> {
        let list = TodoList {
            id: Uuid::new_v4(),
            name,
        };

        sqlx::query("INSERT INTO todo_lists (id, name) VALUES ($1, $2)")
            .bind(list.id)
            .bind(&list.name)
            .execute(&self.pool)
            .await?;

        Ok(list)
    }

    /// Fetch a list by id. Returns `None` when no such list exists.
    pub async fn fetch_list(&self, id: Uuid) -> Result<Option<TodoList>, sqlx::Error> {
        sqlx::query_as::<_, TodoList>("SELECT id, name FROM todo_lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Fetch every item belonging to a list, in database-default
    /// order (no ordering is part of the contract).
    pub async fn fetch_items(&self, list_id: Uuid) -> Result<Vec<TodoItem>, sqlx::Error> {
        sqlx::query_as::<_, TodoItem>(
            "SELECT id, list_id, description, is_checked FROM todo_items WHERE list_id = $1",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Add an item to a list.
    ///
    /// The list-existence check, the duplicate-description check, and
    /// the insert all run in one transaction. The existence check
    /// takes an exclusive lock on the list row, so concurrent adds to
    /// the same list serialize: the second transaction blocks until
    /// the first commits and its duplicate check then sees the
    /// committed insert.
    pub async fn add_item(
        &self,
        list_id: Uuid,
        description: String,
    ) -> Result<AddItemOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let list_exists =
            sqlx::query_scalar::<_, Uuid>("SELECT id FROM todo_lists WHERE id = $1 FOR UPDATE")
                .bind(list_id)
                .fetch_optional(&mut *tx)
                .await?;
        if list_exists.is_none() {
            return Ok(AddItemOutcome::ListNotFound);
        }

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM todo_items WHERE list_id = $1 AND description = $2",
        )
        .bind(list_id)
        .bind(&description)
        .fetch_one(&mut *tx)
        .await?;
        if count > 0 {
            return Ok(AddItemOutcome::DuplicateDescription);
        }

        let item = TodoItem {
            id: Uuid::new_v4(),
            list_id,
            description,
            is_checked: false,
        };

        sqlx::query(
            "INSERT INTO todo_items (id, list_id, description, is_checked) VALUES ($1, $2, $3, $4)",
        )
        .bind(item.id)
        .bind(item.list_id)
        .bind(&item.description)
        .bind(item.is_checked)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(AddItemOutcome::Created(item))
    }

    /// Unconditional update by id. A nonexistent id is not an error;
    /// the affected-row count is deliberately not inspected.
    pub async fn update_item(
        &self,
        id: Uuid,
        description: String,
        is_checked: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE todo_items SET description = $1, is_checked = $2 WHERE id = $3")
            .bind(description)
            .bind(is_checked)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Unconditional delete by id. Deleting an absent id is a no-op.
    pub async fn delete_item(&self, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM todo_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Connects to the database named by TEST_DATABASE_URL and makes
    /// sure the schema exists. Tests that call this skip silently when
    /// the variable is unset, so the suite passes without a database.
    pub(crate) async fn test_db() -> Option<Db> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = PgPool::connect(&url)
            .await
            .expect("TEST_DATABASE_URL is set but unreachable");

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todo_lists (id uuid PRIMARY KEY, name text)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todo_items (
                id uuid PRIMARY KEY,
                list_id uuid REFERENCES todo_lists(id),
                description text,
                is_checked boolean
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        Some(Db::from_pool(pool))
    }

    #[tokio::test]
    async fn test_insert_and_fetch_list() {
        let Some(db) = test_db().await else { return };

        let created = db.insert_list("Groceries".to_string()).await.unwrap();
        let fetched = db.fetch_list(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Groceries");
    }

    #[tokio::test]
    async fn test_fetch_missing_list_is_none() {
        let Some(db) = test_db().await else { return };

        let fetched = db.fetch_list(Uuid::new_v4()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_add_item_to_missing_list() {
        let Some(db) = test_db().await else { return };

        let outcome = db.add_item(Uuid::new_v4(), "Milk".to_string()).await.unwrap();
        assert!(matches!(outcome, AddItemOutcome::ListNotFound));
    }

    #[tokio::test]
    async fn test_add_item_rejects_duplicate_description() {
        let Some(db) = test_db().await else { return };

        let list = db.insert_list("Dupes".to_string()).await.unwrap();

        let first = db.add_item(list.id, "Milk".to_string()).await.unwrap();
        let AddItemOutcome::Created(item) = first else {
            panic!("first insert should succeed");
        };
        assert_eq!(item.list_id, list.id);
        assert!(!item.is_checked);

        let second = db.add_item(list.id, "Milk".to_string()).await.unwrap();
        assert!(matches!(second, AddItemOutcome::DuplicateDescription));

        // Same description in a different list is fine.
        let other = db.insert_list("Other".to_string()).await.unwrap();
        let third = db.add_item(other.id, "Milk".to_string()).await.unwrap();
        assert!(matches!(third, AddItemOutcome::Created(_)));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_adds_admit_exactly_one() {
        let Some(db) = test_db().await else { return };

        let list = db.insert_list("Races".to_string()).await.unwrap();

        let (first, second) = tokio::join!(
            db.add_item(list.id, "Milk".to_string()),
            db.add_item(list.id, "Milk".to_string())
        );
        let outcomes = [first.unwrap(), second.unwrap()];

        let created = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, AddItemOutcome::Created(_)))
            .count();
        let duplicates = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, AddItemOutcome::DuplicateDescription))
            .count();
        assert_eq!(created, 1);
        assert_eq!(duplicates, 1);

        let items = db.fetch_items(list.id).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Milk");
    }

    #[tokio::test]
    async fn test_fetch_items_empty_for_new_list() {
        let Some(db) = test_db().await else { return };

        let list = db.insert_list("Empty".to_string()).await.unwrap();
        let items = db.fetch_items(list.id).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_are_unconditional() {
        let Some(db) = test_db().await else { return };

        // Neither operation errors on an id that was never inserted.
        let ghost = Uuid::new_v4();
        db.update_item(ghost, "anything".to_string(), true).await.unwrap();
        db.delete_item(ghost).await.unwrap();

        let list = db.insert_list("Updates".to_string()).await.unwrap();
        let outcome = db.add_item(list.id, "Milk".to_string()).await.unwrap();
        let AddItemOutcome::Created(item) = outcome else {
            panic!("insert should succeed");
        };

        db.update_item(item.id, "Oat milk".to_string(), true).await.unwrap();
        let items = db.fetch_items(list.id).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Oat milk");
        assert!(items[0].is_checked);

        db.delete_item(item.id).await.unwrap();
        assert!(db.fetch_items(list.id).await.unwrap().is_empty());
        // Second delete of the same id is still a no-op.
        db.delete_item(item.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_health_check() {
        let Some(db) = test_db().await else { return };
        db.health_check().await.unwrap();
    }
}
