use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;
use tracing::{info, instrument};

use crate::models::{MenuItem, StoreResult};

/// Trait defining the interface for menu data access
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Return every menu item, in store order.
    async fn list_items(&self) -> StoreResult<Vec<MenuItem>>;
}

/// In-memory implementation of the MenuRepository trait.
///
/// The item list is fixed at construction and never mutated, so
/// `list_items` cannot fail.
pub struct InMemoryMenuRepository {
    items: Vec<MenuItem>,
}

impl InMemoryMenuRepository {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The stock breakfast menu served when no database is configured.
    pub fn with_default_menu() -> Self {
        Self::new(vec![
            MenuItem::new(1, "Oats Porridge", 45),
            MenuItem::new(2, "Vegetable Upma", 50),
            MenuItem::new(3, "Sprouts Salad", 60),
        ])
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    #[instrument(skip(self))]
    async fn list_items(&self) -> StoreResult<Vec<MenuItem>> {
        Ok(self.items.clone())
    }
}

/// Postgres implementation of the MenuRepository trait.
///
/// Reads a pre-existing `menu_items` table; the service never writes to it
/// and runs no migrations.
pub struct PostgresMenuRepository {
    pool: PgPool,
}

impl PostgresMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a repository without dialing the database; the first query
    /// establishes the connection, so an unreachable host surfaces as a
    /// per-request failure rather than a startup failure.
    pub fn connect_lazy(options: PgConnectOptions) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_lazy_with(options);
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PostgresMenuRepository {
    #[instrument(skip(self))]
    async fn list_items(&self) -> StoreResult<Vec<MenuItem>> {
        let items =
            sqlx::query_as::<_, MenuItem>("SELECT id, name, price FROM menu_items ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        info!("Fetched {} menu items", items.len());
        Ok(items)
    }
}
