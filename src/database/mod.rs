use async_trait::async_trait;
use std::{ops::Deref, sync::Arc};

use crate::{
    config,
    schema::{InsertPost, InsertUser, Post, User},
    types::id::{PostId, UserId},
};

mod error;
mod memory;
mod pool;
mod postgres;

pub use self::error::*;
pub use self::memory::MemoryStore;
pub use self::pool::{Pool, PoolConnection};
pub use self::postgres::PgStore;

pub type Connection = sqlx::PgConnection;

/// Storage of users and posts. Every method is a single row lookup,
/// a single row mutation or a single filtered list query.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Returns `None` if the username is already taken.
    async fn insert_user(&self, user: InsertUser<'_>) -> Result<Option<User>>;
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn insert_post(&self, post: InsertPost<'_>) -> Result<Post>;
    async fn find_post(&self, id: PostId) -> Result<Option<Post>>;
    async fn posts_by_owner(&self, user_id: UserId) -> Result<Vec<Post>>;
    /// Replaces only the title and content of a post.
    async fn update_post(&self, id: PostId, title: &str, content: &str) -> Result<Option<Post>>;
    /// Returns `false` if there was nothing to delete.
    async fn delete_post(&self, id: PostId) -> Result<bool>;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Cheaply cloneable handle to whichever [`Store`] the server uses.
#[derive(Clone)]
pub struct Database(Arc<dyn Store>);

impl Database {
    #[must_use]
    pub fn new(store: impl Store) -> Self {
        Self(Arc::new(store))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Connects to Postgres and applies pending migrations.
    #[tracing::instrument(skip_all, name = "db.connect_postgres")]
    pub async fn connect(cfg: &config::Database) -> Result<Self> {
        let pool = Pool::new(cfg).await?;
        pool.migrate().await?;
        Ok(Self::new(PgStore::new(pool)))
    }
}

impl Deref for Database {
    type Target = dyn Store;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Database").field(&self.0.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_its_type_name_in_name_fn() {
        let db = Database::in_memory();
        assert!(db.name().ends_with("MemoryStore"));
        assert!(format!("{db:?}").contains("MemoryStore"));
    }
}
