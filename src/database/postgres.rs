use async_trait::async_trait;

use super::{Pool, Result, Store};
use crate::{
    schema::{InsertPost, InsertUser, Post, User},
    types::id::{PostId, UserId},
};

/// [`Store`] backed by a Postgres connection pool. Each call
/// acquires its own connection and releases it when done.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_user(&self, user: InsertUser<'_>) -> Result<Option<User>> {
        let mut conn = self.pool.get().await?;
        user.insert(&mut conn).await
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let mut conn = self.pool.get().await?;
        User::by_username(&mut conn, username).await
    }

    async fn insert_post(&self, post: InsertPost<'_>) -> Result<Post> {
        let mut conn = self.pool.get().await?;
        post.insert(&mut conn).await
    }

    async fn find_post(&self, id: PostId) -> Result<Option<Post>> {
        let mut conn = self.pool.get().await?;
        Post::find(&mut conn, id).await
    }

    async fn posts_by_owner(&self, user_id: UserId) -> Result<Vec<Post>> {
        let mut conn = self.pool.get().await?;
        Post::by_owner(&mut conn, user_id).await
    }

    async fn update_post(&self, id: PostId, title: &str, content: &str) -> Result<Option<Post>> {
        let mut conn = self.pool.get().await?;
        Post::update(&mut conn, id, title, content).await
    }

    async fn delete_post(&self, id: PostId) -> Result<bool> {
        let mut conn = self.pool.get().await?;
        Post::delete(&mut conn, id).await
    }
}
