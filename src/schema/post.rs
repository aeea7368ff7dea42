use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::{
    database::{Connection, ErrorExt, Result},
    types::id::{PostId, UserId},
};

/// A text post. `user_id` is the owner and never changes after
/// the post is created, and neither does `timestamp`.
#[derive(Debug, Clone, FromRow, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Copy)]
pub struct InsertPost<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub user_id: UserId,
}

impl Post {
    #[tracing::instrument(skip(conn), name = "db.posts.find")]
    pub async fn find(conn: &mut Connection, id: PostId) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "posts" WHERE id = $1"#)
            .bind(id)
            .fetch_optional(conn)
            .await
            .into_db_error()
    }

    #[tracing::instrument(skip(conn), name = "db.posts.by_owner")]
    pub async fn by_owner(conn: &mut Connection, user_id: UserId) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "posts" WHERE user_id = $1 ORDER BY id"#)
            .bind(user_id)
            .fetch_all(conn)
            .await
            .into_db_error()
    }

    /// Replaces title and content only. Returns `None` if the post
    /// is gone by the time this runs.
    #[tracing::instrument(skip(conn, title, content), name = "db.posts.update")]
    pub async fn update(
        conn: &mut Connection,
        id: PostId,
        title: &str,
        content: &str,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE "posts" SET title = $2, content = $3
            WHERE id = $1
            RETURNING *"#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .fetch_optional(conn)
        .await
        .into_db_error()
    }

    #[tracing::instrument(skip(conn), name = "db.posts.delete")]
    pub async fn delete(conn: &mut Connection, id: PostId) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM "posts" WHERE id = $1"#)
            .bind(id)
            .execute(conn)
            .await
            .into_db_error()?;

        Ok(result.rows_affected() > 0)
    }
}

impl InsertPost<'_> {
    #[tracing::instrument(skip_all, fields(user_id = %self.user_id), name = "db.posts.insert")]
    pub async fn insert(&self, conn: &mut Connection) -> Result<Post> {
        sqlx::query_as::<_, Post>(
            r#"INSERT INTO "posts" (title, content, timestamp, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *"#,
        )
        .bind(self.title)
        .bind(self.content)
        .bind(Utc::now())
        .bind(self.user_id)
        .fetch_one(conn)
        .await
        .into_db_error()
    }
}
