use sqlx::FromRow;

use crate::{
    database::{Connection, ErrorExt, Result},
    types::id::UserId,
};

#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Copy)]
pub struct InsertUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
}

impl User {
    #[tracing::instrument(skip(conn), name = "db.users.by_username")]
    pub async fn by_username(conn: &mut Connection, username: &str) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "users" WHERE username = $1"#)
            .bind(username)
            .fetch_optional(conn)
            .await
            .into_db_error()
    }
}

impl InsertUser<'_> {
    /// Returns `None` if the username is already taken.
    #[tracing::instrument(skip_all, fields(username = %self.username), name = "db.users.insert")]
    pub async fn insert(&self, conn: &mut Connection) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO "users" (username, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (username) DO NOTHING
            RETURNING *"#,
        )
        .bind(self.username)
        .bind(self.password_hash)
        .fetch_optional(conn)
        .await
        .into_db_error()
    }
}
