use validator::Validate;

use crate::{
    auth::password,
    http::Error,
    schema::{InsertUser, User},
    types::{self, form::users::signup},
    App,
};

/// Registers a new user.
#[derive(Debug)]
pub struct SignUp {
    pub form: signup::Request,
}

#[derive(Debug, thiserror::Error)]
#[error("Username is already taken")]
struct UsernameTaken;

impl SignUp {
    #[tracing::instrument(
        skip_all,
        fields(user.name = %self.form.username),
        name = "services.users.signup",
    )]
    pub async fn perform(self, app: &App) -> Result<User, Error> {
        self.form.validate()?;

        let password_hash =
            password::hash_blocking(self.form.password.as_str().to_owned()).await?;
        let user = app
            .db
            .insert_user(InsertUser {
                username: &self.form.username,
                password_hash: &password_hash,
            })
            .await?;

        let Some(user) = user else {
            return Err(Error::from_context(types::Error::UserExists, UsernameTaken));
        };

        tracing::info!(user.id = %user.id, "registered new user");
        Ok(user)
    }
}
