use validator::Validate;

use crate::{
    auth::{password, Claims},
    http::Error,
    schema::User,
    types::{self, form::users::signin},
    App,
};

/// Checks the credentials of a user and issues a bearer token.
#[derive(Debug)]
pub struct SignIn {
    pub form: signin::Request,
}

#[derive(Debug)]
pub struct SignInResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid username or password")]
struct InvalidCredentials;

impl SignIn {
    #[tracing::instrument(
        skip_all,
        fields(user.name = %self.form.username),
        name = "services.users.signin",
    )]
    pub async fn perform(self, app: &App) -> Result<SignInResponse, Error> {
        self.form.validate()?;

        // Unknown users and wrong passwords are indistinguishable to the client.
        let invalid_credentials =
            || Error::from_context(types::Error::InvalidCredentials, InvalidCredentials);

        let Some(user) = app.db.find_user_by_username(&self.form.username).await? else {
            return Err(invalid_credentials());
        };

        let attempt = self.form.password.as_str().to_owned();
        if !password::verify_blocking(attempt, user.password_hash.clone()).await? {
            return Err(invalid_credentials());
        }

        let token = Claims::issue(user.id, &user.username, app.jwt_secret()).await?;
        Ok(SignInResponse { user, token })
    }
}
