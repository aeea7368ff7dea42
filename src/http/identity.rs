use actix_web::{http::header, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

use super::Error;
use crate::{auth::Claims, types::id::UserId, App};

/// Identity of the user making the request, taken only from the
/// claims of a valid bearer token. The user records are never
/// consulted to build it.
///
/// Handlers taking an [`Identity`] reject requests without a valid
/// token with `401 Unauthorized` before they run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
enum IdentityError {
    #[error("Missing bearer token")]
    MissingToken,
    #[error("The web app has no available configuration")]
    NoConfig,
}

impl Identity {
    pub fn from_token(token: &str, secret: &str) -> Result<Self, Error> {
        let claims = Claims::validate(token, secret)?;
        Ok(Self {
            id: claims.user_id()?,
            name: claims.name,
        })
    }

    fn from_request_sync(req: &HttpRequest) -> Result<Self, Error> {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
            .map(|(_, token)| token.trim())
            .filter(|v| !v.is_empty());

        let Some(token) = token else {
            return Err(Error::from_context(
                crate::types::Error::Unauthorized,
                IdentityError::MissingToken,
            ));
        };

        let Some(app) = req.app_data::<web::Data<App>>() else {
            return Err(Error::from_context(
                crate::types::Error::Internal,
                IdentityError::NoConfig,
            ));
        };

        Self::from_token(token, app.jwt_secret())
    }
}

impl FromRequest for Identity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Self::from_request_sync(req))
    }
}
