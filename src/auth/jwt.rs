use chrono::{DateTime, Duration, Utc};
use error_stack::{Report, Result, ResultExt};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::id::UserId;

/// Tokens cannot be refreshed. Users have to sign in again.
pub const TOKEN_LIFETIME_SECS: i64 = 2 * 60 * 60;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to encode token")]
    Encode,
    #[error("Invalid or expired token")]
    Invalid,
    #[error("Token has an invalid id claim")]
    InvalidIdClaim,
}

/// Claims embedded in every bearer token issued by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Claims {
    pub name: String,
    /// User id encoded as a string.
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    #[must_use]
    pub fn new(user_id: UserId, name: &str, now: DateTime<Utc>) -> Self {
        let issued_at = now.timestamp();
        Self {
            name: name.to_string(),
            id: user_id.to_string(),
            iat: issued_at,
            exp: (now + Duration::seconds(TOKEN_LIFETIME_SECS)).timestamp(),
        }
    }

    pub fn user_id(&self) -> Result<UserId, TokenError> {
        self.id
            .parse()
            .map_err(|e| Report::new(e).change_context(TokenError::InvalidIdClaim))
    }

    /// Signs these claims with HS256.
    pub fn encode(&self, secret: &str) -> Result<String, TokenError> {
        let header = Header::new(Algorithm::HS256);
        let key = EncodingKey::from_secret(secret.as_bytes());
        jsonwebtoken::encode(&header, self, &key).change_context(TokenError::Encode)
    }

    /// Issues a token for the user, valid for two hours from now.
    #[tracing::instrument(skip(secret), name = "auth.jwt.issue")]
    pub async fn issue(user_id: UserId, name: &str, secret: &str) -> Result<String, TokenError> {
        let claims = Self::new(user_id, name, Utc::now());
        let secret = secret.to_string();
        tokio::task::spawn_blocking(move || claims.encode(&secret))
            .await
            .change_context(TokenError::Encode)
            .attach_printable("token encoding task panicked")?
    }

    /// Verifies the signature and expiry of the token and returns
    /// its claims. No leeway is given to expired tokens.
    pub fn validate(token: &str, secret: &str) -> Result<Self, TokenError> {
        let key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let claims = jsonwebtoken::decode::<Self>(token, &key, &validation)
            .change_context(TokenError::Invalid)?
            .claims;

        claims.user_id()?;
        Ok(claims)
    }
}
