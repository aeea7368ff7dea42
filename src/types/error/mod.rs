use serde::{ser::SerializeMap, Serialize};
use std::fmt::Display;
use validator::ValidateError;

pub mod codes;

/// Every failure a client can observe from the API. Each one is
/// terminal for the request that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Internal,
    /// The primary database refuses writes at the moment.
    ReadonlyMode,
    InvalidFormBody(ValidateError),
    /// Missing, malformed, expired or forged bearer token.
    Unauthorized,
    /// The caller is authenticated but does not own the resource.
    Forbidden,
    NotFound,
    InvalidCredentials,
    UserExists,
}

impl Error {
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::Internal => codes::INTERNAL,
            Self::ReadonlyMode => codes::READONLY_MODE,
            Self::InvalidFormBody(..) => codes::INVALID_FORM_BODY,
            Self::Unauthorized => codes::UNAUTHORIZED,
            Self::Forbidden => codes::FORBIDDEN,
            Self::NotFound => codes::NOT_FOUND,
            Self::InvalidCredentials => codes::INVALID_CREDENTIALS,
            Self::UserExists => codes::USER_EXISTS,
        }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Internal => "Internal error occurred. Please try again later.",
            Self::ReadonlyMode => {
                "This server is currently in read-only mode. Please try to do any write operations later."
            }
            Self::InvalidFormBody(..) => "Invalid form body",
            Self::Unauthorized => "Authentication required",
            Self::Forbidden => "You are not allowed to modify this resource",
            Self::NotFound => "Resource not found",
            Self::InvalidCredentials => "Invalid credentials",
            Self::UserExists => "User with the same username already exists",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal => f.write_str("Internal error occurred"),
            Self::ReadonlyMode => f.write_str("Tried to write while in read-only mode"),
            Self::InvalidFormBody(..) => f.write_str("Client sent an invalid request"),
            Self::Unauthorized => f.write_str("Attempt to access user-only route"),
            Self::Forbidden => f.write_str("Attempt to modify resource of another user"),
            Self::NotFound => f.write_str("Resource not found"),
            Self::InvalidCredentials => f.write_str("Failed to sign in user"),
            Self::UserExists => f.write_str("Failed to sign up user"),
        }
    }
}

impl std::error::Error for Error {}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let data = match self {
            Self::InvalidFormBody(data) => Some(data),
            _ => None,
        };

        let mut map = serializer.serialize_map(Some(if data.is_some() { 3 } else { 2 }))?;
        map.serialize_entry("code", &self.code())?;
        map.serialize_entry("message", self.message())?;
        if let Some(data) = data {
            map.serialize_entry("data", data)?;
        }
        map.end()
    }
}
