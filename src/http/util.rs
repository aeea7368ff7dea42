use actix_web::{error::JsonPayloadError, web, HttpRequest};
use std::str::FromStr;
use validator::ValidateError;

use super::Error;
use crate::types::{
    self,
    id::{marker::Marker, Id},
};

/// Malformed JSON bodies are reported the same way as failed form
/// validation.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let error = ValidateError::single("body", err.to_string());
    Error::from(error).into()
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid id in path")]
struct InvalidPathId;

/// Parses an id from a path segment. Ids that are not positive
/// integers can never match a resource.
pub fn parse_path_id<T: Marker>(raw: &str) -> Result<Id<T>, Error> {
    Id::from_str(raw).map_err(|_| Error::from_context(types::Error::NotFound, InvalidPathId))
}
