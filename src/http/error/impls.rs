use actix_web::{body::BoxBody, http::StatusCode, HttpResponse};
use error_stack::Report;

use super::Error;
use crate::{
    auth::{
        password::{HashPasswordError, VerifyPasswordError},
        TokenError,
    },
    database::{self, ErrorExt2},
    types::Error as ErrorType,
};

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::ReadonlyMode => StatusCode::SERVICE_UNAVAILABLE,
            ErrorType::InvalidFormBody(..) => StatusCode::BAD_REQUEST,
            ErrorType::Unauthorized | ErrorType::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ErrorType::Forbidden => StatusCode::FORBIDDEN,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::UserExists => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Server error occurred");
        } else {
            tracing::debug!(error = %self, "Request failed");
        }
        HttpResponse::build(status).json(&self.error_type)
    }
}

impl From<Report<database::Error>> for Error {
    fn from(value: Report<database::Error>) -> Self {
        if value.is_readonly() {
            Error::from_report(ErrorType::ReadonlyMode, value)
        } else {
            Error::from_report(ErrorType::Internal, value)
        }
    }
}

impl From<Report<TokenError>> for Error {
    fn from(value: Report<TokenError>) -> Self {
        match value.current_context() {
            TokenError::Encode => Error::from_report(ErrorType::Internal, value),
            TokenError::Invalid | TokenError::InvalidIdClaim => {
                Error::from_report(ErrorType::Unauthorized, value)
            }
        }
    }
}

impl From<Report<HashPasswordError>> for Error {
    fn from(value: Report<HashPasswordError>) -> Self {
        Error::from_report(ErrorType::Internal, value)
    }
}

impl From<Report<VerifyPasswordError>> for Error {
    fn from(value: Report<VerifyPasswordError>) -> Self {
        Error::from_report(ErrorType::Internal, value)
    }
}

impl From<validator::ValidateError> for Error {
    fn from(value: validator::ValidateError) -> Self {
        #[derive(Debug, thiserror::Error)]
        #[error("Validation error occurred")]
        struct ValidateError;
        Error::from_context(ErrorType::InvalidFormBody(value), ValidateError)
    }
}
