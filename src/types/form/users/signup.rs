use serde::{Deserialize, Serialize};
use validator::{extras::validate_length, Validate, ValidateError};

use crate::{
    types::id::UserId,
    util::{validation, Sensitive},
};

#[derive(Debug, Deserialize, Serialize)]
pub struct Request {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: Sensitive<String>,
}

impl Validate for Request {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        fields.insert("username", {
            let mut error = ValidateError::msg_builder();
            if self.username.is_empty() {
                error.insert("Username is required");
            } else if !validation::is_valid_username(&self.username) {
                error.insert("Invalid username");
            }
            error.build()
        });

        // Only presence is checked, there is no password policy.
        fields.insert("password", {
            let mut error = ValidateError::msg_builder();
            if self.password.is_empty() {
                error.insert("Password is required");
            } else if !validate_length(
                self.password.as_str(),
                None,
                Some(validation::PASSWORD_MAX),
                None,
            ) {
                error.insert("Passwords must not be too big");
            }
            error.build()
        });

        fields.build().into_result()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Response {
    pub id: UserId,
    pub username: String,
}
