use serde::{Deserialize, Serialize};
use validator::{extras::is_blank, Validate, ValidateError};

use crate::{types::id::UserId, util::Sensitive};

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
            if is_blank(&self.username) {
                error.insert("Username is required");
            }
            error.build()
        });
        fields.insert("password", {
            let mut error = ValidateError::msg_builder();
            if self.password.is_empty() {
                error.insert("Password is required");
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
    pub token: Sensitive<String>,
}
