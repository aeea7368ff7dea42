use serde::Deserialize;
use validator::{extras::validate_length, Validate, ValidateError};

use crate::util::Sensitive;

#[derive(Debug, Clone, Deserialize)]
pub struct Auth {
    /// Symmetric key used to sign and verify bearer tokens.
    ///
    /// **Environment variables**:
    /// - `QUILL_AUTH_JWT_SECRET` or `JWT_SECRET`
    pub jwt_secret: Sensitive<String>,
}

impl Auth {
    const JWT_SECRET_MIN: usize = 12;
    const JWT_SECRET_MAX: usize = 1024;
}

impl Validate for Auth {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        fields.insert("jwt_secret", {
            let mut error = ValidateError::msg_builder();
            let valid = validate_length(
                self.jwt_secret.as_str(),
                Some(Self::JWT_SECRET_MIN),
                Some(Self::JWT_SECRET_MAX),
                None,
            );
            if !valid {
                error.insert("Invalid JWT secret key");
            }
            error.build()
        });
        fields.build().into_result()
    }
}
