use serde::{Deserialize, Serialize};
use validator::{extras::is_blank, Validate, ValidateError};

/// Body of both `POST /api/post` and `PUT /api/post/{id}`. Partial
/// updates are not supported, so both fields are always required.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Validate for PostForm {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        fields.insert("title", {
            let mut error = ValidateError::msg_builder();
            if is_blank(&self.title) {
                error.insert("Title is required");
            }
            error.build()
        });
        fields.insert("content", {
            let mut error = ValidateError::msg_builder();
            if is_blank(&self.content) {
                error.insert("Content is required");
            }
            error.build()
        });
        fields.build().into_result()
    }
}
