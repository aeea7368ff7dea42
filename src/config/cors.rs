use serde::{de::SeqAccess, Deserialize, Deserializer};
use std::fmt;
use validator::{extras::validate_url, Validate, ValidateError};

/// Cross-origin access for browser clients served from another origin.
#[derive(Debug, Clone, Deserialize)]
pub struct Cors {
    /// Origins allowed to call the API. `*` allows any origin.
    ///
    /// Accepts a list or a comma separated string.
    ///
    /// **Environment variable**: `QUILL_CORS_ORIGINS`
    #[serde(
        default = "Cors::default_origins",
        deserialize_with = "deserialize_origins"
    )]
    pub origins: Vec<String>,
}

impl Cors {
    pub const ANY_ORIGIN: &'static str = "*";
    const DEFAULT_ORIGIN: &'static str = "http://localhost:3000";

    fn default_origins() -> Vec<String> {
        vec![Self::DEFAULT_ORIGIN.to_string()]
    }

    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.origins.iter().any(|v| v == Self::ANY_ORIGIN)
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self {
            origins: Self::default_origins(),
        }
    }
}

impl Validate for Cors {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        fields.insert("origins", {
            let mut error = ValidateError::msg_builder();
            let invalid = self
                .origins
                .iter()
                .any(|v| v != Self::ANY_ORIGIN && !validate_url(v));

            if invalid {
                error.insert("Invalid CORS origin");
            }
            error.build()
        });
        fields.build().into_result()
    }
}

fn deserialize_origins<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;

    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of origins or a comma separated string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.split(',')
                .map(|v| v.trim().trim_end_matches('/'))
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut origins = Vec::new();
            while let Some(origin) = seq.next_element::<String>()? {
                origins.push(origin.trim().trim_end_matches('/').to_string());
            }
            Ok(origins)
        }
    }

    deserializer.deserialize_any(Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_origins() {
        let cors = Cors {
            origins: vec!["http://localhost:3000".into(), Cors::ANY_ORIGIN.into()],
        };
        assert!(cors.validate().is_ok());
        assert!(cors.allows_any_origin());

        let cors = Cors {
            origins: vec!["not an origin".into()],
        };
        assert_eq!(
            r#"{"origins": {"_errors": ["Invalid CORS origin"]}}"#,
            format!("{:?}", cors.validate().unwrap_err())
        );
    }

    #[test]
    fn defaults_to_local_client() {
        let cors = Cors::default();
        assert_eq!(cors.origins, vec!["http://localhost:3000".to_string()]);
        assert!(!cors.allows_any_origin());
    }
}
