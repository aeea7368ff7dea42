use error_stack::{Report, Result, ResultExt};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use validator::{Validate, ValidateError};

use super::ParseError;
use crate::util::{figment::FigmentErrorAttachable, validator::IntoValidatorReport};

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    /// **Environment variable**: `QUILL_IP`
    #[serde(default = "Server::default_ip")]
    pub ip: IpAddr,
    /// **Environment variable**: `QUILL_PORT`
    #[serde(default = "Server::default_port")]
    pub port: u16,
    /// Amount of HTTP workers to spawn. Defaults to the amount
    /// of physical CPUs available if not set.
    ///
    /// **Environment variable**: `QUILL_WORKERS`
    #[serde(default)]
    pub workers: Option<NonZeroUsize>,

    pub auth: super::Auth,
    /// Posts and users are kept in memory if this is not set.
    #[serde(default)]
    pub db: Option<super::Database>,
    #[serde(default)]
    pub cors: super::Cors,
    #[serde(default)]
    pub logging: super::Logging,
}

impl Server {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        let config = Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

        config
            .validate()
            .into_validator_report()
            .change_context(ParseError)?;

        Ok(config)
    }
}

impl Validate for Server {
    fn validate(&self) -> std::result::Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        if let Err(error) = self.auth.validate() {
            fields.insert("auth", error);
        }
        if let Some(Err(error)) = self.db.as_ref().map(Validate::validate) {
            fields.insert("db", error);
        }
        if let Err(error) = self.cors.validate() {
            fields.insert("cors", error);
        }
        fields.build().into_result()
    }
}

impl Server {
    const DEFAULT_CONFIG_FILE: &'static str = "quill.toml";
    const DEFAULT_PORT: u16 = 5178;

    fn default_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    const fn default_port() -> u16 {
        Self::DEFAULT_PORT
    }

    /// Creates a default [`Figment`] object to load server
    /// configuration. This function is there for testing.
    ///
    /// [`Figment`]: figment::Figment
    pub(crate) fn figment() -> figment::Figment {
        use figment::{
            providers::{Env, Format, Toml},
            Figment,
        };

        Figment::new()
            .merge(Toml::file(Self::DEFAULT_CONFIG_FILE))
            // Keys with underscores in them have to be mapped by hand,
            // otherwise they get split into nested tables.
            .merge(Env::prefixed("QUILL_").map(|v| {
                match v.as_str().to_ascii_uppercase().as_str() {
                    "AUTH_JWT_SECRET" => "auth.jwt_secret".into(),

                    "DB_POOL_SIZE" => "db.pool_size".into(),
                    "DB_MIN_IDLE" => "db.min_idle".into(),
                    "DB_TIMEOUT_SECS" => "db.timeout_secs".into(),
                    "DB_ENFORCE_TLS" => "db.enforce_tls".into(),

                    "CORS_ORIGINS" => "cors.origins".into(),

                    _ => v.as_str().replace('_', ".").into(),
                }
            }))
            // Environment variable aliases
            .merge(
                Env::raw()
                    .only(&["DATABASE_URL", "JWT_SECRET"])
                    .map(|v| match v.as_str().to_ascii_uppercase().as_str() {
                        "DATABASE_URL" => "db.url".into(),
                        "JWT_SECRET" => "auth.jwt_secret".into(),
                        _ => v.into(),
                    }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingStyle;
    use figment::Jail;
    use std::num::{NonZeroU32, NonZeroU64};

    #[test]
    fn env_aliases() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "postgres://localhost/quill");
            jail.set_env("JWT_SECRET", "a-very-secret-key");

            jail.set_env("QUILL_DB_MIN_IDLE", "2");
            jail.set_env("QUILL_DB_POOL_SIZE", "100");
            jail.set_env("QUILL_DB_ENFORCE_TLS", "true");
            jail.set_env("QUILL_DB_TIMEOUT_SECS", "3030");

            let config: Server = Server::figment().extract()?;
            let db = config.db.as_ref().unwrap();
            assert_eq!(db.url.as_str(), "postgres://localhost/quill");
            assert_eq!(db.min_idle.unwrap(), NonZeroU32::new(2).unwrap());
            assert_eq!(db.pool_size, NonZeroU32::new(100).unwrap());
            assert!(db.enforce_tls);
            assert_eq!(db.timeout_secs, NonZeroU64::new(3030).unwrap());
            assert_eq!(config.auth.jwt_secret.as_str(), "a-very-secret-key");
            assert!(config.validate().is_ok());

            Ok(())
        });
    }

    #[test]
    fn prefixed_env_and_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("QUILL_AUTH_JWT_SECRET", "another-secret-key");
            jail.set_env("QUILL_PORT", "8080");
            jail.set_env("QUILL_WORKERS", "3");
            jail.set_env("QUILL_LOGGING_STYLE", "json");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.ip, Server::default_ip());
            assert_eq!(config.port, 8080);
            assert_eq!(config.workers, NonZeroUsize::new(3));
            assert_eq!(config.logging.style, LoggingStyle::JSON);
            assert_eq!(config.auth.jwt_secret.as_str(), "another-secret-key");
            assert!(config.db.is_none());
            assert_eq!(config.cors.origins, vec!["http://localhost:3000".to_string()]);

            Ok(())
        });
    }

    #[test]
    fn reads_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "quill.toml",
                r#"
                port = 9000

                [auth]
                jwt_secret = "from-the-config-file"

                [db]
                url = "postgres://db.internal/quill"
                "#,
            )?;
            jail.set_env("QUILL_PORT", "9001");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.port, 9001);
            assert_eq!(config.auth.jwt_secret.as_str(), "from-the-config-file");

            let db = config.db.unwrap();
            assert_eq!(db.url.as_str(), "postgres://db.internal/quill");
            assert_eq!(db.pool_size, NonZeroU32::new(5).unwrap());
            assert!(!db.enforce_tls);

            Ok(())
        });
    }

    #[test]
    fn rejects_short_jwt_secret() {
        Jail::expect_with(|jail| {
            jail.set_env("JWT_SECRET", "short");

            let config: Server = Server::figment().extract()?;
            let error = config.validate().unwrap_err();
            assert_eq!(
                r#"{"auth": {"jwt_secret": {"_errors": ["Invalid JWT secret key"]}}}"#,
                format!("{error:?}")
            );

            Ok(())
        });
    }

    #[test]
    fn cors_origins() {
        Jail::expect_with(|jail| {
            jail.set_env("JWT_SECRET", "a-very-secret-key");
            jail.set_env(
                "QUILL_CORS_ORIGINS",
                "http://localhost:3000, https://quill.example.com/",
            );

            let config: Server = Server::figment().extract()?;
            assert_eq!(
                config.cors.origins,
                vec![
                    "http://localhost:3000".to_string(),
                    "https://quill.example.com".to_string()
                ]
            );
            assert!(config.validate().is_ok());

            jail.set_env("QUILL_CORS_ORIGINS", "*");
            let config: Server = Server::figment().extract()?;
            assert!(config.cors.allows_any_origin());

            Ok(())
        });
    }

    #[test]
    fn rejects_invalid_cors_origin() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "quill.toml",
                r#"
                [auth]
                jwt_secret = "from-the-config-file"

                [cors]
                origins = ["http://a.example.com", "bad origin"]
                "#,
            )?;

            let config: Server = Server::figment().extract()?;
            let error = config.validate().unwrap_err();
            assert_eq!(
                r#"{"cors": {"origins": {"_errors": ["Invalid CORS origin"]}}}"#,
                format!("{error:?}")
            );

            Ok(())
        });
    }
}
