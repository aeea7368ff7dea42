use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    config,
    database::Database,
    http::Identity,
    types::{form::users::signup, id::UserId},
    util::Sensitive,
    App,
};

pub const JWT_SECRET: &str = "quill-test-secret-key";

#[must_use]
pub fn build_test_config() -> config::Server {
    config::Server {
        ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        workers: None,
        auth: config::Auth {
            jwt_secret: Sensitive::from(JWT_SECRET),
        },
        db: None,
        cors: config::Cors::default(),
        logging: config::Logging::default(),
    }
}

/// Builds an [`App`] backed by a fresh in-memory store.
#[must_use]
pub fn build_test_app() -> App {
    App::with_database(build_test_config(), Database::in_memory())
}

/// Identity with a unique user id. The user does not need to exist
/// since identities are never checked against the store.
#[must_use]
pub fn identity(name: &str) -> Identity {
    static LAST_ID: AtomicU64 = AtomicU64::new(1000);
    Identity {
        id: UserId::new(LAST_ID.fetch_add(1, Ordering::Relaxed)),
        name: name.to_string(),
    }
}

#[must_use]
pub fn signup_form(username: &str, password: &str) -> signup::Request {
    signup::Request {
        username: username.to_string(),
        password: Sensitive::from(password),
    }
}
