use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::config;

const MAX_AGE_SECS: usize = 3600;

/// Builds the CORS middleware from the configured origins.
#[must_use]
pub fn cors(cfg: &config::Cors) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(MAX_AGE_SECS);

    if cfg.allows_any_origin() {
        return cors.allow_any_origin();
    }

    for origin in &cfg.origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}
