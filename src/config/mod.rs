use thiserror::Error;

mod auth;
mod cors;
mod database;
mod logging;
mod server;

pub use auth::Auth;
pub use cors::Cors;
pub use database::Database;
pub use logging::{InvalidLoggingStyle, Logging, LoggingStyle};
pub use server::Server;

#[derive(Debug, Error)]
#[error("Failed to load configuration")]
pub struct ParseError;
