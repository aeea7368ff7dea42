pub mod controllers;
pub mod cors;
pub mod error;
pub mod identity;
pub mod util;

pub use cors::cors;
pub use error::Error;
pub use identity::Identity;
