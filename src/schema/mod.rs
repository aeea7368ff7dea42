mod post;
mod user;

pub use post::{InsertPost, Post};
pub use user::{InsertUser, User};
