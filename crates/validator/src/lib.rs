#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod std_impl;

pub use error::*;
pub mod extras;

/// Checks whether the data given from a client is acceptable.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidateError>;
}

pub trait HasLength {
    fn length(&self) -> usize;
}
