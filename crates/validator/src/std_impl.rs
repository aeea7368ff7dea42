use crate::{HasLength, Validate, ValidateError};
use std::borrow::Cow;

impl HasLength for Cow<'_, str> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for &str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

// ------------------------------------------------ //

impl<T: Validate> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidateError> {
        T::validate(self)
    }
}

impl<T: Validate> Validate for &T {
    fn validate(&self) -> Result<(), ValidateError> {
        T::validate(self)
    }
}
