// Validation traits

use crate::{Shape, ValidationError};

/// Trait for validatable types
pub trait Validate {
    /// Validate the value and return errors if any
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

/// Types whose accepted JSON form is described by a [`Shape`]
pub trait Schema {
    /// The shape untyped input must have to become `Self`
    fn shape() -> Shape;
}
