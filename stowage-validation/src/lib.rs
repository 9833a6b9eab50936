//! Validation for Stowage
//!
//! Untyped JSON input is checked against plain shape descriptors before it is
//! turned into typed values. Every violation is reported with the dotted path
//! of the field it concerns.
//!
//! # Examples
//!
//! ## Checking a shape
//!
//! ```
//! use serde_json::json;
//! use stowage_validation::{Outcome, Shape};
//!
//! let shape = Shape::object([
//!     ("region", Shape::string().min_length(3)),
//!     ("forcePathStyle", Shape::boolean()),
//! ]);
//!
//! let outcome = shape.check(&json!({"region": "eu-west-1", "forcePathStyle": true}));
//! assert!(outcome.is_success());
//!
//! match shape.check(&json!({"region": "eu"})) {
//!     Outcome::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Outcome::Success(_) => unreachable!(),
//! }
//! ```
//!
//! ## Field validators
//!
//! ```
//! use stowage_validation::{MinLength, Validate, ValidationError};
//!
//! struct Bucket {
//!     name: String,
//! }
//!
//! impl Validate for Bucket {
//!     fn validate(&self) -> Result<(), Vec<ValidationError>> {
//!         MinLength(1).validate(&self.name, "bucket").map_err(|e| vec![e])
//!     }
//! }
//!
//! assert!(Bucket { name: "logs".to_string() }.validate().is_ok());
//! assert!(Bucket { name: String::new() }.validate().is_err());
//! ```

mod errors;
mod pipe;
mod schema;
mod traits;
mod validators;

pub use errors::*;
pub use pipe::*;
pub use schema::*;
pub use traits::*;
pub use validators::*;
