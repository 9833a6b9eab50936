// Shape descriptors
//
// A `Shape` is plain data describing which JSON values are accepted. Checking
// a value against it is a pure function that either yields a cleaned copy of
// the value (undeclared object keys removed) or every violation found, each
// tagged with its dotted field path.

use crate::{
    IsBoolean, IsObject, IsString, MinLength, Required, ValidationError, ValidationErrors,
};
use serde_json::{Map, Value};

/// Descriptor of an accepted JSON value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A string with a minimum length in characters
    String {
        min_length: usize,
        /// Never echo the value back in errors
        sensitive: bool,
    },
    /// A boolean
    Boolean,
    /// An object with a fixed set of required fields
    Object(Vec<Field>),
}

/// A named, required member of an object shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
}

/// Tagged result of checking a value against a shape
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value conforms; holds the cleaned value
    Success(Value),
    /// The value does not conform
    Failure(ValidationErrors),
}

impl Outcome {
    /// Whether the check succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Convert into a `Result`
    pub fn into_result(self) -> Result<Value, ValidationErrors> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(errors) => Err(errors),
        }
    }
}

impl Shape {
    /// Any string
    pub fn string() -> Self {
        Shape::String {
            min_length: 0,
            sensitive: false,
        }
    }

    /// A boolean
    pub fn boolean() -> Self {
        Shape::Boolean
    }

    /// An object whose listed fields are all required
    pub fn object<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Shape)>,
    {
        Shape::Object(
            fields
                .into_iter()
                .map(|(name, shape)| Field { name, shape })
                .collect(),
        )
    }

    /// Require at least `min` characters. Has no effect on non-string shapes.
    pub fn min_length(self, min: usize) -> Self {
        match self {
            Shape::String { sensitive, .. } => Shape::String {
                min_length: min,
                sensitive,
            },
            other => other,
        }
    }

    /// Keep the value out of error reports. Has no effect on non-string shapes.
    pub fn sensitive(self) -> Self {
        match self {
            Shape::String { min_length, .. } => Shape::String {
                min_length,
                sensitive: true,
            },
            other => other,
        }
    }

    /// Check a present value
    pub fn check(&self, value: &Value) -> Outcome {
        self.parse(Some(value))
    }

    /// Check a value that may be absent; absence is a violation
    pub fn parse(&self, value: Option<&Value>) -> Outcome {
        let mut errors = ValidationErrors::default();
        match self.walk("", value, &mut errors) {
            Some(clean) if errors.is_empty() => Outcome::Success(clean),
            _ => Outcome::Failure(errors),
        }
    }

    fn walk(&self, path: &str, value: Option<&Value>, errors: &mut ValidationErrors) -> Option<Value> {
        let value = collect(Required::validate(value, path), errors)?;

        match self {
            Shape::String {
                min_length,
                sensitive,
            } => {
                let text = collect(IsString::validate(value, path), errors)?;
                match MinLength(*min_length).validate(text, path) {
                    Ok(()) => Some(Value::String(text.to_owned())),
                    Err(error) if *sensitive => {
                        errors.add(error.redacted());
                        None
                    }
                    Err(error) => {
                        errors.add(error);
                        None
                    }
                }
            }
            Shape::Boolean => collect(IsBoolean::validate(value, path), errors).map(Value::Bool),
            Shape::Object(fields) => {
                let map = collect(IsObject::validate(value, path), errors)?;
                let mut clean = Map::new();
                for field in fields {
                    let child = join(path, field.name);
                    if let Some(member) = field.shape.walk(&child, map.get(field.name), errors) {
                        clean.insert(field.name.to_owned(), member);
                    }
                }
                Some(Value::Object(clean))
            }
        }
    }
}

fn collect<T>(result: Result<T, ValidationError>, errors: &mut ValidationErrors) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.add(error);
            None
        }
    }
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{}.{}", parent, name)
    }
}
