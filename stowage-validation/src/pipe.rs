// Validation pipe between untyped JSON and typed values

use crate::{Schema, Validate, ValidationError, ValidationErrors};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Validation pipe that turns untyped input into typed values and back
pub struct ValidationPipe;

impl ValidationPipe {
    /// Check `input` against `T`'s shape and deserialize the cleaned value
    pub fn parse<T>(input: Option<&Value>) -> Result<T, ValidationErrors>
    where
        T: Schema + DeserializeOwned,
    {
        let clean = T::shape().parse(input).into_result()?;

        serde_json::from_value(clean).map_err(|e| {
            ValidationError::new("", format!("value does not deserialize: {}", e))
                .with_constraint("deserialize")
                .into()
        })
    }

    /// Validate a typed value and serialize it to its JSON form
    pub fn serialize<T>(value: &T) -> Result<Value, ValidationErrors>
    where
        T: Validate + Serialize,
    {
        value.validate().map_err(ValidationErrors::from)?;

        serde_json::to_value(value).map_err(|e| {
            ValidationError::new("", format!("value does not serialize: {}", e))
                .with_constraint("serialize")
                .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MinLength, Shape};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestDto {
        name: String,
        admin: bool,
    }

    impl Schema for TestDto {
        fn shape() -> Shape {
            Shape::object([
                ("name", Shape::string().min_length(3)),
                ("admin", Shape::boolean()),
            ])
        }
    }

    impl Validate for TestDto {
        fn validate(&self) -> Result<(), Vec<ValidationError>> {
            MinLength(3).validate(&self.name, "name").map_err(|e| vec![e])
        }
    }

    #[test]
    fn test_parse_valid() {
        let input = json!({"name": "John", "admin": false, "age": 30});
        let dto: TestDto = ValidationPipe::parse(Some(&input)).unwrap();
        assert_eq!(
            dto,
            TestDto {
                name: "John".to_string(),
                admin: false
            }
        );
    }

    #[test]
    fn test_parse_invalid() {
        let input = json!({"name": "Jo"});
        let errors = ValidationPipe::parse::<TestDto>(Some(&input)).unwrap_err();
        assert!(errors.has("name", "minLength"));
        assert!(errors.has("admin", "required"));
    }

    #[test]
    fn test_parse_absent() {
        let errors = ValidationPipe::parse::<TestDto>(None).unwrap_err();
        assert!(errors.has("", "required"));
    }

    #[test]
    fn test_serialize() {
        let dto = TestDto {
            name: "John".to_string(),
            admin: true,
        };
        assert_eq!(
            ValidationPipe::serialize(&dto).unwrap(),
            json!({"name": "John", "admin": true})
        );

        let dto = TestDto {
            name: "J".to_string(),
            admin: true,
        };
        assert!(ValidationPipe::serialize(&dto).unwrap_err().has("name", "minLength"));
    }
}
