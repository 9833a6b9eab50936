//! S3 bucket selection.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stowage_validation::{
    MinLength, Schema, Shape, Validate, ValidationError, ValidationErrors, ValidationPipe,
};

/// Minimum length of a bucket name.
pub const BUCKET_MIN_LEN: usize = 1;

/// The bucket subsequent storage operations target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSelection {
    /// Bucket name.
    pub bucket: String,
}

impl BucketSelection {
    /// Select a bucket.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }

    /// Validate untyped input.
    pub fn parse(input: Option<&Value>) -> Result<Self, ValidationErrors> {
        ValidationPipe::parse(input)
    }
}

impl Schema for BucketSelection {
    fn shape() -> Shape {
        Shape::object([("bucket", Shape::string().min_length(BUCKET_MIN_LEN))])
    }
}

impl Validate for BucketSelection {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        MinLength(BUCKET_MIN_LEN)
            .validate(&self.bucket, "bucket")
            .map_err(|e| vec![e])
    }
}
