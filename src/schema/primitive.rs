//! Primitive kind checks.
//!
//! This module provides [`PrimitiveSchema`], the leaf of every validator tree.
//! It accepts a value exactly when the value's [`TypeTag`] equals its target.

use crate::error::{ErrorCode, ValidationError};
use crate::path::DocPath;
use crate::result::ValidationResult;
use crate::value::{TypeTag, Value};

use super::traits::Validator;

/// A validator that checks a value's kind against one [`TypeTag`].
///
/// `null` does not satisfy `object`, and `undefined` does not satisfy `null`.
///
/// # Example
///
/// ```rust
/// use shapecheck::{DocPath, Type, Validator, Value};
///
/// let result = Type::object().validate(&Value::Null, &DocPath::root("f"));
/// assert!(!result.valid);
/// assert_eq!(result.errors[0].message, "f should be a \"object\", but \"null\" was given");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveSchema {
    target: TypeTag,
}

impl PrimitiveSchema {
    pub fn new(target: TypeTag) -> Self {
        Self { target }
    }

    pub fn target(&self) -> TypeTag {
        self.target
    }
}

impl Validator for PrimitiveSchema {
    fn validate(&self, value: &Value, path: &DocPath) -> ValidationResult {
        let actual = value.tag();
        if actual == self.target {
            return ValidationResult::success(self.target.name());
        }

        ValidationResult::failure(
            self.target.name(),
            false,
            ValidationError::new(
                path.clone(),
                ErrorCode::InvalidType,
                format!(
                    "{} should be a \"{}\", but \"{}\" was given",
                    path, self.target, actual
                ),
            )
            .with_value(value.clone())
            .with_expected(self.target.name()),
        )
    }
}
