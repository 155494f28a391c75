//! Array validation.
//!
//! This module provides [`ArraySchema`] for validating sequences whose every
//! element must satisfy an item validator.

use crate::error::{ErrorCode, ValidationError};
use crate::path::DocPath;
use crate::result::ValidationResult;
use crate::value::Value;

use super::traits::Validator;

/// A validator for arrays of a single element shape.
///
/// Each element is validated at `<path>[<index>]` and all element errors are
/// accumulated in index order. The reported type name is `<item>[]`, where
/// `<item>` is the type name reported for the last element. An empty array
/// probes the item validator with `undefined` to obtain the name, so the name
/// never depends on anything but the item validator and the elements.
///
/// # Example
///
/// ```rust
/// use shapecheck::{DocPath, Type, Validator, Value};
///
/// let schema = Type::array(Type::number());
///
/// let result = schema.validate(&Value::from(vec![Value::from(1_i64)]), &DocPath::root("n"));
/// assert!(result.valid);
/// assert_eq!(result.type_name, "number[]");
///
/// let result = schema.validate(&Value::from("nope"), &DocPath::root("n"));
/// assert!(!result.valid);
/// assert!(!result.type_match);
/// ```
#[derive(Debug, Clone)]
pub struct ArraySchema<V> {
    item: V,
}

impl<V: Validator> ArraySchema<V> {
    pub fn new(item: V) -> Self {
        Self { item }
    }
}

impl<V: Validator> Validator for ArraySchema<V> {
    fn validate(&self, value: &Value, path: &DocPath) -> ValidationResult {
        let items = match value.as_array() {
            Some(items) => items,
            None => {
                return ValidationResult::failure(
                    "array",
                    false,
                    ValidationError::new(
                        path.clone(),
                        ErrorCode::InvalidType,
                        format!(
                            "{} should be an \"array\", but \"{}\" was given",
                            path,
                            value.tag()
                        ),
                    )
                    .with_value(value.clone())
                    .with_expected("array"),
                );
            }
        };

        let mut errors = Vec::new();
        let mut item_type = None;

        for (index, item) in items.iter().enumerate() {
            let result = self.item.validate(item, &path.index(index));
            errors.extend(result.errors);
            item_type = Some(result.type_name);
        }

        let item_type = item_type
            .unwrap_or_else(|| self.item.validate(&Value::Undefined, path).type_name);

        ValidationResult::from_errors(format!("{}[]", item_type), true, errors)
    }
}
