//! The validator trait shared by primitives and combinators.
//!
//! This module provides the [`Validator`] trait that lets primitive checks and
//! combinators be nested inside each other to any depth.

use std::sync::Arc;

use crate::path::DocPath;
use crate::result::ValidationResult;
use crate::value::Value;

/// A pure check of a value at a path.
///
/// Implementations must not keep mutable state between calls: validating the
/// same `(value, path)` twice yields equal results, and one validator may be
/// shared across threads and called concurrently. The `Send + Sync` bounds
/// make `Box<dyn Validator>` usable from any thread.
///
/// Malformed input is never a panic or an `Err`; it is reported through
/// [`ValidationResult::errors`].
///
/// # Example
///
/// ```rust
/// use shapecheck::{DocPath, Type, Validator, Value};
///
/// let validator = Type::array(Type::string());
/// let value = Value::from(vec![Value::from("a"), Value::from(1_i64), Value::from("c")]);
///
/// let result = validator.validate(&value, &DocPath::root("list"));
/// assert!(!result.valid);
/// assert_eq!(result.errors.len(), 1);
/// assert_eq!(result.errors[0].path.to_string(), "list[1]");
/// ```
pub trait Validator: Send + Sync {
    /// Validates `value`, reporting errors under `path`.
    fn validate(&self, value: &Value, path: &DocPath) -> ValidationResult;
}

/// A type-erased validator, used wherever heterogeneous validators are stored
/// together (object fields, union candidates).
pub type BoxedValidator = Box<dyn Validator>;

/// Boxes a validator so it can sit next to validators of other types.
pub fn boxed<V: Validator + 'static>(validator: V) -> BoxedValidator {
    Box::new(validator)
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, value: &Value, path: &DocPath) -> ValidationResult {
        (**self).validate(value, path)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, value: &Value, path: &DocPath) -> ValidationResult {
        (**self).validate(value, path)
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate(&self, value: &Value, path: &DocPath) -> ValidationResult {
        (**self).validate(value, path)
    }
}
