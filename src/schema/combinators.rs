//! Schema combinators for composing validation logic.
//!
//! This module provides combinators that change how a value is matched without
//! changing the shape checks underneath:
//! - `Union`: at least one candidate must accept the value
//! - `Required`: `null`/`undefined` is rejected before the inner check
//! - `Optional`: `null`/`undefined` is accepted without the inner check
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{boxed, DocPath, Type, Validator, Value};
//!
//! // A component is either a plain name or a descriptor object
//! let component = Type::union(vec![
//!     boxed(Type::string()),
//!     boxed(Type::schema(vec![("name", boxed(Type::required(Type::string())))], false)),
//! ]);
//!
//! let result = component.validate(&Value::from(7_i64), &DocPath::root("c"));
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].expected.as_deref(), Some("string | object"));
//! ```

use indexmap::IndexSet;

use crate::error::{ErrorCode, ValidationError};
use crate::path::DocPath;
use crate::result::ValidationResult;
use crate::value::Value;

use super::traits::{BoxedValidator, Validator};

/// Combinators over other validators.
///
/// Each variant implements [`Validator`] and can be used anywhere a validator
/// is expected, including inside another combinator.
pub enum CombinatorSchema {
    /// At least one candidate must accept the value.
    ///
    /// Every candidate is run. If none is valid, only the errors of candidates
    /// whose kind matched (`type_match = true`) are kept; when no candidate
    /// matched even the kind, a single error naming all candidate types is
    /// reported at the union's own path.
    Union { candidates: Vec<BoxedValidator> },

    /// `null` and `undefined` are rejected; other values go to `inner`.
    Required { inner: BoxedValidator },

    /// `null` and `undefined` pass; other values go to `inner`.
    Optional { inner: BoxedValidator },
}

impl CombinatorSchema {
    fn validate_union(
        candidates: &[BoxedValidator],
        value: &Value,
        path: &DocPath,
    ) -> ValidationResult {
        let mut valid = false;
        let mut type_matched = false;
        let mut errors = Vec::new();
        let mut types: IndexSet<String> = IndexSet::with_capacity(candidates.len());

        for candidate in candidates {
            let result = candidate.validate(value, path);
            if result.valid {
                valid = true;
                type_matched = true;
            } else if result.type_match {
                type_matched = true;
                errors.extend(result.errors);
            }
            types.insert(result.type_name);
        }

        let joined = types.iter().map(String::as_str).collect::<Vec<_>>().join(" | ");
        let type_name = format!("({})", joined);

        if valid {
            return ValidationResult::success(type_name);
        }

        if type_matched {
            return ValidationResult::from_errors(type_name, true, errors);
        }

        let message = format!(
            "{} should be a \"{}\", but \"{}\" was given",
            path,
            type_name,
            value.tag()
        );
        ValidationResult::failure(
            type_name,
            false,
            ValidationError::new(path.clone(), ErrorCode::NoUnionMatch, message)
                .with_value(value.clone())
                .with_expected(joined),
        )
    }

    fn validate_required(inner: &BoxedValidator, value: &Value, path: &DocPath) -> ValidationResult {
        if !value.is_nullish() {
            return inner.validate(value, path);
        }

        // Only the type name is taken from the inner validator.
        let type_name = inner.validate(value, path).type_name;
        ValidationResult::failure(
            type_name,
            false,
            ValidationError::new(
                path.clone(),
                ErrorCode::Required,
                format!("{} is required, but \"{}\" was given", path, value.tag()),
            )
            .with_value(value.clone()),
        )
    }

    fn validate_optional(inner: &BoxedValidator, value: &Value, path: &DocPath) -> ValidationResult {
        if value.is_nullish() {
            ValidationResult::success(inner.validate(value, path).type_name)
        } else {
            inner.validate(value, path)
        }
    }
}

impl Validator for CombinatorSchema {
    fn validate(&self, value: &Value, path: &DocPath) -> ValidationResult {
        match self {
            CombinatorSchema::Union { candidates } => Self::validate_union(candidates, value, path),
            CombinatorSchema::Required { inner } => Self::validate_required(inner, value, path),
            CombinatorSchema::Optional { inner } => Self::validate_optional(inner, value, path),
        }
    }
}
