//! Validation error types.
//!
//! This module provides [`ValidationError`] for a single diagnostic and
//! [`ValidationErrors`] for a non-empty set of diagnostics.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::DocPath;
use crate::value::Value;

/// Machine-readable classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The value has the wrong kind.
    InvalidType,
    /// A required value is `null` or `undefined`.
    Required,
    /// An object carries a field the schema does not declare.
    UnexpectedField,
    /// No union branch was a plausible fit for the value.
    NoUnionMatch,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidType => "invalid_type",
            ErrorCode::Required => "required",
            ErrorCode::UnexpectedField => "unexpected_field",
            ErrorCode::NoUnionMatch => "no_union_match",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation diagnostic.
///
/// - **path**: where in the document the problem is
/// - **message**: human-readable description, already prefixed with the path
/// - **value**: the offending raw value (optional)
/// - **expected**: the expected type name (optional)
/// - **code**: classification for programmatic handling
///
/// # Example
///
/// ```rust
/// use shapecheck::{DocPath, ErrorCode, ValidationError, Value};
///
/// let path = DocPath::root("doc").field("extra");
/// let error = ValidationError::new(path, ErrorCode::UnexpectedField, "doc.extra is unexpected field")
///     .with_value(Value::from(1_i64))
///     .with_expected("never");
///
/// assert_eq!(error.path.to_string(), "doc.extra");
/// assert_eq!(error.expected.as_deref(), Some("never"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub path: DocPath,
    pub message: String,
    pub value: Option<Value>,
    pub expected: Option<String>,
    pub code: ErrorCode,
}

impl ValidationError {
    pub fn new(path: DocPath, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            value: None,
            expected: None,
            code,
        }
    }

    /// Sets the offending value and returns self for chaining.
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the expected type name and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` so that a failed
/// [`Validation`] always carries at least one diagnostic. Collections combine
/// through `Semigroup`, preserving order:
///
/// ```rust
/// use shapecheck::{DocPath, ErrorCode, ValidationError, ValidationErrors};
/// use stillwater::prelude::*;
///
/// let a = ValidationErrors::single(ValidationError::new(
///     DocPath::root("doc").field("a"), ErrorCode::Required, "doc.a is required"));
/// let b = ValidationErrors::single(ValidationError::new(
///     DocPath::root("doc").field("b"), ErrorCode::Required, "doc.b is required"));
///
/// let combined = a.combine(b);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().message, "doc.a is required");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Builds a collection from a `Vec`, or returns `None` when it is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Returns all errors reported at exactly `path`.
    pub fn at_path(&self, path: &DocPath) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors with the given code.
    pub fn with_code(&self, code: ErrorCode) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}
