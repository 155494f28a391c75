//! The outcome of a single validator invocation.
//!
//! Every validator returns a [`ValidationResult`] carrying four things: whether
//! the value is valid, the validator's type name, whether the value had an
//! acceptable kind (`type_match`), and the ordered diagnostics.

use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};

/// The result of validating one value.
///
/// `errors` is empty exactly when `valid` is true; the constructors keep that
/// invariant, so prefer them over building the struct by hand.
///
/// `type_match` separates "wrong kind of value" from "right kind, bad content".
/// An object schema given an object with a mistyped field is invalid but still
/// reports `type_match = true`; unions rely on this to decide which branch's
/// errors to keep.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub type_name: String,
    pub type_match: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A valid result. Valid values always match their type.
    pub fn success(type_name: impl Into<String>) -> Self {
        Self {
            valid: true,
            type_name: type_name.into(),
            type_match: true,
            errors: Vec::new(),
        }
    }

    /// A result built from accumulated errors; valid when `errors` is empty.
    pub fn from_errors(
        type_name: impl Into<String>,
        type_match: bool,
        errors: Vec<ValidationError>,
    ) -> Self {
        let valid = errors.is_empty();
        Self {
            valid,
            type_name: type_name.into(),
            type_match: type_match || valid,
            errors,
        }
    }

    /// An invalid result with a single error.
    pub fn failure(type_name: impl Into<String>, type_match: bool, error: ValidationError) -> Self {
        Self {
            valid: false,
            type_name: type_name.into(),
            type_match,
            errors: vec![error],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Renders every error on its own line as ` - <message>`.
    pub fn report(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!(" - {}", e.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Converts into a stillwater `Validation`, for callers that compose
    /// results applicatively.
    pub fn into_validation(self) -> Validation<(), ValidationErrors> {
        match ValidationErrors::from_vec(self.errors) {
            None => Validation::Success(()),
            Some(errors) => Validation::Failure(errors),
        }
    }
}
