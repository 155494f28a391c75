//! Error types for validation failures.
//!
//! This module provides types for representing validation errors with their
//! document path, a human-readable message, the offending value and the
//! expected type name.

mod validation_error;

pub use validation_error::{ErrorCode, ValidationError, ValidationErrors};
