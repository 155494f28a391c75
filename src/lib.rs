//! # Shapecheck
//!
//! Composable structural validators that report every problem in a document,
//! each tagged with the path where it occurred.
//!
//! ## Overview
//!
//! Validators are small values built from a handful of factories on [`Type`]:
//! primitive kind checks, arrays, object schemas, unions and the
//! required/optional presence wrappers. They nest freely and never stop at
//! the first failure. Unions are disambiguated by asking each candidate
//! whether the value was at least the right *kind*; only errors from
//! plausible candidates are reported, so a descriptor object with one bad
//! field yields that field's error rather than noise from every other branch.
//!
//! The [`provider`] module applies the engine to provider-definition
//! documents for component libraries, and [`loading`] reads those documents
//! from disk.
//!
//! ## Core Types
//!
//! - [`Value`]: the dynamic document model being validated
//! - [`DocPath`]: a location in a document (e.g. `config.components[2].name`)
//! - [`ValidationError`]: one problem, with path, message and offending value
//! - [`ValidationResult`]: the outcome of a validator run
//! - [`Validator`]: the trait every validator implements
//!
//! ## Example
//!
//! ```rust
//! use shapecheck::{boxed, DocPath, Type, Validator, Value};
//! use serde_json::json;
//!
//! let component = Type::union(vec![
//!     boxed(Type::string()),
//!     boxed(Type::function()),
//!     boxed(Type::schema_builder().field("name", Type::required(Type::string()))),
//! ]);
//! let components = Type::array(component);
//!
//! let doc = Value::from(json!(["Button", {"name": 42}]));
//! let result = components.validate(&doc, &DocPath::root("components"));
//!
//! assert!(!result.valid);
//! assert_eq!(result.errors.len(), 1);
//! assert_eq!(result.errors[0].path.to_string(), "components[1].name");
//! ```

pub mod error;
pub mod loading;
pub mod path;
pub mod provider;
pub mod result;
pub mod schema;
pub mod value;

pub use error::{ErrorCode, ValidationError, ValidationErrors};
pub use path::{DocPath, PathSegment};
pub use result::ValidationResult;
pub use schema::{
    boxed, ArraySchema, BoxedValidator, CombinatorSchema, ObjectSchema, PrimitiveSchema, Type,
    Validator,
};
pub use value::{Function, TypeTag, Value};
