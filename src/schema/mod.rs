//! Validators and the combinators that compose them.
//!
//! This module provides primitive kind checks, the array, object-schema and
//! union combinators, and the required/optional presence wrappers. Every
//! validator accumulates all errors rather than stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{DocPath, Type, Validator, Value};
//! use serde_json::json;
//!
//! let schema = Type::schema_builder()
//!     .field("name", Type::required(Type::string()))
//!     .field("tags", Type::optional(Type::array(Type::string())));
//!
//! let doc = Value::from(json!({"name": "button", "tags": ["ui", 3]}));
//! let result = schema.validate(&doc, &DocPath::root("doc"));
//!
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].path.to_string(), "doc.tags[1]");
//! ```

mod array;
mod combinators;
mod object;
mod primitive;
mod traits;

pub use array::ArraySchema;
pub use combinators::CombinatorSchema;
pub use object::ObjectSchema;
pub use primitive::PrimitiveSchema;
pub use traits::{boxed, BoxedValidator, Validator};

use crate::value::TypeTag;

/// Entry point for building validators.
///
/// Validators are built once and are immutable afterwards; the same tree can
/// validate any number of documents, from any number of threads.
pub struct Type;

impl Type {
    /// Accepts strings.
    pub fn string() -> PrimitiveSchema {
        PrimitiveSchema::new(TypeTag::String)
    }

    /// Accepts numbers.
    pub fn number() -> PrimitiveSchema {
        PrimitiveSchema::new(TypeTag::Number)
    }

    /// Accepts booleans.
    pub fn boolean() -> PrimitiveSchema {
        PrimitiveSchema::new(TypeTag::Boolean)
    }

    /// Accepts any object, whatever its fields. Does not accept `null` or arrays.
    pub fn object() -> PrimitiveSchema {
        PrimitiveSchema::new(TypeTag::Object)
    }

    /// Accepts callables.
    pub fn function() -> PrimitiveSchema {
        PrimitiveSchema::new(TypeTag::Function)
    }

    /// Accepts only `null`.
    pub fn null() -> PrimitiveSchema {
        PrimitiveSchema::new(TypeTag::Null)
    }

    /// Accepts only `undefined`.
    pub fn undefined() -> PrimitiveSchema {
        PrimitiveSchema::new(TypeTag::Undefined)
    }

    /// Accepts arrays whose every element passes `item`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{DocPath, Type, Validator, Value};
    ///
    /// let schema = Type::array(Type::string());
    /// let value = Value::from(vec![Value::from("a"), Value::from(1_i64), Value::from("c")]);
    ///
    /// let result = schema.validate(&value, &DocPath::root("list"));
    /// assert_eq!(result.errors.len(), 1);
    /// assert_eq!(result.errors[0].path.to_string(), "list[1]");
    /// ```
    pub fn array<V: Validator>(item: V) -> ArraySchema<V> {
        ArraySchema::new(item)
    }

    /// Accepts objects matching a field mapping.
    ///
    /// With `allow_extra_fields = false`, every field not in the mapping is
    /// reported with `expected = "never"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{boxed, DocPath, Type, Validator, Value};
    /// use serde_json::json;
    ///
    /// let strict = Type::schema(vec![("name", boxed(Type::required(Type::string())))], false);
    /// let doc = Value::from(json!({"name": "x", "extra": 1}));
    ///
    /// let result = strict.validate(&doc, &DocPath::root("doc"));
    /// assert_eq!(result.errors.len(), 1);
    /// assert_eq!(result.errors[0].path.to_string(), "doc.extra");
    /// assert_eq!(result.errors[0].expected.as_deref(), Some("never"));
    ///
    /// let lenient = Type::schema(vec![("name", boxed(Type::required(Type::string())))], true);
    /// assert!(lenient.validate(&doc, &DocPath::root("doc")).valid);
    /// ```
    pub fn schema<K, I>(fields: I, allow_extra_fields: bool) -> ObjectSchema
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, BoxedValidator)>,
    {
        fields
            .into_iter()
            .collect::<ObjectSchema>()
            .allow_extra_fields(allow_extra_fields)
    }

    /// Starts an object schema to be filled in with [`ObjectSchema::field`].
    /// Extra fields are rejected unless enabled.
    pub fn schema_builder() -> ObjectSchema {
        ObjectSchema::new()
    }

    /// Accepts values accepted by any candidate.
    pub fn union(candidates: Vec<BoxedValidator>) -> CombinatorSchema {
        CombinatorSchema::Union { candidates }
    }

    /// Rejects `null` and `undefined`, then defers to `inner`.
    pub fn required<V: Validator + 'static>(inner: V) -> CombinatorSchema {
        CombinatorSchema::Required {
            inner: Box::new(inner),
        }
    }

    /// Accepts `null` and `undefined`, otherwise defers to `inner`.
    pub fn optional<V: Validator + 'static>(inner: V) -> CombinatorSchema {
        CombinatorSchema::Optional {
            inner: Box::new(inner),
        }
    }
}
