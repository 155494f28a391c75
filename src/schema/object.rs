//! Object schema validation.
//!
//! This module provides [`ObjectSchema`] for validating keyed structures
//! against a fixed mapping of field name to validator.

use indexmap::IndexMap;

use crate::error::{ErrorCode, ValidationError};
use crate::path::DocPath;
use crate::result::ValidationResult;
use crate::value::Value;

use super::traits::{BoxedValidator, Validator};

/// A validator for objects with declared fields.
///
/// Fields are checked in declaration order, each at `<path>.<field>`, and a
/// failing field never stops the remaining ones: the result lists every
/// problem in the document. A missing field is handed to its validator as
/// `undefined`, so presence rules come from [`Type::required`] and
/// [`Type::optional`] rather than from the schema.
///
/// Once the value is known to be an object the result reports
/// `type_match = true`, even if fields are wrong. Its type name is a JSON map
/// of each field's reported type name.
///
/// [`Type::required`]: crate::Type::required
/// [`Type::optional`]: crate::Type::optional
///
/// # Example
///
/// ```rust
/// use shapecheck::{DocPath, ObjectSchema, Type, Validator, Value};
///
/// let schema = ObjectSchema::new()
///     .field("name", Type::required(Type::string()))
///     .field("lazy", Type::optional(Type::boolean()));
///
/// let value = Value::object([("name", Value::from("x")), ("extra", Value::from(1_i64))]);
/// let result = schema.validate(&value, &DocPath::root("doc"));
///
/// assert!(!result.valid);
/// assert!(result.type_match);
/// assert_eq!(result.errors[0].message, "doc.extra is unexpected field");
/// assert_eq!(result.type_name, r#"{"name":"string","lazy":"boolean"}"#);
/// ```
pub struct ObjectSchema {
    fields: IndexMap<String, BoxedValidator>,
    allow_extra_fields: bool,
}

impl ObjectSchema {
    /// Creates a schema with no fields that rejects unexpected fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            allow_extra_fields: false,
        }
    }

    /// Declares a field.
    ///
    /// Declaring the same name twice replaces the earlier validator but keeps
    /// the field's original position.
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.fields.insert(name.into(), Box::new(validator));
        self
    }

    /// Sets whether fields not declared in the schema are tolerated.
    pub fn allow_extra_fields(mut self, allow: bool) -> Self {
        self.allow_extra_fields = allow;
        self
    }

    /// Returns the declared field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, BoxedValidator)> for ObjectSchema {
    fn from_iter<I: IntoIterator<Item = (K, BoxedValidator)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            allow_extra_fields: false,
        }
    }
}

impl Validator for ObjectSchema {
    fn validate(&self, value: &Value, path: &DocPath) -> ValidationResult {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => {
                return ValidationResult::failure(
                    "object",
                    false,
                    ValidationError::new(
                        path.clone(),
                        ErrorCode::InvalidType,
                        format!(
                            "{} should be an \"object\", but \"{}\" was given",
                            path,
                            value.tag()
                        ),
                    )
                    .with_value(value.clone())
                    .with_expected("object"),
                );
            }
        };

        let mut errors = Vec::new();
        let mut types: IndexMap<&str, String> = IndexMap::with_capacity(self.fields.len());

        for (name, validator) in &self.fields {
            let result = validator.validate(value.get(name), &path.field(name.as_str()));
            errors.extend(result.errors);
            types.insert(name.as_str(), result.type_name);
        }

        if !self.allow_extra_fields {
            for (key, extra) in obj.iter().filter(|(k, _)| !self.fields.contains_key(*k)) {
                let field_path = path.field(key.as_str());
                let message = format!("{} is unexpected field", field_path);
                errors.push(
                    ValidationError::new(field_path, ErrorCode::UnexpectedField, message)
                        .with_value(extra.clone())
                        .with_expected("never"),
                );
            }
        }

        // A map of strings always serializes.
        let type_name = serde_json::to_string(&types).unwrap_or_else(|_| "object".to_string());

        ValidationResult::from_errors(type_name, true, errors)
    }
}
