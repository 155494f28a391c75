//! The provider-definition document schema.
//!
//! A provider definition describes a component library: metadata strings,
//! generation options, optional naming-strategy overrides and the list of
//! components. Components come in three shapes (a plain name, a provider
//! function, or a descriptor object), so the list is an array of a union.

use std::sync::OnceLock;

use crate::schema::{boxed, ObjectSchema, Type};

/// Root label used when validating a provider definition.
pub const DEFINITION_ROOT: &str = "config";

/// Fields of the `options` block. Only `importsPrefix` is required.
pub const OPTION_FIELDS: [&str; 9] = [
    "fileExtension",
    "componentsFolder",
    "srcFolder",
    "importsPrefix",
    "componentNamePrefix",
    "indexFilename",
    "definitionFilename",
    "definitionName",
    "javaNamespace",
];

/// Optional string overrides a component descriptor object may carry.
pub const COMPONENT_OVERRIDE_FIELDS: [&str; 6] = [
    "componentName",
    "fileName",
    "filePath",
    "importPath",
    "importName",
    "importStatement",
];

fn options_schema() -> ObjectSchema {
    OPTION_FIELDS.iter().fold(ObjectSchema::new(), |schema, &name| {
        if name == "importsPrefix" {
            schema.field(name, Type::required(Type::string()))
        } else {
            schema.field(name, Type::optional(Type::string()))
        }
    })
}

fn component_descriptor_schema() -> ObjectSchema {
    COMPONENT_OVERRIDE_FIELDS
        .iter()
        .fold(
            ObjectSchema::new().field("name", Type::required(Type::string())),
            |schema, &name| schema.field(name, Type::optional(Type::string())),
        )
        .field("useLazyLoad", Type::optional(Type::boolean()))
}

/// Builds the validator for a whole provider-definition document.
///
/// # Example
///
/// ```rust
/// use shapecheck::provider::{provider_definition_schema, DEFINITION_ROOT};
/// use shapecheck::{DocPath, Validator, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({
///     "name": "kit", "description": "UI kit", "version": "1.0.0",
///     "author": "me", "url": "https://example.com", "source": "kit",
///     "options": {},
///     "components": ["Button"]
/// }));
///
/// let result = provider_definition_schema().validate(&doc, &DocPath::root(DEFINITION_ROOT));
/// assert!(!result.valid);
/// assert_eq!(result.errors.len(), 1);
/// assert_eq!(result.errors[0].path.to_string(), "config.options.importsPrefix");
/// ```
pub fn provider_definition_schema() -> ObjectSchema {
    let metadata = ["name", "description", "version", "author", "url", "source"];

    metadata
        .iter()
        .fold(ObjectSchema::new(), |schema, &name| {
            schema.field(name, Type::required(Type::string()))
        })
        .field("options", Type::required(options_schema()))
        .field("generators", Type::optional(Type::object()))
        .field(
            "components",
            Type::required(Type::array(Type::union(vec![
                boxed(Type::string()),
                boxed(Type::function()),
                boxed(component_descriptor_schema()),
            ]))),
        )
}

/// The provider-definition schema, built on first use and shared afterwards.
pub fn shared_schema() -> &'static ObjectSchema {
    static SCHEMA: OnceLock<ObjectSchema> = OnceLock::new();
    SCHEMA.get_or_init(provider_definition_schema)
}
