//! Typed provider definitions.
//!
//! A document is validated against the provider-definition schema first and
//! only then converted into [`ProviderDefinition`]. Conversion decides each
//! component's shape exactly once, so later code matches on
//! [`ComponentProvider`] instead of re-inspecting values.

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::component::{
    Calc, ComponentContext, ComponentDefinition, ComponentProps, ComponentProvider, ProviderFn,
};
use super::generators::Generators;
use super::options::{Options, OptionsInput};
use super::schema::{shared_schema, DEFINITION_ROOT};
use crate::error::ValidationErrors;
use crate::path::DocPath;
use crate::schema::Validator;
use crate::value::{TypeTag, Value};

/// Errors produced while turning a document into a usable provider.
///
/// `Invalid` carries ordinary data problems. The other variants mean a value
/// got past validation in a shape this module does not know how to use.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The document does not match the provider-definition schema.
    #[error("invalid provider definition\n{0}")]
    Invalid(ValidationErrors),

    /// A component entry has a shape that cannot be resolved.
    #[error("component at index {index} has unsupported shape \"{tag}\"")]
    UnrecognizedComponent { index: usize, tag: TypeTag },

    /// A generator override is not a strategy of the expected type.
    #[error("generator override \"{name}\" is not a naming strategy (got \"{tag}\")")]
    UnrecognizedGenerator { name: String, tag: TypeTag },

    /// A field the schema guarantees was absent or mistyped.
    #[error("{path} is missing or not a string")]
    MissingField { path: String },

    /// `options.importsPrefix` is empty.
    #[error("ProviderDefinition.options.importsPrefix is missing")]
    MissingImportsPrefix,
}

/// A validated provider definition.
#[derive(Debug, Clone)]
pub struct ProviderDefinition {
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub url: String,
    pub source: String,
    pub options: OptionsInput,
    pub generators: Option<IndexMap<String, Value>>,
    pub components: Vec<ComponentProvider>,
}

impl ProviderDefinition {
    /// Validates a document and converts it.
    ///
    /// Every validation error is collected before returning, not just the
    /// first one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::provider::{DefinitionError, ProviderDefinition};
    /// use shapecheck::Value;
    /// use serde_json::json;
    ///
    /// let doc = Value::from(json!({
    ///     "name": "kit", "description": "UI kit", "version": "1.0.0",
    ///     "author": "me", "url": "https://example.com", "source": "kit",
    ///     "options": {"importsPrefix": "@kit/"},
    ///     "components": ["Button", {"name": "Dialog", "useLazyLoad": false}]
    /// }));
    /// let definition = ProviderDefinition::from_value(&doc).unwrap();
    /// assert_eq!(definition.components.len(), 2);
    ///
    /// let broken = Value::from(json!({"name": 1}));
    /// match ProviderDefinition::from_value(&broken) {
    ///     Err(DefinitionError::Invalid(errors)) => assert!(errors.len() > 1),
    ///     other => panic!("unexpected: {:?}", other),
    /// }
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, DefinitionError> {
        let root = DocPath::root(DEFINITION_ROOT);
        let result = shared_schema().validate(value, &root);

        if let Some(errors) = ValidationErrors::from_vec(result.errors) {
            warn!(errors = errors.len(), "provider definition failed validation");
            return Err(DefinitionError::Invalid(errors));
        }

        let options = value.get("options");
        let options_path = root.field("options");

        let definition = Self {
            name: text(value, &root, "name")?,
            description: text(value, &root, "description")?,
            version: text(value, &root, "version")?,
            author: text(value, &root, "author")?,
            url: text(value, &root, "url")?,
            source: text(value, &root, "source")?,
            options: OptionsInput {
                file_extension: optional_text(options, "fileExtension"),
                components_folder: optional_text(options, "componentsFolder"),
                src_folder: optional_text(options, "srcFolder"),
                imports_prefix: text(options, &options_path, "importsPrefix")?,
                component_name_prefix: optional_text(options, "componentNamePrefix"),
                index_filename: optional_text(options, "indexFilename"),
                definition_filename: optional_text(options, "definitionFilename"),
                definition_name: optional_text(options, "definitionName"),
                java_namespace: optional_text(options, "javaNamespace"),
            },
            generators: value.get("generators").as_object().cloned(),
            components: value
                .get("components")
                .as_array()
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(index, entry)| component(index, entry))
                .collect::<Result<_, _>>()?,
        };

        debug!(
            provider = %definition.name,
            components = definition.components.len(),
            "provider definition accepted"
        );
        Ok(definition)
    }

    /// Applies option defaults, builds the naming strategies and resolves
    /// every component.
    pub fn resolve(self) -> Result<ResolvedProvider, DefinitionError> {
        let options = Options::from_input(&self.options)?;
        let generators = match &self.generators {
            Some(overrides) => Generators::from_overrides(overrides)?,
            None => Generators::default(),
        };

        let components = {
            let ctx = ComponentContext {
                provider: &self,
                options: &options,
            };
            self.components.iter().map(|c| c.resolve(&ctx)).collect()
        };

        Ok(ResolvedProvider {
            definition: self,
            options,
            generators,
            components,
        })
    }
}

/// Everything code generation needs, fully resolved.
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    pub definition: ProviderDefinition,
    pub options: Options,
    pub generators: Generators,
    pub components: Vec<ComponentDefinition>,
}

impl ResolvedProvider {
    /// Registered names of all components, in declaration order.
    pub fn component_names(&self) -> Vec<String> {
        self.components
            .iter()
            .map(|c| {
                self.generators
                    .component_name(c, &self.options, &self.definition)
            })
            .collect()
    }
}

fn text(value: &Value, parent: &DocPath, key: &str) -> Result<String, DefinitionError> {
    value
        .get(key)
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DefinitionError::MissingField {
            path: parent.field(key).to_string(),
        })
}

fn optional_text(value: &Value, key: &str) -> Option<String> {
    value.get(key).as_str().map(str::to_string)
}

fn component(index: usize, entry: &Value) -> Result<ComponentProvider, DefinitionError> {
    let unrecognized = || DefinitionError::UnrecognizedComponent {
        index,
        tag: entry.tag(),
    };

    match entry {
        Value::String(name) => Ok(ComponentProvider::Name(name.clone())),
        Value::Function(f) => f
            .downcast_ref::<ProviderFn>()
            .cloned()
            .map(ComponentProvider::Provider)
            .ok_or_else(unrecognized),
        Value::Object(_) => {
            let name = entry.get("name").as_str().ok_or_else(unrecognized)?;
            let fixed = |key: &str| optional_text(entry, key).map(Calc::Fixed);

            Ok(ComponentProvider::Detailed(ComponentProps {
                name: name.to_string(),
                component_name: fixed("componentName"),
                file_name: fixed("fileName"),
                file_path: fixed("filePath"),
                import_path: fixed("importPath"),
                import_name: fixed("importName"),
                import_statement: fixed("importStatement"),
                use_lazy_load: entry.get("useLazyLoad").as_bool().map(Calc::Fixed),
            }))
        }
        _ => Err(unrecognized()),
    }
}
