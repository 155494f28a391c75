//! Provider definitions for component libraries.
//!
//! A provider definition is a document describing a component library. This
//! module validates such documents with the combinators from
//! [`crate::schema`], converts them into typed [`ProviderDefinition`]s and
//! resolves components and naming strategies for code generation.
//!
//! # Example
//!
//! ```rust
//! use shapecheck::provider::ProviderDefinition;
//! use shapecheck::Value;
//! use serde_json::json;
//!
//! let doc = Value::from(json!({
//!     "name": "blast-kit", "description": "Components", "version": "1.0.0",
//!     "author": "me", "url": "https://example.com", "source": "@acme/kit",
//!     "options": {"importsPrefix": "@acme/kit/"},
//!     "components": ["DatePicker"]
//! }));
//!
//! let resolved = ProviderDefinition::from_value(&doc).unwrap().resolve().unwrap();
//! assert_eq!(resolved.component_names(), vec!["date.picker"]);
//! assert_eq!(
//!     resolved.generators.java_provider_name(&resolved.options, &resolved.definition),
//!     "BlastKitProvider"
//! );
//! ```

mod component;
mod definition;
mod generators;
mod options;
mod schema;

pub use component::{
    comp, provider_function, Calc, ComponentContext, ComponentDefinition, ComponentProps,
    ComponentProvider, ProviderFn,
};
pub use definition::{DefinitionError, ProviderDefinition, ResolvedProvider};
pub use generators::{
    component_strategy, dot_case, named_component_strategy, pascal_case, provider_strategy,
    ComponentStrategy, Generators, GeneratorsBuilder, NamedComponentStrategy, ProviderStrategy,
};
pub use options::{Options, OptionsInput};
pub use schema::{
    provider_definition_schema, shared_schema, COMPONENT_OVERRIDE_FIELDS, DEFINITION_ROOT,
    OPTION_FIELDS,
};
