//! Naming strategies.
//!
//! [`Generators`] is an immutable table of named strategy functions deciding
//! how components and provider classes are named and located. Each strategy
//! has a default and can be replaced on its own, either in code through
//! [`GeneratorsBuilder`] or from a provider definition's `generators` block.

use std::fmt::{self, Debug};
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

use super::component::ComponentDefinition;
use super::definition::{DefinitionError, ProviderDefinition};
use super::options::Options;
use crate::value::Value;

/// Names something about a single component.
pub type ComponentStrategy =
    Arc<dyn Fn(&ComponentDefinition, &Options, &ProviderDefinition) -> String + Send + Sync>;

/// Like [`ComponentStrategy`], with an extra leading input (a file name or a
/// pre-computed base name).
pub type NamedComponentStrategy = Arc<
    dyn Fn(&str, &ComponentDefinition, &Options, &ProviderDefinition) -> String + Send + Sync,
>;

/// Names something about the provider as a whole.
pub type ProviderStrategy = Arc<dyn Fn(&Options, &ProviderDefinition) -> String + Send + Sync>;

pub fn component_strategy<F>(f: F) -> ComponentStrategy
where
    F: Fn(&ComponentDefinition, &Options, &ProviderDefinition) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn named_component_strategy<F>(f: F) -> NamedComponentStrategy
where
    F: Fn(&str, &ComponentDefinition, &Options, &ProviderDefinition) -> String
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

pub fn provider_strategy<F>(f: F) -> ProviderStrategy
where
    F: Fn(&Options, &ProviderDefinition) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The naming strategy table.
///
/// # Example
///
/// ```rust
/// use shapecheck::provider::{component_strategy, Generators};
///
/// let generators = Generators::builder()
///     .component_import_name(component_strategy(|c, _, _| format!("{}Component", c.name)))
///     .build();
/// # let _ = generators;
/// ```
#[derive(Clone)]
pub struct Generators {
    component_name: ComponentStrategy,
    component_file_name: ComponentStrategy,
    component_file_path: NamedComponentStrategy,
    component_import_path: ComponentStrategy,
    component_import_name: ComponentStrategy,
    java_provider_name: ProviderStrategy,
    java_base_component_name: ProviderStrategy,
    java_component_name: NamedComponentStrategy,
}

impl Generators {
    pub fn builder() -> GeneratorsBuilder {
        GeneratorsBuilder::default()
    }

    /// Builds the table from a definition's `generators` block.
    ///
    /// Keys use document spelling (`componentName`, `javaProviderName`, ...)
    /// and values must be functions carrying a strategy of the matching type.
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::UnrecognizedGenerator` when a known key holds
    /// anything other than a strategy of the expected type.
    pub fn from_overrides(overrides: &IndexMap<String, Value>) -> Result<Self, DefinitionError> {
        let mut builder = Self::builder();

        for (key, value) in overrides {
            builder = match key.as_str() {
                "componentName" => builder.component_name(downcast(key, value)?),
                "componentFileName" => builder.component_file_name(downcast(key, value)?),
                "componentFilePath" => builder.component_file_path(downcast(key, value)?),
                "componentImportPath" => builder.component_import_path(downcast(key, value)?),
                "componentImportName" => builder.component_import_name(downcast(key, value)?),
                "javaProviderName" => builder.java_provider_name(downcast(key, value)?),
                "javaBaseComponentName" => builder.java_base_component_name(downcast(key, value)?),
                "javaComponentName" => builder.java_component_name(downcast(key, value)?),
                other => {
                    debug!(generator = other, "ignoring unknown generator override");
                    builder
                }
            };
        }

        Ok(builder.build())
    }

    pub fn component_name(&self, c: &ComponentDefinition, o: &Options, p: &ProviderDefinition) -> String {
        (self.component_name)(c, o, p)
    }

    pub fn component_file_name(&self, c: &ComponentDefinition, o: &Options, p: &ProviderDefinition) -> String {
        (self.component_file_name)(c, o, p)
    }

    pub fn component_file_path(
        &self,
        file_name: &str,
        c: &ComponentDefinition,
        o: &Options,
        p: &ProviderDefinition,
    ) -> String {
        (self.component_file_path)(file_name, c, o, p)
    }

    pub fn component_import_path(&self, c: &ComponentDefinition, o: &Options, p: &ProviderDefinition) -> String {
        (self.component_import_path)(c, o, p)
    }

    pub fn component_import_name(&self, c: &ComponentDefinition, o: &Options, p: &ProviderDefinition) -> String {
        (self.component_import_name)(c, o, p)
    }

    pub fn java_provider_name(&self, o: &Options, p: &ProviderDefinition) -> String {
        (self.java_provider_name)(o, p)
    }

    pub fn java_base_component_name(&self, o: &Options, p: &ProviderDefinition) -> String {
        (self.java_base_component_name)(o, p)
    }

    pub fn java_component_name(
        &self,
        base: &str,
        c: &ComponentDefinition,
        o: &Options,
        p: &ProviderDefinition,
    ) -> String {
        (self.java_component_name)(base, c, o, p)
    }
}

impl Default for Generators {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Debug for Generators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Generators { .. }")
    }
}

fn downcast<T: Clone + 'static>(key: &str, value: &Value) -> Result<T, DefinitionError> {
    value
        .as_function()
        .and_then(|f| f.downcast_ref::<T>())
        .cloned()
        .ok_or_else(|| DefinitionError::UnrecognizedGenerator {
            name: key.to_string(),
            tag: value.tag(),
        })
}

/// Collects strategy overrides; anything not set keeps its default.
#[derive(Default)]
pub struct GeneratorsBuilder {
    component_name: Option<ComponentStrategy>,
    component_file_name: Option<ComponentStrategy>,
    component_file_path: Option<NamedComponentStrategy>,
    component_import_path: Option<ComponentStrategy>,
    component_import_name: Option<ComponentStrategy>,
    java_provider_name: Option<ProviderStrategy>,
    java_base_component_name: Option<ProviderStrategy>,
    java_component_name: Option<NamedComponentStrategy>,
}

impl GeneratorsBuilder {
    pub fn component_name(mut self, f: ComponentStrategy) -> Self {
        self.component_name = Some(f);
        self
    }

    pub fn component_file_name(mut self, f: ComponentStrategy) -> Self {
        self.component_file_name = Some(f);
        self
    }

    pub fn component_file_path(mut self, f: NamedComponentStrategy) -> Self {
        self.component_file_path = Some(f);
        self
    }

    pub fn component_import_path(mut self, f: ComponentStrategy) -> Self {
        self.component_import_path = Some(f);
        self
    }

    pub fn component_import_name(mut self, f: ComponentStrategy) -> Self {
        self.component_import_name = Some(f);
        self
    }

    pub fn java_provider_name(mut self, f: ProviderStrategy) -> Self {
        self.java_provider_name = Some(f);
        self
    }

    pub fn java_base_component_name(mut self, f: ProviderStrategy) -> Self {
        self.java_base_component_name = Some(f);
        self
    }

    pub fn java_component_name(mut self, f: NamedComponentStrategy) -> Self {
        self.java_component_name = Some(f);
        self
    }

    /// Freezes the table, filling gaps with the default strategies.
    pub fn build(self) -> Generators {
        Generators {
            component_name: self.component_name.unwrap_or_else(|| {
                component_strategy(|c, o, _| {
                    c.component_name.clone().unwrap_or_else(|| {
                        format!("{}{}", o.component_name_prefix, dot_case(&c.name))
                    })
                })
            }),
            component_file_name: self.component_file_name.unwrap_or_else(|| {
                component_strategy(|c, o, _| {
                    c.file_name
                        .clone()
                        .unwrap_or_else(|| format!("{}.{}", c.name, o.file_extension))
                })
            }),
            component_file_path: self.component_file_path.unwrap_or_else(|| {
                named_component_strategy(|file_name, c, o, _| {
                    c.file_path.clone().unwrap_or_else(|| {
                        format!("{}/{}/{}", o.src_folder, o.components_folder, file_name)
                    })
                })
            }),
            component_import_path: self.component_import_path.unwrap_or_else(|| {
                component_strategy(|c, o, _| {
                    c.import_path
                        .clone()
                        .unwrap_or_else(|| format!("{}{}", o.imports_prefix, c.name))
                })
            }),
            component_import_name: self.component_import_name.unwrap_or_else(|| {
                component_strategy(|c, _, _| c.import_name.clone().unwrap_or_else(|| c.name.clone()))
            }),
            java_provider_name: self.java_provider_name.unwrap_or_else(|| {
                provider_strategy(|_, p| format!("{}Provider", pascal_case(&p.name)))
            }),
            java_base_component_name: self.java_base_component_name.unwrap_or_else(|| {
                provider_strategy(|_, p| format!("Base{}Component", pascal_case(&p.name)))
            }),
            java_component_name: self.java_component_name.unwrap_or_else(|| {
                named_component_strategy(|base, c, o, _| {
                    c.component_name.clone().unwrap_or_else(|| {
                        format!("{}{}", pascal_case(&o.component_name_prefix), base)
                    })
                })
            }),
        }
    }
}

fn words(input: &str) -> Vec<String> {
    static LOWER_UPPER: OnceLock<Regex> = OnceLock::new();
    static ACRONYM: OnceLock<Regex> = OnceLock::new();
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();

    let lower_upper = LOWER_UPPER
        .get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static pattern compiles"));
    let acronym = ACRONYM
        .get_or_init(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("static pattern compiles"));
    let separator = SEPARATOR
        .get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("static pattern compiles"));

    let spaced = lower_upper.replace_all(input, "$1 $2");
    let spaced = acronym.replace_all(&spaced, "$1 $2");

    separator
        .split(&spaced)
        .flat_map(str::split_whitespace)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// `MyButton` / `my-button` / `my_button` → `my.button`.
pub fn dot_case(input: &str) -> String {
    words(input).join(".")
}

/// `my-button` / `my.button` / `myButton` → `MyButton`.
pub fn pascal_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::options::OptionsInput;
    use crate::value::Function;

    fn fixture(prefix: &str) -> (ProviderDefinition, Options) {
        let input = OptionsInput {
            imports_prefix: "@kit/".to_string(),
            component_name_prefix: Some(prefix.to_string()),
            ..OptionsInput::default()
        };
        let options = Options::from_input(&input).unwrap();
        let provider = ProviderDefinition {
            name: "blast-kit".to_string(),
            description: String::new(),
            version: String::new(),
            author: String::new(),
            url: String::new(),
            source: String::new(),
            options: input,
            generators: None,
            components: Vec::new(),
        };
        (provider, options)
    }

    fn component(name: &str) -> ComponentDefinition {
        ComponentDefinition {
            name: name.to_string(),
            component_name: None,
            file_name: None,
            file_path: None,
            import_path: None,
            import_name: None,
            import_statement: None,
            use_lazy_load: true,
        }
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(dot_case("MyButton"), "my.button");
        assert_eq!(dot_case("my-button"), "my.button");
        assert_eq!(dot_case("HTMLEditor"), "html.editor");
        assert_eq!(pascal_case("blast-kit"), "BlastKit");
        assert_eq!(pascal_case("kit.ui"), "KitUi");
        assert_eq!(pascal_case("myButton"), "MyButton");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_default_strategies() {
        let (provider, options) = fixture("kit.");
        let generators = Generators::default();
        let c = component("DatePicker");

        assert_eq!(generators.component_name(&c, &options, &provider), "kit.date.picker");
        assert_eq!(generators.component_file_name(&c, &options, &provider), "DatePicker.ts");
        assert_eq!(
            generators.component_file_path("DatePicker.ts", &c, &options, &provider),
            "src/components/DatePicker.ts"
        );
        assert_eq!(generators.component_import_path(&c, &options, &provider), "@kit/DatePicker");
        assert_eq!(generators.component_import_name(&c, &options, &provider), "DatePicker");
        assert_eq!(generators.java_provider_name(&options, &provider), "BlastKitProvider");
        assert_eq!(
            generators.java_base_component_name(&options, &provider),
            "BaseBlastKitComponent"
        );
        assert_eq!(
            generators.java_component_name("DatePicker", &c, &options, &provider),
            "KitDatePicker"
        );
    }

    #[test]
    fn test_component_overrides_beat_defaults() {
        let (provider, options) = fixture("");
        let generators = Generators::default();
        let mut c = component("Dialog");
        c.component_name = Some("ui.modal".to_string());
        c.file_path = Some("lib/modal.ts".to_string());

        assert_eq!(generators.component_name(&c, &options, &provider), "ui.modal");
        assert_eq!(
            generators.component_file_path("Dialog.ts", &c, &options, &provider),
            "lib/modal.ts"
        );
    }

    #[test]
    fn test_builder_replaces_single_strategy() {
        let (provider, options) = fixture("");
        let generators = Generators::builder()
            .component_import_name(component_strategy(|c, _, _| format!("{}Component", c.name)))
            .build();
        let c = component("Card");

        assert_eq!(generators.component_import_name(&c, &options, &provider), "CardComponent");
        assert_eq!(generators.component_import_path(&c, &options, &provider), "@kit/Card");
    }

    #[test]
    fn test_overrides_from_document() {
        let (provider, options) = fixture("");
        let strategy = provider_strategy(|_, _| "KitRegistry".to_string());

        let mut overrides = IndexMap::new();
        overrides.insert("javaProviderName".to_string(), Value::Function(Function::new(strategy)));
        overrides.insert("somethingElse".to_string(), Value::from(1_i64));

        let generators = Generators::from_overrides(&overrides).unwrap();
        assert_eq!(generators.java_provider_name(&options, &provider), "KitRegistry");
    }

    #[test]
    fn test_override_with_wrong_payload() {
        let mut overrides = IndexMap::new();
        overrides.insert("componentName".to_string(), Value::Function(Function::new(5_u8)));

        let err = Generators::from_overrides(&overrides).unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::UnrecognizedGenerator { ref name, .. } if name == "componentName"
        ));
    }
}
