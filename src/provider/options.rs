//! Generation options with defaults applied.

use super::definition::DefinitionError;

/// The `options` block as written in a provider definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsInput {
    pub file_extension: Option<String>,
    pub components_folder: Option<String>,
    pub src_folder: Option<String>,
    pub imports_prefix: String,
    pub component_name_prefix: Option<String>,
    pub index_filename: Option<String>,
    pub definition_filename: Option<String>,
    pub definition_name: Option<String>,
    pub java_namespace: Option<String>,
}

/// Fully resolved generation options.
///
/// # Example
///
/// ```rust
/// use shapecheck::provider::{Options, OptionsInput};
///
/// let input = OptionsInput {
///     imports_prefix: "@acme/kit/".to_string(),
///     file_extension: Some("tsx".to_string()),
///     ..OptionsInput::default()
/// };
///
/// let options = Options::from_input(&input).unwrap();
/// assert_eq!(options.file_extension, "tsx");
/// assert_eq!(options.src_folder, "src");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub file_extension: String,
    pub components_folder: String,
    pub src_folder: String,
    pub imports_prefix: String,
    pub component_name_prefix: String,
    pub index_filename: String,
    pub definition_filename: String,
    pub definition_name: String,
    pub java_namespace: String,
}

impl Options {
    pub const DEFAULT_FILE_EXTENSION: &'static str = "ts";
    pub const DEFAULT_COMPONENTS_FOLDER: &'static str = "components";
    pub const DEFAULT_SRC_FOLDER: &'static str = "src";
    pub const DEFAULT_INDEX_FILENAME: &'static str = "index";
    pub const DEFAULT_DEFINITION_FILENAME: &'static str = "definition";
    pub const DEFAULT_DEFINITION_NAME: &'static str = "Definition";
    pub const DEFAULT_JAVA_NAMESPACE: &'static str = "org.framjet.blastdom.provider";

    /// Fills in defaults for every unset option.
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::MissingImportsPrefix` when `imports_prefix`
    /// is empty; there is no sensible default for it.
    pub fn from_input(input: &OptionsInput) -> Result<Self, DefinitionError> {
        if input.imports_prefix.is_empty() {
            return Err(DefinitionError::MissingImportsPrefix);
        }

        let or = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            file_extension: or(&input.file_extension, Self::DEFAULT_FILE_EXTENSION),
            components_folder: or(&input.components_folder, Self::DEFAULT_COMPONENTS_FOLDER),
            src_folder: or(&input.src_folder, Self::DEFAULT_SRC_FOLDER),
            imports_prefix: input.imports_prefix.clone(),
            component_name_prefix: or(&input.component_name_prefix, ""),
            index_filename: or(&input.index_filename, Self::DEFAULT_INDEX_FILENAME),
            definition_filename: or(&input.definition_filename, Self::DEFAULT_DEFINITION_FILENAME),
            definition_name: or(&input.definition_name, Self::DEFAULT_DEFINITION_NAME),
            java_namespace: or(&input.java_namespace, Self::DEFAULT_JAVA_NAMESPACE),
        })
    }
}
