//! Loading provider definitions from storage.
//!
//! Filesystem access goes through the [`FileSystem`] trait so loading can be
//! tested against an in-memory store. Loaded documents are plain JSON, so
//! their components are names or descriptor objects; provider functions can
//! only be attached programmatically.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::path::DocPath;
use crate::provider::{shared_schema, DefinitionError, ProviderDefinition, DEFINITION_ROOT};
use crate::result::ValidationResult;
use crate::schema::Validator;
use crate::value::Value;

/// Abstraction for filesystem operations.
pub trait FileSystem: Send + Sync {
    /// The error type for filesystem operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the contents of a file as a string.
    fn read_file(&self, path: &Path) -> Result<String, Self::Error>;

    /// Lists all entries in a directory.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Self::Error>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    type Error = std::io::Error;

    fn read_file(&self, path: &Path) -> Result<String, Self::Error> {
        std::fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Self::Error> {
        let mut entries = std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort();
        Ok(entries)
    }
}

/// Errors that can occur while loading provider definitions.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// IO error reading a file
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, Box<dyn std::error::Error + Send + Sync>),

    /// JSON parsing error
    #[error("Parse error in {0}: {1}")]
    Parse(PathBuf, serde_json::Error),

    /// The document is not a valid provider definition
    #[error("Definition error in {0}: {1}")]
    Definition(PathBuf, DefinitionError),

    /// Multiple errors occurred
    #[error("Multiple errors: {0:?}")]
    Multiple(Vec<LoadError>),
}

/// Reads, parses and validates a single provider definition file.
///
/// # Example
///
/// ```rust,no_run
/// use shapecheck::loading::{load_definition, StdFileSystem};
///
/// let definition = load_definition(&StdFileSystem, "provider.json")?;
/// println!("{} declares {} components", definition.name, definition.components.len());
/// # Ok::<(), shapecheck::loading::LoadError>(())
/// ```
pub fn load_definition<Fs: FileSystem>(
    fs: &Fs,
    path: impl AsRef<Path>,
) -> Result<ProviderDefinition, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading provider definition");

    let content = fs
        .read_file(path)
        .map_err(|e| LoadError::Io(path.to_path_buf(), Box::new(e)))?;

    let json: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| LoadError::Parse(path.to_path_buf(), e))?;

    ProviderDefinition::from_value(&Value::from(json))
        .map_err(|e| LoadError::Definition(path.to_path_buf(), e))
}

/// Loads every `.json` file in a directory as a provider definition.
///
/// All files are attempted; failures are collected into
/// [`LoadError::Multiple`] rather than stopping at the first bad file.
pub fn load_dir<Fs: FileSystem>(
    fs: &Fs,
    path: impl AsRef<Path>,
) -> Result<Vec<ProviderDefinition>, LoadError> {
    let path = path.as_ref();
    let files = fs
        .read_dir(path)
        .map_err(|e| LoadError::Io(path.to_path_buf(), Box::new(e)))?;

    let mut definitions = Vec::new();
    let mut errors = Vec::new();

    for file in files {
        if file.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        match load_definition(fs, &file) {
            Ok(definition) => definitions.push(definition),
            Err(e) => {
                warn!(path = %file.display(), error = %e, "skipping provider definition");
                errors.push(e);
            }
        }
    }

    if errors.is_empty() {
        Ok(definitions)
    } else {
        Err(LoadError::Multiple(errors))
    }
}

/// Validates many documents against the provider-definition schema in
/// parallel. Results are returned in input order.
pub fn validate_batch(documents: &[Value]) -> Vec<ValidationResult> {
    let schema = shared_schema();
    let root = DocPath::root(DEFINITION_ROOT);

    documents
        .par_iter()
        .map(|doc| schema.validate(doc, &root))
        .collect()
}
