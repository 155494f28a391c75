//! Document paths for locating values in nested structures.
//!
//! This module provides [`DocPath`] and [`PathSegment`]. A validation run starts
//! from a caller-supplied root label (for example `config`) and every object
//! field or array element it descends into appends one segment.

use std::fmt::{self, Display};

/// A segment of a document path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field access (e.g., `options`, `importsPrefix`)
    Field(String),
    /// An element access (e.g., `[0]`, `[42]`)
    Index(usize),
}

/// A path to a value inside a document, such as `config.components[2].name`.
///
/// Paths are immutable: [`DocPath::field`] and [`DocPath::index`] return a new
/// path and leave the original untouched, so sibling validators can share a
/// parent path.
///
/// # Example
///
/// ```rust
/// use shapecheck::DocPath;
///
/// let path = DocPath::root("config")
///     .field("components")
///     .index(2)
///     .field("name");
///
/// assert_eq!(path.to_string(), "config.components[2].name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DocPath {
    segments: Vec<PathSegment>,
}

impl DocPath {
    /// Creates a path whose first segment is the given root label.
    pub fn root(label: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(label.into())],
        }
    }

    /// Creates a path with no segments.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended.
    pub fn field(&self, name: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path, or `None` for an empty path.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl From<&str> for DocPath {
    fn from(label: &str) -> Self {
        DocPath::root(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_label() {
        let path = DocPath::root("config");
        assert_eq!(path.to_string(), "config");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_empty_path_renders_nothing() {
        let path = DocPath::empty();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_index_directly_after_root() {
        let path = DocPath::root("list").index(1);
        assert_eq!(path.to_string(), "list[1]");
    }

    #[test]
    fn test_nested_fields_and_indices() {
        let path = DocPath::root("config")
            .field("components")
            .index(2)
            .field("name");
        assert_eq!(path.to_string(), "config.components[2].name");
    }

    #[test]
    fn test_leading_index_has_no_dot() {
        let path = DocPath::empty().index(0).field("a");
        assert_eq!(path.to_string(), "[0].a");
    }

    #[test]
    fn test_extending_does_not_mutate_parent() {
        let base = DocPath::root("doc");
        let a = base.field("a");
        let b = base.field("b");

        assert_eq!(base.to_string(), "doc");
        assert_eq!(a.to_string(), "doc.a");
        assert_eq!(b.to_string(), "doc.b");
    }

    #[test]
    fn test_parent_and_last() {
        let path = DocPath::root("doc").field("items").index(3);
        assert_eq!(path.last(), Some(&PathSegment::Index(3)));

        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "doc.items");
        assert_eq!(parent.parent().unwrap().to_string(), "doc");
        assert!(DocPath::empty().parent().is_none());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(DocPath::from("config"), DocPath::root("config"));
    }
}
