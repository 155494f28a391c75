//! Dynamic values inspected by validators.
//!
//! This module provides [`Value`], the runtime value every validator receives,
//! and [`TypeTag`], the closed set of kinds a value can have. Kind checks are
//! always made through [`Value::tag`], never by probing a value's structure.

use std::any::Any;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use indexmap::IndexMap;

/// The kind of a [`Value`].
///
/// `Null` and `Undefined` are distinct kinds, and neither is an `Object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Function,
    Null,
    Undefined,
}

impl TypeTag {
    /// Returns the lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
            TypeTag::Array => "array",
            TypeTag::Function => "function",
            TypeTag::Null => "null",
            TypeTag::Undefined => "undefined",
        }
    }

    /// Returns true for `Null` and `Undefined`.
    pub fn is_nullish(self) -> bool {
        matches!(self, TypeTag::Null | TypeTag::Undefined)
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An opaque callable carried inside a document.
///
/// The payload is type-erased; code that knows what it stored can get it back
/// with [`Function::downcast_ref`]. Two handles are equal only when they share
/// the same payload allocation.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Function, TypeTag, Value};
///
/// let double: fn(i64) -> i64 = |x| x * 2;
/// let value = Value::Function(Function::named("double", double));
///
/// assert_eq!(value.tag(), TypeTag::Function);
/// if let Value::Function(f) = &value {
///     let inner = f.downcast_ref::<fn(i64) -> i64>().unwrap();
///     assert_eq!(inner(21), 42);
/// }
/// ```
#[derive(Clone)]
pub struct Function {
    name: Option<String>,
    payload: Arc<dyn Any + Send + Sync>,
}

impl Function {
    /// Wraps an anonymous payload.
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Self {
            name: None,
            payload: Arc::new(payload),
        }
    }

    /// Wraps a payload with a display name.
    pub fn named<T: Any + Send + Sync>(name: impl Into<String>, payload: T) -> Self {
        Self {
            name: Some(name.into()),
            payload: Arc::new(payload),
        }
    }

    /// Returns the display name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the payload if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "[function {}]", name),
            None => f.write_str("[function]"),
        }
    }
}

/// A dynamically typed document value.
///
/// Object keys keep their insertion order so that unexpected-field reports
/// come out in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    Function(Function),
}

static UNDEFINED: Value = Value::Undefined;

impl Value {
    /// Returns the kind of this value.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
            Value::Function(_) => TypeTag::Function,
        }
    }

    /// Returns true for `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        self.tag().is_nullish()
    }

    /// Looks up a field, yielding `undefined` when the key is absent or the
    /// value is not an object.
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Value::Object(map) => map.get(key).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Builds an object value from `(key, value)` pairs, keeping their order.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Every JSON number fits an f64 closely enough for a kind check.
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, item)?;
                }
                f.write_str("}")
            }
            Value::Function(func) => write!(f, "{:?}", func),
        }
    }
}
