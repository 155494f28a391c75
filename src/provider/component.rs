//! Component descriptors and their resolution into concrete definitions.
//!
//! A provider lists its components in one of three shapes. They are parsed
//! once into [`ComponentProvider`] and each is resolved into a
//! [`ComponentDefinition`] against the provider's options.

use std::fmt::{self, Debug};
use std::sync::Arc;

use super::definition::ProviderDefinition;
use super::options::Options;
use crate::value::Function;

/// What a component resolver can see.
#[derive(Clone, Copy)]
pub struct ComponentContext<'a> {
    pub provider: &'a ProviderDefinition,
    pub options: &'a Options,
}

/// A fully resolved component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefinition {
    pub name: String,
    pub component_name: Option<String>,
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub import_path: Option<String>,
    pub import_name: Option<String>,
    pub import_statement: Option<String>,
    pub use_lazy_load: bool,
}

/// A function that produces a component definition.
pub type ProviderFn = Arc<dyn Fn(&ComponentContext<'_>) -> ComponentDefinition + Send + Sync>;

/// Wraps a resolver closure as a document function value.
///
/// The resulting [`Function`] can be placed in a provider definition's
/// `components` array.
pub fn provider_function<F>(name: impl Into<String>, f: F) -> Function
where
    F: Fn(&ComponentContext<'_>) -> ComponentDefinition + Send + Sync + 'static,
{
    Function::named(name, provider_fn(f))
}

fn provider_fn<F>(f: F) -> ProviderFn
where
    F: Fn(&ComponentContext<'_>) -> ComponentDefinition + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A property value that is either fixed or computed at resolution time.
///
/// Computed properties receive the property name (in document spelling, e.g.
/// `importPath`) and the resolution context.
pub enum Calc<T> {
    Fixed(T),
    Computed(Arc<dyn Fn(&str, &ComponentContext<'_>) -> T + Send + Sync>),
}

impl<T: Clone> Calc<T> {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&str, &ComponentContext<'_>) -> T + Send + Sync + 'static,
    {
        Calc::Computed(Arc::new(f))
    }

    fn eval(&self, property: &str, ctx: &ComponentContext<'_>) -> T {
        match self {
            Calc::Fixed(value) => value.clone(),
            Calc::Computed(f) => f(property, ctx),
        }
    }
}

impl<T: Clone> Clone for Calc<T> {
    fn clone(&self) -> Self {
        match self {
            Calc::Fixed(value) => Calc::Fixed(value.clone()),
            Calc::Computed(f) => Calc::Computed(Arc::clone(f)),
        }
    }
}

impl<T: Debug> Debug for Calc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calc::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Calc::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Calc<String> {
    fn from(value: &str) -> Self {
        Calc::Fixed(value.to_string())
    }
}

impl From<bool> for Calc<bool> {
    fn from(value: bool) -> Self {
        Calc::Fixed(value)
    }
}

/// Per-component overrides. Unset properties fall back to the naming
/// strategies; `use_lazy_load` falls back to `true`.
#[derive(Debug, Clone)]
pub struct ComponentProps {
    pub name: String,
    pub component_name: Option<Calc<String>>,
    pub file_name: Option<Calc<String>>,
    pub file_path: Option<Calc<String>>,
    pub import_path: Option<Calc<String>>,
    pub import_name: Option<Calc<String>>,
    pub import_statement: Option<Calc<String>>,
    pub use_lazy_load: Option<Calc<bool>>,
}

impl ComponentProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component_name: None,
            file_name: None,
            file_path: None,
            import_path: None,
            import_name: None,
            import_statement: None,
            use_lazy_load: None,
        }
    }

    pub fn resolve(&self, ctx: &ComponentContext<'_>) -> ComponentDefinition {
        let text = |calc: &Option<Calc<String>>, property: &str| {
            calc.as_ref().map(|c| c.eval(property, ctx))
        };

        ComponentDefinition {
            name: self.name.clone(),
            component_name: text(&self.component_name, "componentName"),
            file_name: text(&self.file_name, "fileName"),
            file_path: text(&self.file_path, "filePath"),
            import_path: text(&self.import_path, "importPath"),
            import_name: text(&self.import_name, "importName"),
            import_statement: text(&self.import_statement, "importStatement"),
            use_lazy_load: self
                .use_lazy_load
                .as_ref()
                .map_or(true, |c| c.eval("useLazyLoad", ctx)),
        }
    }
}

/// Turns component properties into a provider function.
///
/// # Example
///
/// ```rust
/// use shapecheck::provider::{comp, Calc, ComponentProps};
///
/// let mut props = ComponentProps::new("Dialog");
/// props.use_lazy_load = Some(Calc::from(false));
/// props.import_path = Some(Calc::computed(|_, ctx| format!("{}dialog", ctx.options.imports_prefix)));
///
/// let provider = comp(props);
/// # let _ = provider;
/// ```
pub fn comp(props: ComponentProps) -> ProviderFn {
    provider_fn(move |ctx| props.resolve(ctx))
}

/// A component entry in a provider definition.
#[derive(Clone)]
pub enum ComponentProvider {
    /// Just a name; everything else comes from the naming strategies.
    Name(String),
    /// A function computing the definition.
    Provider(ProviderFn),
    /// A descriptor with per-component overrides.
    Detailed(ComponentProps),
}

impl ComponentProvider {
    pub fn resolve(&self, ctx: &ComponentContext<'_>) -> ComponentDefinition {
        match self {
            ComponentProvider::Name(name) => ComponentProps::new(name.clone()).resolve(ctx),
            ComponentProvider::Provider(f) => f(ctx),
            ComponentProvider::Detailed(props) => props.resolve(ctx),
        }
    }
}

impl Debug for ComponentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentProvider::Name(name) => f.debug_tuple("Name").field(name).finish(),
            ComponentProvider::Provider(_) => f.write_str("Provider(..)"),
            ComponentProvider::Detailed(props) => f.debug_tuple("Detailed").field(props).finish(),
        }
    }
}
