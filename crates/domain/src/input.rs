//! Resolution inputs
//!
//! An [`Input`] is a specification value that the resolver reduces to a
//! final string: a literal, a collection to choose from, a reference to a
//! symbol of a loadable module, a zero-argument callable, a fake-data
//! provider function or a type object.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::DomainError;

/// Non-string literal value.
///
/// Renders in a language-neutral JSON-like form (`true`, `false`, `null`)
/// whatever the target language of the snippet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// Absent value.
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            // Integral floats keep one decimal digit so they read as floats.
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Type objects that can appear as inputs. They resolve to their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Text type.
    Str,
    /// Integer type.
    Int,
    /// Floating point type.
    Float,
    /// Boolean type.
    Bool,
    /// UUID type.
    Uuid,
}

impl TypeTag {
    /// Returns the name of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Uuid => "UUID",
        }
    }
}

/// Reference to a named symbol inside a module, written `module.path::symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolRef {
    /// Dotted module path.
    pub module: String,
    /// Symbol name inside the module.
    pub symbol: String,
}

impl SymbolRef {
    /// Token separating the module path from the symbol name.
    pub const SEPARATOR: &'static str = "::";

    /// Creates a new reference.
    #[must_use]
    pub fn new(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
        }
    }

    /// Splits a `module::symbol` string at the first separator.
    ///
    /// Returns `None` when the separator is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqgen_domain::SymbolRef;
    ///
    /// let reference = SymbolRef::parse("fixtures.names::all").unwrap();
    /// assert_eq!(reference.module, "fixtures.names");
    /// assert_eq!(reference.symbol, "all");
    /// assert!(SymbolRef::parse("plain-value").is_none());
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        path.split_once(Self::SEPARATOR)
            .map(|(module, symbol)| Self::new(module, symbol))
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.module, Self::SEPARATOR, self.symbol)
    }
}

type CallableFn = dyn Fn() -> Input + Send + Sync;

/// Named zero-argument function producing another input.
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    func: Arc<CallableFn>,
}

impl Callable {
    /// Wraps a function under a display name.
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn() -> Input + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function.
    #[must_use]
    pub fn call(&self) -> Input {
        (self.func)()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callable").field(&self.name).finish()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

/// A specification value awaiting resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Input {
    /// Literal string. Read as a `module::symbol` path where paths are enabled.
    Str(String),
    /// Non-string literal.
    Scalar(Scalar),
    /// Ordered collection; one element is chosen.
    Seq(Vec<Input>),
    /// Unordered collection, kept as its materialised sequence without duplicates.
    Set(Vec<Input>),
    /// Explicit module symbol reference.
    Reference(SymbolRef),
    /// Zero-argument function.
    Callable(Callable),
    /// Function of a fake-data provider, written `provider::function`.
    Fake(SymbolRef),
    /// Type object.
    Type(TypeTag),
}

impl Input {
    /// Creates a literal string input.
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Creates an ordered collection input.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Creates an unordered collection input. Duplicate elements are dropped.
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        let mut unique: Vec<Self> = Vec::new();
        for item in items.into_iter().map(Into::into) {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Self::Set(unique)
    }

    /// Creates a module symbol reference.
    pub fn reference(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::Reference(SymbolRef::new(module, symbol))
    }

    /// Creates a callable input.
    pub fn callable<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        Self::Callable(Callable::new(name, func))
    }

    /// Creates a reference to a fake-data provider function.
    pub fn fake(provider: impl Into<String>, function: impl Into<String>) -> Self {
        Self::Fake(SymbolRef::new(provider, function))
    }

    /// Returns the literal string if this input is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Seq(items) | Self::Set(items) => {
                let (open, close) = if matches!(self, Self::Seq(_)) {
                    ('[', ']')
                } else {
                    ('{', '}')
                };
                write!(f, "{open}")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "{close}")
            }
            Self::Reference(reference) | Self::Fake(reference) => write!(f, "{reference}"),
            Self::Callable(callable) => write!(f, "<function {}>", callable.name()),
            Self::Type(tag) => write!(f, "<type {}>", tag.name()),
        }
    }
}

impl TryFrom<Value> for Input {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Scalar(Scalar::Null)),
            Value::Bool(b) => Ok(Self::Scalar(Scalar::Bool(b))),
            Value::Number(n) => n
                .as_i64()
                .map(Scalar::Int)
                .or_else(|| n.as_f64().map(Scalar::Float))
                .map(Self::Scalar)
                .ok_or_else(|| DomainError::InvalidInput(format!("unrepresentable number {n}"))),
            Value::String(s) => Ok(Self::Str(s)),
            Value::Array(items) => items
                .into_iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Seq),
            Value::Object(_) => Err(DomainError::InvalidInput(
                "mappings can not be resolved to a value".to_string(),
            )),
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Input {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<Scalar> for Input {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<TypeTag> for Input {
    fn from(value: TypeTag) -> Self {
        Self::Type(value)
    }
}

impl From<Callable> for Input {
    fn from(value: Callable) -> Self {
        Self::Callable(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Input {
    fn from(items: Vec<T>) -> Self {
        Self::seq(items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Int(-3).to_string(), "-3");
        assert_eq!(Scalar::Float(5.73).to_string(), "5.73");
        assert_eq!(Scalar::Float(2.0).to_string(), "2.0");
        assert_eq!(Scalar::Bool(false).to_string(), "false");
        assert_eq!(Scalar::Null.to_string(), "null");
    }

    #[test]
    fn test_symbol_ref_splits_at_first_separator() {
        let reference = SymbolRef::parse("a.b::c::d").unwrap();
        assert_eq!(reference.module, "a.b");
        assert_eq!(reference.symbol, "c::d");
        assert_eq!(reference.to_string(), "a.b::c::d");
    }

    #[test]
    fn test_set_drops_duplicates_keeping_first_order() {
        let set = Input::set(["b", "a", "b", "c", "a"]);
        assert_eq!(set, Input::Set(vec!["b".into(), "a".into(), "c".into()]));
    }

    #[test]
    fn test_callable_equality_is_identity() {
        let callable = Callable::new("value", || Input::str("foo"));
        let same = callable.clone();
        let other = Callable::new("value", || Input::str("foo"));
        assert_eq!(callable, same);
        assert_ne!(callable, other);
        assert_eq!(callable.call(), Input::str("foo"));
    }

    #[test]
    fn test_input_from_json() {
        let input = Input::try_from(json!(["foo", 1, -1.5, true, null, ["x"]])).unwrap();
        assert_eq!(
            input,
            Input::Seq(vec![
                Input::str("foo"),
                Input::from(1),
                Input::from(-1.5),
                Input::from(true),
                Input::Scalar(Scalar::Null),
                Input::seq(["x"]),
            ])
        );
    }

    #[test]
    fn test_input_from_json_object_is_rejected() {
        let err = Input::try_from(json!({"a": 1})).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_input_display() {
        assert_eq!(Input::seq(["a", "b"]).to_string(), "[a, b]");
        assert_eq!(Input::reference("m", "f").to_string(), "m::f");
        assert_eq!(
            Input::callable("names", || Input::str("x")).to_string(),
            "<function names>"
        );
        assert_eq!(Input::Type(TypeTag::Uuid).to_string(), "<type UUID>");
    }
}
