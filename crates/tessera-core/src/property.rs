//! Heterogeneous property bag attached to every node.
//!
//! Values are a closed tagged union ([`PropValue`]) read through typed
//! accessors that fall back to a caller-supplied default when a key is
//! missing or holds a value of another type. Numeric reads accept integers
//! wherever a float is asked for.

use std::fmt;
use std::sync::Arc;

use crate::collections::map::HashMap;

/// Shareable event callback stored in props (`onClick`, `onChange`, ...).
///
/// Two handlers are equal only when they are the same allocation.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn(&PropValue) + Send + Sync>);

impl Handler {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&PropValue) + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    pub fn invoke(&self, argument: &PropValue) {
        (self.0)(argument)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}

/// A single property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),
    Map(Props),
    Handler(Handler),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Reads a float, coercing integers.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            PropValue::Float(value) => Some(value),
            PropValue::Int(value) => Some(value as f64),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            PropValue::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            PropValue::Bool(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Props> {
        match self {
            PropValue::Map(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            PropValue::Handler(value) => Some(value),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::String(_) => "string",
            PropValue::Float(_) => "float",
            PropValue::Int(_) => "int",
            PropValue::Bool(_) => "bool",
            PropValue::Map(_) => "map",
            PropValue::Handler(_) => "handler",
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::String(value) => f.write_str(value),
            PropValue::Float(value) => write!(f, "{value}"),
            PropValue::Int(value) => write!(f, "{value}"),
            PropValue::Bool(value) => write!(f, "{value}"),
            PropValue::Map(value) => write!(f, "{value}"),
            PropValue::Handler(_) => f.write_str("<handler>"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}

impl From<f32> for PropValue {
    fn from(value: f32) -> Self {
        PropValue::Float(value as f64)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Int(value as i64)
    }
}

impl From<usize> for PropValue {
    fn from(value: usize) -> Self {
        PropValue::Int(value as i64)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<Props> for PropValue {
    fn from(value: Props) -> Self {
        PropValue::Map(value)
    }
}

impl From<Handler> for PropValue {
    fn from(value: Handler) -> Self {
        PropValue::Handler(value)
    }
}

/// String-keyed map of [`PropValue`]s. Iteration order is unspecified.
#[derive(Clone, Default, PartialEq)]
pub struct Props {
    values: HashMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder form of [`Props::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn get_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(PropValue::as_str).unwrap_or(default)
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(PropValue::as_int).unwrap_or(default)
    }

    /// Reads a float; integer values are coerced.
    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(PropValue::as_float).unwrap_or(default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(PropValue::as_bool).unwrap_or(default)
    }

    pub fn get_map(&self, key: &str) -> Option<&Props> {
        self.get(key).and_then(PropValue::as_map)
    }

    pub fn get_handler(&self, key: &str) -> Option<&Handler> {
        self.get(key).and_then(PropValue::as_handler)
    }

    /// Returns a new bag holding `self` overlaid with `other`.
    pub fn merge(&self, other: &Props) -> Props {
        let mut merged = self.clone();
        for (key, value) in &other.values {
            merged.values.insert(key.clone(), value.clone());
        }
        merged
    }

    fn sorted_entries(&self) -> Vec<(&String, &PropValue)> {
        let mut entries: Vec<_> = self.values.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        props.extend(iter);
        props
    }
}

impl<K, V> Extend<(K, V)> for Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted_entries()).finish()
    }
}

impl fmt::Display for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.sorted_entries().into_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

/// Builds a [`Props`] bag from `key => value` pairs.
///
/// ```
/// let props = tessera_core::props! { "spacing" => 1.0, "text" => "hi" };
/// assert_eq!(props.get_float("spacing", 0.0), 1.0);
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $( props.set($key, $value); )+
        props
    }};
}

#[cfg(test)]
#[path = "tests/property_tests.rs"]
mod tests;
