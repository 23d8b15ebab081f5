//! The universal container value type.
//!
//! [`Value`] represents everything the engine manipulates: scalar leaves,
//! nested ordered maps (which double as lists, see [`Map`]), foreign
//! capability-bearing objects, and the two merge sentinels.
//!
//! # Merge sentinels
//!
//! [`Value::Replace`] and [`Value::Unset`] are tagged wrapper variants that
//! alter deep-merge behavior for the key they appear under. They carry no
//! meaning outside [`crate::merge`]; the approach mirrors a tombstone variant
//! rather than out-of-band runtime type checks.
//!
//! # Direct comparisons
//!
//! `Value` implements `PartialEq` with primitive types for ergonomic
//! comparisons:
//!
//! ```
//! use nestkit::Value;
//!
//! let text = Value::from("hello");
//! let number = Value::from(42);
//! assert!(text == "hello");
//! assert!(number == 42);
//! assert!(!(text == 42));
//! ```

use std::{fmt, sync::Arc};

use serde::{
    Deserialize, Deserializer,
    ser::{Serialize, Serializer},
};

pub mod foreign;
pub mod map;

pub use foreign::Foreign;
pub use map::{Key, Map};

/// The universal value type manipulated by this crate.
#[derive(Debug, Clone)]
pub enum Value {
    // Leaf values
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Text string value
    Text(String),

    // Branch value
    /// Ordered map of keyed children (also represents lists)
    Map(Map),

    /// Opaque foreign object exposing capabilities through [`Foreign`]
    Foreign(Arc<dyn Foreign>),

    // Merge sentinels
    /// When merged into a key, unconditionally replaces the existing value
    /// with the wrapped one, without recursing.
    Replace(Box<Value>),
    /// When merged into a key, removes that key from the result.
    Unset,
}

impl Value {
    /// Returns true if this is a leaf value (not a map or foreign object).
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Value::Map(_) | Value::Foreign(_))
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Map(_) => "map",
            Value::Foreign(_) => "foreign",
            Value::Replace(_) => "replace",
            Value::Unset => "unset",
        }
    }

    /// Attempts to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a map reference.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference.
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a foreign object reference.
    pub fn as_foreign(&self) -> Option<&Arc<dyn Foreign>> {
        match self {
            Value::Foreign(obj) => Some(obj),
            _ => None,
        }
    }

    /// Converts this value into a map key, applying the grouping coercions:
    /// null becomes the empty string key, booleans become `0`/`1`, floats go
    /// through their canonical decimal-dot string (so `2.0` lands on integer
    /// key `2`). Maps, foreign objects and sentinels are not usable as keys.
    pub fn to_key(&self) -> Option<Key> {
        match self {
            Value::Null => Some(Key::Str(String::new())),
            Value::Bool(b) => Some(Key::Int(*b as i64)),
            Value::Int(n) => Some(Key::Int(*n)),
            Value::Float(f) => Some(Key::parse(&float_to_string(*f))),
            Value::Text(s) => Some(Key::parse(s)),
            _ => None,
        }
    }

    /// Loose equality, used by membership tests with `strict = false`.
    ///
    /// Strict equality, widened with cross-type numeric comparison: integers,
    /// floats and numeric text all compare numerically with each other.
    /// Booleans and nulls only loosely equal themselves.
    pub fn loose_eq(&self, other: &Value) -> bool {
        if self == other {
            return true;
        }
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Numeric view of this value, if it has one. Numeric text counts.
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// Canonical decimal-dot string form of a float, used when floats serve as
/// map keys. Integral floats render without a fractional part (`2.0` → `"2"`).
pub(crate) fn float_to_string(f: f64) -> String {
    format!("{f}")
}

/// Equality is strict: type-exact, and order-sensitive for maps. Foreign
/// objects compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Foreign(a), Value::Foreign(b)) => Arc::ptr_eq(a, b),
            (Value::Replace(a), Value::Replace(b)) => a == b,
            (Value::Unset, Value::Unset) => true,
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Map(map) => write!(f, "{map}"),
            Value::Foreign(obj) => write!(f, "<{}>", obj.type_name()),
            Value::Replace(inner) => write!(f, "replace({inner})"),
            Value::Unset => write!(f, "<unset>"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Arc<dyn Foreign>> for Value {
    fn from(value: Arc<dyn Foreign>) -> Self {
        Value::Foreign(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Map(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(x) if x == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

/// Serializes like the JSON it usually came from. Sentinels serialize as
/// their payload (`Unset` as null); foreign objects serialize through their
/// enumeration capability when present, as null otherwise.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null | Value::Unset => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Map(map) => map.serialize(serializer),
            Value::Foreign(obj) => match obj.entries() {
                Some(entries) => {
                    let map: Map = entries.into_iter().collect();
                    map.serialize(serializer)
                }
                None => serializer.serialize_unit(),
            },
            Value::Replace(inner) => inner.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(Value::from(json))
    }
}

/// Decoded documents are the natural entry point: JSON arrays become
/// list-shaped maps, object keys go through the numeric-string coercion.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Map(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (Key::parse(&k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
