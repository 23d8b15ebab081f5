//! The ordered map underlying every container.
//!
//! There is no separate list type: a [`Map`] whose keys are exactly the
//! consecutive integers `0..n-1` *is* a list, and [`Map::is_list`] computes
//! that invariant on demand. This keeps merge and append rules uniform across
//! both shapes.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Value;

/// A map key: a string or an integer.
///
/// Canonical decimal integer strings coerce to [`Key::Int`] when parsed, so
/// `"3"` and `3` address the same entry; `"03"` stays a string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// String key
    Str(String),
}

impl Key {
    /// Parses a key from a string, coercing canonical integer forms.
    ///
    /// A string is canonical when it is a plain decimal integer with no
    /// leading zeros (other than `"0"` itself), an optional leading `-`, and
    /// fits in an `i64`.
    pub fn parse(s: &str) -> Key {
        if is_canonical_int(s)
            && let Ok(n) = s.parse::<i64>()
        {
            return Key::Int(n);
        }
        Key::Str(s.to_string())
    }

    /// Returns the integer value if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// Returns the string slice if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    /// Returns true if this is an integer key.
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns true if this is a string key.
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }
}

fn is_canonical_int(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // "0" is canonical; "00", "01" and "-0" are not.
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    !(s.starts_with('-') && digits == "0")
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Int(n as i64)
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Int(n as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::parse(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::parse(&s)
    }
}

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// Setting an existing key overwrites its value in place, preserving the
/// original position; inserting a new key appends it. Removal via
/// [`Map::shift_remove`] preserves the order of the remaining entries.
///
/// # Examples
///
/// ```
/// use nestkit::{Key, Map, Value};
///
/// let mut map = Map::new();
/// map.insert(Key::from("name"), Value::from("Alice"));
/// map.push(Value::from("first"));
/// assert_eq!(map.get(&Key::Int(0)), Some(&Value::from("first")));
/// assert!(!map.is_list());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<Key, Value>,
}

impl Map {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map contains the given key.
    ///
    /// An entry holding an explicit `Null` counts as present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Gets a value by key.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to a value by key.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Inserts a value, returning the previous value if the key was present.
    ///
    /// Existing keys keep their position; new keys append.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns a mutable reference to the entry at `key`, inserting `default`
    /// first if the key is absent.
    pub fn entry_or(&mut self, key: &Key, default: Value) -> &mut Value {
        self.entries.entry(key.clone()).or_insert(default)
    }

    /// Removes an entry, preserving the order of the remaining entries.
    pub fn shift_remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// The next integer key an append would use: one past the largest
    /// existing integer key, or `0`.
    pub fn next_int_key(&self) -> i64 {
        self.entries
            .keys()
            .filter_map(Key::as_int)
            .max()
            .map_or(0, |n| n.saturating_add(1).max(0))
    }

    /// Appends a value under the next available integer key and returns the
    /// key used.
    pub fn push(&mut self, value: impl Into<Value>) -> Key {
        let key = Key::Int(self.next_int_key());
        self.entries.insert(key.clone(), value.into());
        key
    }

    /// Returns true if the keys are exactly `0..n-1` in that order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, k)| k.as_int() == Some(i as i64))
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Iterates over entries with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Iterates over mutable values in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Sorts entries by key in place, preserving key-value association.
    pub fn sort_keys(&mut self) {
        self.entries.sort_keys();
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Equality is strict: same entries in the same order.
///
/// Use the canonicalizer (`sort::recursive_sort`) first for order-independent
/// comparisons.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(Key, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Collecting plain values builds a list (`0..n-1` keys).
impl FromIterator<Value> for Map {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut map = Map::new();
        for value in iter {
            map.push(value);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Maps serialize as JSON-style objects with stringified keys.
impl Serialize for Map {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

/// Constructs a [`Map`] from `key => value` pairs.
///
/// ```
/// use nestkit::map;
/// let m = map! { "name" => "Alice", "age" => 30 };
/// assert_eq!(m.len(), 2);
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::Map::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $( map.insert($crate::Key::from($key), $crate::Value::from($value)); )+
        map
    }};
}

/// Constructs a list-shaped [`Map`] (keys `0..n-1`) from values.
///
/// ```
/// use nestkit::list;
/// let l = list!["a", "b", "c"];
/// assert!(l.is_list());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Map::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $( map.push($crate::Value::from($value)); )+
        map
    }};
}
