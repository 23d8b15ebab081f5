//! Path-based accessors: `get`, `set`, `remove`, `remove_value`, `key_exists`.
//!
//! Lookups are best-effort: absence is not exceptional, and every unresolved
//! `get` degrades to the caller-supplied default. The only failures that
//! propagate are contract violations and foreign dynamic-field reads on
//! objects without an existence-check capability (see [`crate::errors`]).
//!
//! # The last-dot rule
//!
//! When a direct containment lookup for a dotted string key fails, `get`
//! splits the key at the *last* `.`: everything before it resolves first
//! (recursively, so the rule applies again), and the remainder is looked up
//! on that result. This longest-prefix nested resolution is intentionally
//! asymmetric with `set`, which segments strictly left to right. Both
//! behaviors are preserved exactly.

use crate::{
    Result,
    errors::ContainerError,
    path::Selector,
    value::{Key, Map, Value},
};

/// Resolves `key` against `container`, returning `default` when the path
/// does not resolve.
///
/// `key` is a [`Selector`]: a single (possibly dotted) key, an explicit
/// segment sequence resolved left to right, or a closure invoked with
/// `(container, default)` in place of traversal.
///
/// # Examples
///
/// ```
/// use nestkit::{access::get, map, Value};
///
/// let data = Value::from(map! { "foo" => map! { "bar" => 5 } });
/// assert_eq!(get(&data, "foo.bar", Value::Null).unwrap(), Value::Int(5));
/// assert_eq!(get(&data, "foo.bar.baz", "D").unwrap(), Value::from("D"));
/// ```
pub fn get(container: &Value, key: impl Into<Selector>, default: impl Into<Value>) -> Result<Value> {
    get_selector(container, &key.into(), &default.into())
}

fn get_selector(container: &Value, selector: &Selector, default: &Value) -> Result<Value> {
    match selector {
        Selector::Dynamic(f) => Ok(f(container, default)),
        Selector::Seq(parts) => {
            let Some((last, init)) = parts.split_last() else {
                return Ok(default.clone());
            };
            let mut current = container.clone();
            for part in init {
                current = get_selector(&current, part, &Value::Null)?;
            }
            get_selector(&current, last, default)
        }
        Selector::Key(key) => get_key(container, key, default),
    }
}

fn get_key(container: &Value, key: &Key, default: &Value) -> Result<Value> {
    if let Some(found) = lookup(container, key) {
        return Ok(found);
    }

    // Longest-prefix fallback: split a dotted string key at the last dot and
    // resolve the prefix first. Only reached after the direct lookup failed.
    if let Key::Str(s) = key
        && !s.is_empty()
        && let Some(pos) = s.rfind('.')
    {
        let parent = get_key(container, &Key::Str(s[..pos].to_string()), default)?;
        let leaf = Key::parse(&s[pos + 1..]);
        if let Some(found) = lookup(&parent, &leaf) {
            return Ok(found);
        }
        return dynamic_fallback(&parent, &leaf, default);
    }

    dynamic_fallback(container, key, default)
}

/// Direct containment read: map entry, or a foreign object's declared field.
fn lookup(container: &Value, key: &Key) -> Option<Value> {
    match container {
        Value::Map(map) => map.get(key).cloned(),
        Value::Foreign(obj) => obj.field(key),
        _ => None,
    }
}

/// Last resort: the foreign dynamic-property mechanism. Its failure is
/// swallowed into `default` only when the object also has an existence-check
/// capability; otherwise it propagates.
fn dynamic_fallback(container: &Value, key: &Key, default: &Value) -> Result<Value> {
    match container {
        Value::Foreign(obj) => match obj.field_dyn(key) {
            Ok(value) => Ok(value),
            Err(_) if obj.contains(key).is_some() => Ok(default.clone()),
            Err(err) => Err(err.into()),
        },
        _ => Ok(default.clone()),
    }
}

/// Sets `value` at `path` inside `target`, creating intermediate maps as
/// needed.
///
/// A `None` path replaces the entire target. Otherwise the path is segmented
/// strictly left to right; at every segment but the last, an absent or
/// explicitly null entry becomes an empty map, and any other non-map value is
/// wrapped into a single-element list (`{0: old}`) before descending — never
/// silently overwritten. The final segment is assigned, overwriting or
/// inserting.
///
/// # Errors
/// Returns [`ContainerError::InvalidArgument`] if `path` cannot be segmented
/// (it contains a closure or a nested sequence).
pub fn set(target: &mut Value, path: Option<&Selector>, value: impl Into<Value>) -> Result<()> {
    let value = value.into();
    let Some(path) = path else {
        *target = value;
        return Ok(());
    };

    let segments = path.segments()?;
    let Some((last, init)) = segments.split_last() else {
        return Err(ContainerError::invalid_argument(
            "an empty segment sequence does not address a location",
        )
        .into());
    };

    coerce_slot(target);
    let mut current = match target {
        Value::Map(map) => map,
        _ => unreachable!(),
    };

    for segment in init {
        let entry = current.entry_or(segment, Value::Null);
        coerce_slot(entry);
        match entry {
            Value::Map(map) => current = map,
            _ => unreachable!(),
        }
    }

    current.insert(last.clone(), value);
    Ok(())
}

/// Makes a slot descendable: absent-or-null becomes an empty map, an existing
/// non-map value is wrapped into `{0: old}`.
fn coerce_slot(slot: &mut Value) {
    match slot {
        Value::Map(_) => {}
        Value::Null => *slot = Value::Map(Map::new()),
        other => {
            let old = std::mem::take(other);
            let mut wrapped = Map::new();
            wrapped.push(old);
            *other = Value::Map(wrapped);
        }
    }
}

/// Removes and returns the value at a single top-level `key`, or `default`
/// if absent. An entry holding an explicit null counts as present.
///
/// This is single-segment only, not a full path.
pub fn remove(container: &mut Value, key: &Key, default: impl Into<Value>) -> Value {
    match container {
        Value::Map(map) => map.shift_remove(key).unwrap_or_else(|| default.into()),
        _ => default.into(),
    }
}

/// Removes every top-level entry whose value is strictly equal to `value`,
/// mutating `container`. Returns the removed entries under their original
/// keys.
pub fn remove_value(container: &mut Value, value: &Value) -> Map {
    let mut removed = Map::new();
    if let Value::Map(map) = container {
        let matching: Vec<Key> = map
            .iter()
            .filter(|(_, v)| *v == value)
            .map(|(k, _)| k.clone())
            .collect();
        for key in matching {
            if let Some(old) = map.shift_remove(&key) {
                removed.insert(key, old);
            }
        }
    }
    removed
}

/// Checks whether `container` has an entry at `key`.
///
/// Case-sensitive mode distinguishes "key absent" from "key present with a
/// null value" and also consults a foreign object's existence-check
/// capability. Case-insensitive mode scans all keys with an ASCII
/// case-insensitive comparison of their rendered forms.
///
/// # Errors
/// In case-insensitive mode, returns [`ContainerError::InvalidArgument`] when
/// the container does not support ordered key enumeration (for example a
/// foreign object with only an indexed existence check).
pub fn key_exists(key: &Key, container: &Value, case_sensitive: bool) -> Result<bool> {
    if case_sensitive {
        return Ok(match container {
            Value::Map(map) => map.contains_key(key),
            Value::Foreign(obj) => obj.contains(key) == Some(true),
            _ => false,
        });
    }

    let needle = key.to_string();
    let matches_needle =
        |k: &Key| k.to_string().eq_ignore_ascii_case(&needle);

    match container {
        Value::Map(map) => Ok(map.keys().any(matches_needle)),
        Value::Foreign(obj) => match obj.entries() {
            Some(entries) => Ok(entries.iter().any(|(k, _)| matches_needle(k))),
            None => Err(ContainerError::invalid_argument(
                "case-insensitive key lookup requires ordered key enumeration",
            )
            .into()),
        },
        _ => Err(ContainerError::invalid_argument(
            "case-insensitive key lookup requires an enumerable container",
        )
        .into()),
    }
}
