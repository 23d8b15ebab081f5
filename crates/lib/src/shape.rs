//! Shape predicates and membership tests.
//!
//! The map/list duality is derived, not stored: a container is "a list" when
//! its keys happen to be exactly `0..n-1`, and these predicates are how
//! callers ask shape questions about a value they did not build themselves.

use crate::{Result, errors::ContainerError, value::{Key, Value}};

/// Whether `container` is an associative map.
///
/// Non-maps and empty maps are not associative. With `all_string_keys` every
/// key must be a string; otherwise one string key suffices.
pub fn is_associative(container: &Value, all_string_keys: bool) -> bool {
    let Value::Map(map) = container else {
        return false;
    };
    if map.is_empty() {
        return false;
    }
    let is_str = |k: &Key| matches!(k, Key::Str(_));
    if all_string_keys {
        map.keys().all(is_str)
    } else {
        map.keys().any(is_str)
    }
}

/// Whether `container` is an integer-indexed map.
///
/// Non-maps are not indexed; empty maps are. With `consecutive` the keys
/// must be exactly `0..n-1` in order; otherwise any set of integer keys in
/// any order qualifies.
pub fn is_indexed(container: &Value, consecutive: bool) -> bool {
    let Value::Map(map) = container else {
        return false;
    };
    if consecutive {
        map.is_list()
    } else {
        map.keys().all(|k| matches!(k, Key::Int(_)))
    }
}

/// Whether `value` supports forward iteration: a map, or a foreign object
/// with the enumeration capability.
pub fn is_traversable(value: &Value) -> bool {
    match value {
        Value::Map(_) => true,
        Value::Foreign(obj) => obj.entries().is_some(),
        _ => false,
    }
}

/// Whether `needle` occurs among the values of `haystack`.
///
/// `strict` uses type-exact equality; otherwise loose equality (numeric
/// cross-type comparison) applies.
///
/// # Errors
/// Returns [`ContainerError::InvalidArgument`] when `haystack` is not
/// traversable.
pub fn is_in(needle: &Value, haystack: &Value, strict: bool) -> Result<bool> {
    for value in traverse(haystack, "haystack")? {
        let hit = if strict {
            &value == needle
        } else {
            value.loose_eq(needle)
        };
        if hit {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether every value of `needles` occurs in `haystack`, per [`is_in`].
///
/// # Errors
/// Returns [`ContainerError::InvalidArgument`] when either argument is not
/// traversable.
pub fn is_subset(needles: &Value, haystack: &Value, strict: bool) -> Result<bool> {
    for needle in traverse(needles, "needles")? {
        if !is_in(&needle, haystack, strict)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn traverse(value: &Value, what: &str) -> Result<Vec<Value>> {
    match value {
        Value::Map(map) => Ok(map.values().cloned().collect()),
        Value::Foreign(obj) => match obj.entries() {
            Some(entries) => Ok(entries.into_iter().map(|(_, v)| v).collect()),
            None => Err(not_traversable(what)),
        },
        _ => Err(not_traversable(what)),
    }
}

fn not_traversable(what: &str) -> crate::Error {
    ContainerError::invalid_argument(format!("the {what} argument must be traversable")).into()
}
