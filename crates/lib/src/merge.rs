//! Recursive deep merge with sentinel overrides.
//!
//! Later sources override earlier ones, except where sentinels alter this:
//! [`Value::Unset`] deletes the key from the accumulating result, and
//! [`Value::Replace`] assigns its payload without recursing. Integer keys are
//! concatenative, not positional — an integer key already present in the
//! result appends the incoming value under the next available integer key.
//!
//! The merge is associative left to right but not commutative. Inputs are
//! never mutated.
//!
//! # Examples
//!
//! ```
//! use nestkit::{map, list, merge::merge};
//!
//! let a = map! { "k" => map! { "a" => 1 } };
//! let b = map! { "k" => map! { "b" => 2 } };
//! assert_eq!(merge(&a, &b), map! { "k" => map! { "a" => 1, "b" => 2 } });
//!
//! // Integer keys append instead of overwriting by position.
//! assert_eq!(merge(&list!["a", "b"], &list!["x"]), list!["a", "b", "x"]);
//! ```

use tracing::trace;

use crate::value::{Key, Map, Value};

/// Deep-merges two maps, returning a new map.
pub fn merge(a: &Map, b: &Map) -> Map {
    merge_all([a, b])
}

/// Folds any number of maps left to right with the merge rules.
///
/// An empty iterator yields an empty map; a single layer is returned as-is.
pub fn merge_all<'a>(layers: impl IntoIterator<Item = &'a Map>) -> Map {
    let mut iter = layers.into_iter();
    let Some(first) = iter.next() else {
        return Map::new();
    };
    let mut result = first.clone();
    for layer in iter {
        trace!(keys = layer.len(), "merging layer");
        merge_into(&mut result, layer);
    }
    result
}

fn merge_into(result: &mut Map, source: &Map) {
    for (key, value) in source.iter() {
        match value {
            Value::Unset => {
                result.shift_remove(key);
            }
            Value::Replace(inner) => {
                result.insert(key.clone(), (**inner).clone());
            }
            _ => match key {
                Key::Int(_) => {
                    // Concatenative integer-key rule: existing positions are
                    // never overwritten.
                    if result.contains_key(key) {
                        result.push(value.clone());
                    } else {
                        result.insert(key.clone(), value.clone());
                    }
                }
                Key::Str(_) => {
                    let recurse = matches!(value, Value::Map(_))
                        && matches!(result.get(key), Some(Value::Map(_)));
                    if recurse {
                        if let (Some(Value::Map(dst)), Value::Map(src)) =
                            (result.get_mut(key), value)
                        {
                            merge_into(dst, src);
                        }
                    } else {
                        result.insert(key.clone(), value.clone());
                    }
                }
            },
        }
    }
}
