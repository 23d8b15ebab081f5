//! Reshaping by extraction: `index`, `get_column`, `map_by`.
//!
//! All three walk a container's top-level elements, pull values out of each
//! element through [`Selector`]s, and build a new container keyed by those
//! values. Extracted key values go through the grouping coercions of
//! [`Value::to_key`]; `index` skips elements whose computed key is not
//! key-coercible, while `map_by` treats that as a contract violation.

use crate::{
    Result,
    access::get,
    errors::ContainerError,
    path::Selector,
    value::{Key, Map, Value},
};

/// Reindexes `elements` by `key`, optionally grouping first.
///
/// Each group selector in `groups` adds one nesting level: the element is
/// filed under the chain of its group values. Then:
///
/// - with a `key`, the element lands at its key value, later elements with
///   the same key overwriting earlier ones within a bucket. Elements whose
///   key value is null are discarded.
/// - with no `key` but at least one group, elements append inside their
///   bucket under sequential integer keys.
/// - with no `key` and no groups, the result is empty.
///
/// # Examples
///
/// ```
/// use nestkit::{index::index, list, map};
///
/// let data = list![
///     map! { "id" => 1, "name" => "a" },
///     map! { "id" => 2, "name" => "b" },
/// ];
/// let by_id = index(&data, Some(&"id".into()), &[]).unwrap();
/// assert_eq!(by_id, map! {
///     1 => map! { "id" => 1, "name" => "a" },
///     2 => map! { "id" => 2, "name" => "b" },
/// });
/// ```
///
/// Elements whose key value is null, or whose key or group value is not
/// key-coercible (a map, a foreign object), are skipped rather than failing:
/// absence is not exceptional here.
pub fn index(elements: &Map, key: Option<&Selector>, groups: &[Selector]) -> Result<Map> {
    let mut result = Map::new();
    'elements: for (_, element) in elements.iter() {
        let mut group_keys = Vec::with_capacity(groups.len());
        for group in groups {
            match get(element, group, Value::Null)?.to_key() {
                Some(group_key) => group_keys.push(group_key),
                None => continue 'elements,
            }
        }

        let mut bucket = &mut result;
        for group_key in &group_keys {
            let slot = bucket.entry_or(group_key, Value::Map(Map::new()));
            if !slot.is_map() {
                *slot = Value::Map(Map::new());
            }
            bucket = match slot {
                Value::Map(map) => map,
                _ => unreachable!(),
            };
        }
        match key {
            None => {
                if !groups.is_empty() {
                    bucket.push(element.clone());
                }
            }
            Some(key) => {
                let value = get(element, key, Value::Null)?;
                if value.is_null() {
                    continue;
                }
                if let Some(key) = value.to_key() {
                    bucket.insert(key, element.clone());
                }
            }
        }
    }
    Ok(result)
}

/// Extracts the values at `name` from every top-level element.
///
/// With `keep_keys` the result reuses the source keys; otherwise it is a
/// plain list in source order.
pub fn get_column(elements: &Map, name: &Selector, keep_keys: bool) -> Result<Map> {
    let mut result = Map::new();
    for (key, element) in elements.iter() {
        let value = get(element, name, Value::Null)?;
        if keep_keys {
            result.insert(key.clone(), value);
        } else {
            result.push(value);
        }
    }
    Ok(result)
}

/// Builds a key-to-value lookup from a container of elements.
///
/// For each element, the value at `from` becomes the key and the value at
/// `to` becomes the value. With a `group` selector the pairs nest one level
/// deeper under the element's group value.
///
/// # Errors
/// Returns [`ContainerError::InvalidArgument`] when a `from` or `group`
/// value cannot be coerced into a map key.
pub fn map_by(
    elements: &Map,
    from: &Selector,
    to: &Selector,
    group: Option<&Selector>,
) -> Result<Map> {
    let mut result = Map::new();
    for (_, element) in elements.iter() {
        let key = extract_key(element, from)?;
        let value = get(element, to, Value::Null)?;
        match group {
            None => {
                result.insert(key, value);
            }
            Some(group) => {
                let group_key = extract_key(element, group)?;
                let slot = result.entry_or(&group_key, Value::Map(Map::new()));
                if !slot.is_map() {
                    *slot = Value::Map(Map::new());
                }
                if let Value::Map(bucket) = slot {
                    bucket.insert(key, value);
                }
            }
        }
    }
    Ok(result)
}

fn extract_key(element: &Value, selector: &Selector) -> Result<Key> {
    let value = get(element, selector, Value::Null)?;
    coerce_key(&value)
}

fn coerce_key(value: &Value) -> Result<Key> {
    value.to_key().ok_or_else(|| {
        ContainerError::invalid_argument(format!(
            "a {} value cannot be used as a map key",
            value.type_name()
        ))
        .into()
    })
}
