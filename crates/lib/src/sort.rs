//! Ordering: the multi-key stable sorter and the recursive canonicalizer.
//!
//! `multisort` sorts a container's top-level elements by one or more derived
//! columns. Ties across every specified column break on the element's
//! original position ascending, so the result is fully deterministic and
//! order-stable without relying on the underlying sort primitive being
//! stable. The sorted container is reindexed `0..n-1`.
//!
//! `recursive_sort` canonicalizes a whole tree bottom-up: integer-keyed
//! levels get value-sorted and reindexed, everything else gets key-sorted.

use std::cmp::Ordering;

use tracing::trace;

use crate::{
    Result,
    access::get,
    errors::ContainerError,
    path::Selector,
    value::{Key, Map, Value, float_to_string},
};

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Comparison mode for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typed comparison: null < bool < numbers < text < map, numbers compare
    /// across int/float.
    Regular,
    /// Coerce both sides to a number; values with no numeric view count as 0.
    Numeric,
    /// Compare textual forms.
    Text,
    /// Compare textual forms ASCII case-insensitively.
    CaseInsensitive,
}

/// Sorts `elements` in place by the given key columns.
///
/// `directions` and `modes` run parallel to `keys`; a single-element slice
/// broadcasts to every column, and an empty slice means ascending/regular
/// throughout. Keys may be dotted paths or dynamic selectors
/// (data-dependent sort values). Empty `keys` or an empty container is a
/// no-op. The container is reindexed `0..n-1` afterwards.
///
/// # Examples
///
/// ```
/// use nestkit::{list, map, sort::{multisort, Direction, Mode}, Value};
///
/// let mut data = list![
///     map! { "age" => 30, "name" => "Alexander" },
///     map! { "age" => 30, "name" => "Brian" },
///     map! { "age" => 19, "name" => "Barney" },
/// ];
/// multisort(
///     &mut data,
///     &["age".into(), "name".into()],
///     &[Direction::Asc, Direction::Desc],
///     &[Mode::Regular],
/// )
/// .unwrap();
/// let names: Vec<_> = data
///     .values()
///     .filter_map(|v| v.as_map())
///     .filter_map(|m| m.get(&"name".into()))
///     .cloned()
///     .collect();
/// assert_eq!(names, vec![
///     Value::from("Barney"),
///     Value::from("Brian"),
///     Value::from("Alexander"),
/// ]);
/// ```
///
/// # Errors
/// Returns [`ContainerError::InvalidArgument`] when `directions` or `modes`
/// is neither length 1 nor the same length as `keys`.
pub fn multisort(
    elements: &mut Map,
    keys: &[Selector],
    directions: &[Direction],
    modes: &[Mode],
) -> Result<()> {
    if keys.is_empty() || elements.is_empty() {
        return Ok(());
    }

    let directions = broadcast(directions, keys.len(), Direction::Asc, "directions")?;
    let modes = broadcast(modes, keys.len(), Mode::Regular, "comparison modes")?;

    // One derived column per key, in element order.
    let mut columns: Vec<Vec<Value>> = Vec::with_capacity(keys.len());
    for key in keys {
        let mut column = Vec::with_capacity(elements.len());
        for (_, element) in elements.iter() {
            column.push(get(element, key, Value::Null)?);
        }
        columns.push(column);
    }
    trace!(columns = columns.len(), rows = elements.len(), "derived sort columns");

    let mut order: Vec<usize> = (0..elements.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        for (column, (direction, mode)) in
            columns.iter().zip(directions.iter().zip(modes.iter()))
        {
            let ordering = compare(&column[a], &column[b], *mode);
            let ordering = match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        // The implicit original-index column, always ascending.
        a.cmp(&b)
    });

    let old = std::mem::take(elements);
    let values: Vec<Value> = old.into_iter().map(|(_, v)| v).collect();
    for &i in &order {
        elements.push(values[i].clone());
    }
    Ok(())
}

fn broadcast<T: Copy>(slice: &[T], len: usize, default: T, what: &str) -> Result<Vec<T>> {
    match slice.len() {
        0 => Ok(vec![default; len]),
        1 => Ok(vec![slice[0]; len]),
        n if n == len => Ok(slice.to_vec()),
        n => Err(ContainerError::invalid_argument(format!(
            "{what} must have 0, 1 or {len} entries, got {n}"
        ))
        .into()),
    }
}

fn compare(a: &Value, b: &Value, mode: Mode) -> Ordering {
    match mode {
        Mode::Regular => regular_cmp(a, b),
        Mode::Numeric => {
            let a = a.as_number().unwrap_or(0.0);
            let b = b.as_number().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        Mode::Text => text_form(a).cmp(&text_form(b)),
        Mode::CaseInsensitive => text_form(a)
            .to_ascii_lowercase()
            .cmp(&text_form(b).to_ascii_lowercase()),
    }
}

/// Total order over values: null < bool < numbers < text < map < foreign.
/// Int and float compare numerically with each other; maps compare by length,
/// then pairwise by key and value.
pub(crate) fn regular_cmp(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Text(_) => 3,
            Value::Map(_) => 4,
            Value::Foreign(_) => 5,
            Value::Replace(_) | Value::Unset => 6,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Map(x), Value::Map(y)) => x.len().cmp(&y.len()).then_with(|| {
            for ((ka, va), (kb, vb)) in x.iter().zip(y.iter()) {
                let ordering = ka.cmp(kb).then_with(|| regular_cmp(va, vb));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        }),
        _ if rank(a) == 2 && rank(b) == 2 => {
            match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Textual form used by the text comparison modes: null renders empty,
/// floats use the canonical decimal-dot form.
fn text_form(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => {
            if *b {
                "1".to_string()
            } else {
                String::new()
            }
        }
        Value::Float(f) => float_to_string(*f),
        other => other.to_string(),
    }
}

/// Recursively canonicalizes a tree in place, bottom-up.
///
/// Children sort before their parent. At each map level, the `sorter`
/// closure (if supplied) is applied uniformly; otherwise the level is
/// value-sorted and reindexed when all its keys are integers, and key-sorted
/// otherwise. Non-map values are left alone.
pub fn recursive_sort(value: &mut Value, sorter: Option<&dyn Fn(&mut Map)>) {
    let Value::Map(map) = value else {
        return;
    };
    for (_, child) in map.iter_mut() {
        recursive_sort(child, sorter);
    }
    match sorter {
        Some(sorter) => sorter(map),
        None => {
            // Same predicate as is_indexed(_, false): all keys integer.
            let all_int = map.keys().all(|k| matches!(k, Key::Int(_)));
            if all_int {
                let mut values: Vec<Value> =
                    std::mem::take(map).into_iter().map(|(_, v)| v).collect();
                values.sort_by(regular_cmp);
                for v in values {
                    map.push(v);
                }
            } else {
                map.sort_keys();
            }
        }
    }
}
