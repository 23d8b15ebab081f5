//! Selective projection: rebuild a sparse container from dotted-path specs.
//!
//! Positive specs copy subtrees from the source into the result at the same
//! path. Specs prefixed with `!` are exclusions; they run strictly after all
//! inclusions, against the accumulated result. Walking is strict segment by
//! segment on both sides (no last-dot fallback): a missing or non-map
//! intermediate silently skips the spec.

use crate::{
    path::split_segments,
    value::{Key, Map, Value},
};

/// Projects `container` down to the subtrees named by `specs`.
///
/// # Examples
///
/// ```
/// use nestkit::{filter::filter, list, map};
///
/// let data = map! {
///     "A" => list![1, 2],
///     "B" => map! { "C" => 1, "D" => 2 },
///     "E" => 1,
/// };
/// assert_eq!(
///     filter(&data, &["B", "!B.C"]),
///     map! { "B" => map! { "D" => 2 } }
/// );
/// ```
pub fn filter(container: &Map, specs: &[&str]) -> Map {
    let mut result = Map::new();
    let mut exclusions: Vec<&str> = Vec::new();

    for spec in specs {
        if let Some(rest) = spec.strip_prefix('!') {
            exclusions.push(rest);
            continue;
        }
        let keys = split_segments(spec);
        let Some(found) = walk(container, &keys) else {
            continue;
        };
        let found = found.clone();
        let Some((last, init)) = keys.split_last() else {
            continue;
        };

        let mut node = &mut result;
        for key in init {
            let slot = node.entry_or(key, Value::Map(Map::new()));
            if !slot.is_map() {
                *slot = Value::Map(Map::new());
            }
            node = match slot {
                Value::Map(map) => map,
                _ => unreachable!(),
            };
        }
        node.insert(last.clone(), found);
    }

    for spec in exclusions {
        let keys = split_segments(spec);
        let Some((last, init)) = keys.split_last() else {
            continue;
        };
        let mut node = &mut result;
        let mut reachable = true;
        for key in init {
            if matches!(node.get(key), Some(Value::Map(_))) {
                node = match node.get_mut(key) {
                    Some(Value::Map(map)) => map,
                    _ => unreachable!(),
                };
            } else {
                reachable = false;
                break;
            }
        }
        if reachable {
            node.shift_remove(last);
        }
    }

    result
}

/// Strict descent: every segment must exist and every intermediate must be a
/// map.
fn walk<'a>(container: &'a Map, keys: &[Key]) -> Option<&'a Value> {
    let (first, rest) = keys.split_first()?;
    let mut current = container.get(first)?;
    for key in rest {
        current = current.as_map()?.get(key)?;
    }
    Some(current)
}
