//! Path-based accessor behavior end to end.

use std::sync::Arc;

use nestkit::{
    Key, Map, Selector, Value,
    access::{get, key_exists, remove, remove_value, set},
    list, map,
};

use crate::helpers::{CheckedRecord, SealedRecord, config_tree};

#[test]
fn test_get_nested_and_default() {
    let data = Value::from(map! { "foo" => map! { "bar" => 5 } });
    assert_eq!(get(&data, "foo.bar", Value::Null).unwrap(), Value::Int(5));
    assert_eq!(get(&data, "foo.bar.baz", "D").unwrap(), Value::from("D"));
    assert_eq!(get(&data, "missing", 7).unwrap(), Value::Int(7));
}

#[test]
fn test_get_deep_dotted_path() {
    let data = Value::from(config_tree());
    assert_eq!(
        get(&data, "options.windowsDrive", Value::Null).unwrap(),
        Value::from("C:")
    );
    assert_eq!(
        get(&data, "features.1", Value::Null).unwrap(),
        Value::from("filter")
    );
}

#[test]
fn test_get_dynamic_selector_receives_container_and_default() {
    let data = Value::from(map! { "a" => 1, "b" => 2 });
    let sum = Selector::dynamic(|container, default| {
        let Some(map) = container.as_map() else {
            return default.clone();
        };
        let total: i64 = map.values().filter_map(Value::as_int).sum();
        Value::Int(total)
    });
    assert_eq!(get(&data, sum, Value::Null).unwrap(), Value::Int(3));

    let fallback = Selector::dynamic(|_, default| default.clone());
    assert_eq!(get(&data, fallback, "D").unwrap(), Value::from("D"));
}

#[test]
fn test_get_sequence_selector_resolves_stepwise() {
    let data = Value::from(map! { "outer" => map! { "in.ner" => 42 } });
    let sel = Selector::Seq(vec![
        Selector::Key(Key::from("outer")),
        Selector::Key(Key::Str("in.ner".into())),
    ]);
    assert_eq!(get(&data, sel, Value::Null).unwrap(), Value::Int(42));
}

#[test]
fn test_get_foreign_declared_field() {
    let record = CheckedRecord::new([("name", Value::from("alpha"))]);
    let data = Value::from(map! { "rec" => Value::Foreign(record) });
    assert_eq!(
        get(&data, "rec.name", Value::Null).unwrap(),
        Value::from("alpha")
    );
}

#[test]
fn test_get_foreign_dynamic_failure_swallowed_with_existence_check() {
    // CheckedRecord supports `contains`, so the failed dynamic read on a
    // missing field degrades to the default.
    let record = CheckedRecord::new([("name", Value::from("alpha"))]);
    let data = Value::Foreign(record);
    assert_eq!(get(&data, "missing", "D").unwrap(), Value::from("D"));
}

#[test]
fn test_get_foreign_dynamic_failure_propagates_without_existence_check() {
    let data = Value::Foreign(Arc::new(SealedRecord {
        name: "alpha".to_string(),
    }));
    assert_eq!(get(&data, "name", Value::Null).unwrap(), Value::from("alpha"));
    let err = get(&data, "missing", "D").unwrap_err();
    assert!(err.is_field_access());
}

#[test]
fn test_set_builds_path() {
    let mut target = Value::Map(Map::new());
    set(&mut target, Some(&"a.b.c".into()), 5).unwrap();
    assert_eq!(
        target,
        Value::from(map! { "a" => map! { "b" => map! { "c" => 5 } } })
    );
}

#[test]
fn test_set_wraps_non_map_intermediate() {
    let mut target = Value::from(map! { "a" => "x" });
    set(&mut target, Some(&"a.b".into()), 1).unwrap();
    assert_eq!(
        get(&target, "a.0", Value::Null).unwrap(),
        Value::from("x")
    );
    assert_eq!(get(&target, "a.b", Value::Null).unwrap(), Value::Int(1));
}

#[test]
fn test_set_then_get_round_trip() {
    let mut target = Value::from(config_tree());
    set(&mut target, Some(&"options.unixSeparator".into()), ":").unwrap();
    assert_eq!(
        get(&target, "options.unixSeparator", Value::Null).unwrap(),
        Value::from(":")
    );
    // Untouched siblings survive.
    assert_eq!(
        get(&target, "options.windowsDrive", Value::Null).unwrap(),
        Value::from("C:")
    );
}

#[test]
fn test_remove_preserves_order() {
    let mut data = Value::from(map! { "a" => 1, "b" => 2, "c" => 3 });
    assert_eq!(remove(&mut data, &Key::from("b"), Value::Null), Value::Int(2));
    let keys: Vec<String> = data
        .as_map()
        .unwrap()
        .keys()
        .map(ToString::to_string)
        .collect();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn test_remove_value_returns_removed_entries() {
    let mut data = Value::from(list!["a", "b", "a"]);
    let removed = remove_value(&mut data, &Value::from("a"));
    assert_eq!(removed, map! { 0 => "a", 2 => "a" });
    assert_eq!(data, Value::from(map! { 1 => "b" }));
}

#[test]
fn test_key_exists_case_modes() {
    let data = Value::from(map! { "Version" => Value::Null });
    assert!(key_exists(&Key::from("Version"), &data, true).unwrap());
    assert!(!key_exists(&Key::from("version"), &data, true).unwrap());
    assert!(key_exists(&Key::from("version"), &data, false).unwrap());
}

#[test]
fn test_key_exists_case_insensitive_requires_enumeration() {
    let data = Value::Foreign(Arc::new(SealedRecord {
        name: "x".to_string(),
    }));
    let err = key_exists(&Key::from("name"), &data, false).unwrap_err();
    assert!(err.is_invalid_argument());
}
