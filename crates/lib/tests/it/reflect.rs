//! Reflection of foreign objects through registered field specifications.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use nestkit::{
    Key, Selector, Value,
    reflect::{FieldRule, SpecRegistry, to_container},
    list, map,
};

use crate::helpers::CheckedRecord;

#[test]
fn test_spec_with_renamed_and_computed_fields() {
    let record = CheckedRecord::new([
        ("id", Value::Int(123)),
        ("content", Value::from("hello world")),
    ]);
    let registry = SpecRegistry::new().register(
        "CheckedRecord",
        vec![
            FieldRule::Field("id".to_string()),
            FieldRule::computed("body", "content"),
            FieldRule::computed(
                "length",
                Selector::dynamic(|object, _| match object {
                    Value::Foreign(obj) => obj
                        .field(&Key::from("content"))
                        .and_then(|v| v.as_text().map(|s| Value::Int(s.len() as i64)))
                        .unwrap_or(Value::Null),
                    _ => Value::Null,
                }),
            ),
        ],
    );
    let converted = to_container(&Value::Foreign(record), &registry, true).unwrap();
    assert_eq!(
        converted,
        Value::from(map! { "id" => 123, "body" => "hello world", "length" => 11 })
    );
}

#[test]
fn test_enumeration_fallback() {
    let record = CheckedRecord::new([("a", Value::Int(1)), ("b", Value::Int(2))]);
    let converted = to_container(&Value::Foreign(record), &SpecRegistry::new(), true).unwrap();
    assert_eq!(converted, Value::from(map! { "a" => 1, "b" => 2 }));
}

#[test]
fn test_nested_objects_flatten_recursively() {
    let inner = CheckedRecord::new([("x", Value::Int(9))]);
    let outer = CheckedRecord::new([("inner", Value::Foreign(inner))]);
    let converted = to_container(&Value::Foreign(outer), &SpecRegistry::new(), true).unwrap();
    assert_eq!(
        converted,
        Value::from(map! { "inner" => map! { "x" => 9 } })
    );
}

#[test]
fn test_datetime_converts_to_field_map() {
    let dt = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 45).unwrap();
    let data = Value::from(map! { "created" => Value::Foreign(Arc::new(dt)) });
    let converted = to_container(&data, &SpecRegistry::new(), true).unwrap();
    assert_eq!(
        converted,
        Value::from(map! { "created" => map! {
            "date" => "2024-05-17 12:30:45.000000",
            "timezone_type" => 3,
            "timezone" => "UTC",
        } })
    );
}

#[test]
fn test_scalars_wrap_into_lists() {
    let registry = SpecRegistry::new();
    assert_eq!(
        to_container(&Value::from("solo"), &registry, true).unwrap(),
        Value::from(list!["solo"])
    );
    assert_eq!(
        to_container(&Value::Null, &registry, true).unwrap(),
        Value::from(list![Value::Null])
    );
}

#[test]
fn test_maps_pass_through() {
    let data = Value::from(map! { "a" => list![1, 2], "b" => "x" });
    let converted = to_container(&data, &SpecRegistry::new(), true).unwrap();
    assert_eq!(converted, data);
}
