//! Multi-key sorting and recursive canonicalization.

use nestkit::{
    Key, Map, Selector, Value,
    sort::{Direction, Mode, multisort, recursive_sort},
    list, map,
};

fn people() -> Map {
    list![
        map! { "age" => 30, "name" => "Alexander" },
        map! { "age" => 30, "name" => "Brian" },
        map! { "age" => 19, "name" => "Barney" },
    ]
}

fn column(elements: &Map, field: &str) -> Vec<Value> {
    elements
        .values()
        .filter_map(Value::as_map)
        .filter_map(|m| m.get(&Key::from(field)))
        .cloned()
        .collect()
}

#[test]
fn test_age_asc_name_desc() {
    let mut data = people();
    multisort(
        &mut data,
        &["age".into(), "name".into()],
        &[Direction::Asc, Direction::Desc],
        &[Mode::Regular],
    )
    .unwrap();
    assert_eq!(
        column(&data, "name"),
        vec![
            Value::from("Barney"),
            Value::from("Brian"),
            Value::from("Alexander")
        ]
    );
}

#[test]
fn test_original_order_kept_on_ties() {
    let mut data = people();
    multisort(
        &mut data,
        &["age".into()],
        &[Direction::Asc],
        &[Mode::Regular],
    )
    .unwrap();
    assert_eq!(
        column(&data, "name"),
        vec![
            Value::from("Barney"),
            Value::from("Alexander"),
            Value::from("Brian")
        ]
    );
}

#[test]
fn test_result_is_reindexed() {
    let mut data = map! {
        "a" => map! { "n" => 2 },
        "b" => map! { "n" => 1 },
    };
    multisort(&mut data, &["n".into()], &[Direction::Asc], &[Mode::Regular]).unwrap();
    assert!(data.is_list());
    assert_eq!(column(&data, "n"), vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn test_direction_broadcast() {
    let mut data = people();
    multisort(
        &mut data,
        &["age".into(), "name".into()],
        &[Direction::Desc],
        &[Mode::Regular],
    )
    .unwrap();
    assert_eq!(
        column(&data, "name"),
        vec![
            Value::from("Brian"),
            Value::from("Alexander"),
            Value::from("Barney")
        ]
    );
}

#[test]
fn test_mismatched_modes_error() {
    let mut data = people();
    let err = multisort(
        &mut data,
        &["age".into()],
        &[Direction::Asc],
        &[Mode::Regular, Mode::Numeric],
    )
    .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_dynamic_key_spec() {
    // Sort by name length, a value no static path can reach.
    let mut data = people();
    let by_len = Selector::dynamic(|element, _| {
        element
            .as_map()
            .and_then(|m| m.get(&Key::from("name")))
            .and_then(Value::as_text)
            .map(|s| Value::Int(s.len() as i64))
            .unwrap_or(Value::Null)
    });
    multisort(&mut data, &[by_len], &[Direction::Asc], &[Mode::Regular]).unwrap();
    assert_eq!(
        column(&data, "name"),
        vec![
            Value::from("Brian"),
            Value::from("Barney"),
            Value::from("Alexander")
        ]
    );
}

#[test]
fn test_case_insensitive_mode() {
    let mut data = list![
        map! { "v" => "beta" },
        map! { "v" => "Alpha" },
        map! { "v" => "gamma" },
    ];
    multisort(
        &mut data,
        &["v".into()],
        &[Direction::Asc],
        &[Mode::CaseInsensitive],
    )
    .unwrap();
    assert_eq!(
        column(&data, "v"),
        vec![
            Value::from("Alpha"),
            Value::from("beta"),
            Value::from("gamma")
        ]
    );
}

#[test]
fn test_recursive_sort_canonicalizes_nested_tree() {
    let mut data = Value::from(map! {
        "fruits" => list!["lemon", "orange", "banana", "apple"],
        "counts" => map! { "b" => 2, "a" => 1 },
    });
    recursive_sort(&mut data, None);
    assert_eq!(
        data,
        Value::from(map! {
            "counts" => map! { "a" => 1, "b" => 2 },
            "fruits" => list!["apple", "banana", "lemon", "orange"],
        })
    );
}

#[test]
fn test_recursive_sort_idempotent() {
    let mut data = Value::from(list![3, 1, 2]);
    recursive_sort(&mut data, None);
    let once = data.clone();
    recursive_sort(&mut data, None);
    assert_eq!(data, once);
    assert_eq!(data, Value::from(list![1, 2, 3]));
}
