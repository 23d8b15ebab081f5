//! Deep-merge semantics across realistic configuration layers.

use nestkit::{
    Map, Value,
    merge::{merge, merge_all},
    list, map,
};

#[test]
fn test_config_layering() {
    let defaults = map! {
        "version" => "1.0",
        "options" => map! { "port" => 80, "tls" => false },
        "ids" => list![1, 2],
    };
    let site = map! {
        "options" => map! { "tls" => true },
        "ids" => list![3],
    };
    let local = map! {
        "version" => "1.1",
        "options" => map! { "host" => "localhost" },
    };

    let merged = merge_all([&defaults, &site, &local]);
    assert_eq!(
        merged,
        map! {
            "version" => "1.1",
            "options" => map! { "port" => 80, "tls" => true, "host" => "localhost" },
            "ids" => list![1, 2, 3],
        }
    );
}

#[test]
fn test_left_fold_equivalence() {
    let a = map! { "x" => 1, "n" => map! { "a" => 1 } };
    let b = map! { "n" => map! { "b" => 2 }, "y" => 2 };
    let c = map! { "n" => map! { "a" => 9 } };
    assert_eq!(merge(&merge(&a, &b), &c), merge_all([&a, &b, &c]));
}

#[test]
fn test_replace_sentinel_swaps_subtree() {
    let base = map! { "options" => map! { "a" => 1, "b" => 2 } };
    let layer = map! {
        "options" => Value::Replace(Box::new(Value::from(map! { "c" => 3 }))),
    };
    assert_eq!(merge(&base, &layer), map! { "options" => map! { "c" => 3 } });
}

#[test]
fn test_unset_sentinel_removes_inherited_key() {
    let base = map! { "options" => map! { "debug" => true, "port" => 80 } };
    let layer = map! { "options" => map! { "debug" => Value::Unset } };
    assert_eq!(
        merge(&base, &layer),
        map! { "options" => map! { "port" => 80 } }
    );
}

#[test]
fn test_integer_keys_append_not_overwrite() {
    assert_eq!(
        merge(&map! { 0 => "a", 1 => "b" }, &map! { 0 => "x" }),
        map! { 0 => "a", 1 => "b", 2 => "x" }
    );
}

#[test]
fn test_scalar_overwrites_map_and_vice_versa() {
    assert_eq!(
        merge(&map! { "k" => map! { "a" => 1 } }, &map! { "k" => 5 }),
        map! { "k" => 5 }
    );
    assert_eq!(
        merge(&map! { "k" => 5 }, &map! { "k" => map! { "a" => 1 } }),
        map! { "k" => map! { "a" => 1 } }
    );
}

#[test]
fn test_merge_all_empty_and_single() {
    assert_eq!(merge_all(Vec::<&Map>::new()), map! {});
    let only = map! { "a" => 1 };
    assert_eq!(merge_all([&only]), only);
}
