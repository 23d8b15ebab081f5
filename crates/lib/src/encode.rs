//! Recursive string transforms over container leaves, driven by an injected
//! entity codec.
//!
//! The engine owns only the traversal: which strings get transformed, and in
//! what order. What "encoding" means is the codec collaborator's business.

use crate::value::{Key, Map, Value};

/// HTML-entity encode/decode collaborator.
pub trait EntityCodec {
    fn encode(&self, raw: &str) -> String;
    fn decode(&self, encoded: &str) -> String;
}

/// Returns a copy of `data` with every text value encoded. With
/// `values_only == false`, string keys are encoded too. Nested maps recurse;
/// non-text leaves are copied unchanged.
pub fn html_encode(data: &Map, codec: &dyn EntityCodec, values_only: bool) -> Map {
    transform(data, values_only, &|s| codec.encode(s))
}

/// The inverse traversal of [`html_encode`], decoding entities back.
pub fn html_decode(data: &Map, codec: &dyn EntityCodec, values_only: bool) -> Map {
    transform(data, values_only, &|s| codec.decode(s))
}

fn transform(data: &Map, values_only: bool, f: &dyn Fn(&str) -> String) -> Map {
    let mut result = Map::new();
    for (key, value) in data.iter() {
        let key = match key {
            Key::Str(s) if !values_only => Key::Str(f(s)),
            other => other.clone(),
        };
        let value = match value {
            Value::Text(s) => Value::Text(f(s)),
            Value::Map(map) => Value::Map(transform(map, values_only, f)),
            other => other.clone(),
        };
        result.insert(key, value);
    }
    result
}
