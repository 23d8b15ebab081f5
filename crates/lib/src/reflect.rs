//! Reflection of foreign objects into containers.
//!
//! `to_container` normalizes anything into a map, in priority order: maps
//! recurse elementwise, date/time-like objects become their field-map form,
//! a registered per-type field specification wins next, then an object's own
//! self-describing conversion capability, and finally plain field
//! enumeration. Scalars wrap into a single-element list.

use std::collections::HashMap;

use crate::{
    Result,
    access::get,
    path::Selector,
    value::{Key, Map, Value},
};

/// One entry of a per-type field specification.
#[derive(Clone)]
pub enum FieldRule {
    /// Copy the declared field of this name.
    Field(String),
    /// Store the result of resolving `selector` against the object under
    /// `key`. The selector may be a dotted path or a closure, so derived
    /// fields are expressible.
    Computed { key: String, selector: Selector },
}

impl FieldRule {
    /// Shorthand for a computed rule.
    pub fn computed(key: impl Into<String>, selector: impl Into<Selector>) -> Self {
        FieldRule::Computed {
            key: key.into(),
            selector: selector.into(),
        }
    }
}

/// Per-type field specifications, keyed by [`crate::Foreign::type_name`].
#[derive(Default)]
pub struct SpecRegistry {
    specs: HashMap<String, Vec<FieldRule>>,
}

impl SpecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the specification for one type.
    pub fn register(mut self, type_name: impl Into<String>, rules: Vec<FieldRule>) -> Self {
        self.specs.insert(type_name.into(), rules);
        self
    }

    pub fn rules_for(&self, type_name: &str) -> Option<&[FieldRule]> {
        self.specs.get(type_name).map(Vec::as_slice)
    }
}

/// Converts `value` into a container form.
///
/// With `recursive`, converted results are normalized again through this
/// same process, so nested foreign objects flatten all the way down.
///
/// # Errors
/// Propagates accessor errors from computed field rules (see
/// [`crate::access::get`]).
pub fn to_container(value: &Value, registry: &SpecRegistry, recursive: bool) -> Result<Value> {
    match value {
        Value::Map(map) => {
            if !recursive {
                return Ok(value.clone());
            }
            let mut result = Map::new();
            for (key, child) in map.iter() {
                let converted = match child {
                    Value::Map(_) | Value::Foreign(_) => to_container(child, registry, true)?,
                    leaf => leaf.clone(),
                };
                result.insert(key.clone(), converted);
            }
            Ok(Value::Map(result))
        }
        Value::Foreign(obj) => {
            if let Some(fields) = obj.datetime_fields() {
                return Ok(Value::Map(fields));
            }
            if let Some(rules) = registry.rules_for(obj.type_name()) {
                let mut result = Map::new();
                for rule in rules {
                    match rule {
                        FieldRule::Field(name) => {
                            let key = Key::parse(name);
                            let field = obj.field(&key).unwrap_or(Value::Null);
                            result.insert(key, field);
                        }
                        FieldRule::Computed { key, selector } => {
                            let derived = get(value, selector, Value::Null)?;
                            result.insert(Key::parse(key), derived);
                        }
                    }
                }
                return renormalize(Value::Map(result), registry, recursive);
            }
            if let Some(converted) = obj.to_container() {
                return renormalize(converted, registry, recursive);
            }
            let entries = obj.entries().unwrap_or_default();
            renormalize(Value::Map(entries.into_iter().collect()), registry, recursive)
        }
        leaf => {
            let mut wrapped = Map::new();
            wrapped.push(leaf.clone());
            Ok(Value::Map(wrapped))
        }
    }
}

fn renormalize(value: Value, registry: &SpecRegistry, recursive: bool) -> Result<Value> {
    if recursive {
        to_container(&value, registry, true)
    } else {
        Ok(value)
    }
}
