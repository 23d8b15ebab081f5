//! Capability surface for foreign (non-container) objects.
//!
//! Containers sometimes hold values the engine does not own: typed records,
//! adapter objects, dates. [`Foreign`] describes such objects purely through
//! capabilities; every capability except the declared-field read is optional,
//! and the accessors/predicates degrade or fail fast depending on which
//! capabilities an object actually has.

use chrono::{DateTime, Utc};

use super::{Key, Map, Value};
use crate::errors::ContainerError;

/// A foreign object held inside a [`Value`].
///
/// The accessor reads declared fields through [`Foreign::field`]; the
/// remaining methods are optional capabilities:
///
/// - [`Foreign::field_dyn`] — a dynamic-property mechanism tried as a last
///   resort; its failure propagates unless [`Foreign::contains`] is supported.
/// - [`Foreign::contains`] — an indexed existence check. `None` means the
///   object has no such capability.
/// - [`Foreign::entries`] — ordered forward enumeration of key/value pairs.
/// - [`Foreign::to_container`] — self-describing container conversion, used
///   by the reflector.
/// - [`Foreign::datetime_fields`] — date/time field-map representation,
///   checked by the reflector before any per-type field specification.
pub trait Foreign: std::fmt::Debug + Send + Sync {
    /// Concrete type identifier, used as the reflector registry key.
    fn type_name(&self) -> &'static str;

    /// Reads a declared named field, if the object has one by that key.
    fn field(&self, key: &Key) -> Option<Value>;

    /// Dynamic-property read. The default has no such mechanism and fails.
    fn field_dyn(&self, key: &Key) -> Result<Value, ContainerError> {
        Err(ContainerError::FieldAccess {
            field: key.to_string(),
            type_name: self.type_name().to_string(),
        })
    }

    /// Indexed existence check capability.
    fn contains(&self, _key: &Key) -> Option<bool> {
        None
    }

    /// Ordered key/value enumeration capability.
    fn entries(&self) -> Option<Vec<(Key, Value)>> {
        None
    }

    /// Self-describing conversion into a container.
    fn to_container(&self) -> Option<Value> {
        None
    }

    /// Date/time field-map representation, if this object is date-like.
    fn datetime_fields(&self) -> Option<Map> {
        None
    }
}

/// UTC timestamps convert to the conventional field map:
/// `{date, timezone_type, timezone}`.
impl Foreign for DateTime<Utc> {
    fn type_name(&self) -> &'static str {
        "DateTime"
    }

    fn field(&self, key: &Key) -> Option<Value> {
        match key.as_str()? {
            "date" => Some(Value::Text(
                self.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
            )),
            "timezone_type" => Some(Value::Int(3)),
            "timezone" => Some(Value::Text("UTC".to_string())),
            _ => None,
        }
    }

    fn entries(&self) -> Option<Vec<(Key, Value)>> {
        Some(
            ["date", "timezone_type", "timezone"]
                .into_iter()
                .map(|name| {
                    let key = Key::Str(name.to_string());
                    let value = self.field(&key).unwrap_or(Value::Null);
                    (key, value)
                })
                .collect(),
        )
    }

    fn datetime_fields(&self) -> Option<Map> {
        Some(self.entries()?.into_iter().collect())
    }
}
