//! Path specifications for addressing nested container locations.
//!
//! A [`Selector`] is the polymorphic key accepted by the accessor and the
//! grouping/sorting operations: a single key (possibly a dotted string), an
//! explicit segment sequence, or a dynamic closure computing a value from the
//! container itself.
//!
//! # Dotted keys vs. segment sequences
//!
//! A dotted string like `"a.b.c"` first tries the whole literal key, then
//! falls back to nested traversal. When a literal dotted key shadows a
//! nested entry at the same address, the nested entry is reachable only
//! through the sequence form, where each element is used verbatim:
//!
//! ```
//! use nestkit::{Selector, Key};
//!
//! // Literal "a.b.c" key first, nested a -> b -> c as fallback.
//! let dotted = Selector::from("a.b.c");
//!
//! // Always nested: a, then b, then c, no literal attempt.
//! let nested = Selector::Seq(vec![
//!     Selector::Key(Key::from("a")),
//!     Selector::Key(Key::from("b")),
//!     Selector::Key(Key::from("c")),
//! ]);
//! # let _ = (dotted, nested);
//! ```
//!
//! This ambiguity is inherent and documented, not resolved.

use std::{fmt, sync::Arc};

use crate::{
    errors::ContainerError,
    value::{Key, Value},
};

/// A dynamic field-extraction closure: `(container, default) -> value`.
pub type DynSelector = Arc<dyn Fn(&Value, &Value) -> Value + Send + Sync>;

/// A polymorphic path/key specification.
#[derive(Clone)]
pub enum Selector {
    /// A single key. String keys containing `.` are subject to the accessor's
    /// nested-traversal fallback.
    Key(Key),
    /// An ordered sequence of selectors, each resolved against the running
    /// result of the previous one.
    Seq(Vec<Selector>),
    /// A closure invoked with `(container, default)` in place of traversal.
    Dynamic(DynSelector),
}

impl Selector {
    /// Wraps a closure as a dynamic selector.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Value, &Value) -> Value + Send + Sync + 'static,
    {
        Selector::Dynamic(Arc::new(f))
    }

    /// Strict left-to-right segmentation, as used by `set` and `filter`.
    ///
    /// A single string key splits on every `.`; sequence elements are used
    /// verbatim as keys (this is how a literal dotted key is addressed).
    /// Dynamic selectors cannot be segmented.
    ///
    /// # Errors
    /// Returns [`ContainerError::InvalidArgument`] if the selector contains a
    /// closure or a nested sequence.
    pub fn segments(&self) -> Result<Vec<Key>, ContainerError> {
        match self {
            Selector::Key(Key::Str(s)) => Ok(split_segments(s)),
            Selector::Key(key) => Ok(vec![key.clone()]),
            Selector::Seq(parts) => parts
                .iter()
                .map(|part| match part {
                    Selector::Key(key) => Ok(key.clone()),
                    _ => Err(ContainerError::invalid_argument(
                        "segment sequences may only contain plain keys",
                    )),
                })
                .collect(),
            Selector::Dynamic(_) => Err(ContainerError::invalid_argument(
                "a dynamic selector has no path segments",
            )),
        }
    }
}

/// Splits a dotted path on every `.`, coercing canonical integer segments.
///
/// Empty segments are preserved (`"a..b"` addresses an empty-string key),
/// matching the strict segmentation rule rather than a normalizing one.
pub fn split_segments(path: &str) -> Vec<Key> {
    path.split('.').map(Key::parse).collect()
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Key(key) => write!(f, "Key({key:?})"),
            Selector::Seq(parts) => f.debug_list().entries(parts).finish(),
            Selector::Dynamic(_) => write!(f, "Dynamic(..)"),
        }
    }
}

impl From<Key> for Selector {
    fn from(key: Key) -> Self {
        Selector::Key(key)
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Selector::Key(Key::parse(s))
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        Selector::Key(Key::parse(&s))
    }
}

impl From<i64> for Selector {
    fn from(n: i64) -> Self {
        Selector::Key(Key::Int(n))
    }
}

impl From<Vec<Selector>> for Selector {
    fn from(parts: Vec<Selector>) -> Self {
        Selector::Seq(parts)
    }
}

impl From<&Selector> for Selector {
    fn from(selector: &Selector) -> Self {
        selector.clone()
    }
}
