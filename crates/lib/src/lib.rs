//!
//! Nestkit: a toolkit for reading, writing, merging, reshaping and ordering
//! deeply nested, dynamically-shaped containers.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: The dynamic value type. A tree of nulls,
//!   booleans, numbers, text, maps and foreign objects, plus the two merge
//!   sentinels (`Replace`, `Unset`).
//! * **Maps (`value::Map`)**: The single container kind. An insertion-ordered
//!   map with mixed integer and string keys; "list" is a derived property
//!   (consecutive integer keys from 0), not a separate type.
//! * **Selectors (`path::Selector`)**: Polymorphic keys for addressing nested
//!   locations: dotted strings, explicit segment sequences, or closures for
//!   data-dependent resolution.
//! * **Accessors (`access`)**: `get`/`set`/`remove` with best-effort
//!   semantics; unresolved lookups degrade to a caller-supplied default.
//! * **Merge (`merge`)**: Recursive deep merge with sentinel overrides and
//!   concatenative integer keys.
//! * **Reshaping (`index`, `filter`, `sort`)**: Indexing/grouping/column
//!   extraction, selective projection by dotted paths, the multi-key stable
//!   sorter and the recursive canonicalizer.
//! * **Foreign objects (`value::Foreign`)**: A capability trait for values
//!   the engine does not own; the reflector (`reflect`) normalizes them into
//!   containers via per-type field specifications.

pub mod access;
pub mod encode;
pub mod errors;
pub mod filter;
pub mod index;
pub mod merge;
pub mod path;
pub mod reflect;
pub mod shape;
pub mod sort;
pub mod value;

pub use errors::ContainerError;
pub use path::{DynSelector, Selector, split_segments};
pub use value::{Foreign, Key, Map, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Structured container-operation errors.
    #[error(transparent)]
    Container(ContainerError),
}

impl Error {
    /// Check if this error is an argument-contract violation.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Container(err) => err.is_invalid_argument(),
        }
    }

    /// Check if this error is a propagated foreign field-access failure.
    pub fn is_field_access(&self) -> bool {
        match self {
            Error::Container(err) => err.is_field_access(),
        }
    }
}
