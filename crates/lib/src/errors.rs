//! Error types for container operations.
//!
//! Absence is not exceptional in this crate: unresolved lookups degrade to a
//! caller-supplied default. The variants here cover the few cases that are
//! genuine contract violations.

use thiserror::Error;

/// Structured error type for container operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ContainerError {
    /// An argument violated the operation's contract, e.g. a case-insensitive
    /// key scan over a container without ordered enumeration, a non-traversable
    /// haystack, or mismatched multisort parameter lengths.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A dynamic field read on a foreign object failed and the object exposes
    /// no existence-check capability, so the failure propagates.
    #[error("cannot read field '{field}' on '{type_name}'")]
    FieldAccess { field: String, type_name: String },
}

impl ContainerError {
    /// Shorthand constructor for [`ContainerError::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        ContainerError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if this error is an argument-contract violation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ContainerError::InvalidArgument { .. })
    }

    /// Check if this error is a propagated foreign field-access failure.
    pub fn is_field_access(&self) -> bool {
        matches!(self, ContainerError::FieldAccess { .. })
    }
}

// Conversion from ContainerError to the main Error type
impl From<ContainerError> for crate::Error {
    fn from(err: ContainerError) -> Self {
        crate::Error::Container(err)
    }
}
