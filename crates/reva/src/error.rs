//! Error types for dynamic invocation
//!
//! Invocation failures are deterministic caller errors, not transient
//! conditions: either the requested method does not exist, or the calling
//! context does not satisfy the method's visibility. Anything raised by the
//! invoked body itself passes through unmodified as a [`CallError`].

use crate::signature::Visibility;
use thiserror::Error;

/// Result type for invocations
pub type InvokeResult<T> = Result<T, InvokeError>;

/// Errors produced by the invocation gates
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvokeError {
    /// Requested method does not exist on the target's class or any ancestor
    #[error("Method not defined: {class}::{method}")]
    MethodNotDefined {
        /// Runtime class name of the target object
        class: String,
        /// Requested method name
        method: String,
    },

    /// Method exists but the calling context does not satisfy its visibility
    #[error("Method not accessible: {class}::{method} ({visibility})")]
    MethodNotAccessible {
        /// Runtime class name of the target object
        class: String,
        /// Requested method name
        method: String,
        /// Visibility level that blocked the call
        visibility: Visibility,
    },

    /// Target object's class id is not present in the registry
    #[error("Unknown class id: {class_id}")]
    UnknownClass {
        /// The unregistered class id
        class_id: usize,
    },

    /// Failure raised by the invoked body, propagated unmodified
    #[error(transparent)]
    Call(#[from] CallError),
}

/// Error raised by a method or closure body
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct CallError(pub String);

impl From<String> for CallError {
    fn from(s: String) -> Self {
        CallError(s)
    }
}

impl From<&str> for CallError {
    fn from(s: &str) -> Self {
        CallError(s.to_string())
    }
}

/// Out-of-bounds object field access
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Field index {index} out of bounds (object has {len} fields)")]
pub struct FieldError {
    /// Requested field index
    pub index: usize,
    /// Number of fields the object actually has
    pub len: usize,
}
