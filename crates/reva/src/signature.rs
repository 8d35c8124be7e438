//! Method signatures, parameter descriptors, and visibility
//!
//! There is no runtime reflection to lean on, so every callable declares
//! its formal parameters up front: a [`Signature`] is the ordered list of
//! [`Param`] descriptors the binder walks when turning named arguments into
//! a positional argument vector.

use std::fmt;

use crate::error::CallError;
use crate::object::Object;
use crate::value::Value;

/// Visibility modifier for class methods
///
/// | Modifier | Same Class | Subclass | Other Classes |
/// |----------|------------|----------|---------------|
/// | Private  | ✅         | ❌        | ❌             |
/// | Protected| ✅         | ✅        | ❌             |
/// | Public   | ✅         | ✅        | ✅             |
///
/// The protected row is evaluated against the target object, not the
/// declaring class: the call passes only if the target is an instance of
/// the calling context's class. See [`crate::invoke::invoke_method`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Private - only callable when the caller is the declaring class itself
    Private,
    /// Protected - callable when the target is an instance of the caller's class
    Protected,
    /// Public - callable from anywhere (default)
    #[default]
    Public,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Private => write!(f, "private"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Public => write!(f, "public"),
        }
    }
}

/// One formal parameter of a method or closure signature
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name
    pub name: String,
    /// Position in declaration order
    pub index: usize,
    /// Declared default value (None means the parameter has no default)
    pub default: Option<Value>,
}

/// Ordered formal-parameter list of a callable
///
/// Built with the builder methods; parameter names must be unique within
/// one signature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    /// Create an empty signature
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Append a required parameter (no default)
    pub fn param(mut self, name: &str) -> Self {
        let index = self.params.len();
        self.params.push(Param {
            name: name.to_string(),
            index,
            default: None,
        });
        self
    }

    /// Append a parameter with a declared default value
    pub fn param_with_default(mut self, name: &str, default: Value) -> Self {
        let index = self.params.len();
        self.params.push(Param {
            name: name.to_string(),
            index,
            default: Some(default),
        });
        self
    }

    /// Parameter descriptors in declaration order
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of formal parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the signature has no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Function type stored as a method body
///
/// The body receives the target object and the bound positional arguments,
/// already resolved by the binder. This is an unchecked call primitive: the
/// invoker performs the visibility check before dispatching here, and no
/// further enforcement happens at this level.
pub type MethodFn = fn(&mut Object, &[Value]) -> Result<Value, CallError>;

/// A method declaration: name, visibility, signature, and body
#[derive(Debug, Clone)]
pub struct Method {
    /// Method name (unique within its declaring class)
    pub name: String,
    /// Visibility modifier
    pub visibility: Visibility,
    /// Formal-parameter list
    pub signature: Signature,
    /// Method body
    pub body: MethodFn,
}

impl Method {
    /// Create a method declaration
    pub fn new(name: &str, visibility: Visibility, signature: Signature, body: MethodFn) -> Self {
        Self {
            name: name.to_string(),
            visibility,
            signature,
            body,
        }
    }
}
