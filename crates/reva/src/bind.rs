//! Named-argument binding
//!
//! The binder turns a signature plus a name→value mapping into the ordered
//! positional argument vector the call primitive expects. Resolution per
//! parameter, in declaration order: the named value if supplied, else the
//! declared default, else [`Value::Null`]. Names that match no formal
//! parameter are dropped without error.

use rustc_hash::FxHashMap;

use crate::signature::Signature;
use crate::value::Value;

/// Named arguments for an invocation: parameter name → value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedArgs {
    /// Internal map storage
    inner: FxHashMap<String, Value>,
}

impl NamedArgs {
    /// Create an empty argument map
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }

    /// Add a named argument, builder style
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.inner.insert(name.to_string(), value);
        self
    }

    /// Set a named argument
    pub fn set(&mut self, name: &str, value: Value) {
        self.inner.insert(name.to_string(), value);
    }

    /// Get an argument by parameter name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inner.get(name)
    }

    /// Check if a parameter name is present
    pub fn has(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Number of named arguments
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Bind named arguments to a signature, producing the positional argument
/// vector for the call
///
/// The output always has exactly `signature.len()` entries, in declaration
/// order. Pure function: neither input is modified.
pub fn bind_arguments(signature: &Signature, args: &NamedArgs) -> Vec<Value> {
    signature
        .params()
        .iter()
        .map(|param| match args.get(&param.name) {
            Some(value) => value.clone(),
            None => param.default.clone().unwrap_or(Value::Null),
        })
        .collect()
}
