//! Object model and class metadata
//!
//! Classes are registered explicitly with their methods and field layout;
//! objects are instances carrying a class id and field values. A closure is
//! a standalone callable with a signature but no declaring class.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::error::{CallError, FieldError};
use crate::signature::{Method, Signature};
use crate::value::Value;

/// Class definition metadata
#[derive(Debug, Clone)]
pub struct Class {
    /// Class ID (index into the registry)
    pub id: usize,
    /// Class name
    pub name: String,
    /// Parent class ID (None for root classes)
    pub parent_id: Option<usize>,
    /// Number of instance fields (including inherited)
    pub field_count: usize,
    /// Methods declared directly on this class, by name
    methods: FxHashMap<String, Method>,
}

impl Class {
    /// Create a new root class
    pub fn new(id: usize, name: String, field_count: usize) -> Self {
        Self {
            id,
            name,
            parent_id: None,
            field_count,
            methods: FxHashMap::default(),
        }
    }

    /// Create a new class with a parent
    pub fn with_parent(id: usize, name: String, field_count: usize, parent_id: usize) -> Self {
        Self {
            id,
            name,
            parent_id: Some(parent_id),
            field_count,
            methods: FxHashMap::default(),
        }
    }

    /// Declare a method on this class
    ///
    /// A method with the same name as one on an ancestor overrides it for
    /// instances of this class and its subclasses.
    pub fn add_method(&mut self, method: Method) {
        self.methods.insert(method.name.clone(), method);
    }

    /// Get a method declared directly on this class (ancestors not searched)
    pub fn get_method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    /// Number of methods declared directly on this class
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

/// Object instance
#[derive(Debug, Clone)]
pub struct Object {
    /// Class ID (index into the class registry)
    pub class_id: usize,
    /// Field values
    pub fields: Vec<Value>,
}

impl Object {
    /// Create a new object with null-initialized fields
    pub fn new(class_id: usize, field_count: usize) -> Self {
        Self {
            class_id,
            fields: vec![Value::Null; field_count],
        }
    }

    /// Get a field value by index
    pub fn get_field(&self, index: usize) -> Option<Value> {
        self.fields.get(index).cloned()
    }

    /// Set a field value by index
    pub fn set_field(&mut self, index: usize, value: Value) -> Result<(), FieldError> {
        if index < self.fields.len() {
            self.fields[index] = value;
            Ok(())
        } else {
            Err(FieldError {
                index,
                len: self.fields.len(),
            })
        }
    }

    /// Get number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Standalone callable: a signature plus a captured body
///
/// Closures carry no declaring class, so no visibility concept applies to
/// them; invocation only binds named arguments against the signature and
/// calls the body.
pub struct Closure {
    /// Formal-parameter list
    signature: Signature,
    /// Captured body
    body: Box<dyn Fn(&[Value]) -> Result<Value, CallError>>,
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.signature.len())
            .finish()
    }
}

impl Closure {
    /// Create a closure from a signature and a body
    pub fn new(
        signature: Signature,
        body: impl Fn(&[Value]) -> Result<Value, CallError> + 'static,
    ) -> Self {
        Self {
            signature,
            body: Box::new(body),
        }
    }

    /// The closure's formal-parameter list
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Call the body with already-bound positional arguments
    pub(crate) fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        (self.body)(args)
    }
}
