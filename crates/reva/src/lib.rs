//! Reva Dynamic Object Model
//!
//! This crate provides dynamic, named-argument invocation over an
//! explicitly registered class model:
//! - **Values**: dynamically typed argument/result representation (`value` module)
//! - **Object model**: classes, instances, and closures (`object` module)
//! - **Registry**: class lookup, inheritance, and method resolution (`registry` module)
//! - **Binding**: name→position argument binding with defaults (`bind` module)
//! - **Invocation**: the method and closure call gates (`invoke` module)
//!
//! Methods are called by name with a map of named arguments; the binder
//! resolves each formal parameter to the supplied value, its declared
//! default, or null, and the invoker enforces method visibility against an
//! explicit calling-context class before any user code runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use reva::{
//!     invoke_method, Class, ClassRegistry, Method, NamedArgs, Object, Signature, Value,
//!     Visibility,
//! };
//!
//! let mut registry = ClassRegistry::new();
//! let mut greeter = Class::new(0, "Greeter".to_string(), 0);
//! greeter.add_method(Method::new(
//!     "greet",
//!     Visibility::Public,
//!     Signature::new()
//!         .param("name")
//!         .param_with_default("greeting", Value::str("Hello")),
//!     |_obj, args| Ok(Value::str(format!("{}, {}", args[1], args[0]))),
//! ));
//! let greeter_id = registry.register_class(greeter);
//!
//! let mut obj = Object::new(greeter_id, 0);
//! let args = NamedArgs::new().with("name", Value::str("Ada"));
//! let result = invoke_method(&registry, &mut obj, "greet", &args, greeter_id);
//! assert_eq!(result.unwrap(), Value::str("Hello, Ada"));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bind;
pub mod error;
pub mod invoke;
pub mod object;
pub mod registry;
pub mod signature;
pub mod value;

pub use bind::{bind_arguments, NamedArgs};
pub use error::{CallError, FieldError, InvokeError, InvokeResult};
pub use invoke::{invoke_closure, invoke_method};
pub use object::{Class, Closure, Object};
pub use registry::ClassRegistry;
pub use signature::{Method, MethodFn, Param, Signature, Visibility};
pub use value::Value;
