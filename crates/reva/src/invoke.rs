//! Named-argument invocation with visibility enforcement
//!
//! The two entry points of the library. [`invoke_method`] runs three
//! sequential gates — existence, accessibility, bind-and-call — and each
//! failure aborts before the later phases, so no user code runs unless the
//! call was authorized. [`invoke_closure`] is the same bind-and-call tail
//! with no gates, since closures carry no declaring class.

use crate::bind::{bind_arguments, NamedArgs};
use crate::error::{InvokeError, InvokeResult};
use crate::object::{Closure, Object};
use crate::registry::ClassRegistry;
use crate::signature::Visibility;
use crate::value::Value;

/// Invoke a method on an object, binding arguments by parameter name
///
/// `caller` is the class id of the calling context and decides whether
/// non-public methods are accessible:
///
/// - public methods are always accessible;
/// - a protected method is accessible only if the target object is an
///   instance of the caller's class (same class or a subclass of it) — the
///   test runs in that direction only, never the reverse;
/// - a private method is accessible only if the caller is exactly the class
///   that declared it, even when the two are related by inheritance.
///
/// On success the method body is called with the bound arguments and its
/// result is returned unchanged; an error raised by the body propagates
/// unmodified.
pub fn invoke_method(
    registry: &ClassRegistry,
    object: &mut Object,
    method: &str,
    args: &NamedArgs,
    caller: usize,
) -> InvokeResult<Value> {
    let class = registry
        .get_class(object.class_id)
        .ok_or(InvokeError::UnknownClass {
            class_id: object.class_id,
        })?;

    let Some((declaring_id, decl)) = registry.resolve_method(object.class_id, method) else {
        return Err(InvokeError::MethodNotDefined {
            class: class.name.clone(),
            method: method.to_string(),
        });
    };

    let accessible = match decl.visibility {
        Visibility::Public => true,
        // One-directional on purpose: the target must be an instance of the
        // caller's class. A caller holding a superclass-typed or sibling
        // target is rejected.
        Visibility::Protected => registry.is_subclass_of(object.class_id, caller),
        Visibility::Private => declaring_id == caller,
    };
    if !accessible {
        return Err(InvokeError::MethodNotAccessible {
            class: class.name.clone(),
            method: method.to_string(),
            visibility: decl.visibility,
        });
    }

    let bound = bind_arguments(&decl.signature, args);
    let body = decl.body;
    Ok(body(object, &bound)?)
}

/// Invoke a standalone closure, binding arguments by parameter name
///
/// No existence or visibility gates apply. The closure's result is returned
/// unchanged; an error raised by the body propagates unmodified.
pub fn invoke_closure(closure: &Closure, args: &NamedArgs) -> InvokeResult<Value> {
    let bound = bind_arguments(closure.signature(), args);
    Ok(closure.call(&bound)?)
}
