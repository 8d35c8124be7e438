//! Tests for method visibility enforcement (private/protected/public)

use reva::{
    invoke_method, CallError, Class, ClassRegistry, InvokeError, Method, NamedArgs, Object,
    Signature, Value, Visibility,
};

const ACCOUNT: usize = 0;
const SAVINGS: usize = 1;
const AUDITOR: usize = 2;

/// Account (balance field) -> Savings; Auditor is unrelated.
fn bank_registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();

    let mut account = Class::new(ACCOUNT, "Account".to_string(), 1);
    account.add_method(Method::new(
        "deposit",
        Visibility::Public,
        Signature::new().param_with_default("amount", Value::int(0)),
        |obj, args| {
            let balance = obj.get_field(0).and_then(|v| v.as_int()).unwrap_or(0);
            let amount = args[0].as_int().unwrap_or(0);
            obj.set_field(0, Value::int(balance + amount))
                .map_err(|e| CallError::from(e.to_string()))?;
            Ok(Value::int(balance + amount))
        },
    ));
    account.add_method(Method::new(
        "adjust",
        Visibility::Protected,
        Signature::new().param("delta"),
        |obj, args| {
            let balance = obj.get_field(0).and_then(|v| v.as_int()).unwrap_or(0);
            let delta = args[0].as_int().unwrap_or(0);
            obj.set_field(0, Value::int(balance + delta))
                .map_err(|e| CallError::from(e.to_string()))?;
            Ok(Value::int(balance + delta))
        },
    ));
    account.add_method(Method::new(
        "wipe",
        Visibility::Private,
        Signature::new(),
        |obj, _args| {
            obj.set_field(0, Value::int(0))
                .map_err(|e| CallError::from(e.to_string()))?;
            Ok(Value::Null)
        },
    ));
    registry.register_class(account);

    let mut savings = Class::with_parent(SAVINGS, "Savings".to_string(), 1, ACCOUNT);
    savings.add_method(Method::new(
        "describe",
        Visibility::Public,
        Signature::new(),
        |_obj, _args| Ok(Value::str("savings")),
    ));
    registry.register_class(savings);

    registry.register_class(Class::new(AUDITOR, "Auditor".to_string(), 0));

    registry
}

// ============================================================================
// Public methods
// ============================================================================

#[test]
fn test_public_method_accessible_from_unrelated_caller() {
    let registry = bank_registry();
    let mut account = Object::new(ACCOUNT, 1);

    let result = invoke_method(
        &registry,
        &mut account,
        "deposit",
        &NamedArgs::new().with("amount", Value::int(50)),
        AUDITOR,
    );
    assert_eq!(result, Ok(Value::int(50)));
}

#[test]
fn test_public_method_inherited_by_subclass() {
    let registry = bank_registry();
    let mut savings = Object::new(SAVINGS, 1);

    let result = invoke_method(
        &registry,
        &mut savings,
        "deposit",
        &NamedArgs::new().with("amount", Value::int(5)),
        AUDITOR,
    );
    assert_eq!(result, Ok(Value::int(5)));
}

// ============================================================================
// Protected methods
// ============================================================================

#[test]
fn test_protected_method_accessible_from_same_class() {
    let registry = bank_registry();
    let mut account = Object::new(ACCOUNT, 1);

    let result = invoke_method(
        &registry,
        &mut account,
        "adjust",
        &NamedArgs::new().with("delta", Value::int(-3)),
        ACCOUNT,
    );
    assert_eq!(result, Ok(Value::int(-3)));
}

#[test]
fn test_protected_method_accessible_when_target_is_subclass_of_caller() {
    let registry = bank_registry();
    let mut savings = Object::new(SAVINGS, 1);

    // Savings is an instance of Account, the caller's class
    let result = invoke_method(
        &registry,
        &mut savings,
        "adjust",
        &NamedArgs::new().with("delta", Value::int(4)),
        ACCOUNT,
    );
    assert_eq!(result, Ok(Value::int(4)));
}

#[test]
fn test_protected_check_is_one_directional() {
    let registry = bank_registry();
    let mut account = Object::new(ACCOUNT, 1);

    // The caller's class (Savings) is a subclass of the target's class,
    // but an Account instance is not an instance of Savings: rejected.
    let result = invoke_method(
        &registry,
        &mut account,
        "adjust",
        &NamedArgs::new().with("delta", Value::int(4)),
        SAVINGS,
    );
    assert_eq!(
        result,
        Err(InvokeError::MethodNotAccessible {
            class: "Account".to_string(),
            method: "adjust".to_string(),
            visibility: Visibility::Protected,
        })
    );
}

#[test]
fn test_protected_method_rejected_for_unrelated_caller() {
    let registry = bank_registry();
    let mut account = Object::new(ACCOUNT, 1);
    account.set_field(0, Value::int(100)).unwrap();

    let result = invoke_method(
        &registry,
        &mut account,
        "adjust",
        &NamedArgs::new().with("delta", Value::int(-100)),
        AUDITOR,
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Method not accessible: Account::adjust (protected)"
    );
    // The gate fired before the body ran
    assert_eq!(account.get_field(0), Some(Value::int(100)));
}

// ============================================================================
// Private methods
// ============================================================================

#[test]
fn test_private_method_accessible_from_declaring_class() {
    let registry = bank_registry();
    let mut account = Object::new(ACCOUNT, 1);
    account.set_field(0, Value::int(100)).unwrap();

    let result = invoke_method(&registry, &mut account, "wipe", &NamedArgs::new(), ACCOUNT);
    assert_eq!(result, Ok(Value::Null));
    assert_eq!(account.get_field(0), Some(Value::int(0)));
}

#[test]
fn test_private_method_rejected_for_subclass_caller() {
    let registry = bank_registry();
    let mut savings = Object::new(SAVINGS, 1);

    // Inheritance does not help: the caller must be the declaring class
    let result = invoke_method(&registry, &mut savings, "wipe", &NamedArgs::new(), SAVINGS);
    assert_eq!(
        result,
        Err(InvokeError::MethodNotAccessible {
            class: "Savings".to_string(),
            method: "wipe".to_string(),
            visibility: Visibility::Private,
        })
    );
}

#[test]
fn test_private_method_rejected_for_unrelated_caller() {
    let registry = bank_registry();
    let mut account = Object::new(ACCOUNT, 1);

    let result = invoke_method(&registry, &mut account, "wipe", &NamedArgs::new(), AUDITOR);
    assert_eq!(
        result.unwrap_err().to_string(),
        "Method not accessible: Account::wipe (private)"
    );
}

#[test]
fn test_private_method_on_subclass_instance_from_declaring_class() {
    let registry = bank_registry();
    let mut savings = Object::new(SAVINGS, 1);
    savings.set_field(0, Value::int(10)).unwrap();

    // The declaring class itself may call its private method, even when the
    // target is a subclass instance that inherited it.
    let result = invoke_method(&registry, &mut savings, "wipe", &NamedArgs::new(), ACCOUNT);
    assert_eq!(result, Ok(Value::Null));
    assert_eq!(savings.get_field(0), Some(Value::int(0)));
}

// ============================================================================
// Gate ordering
// ============================================================================

#[test]
fn test_existence_gate_runs_before_visibility() {
    let registry = bank_registry();
    let mut account = Object::new(ACCOUNT, 1);

    // Unknown name from an unrelated caller: reported as not-defined, not
    // as not-accessible.
    let result = invoke_method(&registry, &mut account, "close", &NamedArgs::new(), AUDITOR);
    assert_eq!(
        result,
        Err(InvokeError::MethodNotDefined {
            class: "Account".to_string(),
            method: "close".to_string(),
        })
    );
}

#[test]
fn test_not_defined_names_runtime_class_of_target() {
    let registry = bank_registry();
    let mut savings = Object::new(SAVINGS, 1);

    let result = invoke_method(&registry, &mut savings, "close", &NamedArgs::new(), AUDITOR);
    assert_eq!(
        result.unwrap_err().to_string(),
        "Method not defined: Savings::close"
    );
}

// ============================================================================
// Method resolution
// ============================================================================

#[test]
fn test_subclass_method_not_visible_on_parent_instance() {
    let registry = bank_registry();
    let mut account = Object::new(ACCOUNT, 1);

    let result = invoke_method(
        &registry,
        &mut account,
        "describe",
        &NamedArgs::new(),
        AUDITOR,
    );
    assert!(matches!(
        result,
        Err(InvokeError::MethodNotDefined { .. })
    ));
}

#[test]
fn test_override_shadows_parent_method() {
    let mut registry = bank_registry();

    let mut premium = Class::with_parent(3, "Premium".to_string(), 1, SAVINGS);
    premium.add_method(Method::new(
        "describe",
        Visibility::Public,
        Signature::new(),
        |_obj, _args| Ok(Value::str("premium savings")),
    ));
    registry.register_class(premium);

    let mut premium_obj = Object::new(3, 1);
    let result = invoke_method(
        &registry,
        &mut premium_obj,
        "describe",
        &NamedArgs::new(),
        AUDITOR,
    );
    assert_eq!(result, Ok(Value::str("premium savings")));

    let mut savings = Object::new(SAVINGS, 1);
    let result = invoke_method(
        &registry,
        &mut savings,
        "describe",
        &NamedArgs::new(),
        AUDITOR,
    );
    assert_eq!(result, Ok(Value::str("savings")));
}
