//! Class registry and runtime type queries
//!
//! The registry owns every class definition and is the introspection
//! surface of the library: given a class id it answers lookup, inheritance,
//! and method-resolution queries. Registries are plain values with no
//! interior mutability, so a shared `&ClassRegistry` is safe to read from
//! any number of threads.

use rustc_hash::FxHashMap;

use crate::object::{Class, Object};
use crate::signature::Method;

/// Class registry: all known classes, indexed by ID
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    /// Classes indexed by ID
    classes: Vec<Class>,
    /// Class name to ID mapping
    name_to_id: FxHashMap<String, usize>,
}

impl ClassRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            name_to_id: FxHashMap::default(),
        }
    }

    /// Register a new class
    pub fn register_class(&mut self, class: Class) -> usize {
        let id = class.id;
        let name = class.name.clone();

        self.classes.push(class);
        self.name_to_id.insert(name, id);

        id
    }

    /// Get class by ID
    pub fn get_class(&self, id: usize) -> Option<&Class> {
        self.classes.get(id)
    }

    /// Get mutable class by ID
    pub fn get_class_mut(&mut self, id: usize) -> Option<&mut Class> {
        self.classes.get_mut(id)
    }

    /// Get class by name
    pub fn get_class_by_name(&self, name: &str) -> Option<&Class> {
        self.name_to_id
            .get(name)
            .and_then(|id| self.classes.get(*id))
    }

    /// Get next available class ID
    pub fn next_class_id(&self) -> usize {
        self.classes.len()
    }

    /// Iterate over all classes with their IDs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Class)> {
        self.classes.iter().enumerate()
    }

    /// Check if a class is the same as, or a subclass of, another class
    pub fn is_subclass_of(&self, sub_class_id: usize, super_class_id: usize) -> bool {
        if sub_class_id == super_class_id {
            return true;
        }

        let mut current_id = sub_class_id;
        while let Some(class) = self.get_class(current_id) {
            if let Some(parent_id) = class.parent_id {
                if parent_id == super_class_id {
                    return true;
                }
                current_id = parent_id;
            } else {
                break;
            }
        }

        false
    }

    /// Check if an object is an instance of a class (directly or via inheritance)
    pub fn is_instance_of(&self, object: &Object, class_id: usize) -> bool {
        self.is_subclass_of(object.class_id, class_id)
    }

    /// Get the inheritance chain for a class
    ///
    /// The first element is the class itself, the last is the root ancestor.
    pub fn class_hierarchy(&self, class_id: usize) -> Vec<&Class> {
        let mut hierarchy = Vec::new();
        let mut current_id = Some(class_id);

        while let Some(id) = current_id {
            if let Some(class) = self.get_class(id) {
                hierarchy.push(class);
                current_id = class.parent_id;
            } else {
                break;
            }
        }

        hierarchy
    }

    /// Resolve a method by name, starting at `class_id` and walking up the
    /// parent chain
    ///
    /// Returns the declaring class id along with the method, so callers can
    /// tell an inherited method from one declared on the runtime class. The
    /// first match from the runtime class upward wins, which is what gives
    /// subclass declarations override semantics.
    pub fn resolve_method(&self, class_id: usize, name: &str) -> Option<(usize, &Method)> {
        let mut current_id = Some(class_id);

        while let Some(id) = current_id {
            let class = self.get_class(id)?;
            if let Some(method) = class.get_method(name) {
                return Some((id, method));
            }
            current_id = class.parent_id;
        }

        None
    }
}
