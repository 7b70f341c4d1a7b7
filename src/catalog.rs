// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::registry::{Registry, RegistryError};
use crate::{TypeDescriptor, TypeKind, TypeName};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

mod builtins;


/// Looks up what is known about a type by name.
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, name: &TypeName) -> Option<Arc<TypeDescriptor>>;
}

lazy_static! {
    static ref WELL_KNOWN: HashMap<TypeName, Arc<TypeDescriptor>> = builtins::WELL_KNOWN
        .iter()
        .map(|(name, kind, supertypes)| {
            let name = TypeName::known(*name);
            let descriptor = TypeDescriptor::new(name.clone(), *kind)
                .with_supertypes(supertypes.iter().map(|s| TypeName::known(*s)));
            (name, Arc::new(descriptor))
        })
        .collect();
}

lazy_static! {
    /// Process-wide catalog consulted by the free classification functions.
    pub static ref TYPE_CATALOG: TypeCatalog = TypeCatalog::new("TYPE_CATALOG");
}

/// Well-known types plus the types an application declares at runtime.
#[derive(Debug)]
pub struct TypeCatalog {
    user_types: Registry<TypeDescriptor>,
}

impl TypeCatalog {
    pub fn new(name: &str) -> Self {
        Self {
            user_types: Registry::new(name),
        }
    }

    /// Whether `name` is one of the types known without registration.
    pub fn is_well_known(name: &str) -> bool {
        WELL_KNOWN.contains_key(name)
    }

    pub fn well_known_names() -> Vec<TypeName> {
        let mut names: Vec<TypeName> = WELL_KNOWN.keys().cloned().collect();
        names.sort();
        names
    }

    /// Declare an application type.
    ///
    /// Array types are derived from their element type and cannot be declared.
    /// Enums always extend `java.lang.Enum`, whatever else they implement.
    pub fn register(&self, mut descriptor: TypeDescriptor) -> Result<(), RegistryError> {
        let enum_name = TypeName::known(crate::names::ENUM);
        let reject = |reason| RegistryError::Rejected {
            name: Arc::from(descriptor.name.as_str()),
            registry: Arc::from(self.user_types.name()),
            reason,
        };

        if descriptor.name.is_array() || descriptor.kind == TypeKind::Array {
            return Err(reject("is an array type"));
        }
        if descriptor.kind == TypeKind::Primitive {
            return Err(reject("cannot be declared as a primitive"));
        }
        if descriptor.supertypes.contains(&descriptor.name) {
            return Err(reject("lists itself as a supertype"));
        }
        if Self::is_well_known(descriptor.name.as_str()) {
            return Err(RegistryError::AlreadyExists {
                name: Arc::from(descriptor.name.as_str()),
                registry: Arc::from(self.user_types.name()),
            });
        }
        if descriptor.kind == TypeKind::Enum && !descriptor.supertypes.contains(&enum_name) {
            descriptor.supertypes.push(enum_name);
        }

        let name = descriptor.name.clone();
        self.user_types
            .register(name.as_str(), Arc::new(descriptor))?;
        debug!("registered type {name} in {}", self.user_types.name());
        Ok(())
    }

    /// Declare every type in `descriptors`.
    ///
    /// All or nothing: on the first failure the types declared by this call are removed again.
    pub fn register_all(
        &self,
        descriptors: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Result<usize, RegistryError> {
        let mut declared: Vec<TypeName> = Vec::new();
        for descriptor in descriptors {
            let name = descriptor.name.clone();
            if let Err(e) = self.register(descriptor) {
                self.remove_all(&declared);
                return Err(e);
            }
            declared.push(name);
        }
        Ok(declared.len())
    }

    pub(crate) fn remove_all(&self, names: &[TypeName]) {
        for name in names {
            self.remove(name.as_str());
        }
    }

    pub fn remove(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        let removed = self.user_types.remove(name);
        if removed.is_some() {
            debug!("removed type {name} from {}", self.user_types.name());
        }
        removed
    }

    /// Names of the application-declared types, sorted.
    pub fn user_type_names(&self) -> Vec<Arc<str>> {
        self.user_types.list_names()
    }

    /// Forget every application-declared type. Well-known types are unaffected.
    pub fn clear(&self) {
        self.user_types.clear();
    }
}

impl TypeResolver for TypeCatalog {
    fn resolve(&self, name: &TypeName) -> Option<Arc<TypeDescriptor>> {
        if let Some(element) = name.element() {
            return self
                .resolve(&element)
                .map(|_| Arc::new(TypeDescriptor::array(name.clone())));
        }

        WELL_KNOWN
            .get(name)
            .cloned()
            .or_else(|| self.user_types.get(name.as_str()))
    }
}

/// Declare an application type in the process-wide catalog.
pub fn register_type(descriptor: TypeDescriptor) -> Result<(), RegistryError> {
    TYPE_CATALOG.register(descriptor)
}

/// Remove an application type from the process-wide catalog.
pub fn remove_type(name: &str) -> Option<Arc<TypeDescriptor>> {
    TYPE_CATALOG.remove(name)
}

/// Declare the types in a JSON array of descriptors, e.g.
/// `[{"name": "com.acme.Status", "kind": "enum"}]`.
pub fn add_types(types_json: &str) -> Result<usize> {
    let descriptors: Vec<TypeDescriptor> =
        serde_json::from_str(types_json).context("failed to parse type descriptors")?;
    Ok(TYPE_CATALOG.register_all(descriptors)?)
}
