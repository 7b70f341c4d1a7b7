// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::catalog::TypeResolver;
use crate::{names, TypeName};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Shape of a mapped type.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Primitive,
    #[default]
    Class,
    Interface,
    Enum,
    Array,
}

/// What the mapper knows about a type: its name, kind and direct supertypes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeDescriptor {
    pub name: TypeName,

    #[serde(default)]
    pub kind: TypeKind,

    /// Direct superclass and implemented interfaces.
    #[serde(default)]
    pub supertypes: Vec<TypeName>,
}

impl TypeDescriptor {
    pub fn new(name: TypeName, kind: TypeKind) -> Self {
        Self {
            name,
            kind,
            supertypes: Vec::new(),
        }
    }

    pub fn with_supertypes(mut self, supertypes: impl IntoIterator<Item = TypeName>) -> Self {
        self.supertypes.extend(supertypes);
        self
    }

    /// Descriptor of an array type. Arrays only extend `java.lang.Object`.
    pub fn array(name: TypeName) -> Self {
        Self {
            name,
            kind: TypeKind::Array,
            supertypes: vec![TypeName::known(names::OBJECT)],
        }
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn is_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive
    }

    /// Every transitive supertype, nearest first.
    ///
    /// Reference types always end up with `java.lang.Object`. Supertypes that
    /// cannot be resolved are listed, but their own supertypes are unknown.
    pub fn ancestors(&self, resolver: &dyn TypeResolver) -> Vec<TypeName> {
        let mut ancestors = Vec::new();
        let mut seen: HashSet<TypeName> = HashSet::new();
        let mut pending: VecDeque<TypeName> = self.supertypes.iter().cloned().collect();
        while let Some(current) = pending.pop_front() {
            if current == self.name || !seen.insert(current.clone()) {
                continue;
            }
            if let Some(descriptor) = resolver.resolve(&current) {
                pending.extend(descriptor.supertypes.iter().cloned());
            }
            ancestors.push(current);
        }

        if !self.is_primitive() && self.name != names::OBJECT && !seen.contains(names::OBJECT) {
            ancestors.push(TypeName::known(names::OBJECT));
        }
        ancestors
    }

    /// Whether a value of this type can be stored in a slot declared as `target`.
    pub fn is_assignable_to(&self, target: &TypeName, resolver: &dyn TypeResolver) -> bool {
        &self.name == target || self.ancestors(resolver).contains(target)
    }
}
