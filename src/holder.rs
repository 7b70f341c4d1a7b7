// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::catalog::TypeResolver;
use crate::rules::{Condition, Rule};
use crate::{names, TypeDescriptor, TypeError, TypeName};
use lazy_static::lazy_static;
use log::trace;
use std::collections::HashSet;

/// Types every holder treats as simple unless built without defaults.
const DEFAULT_SIMPLE_TYPES: &[&str] = &[
    "boolean",
    "boolean[]",
    "long",
    "long[]",
    "short",
    "short[]",
    "int",
    "int[]",
    "byte",
    "byte[]",
    "float",
    "float[]",
    "double",
    "double[]",
    "char",
    "char[]",
    "java.lang.Boolean",
    "java.lang.Long",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Byte",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Character",
    "java.lang.String",
    "java.util.Date",
    "java.util.Locale",
    "java.lang.Class",
    "java.lang.Enum",
    "java.net.URI",
    "java.net.URL",
];

lazy_static! {
    /// Rules every holder falls back to once its own overrides did not match.
    static ref BASE_RULES: Vec<Rule> = vec![
        Rule::new(Condition::Exact(TypeName::known(names::OBJECT)), true),
        Rule::enums_are_simple(),
        Rule::new(Condition::Member, true),
        Rule::include_prefix(names::LANG_NAMESPACE),
        Rule::include_prefix(names::TIME_NAMESPACE),
        Rule::new(Condition::Exact(TypeName::known(names::KOTLIN_UNIT)), true),
        Rule::new(Condition::AssignableToMember, true),
    ];
}

/// Outcome of classifying a type, together with the rule that decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub type_name: TypeName,
    pub simple: bool,
    /// `None` when no rule matched and the type fell through to "not simple".
    pub rule: Option<Rule>,
}

/// Decides whether values of a type are stored as leaf values or mapped field by field.
///
/// A holder is immutable once built. Classification runs the holder's override
/// rules in order, then the base rules; the first matching rule decides.
#[derive(Debug, Clone)]
pub struct SimpleTypeHolder {
    simple_types: HashSet<TypeName>,
    overrides: Vec<Rule>,
}

impl SimpleTypeHolder {
    pub fn builder() -> SimpleTypeHolderBuilder {
        SimpleTypeHolderBuilder {
            simple_types: HashSet::new(),
            overrides: Vec::new(),
            register_defaults: true,
        }
    }

    /// Holder with the given custom simple types and no override rules.
    pub fn new(custom: impl IntoIterator<Item = TypeName>, register_defaults: bool) -> Self {
        Self::builder()
            .simple_types(custom)
            .register_defaults(register_defaults)
            .build()
    }

    /// Whether `name` was registered as a simple type, ignoring every other rule.
    pub fn contains(&self, name: &str) -> bool {
        self.simple_types.contains(name)
    }

    /// Registered simple types, sorted.
    pub fn simple_types(&self) -> Vec<&TypeName> {
        let mut types: Vec<&TypeName> = self.simple_types.iter().collect();
        types.sort();
        types
    }

    /// The full rule chain in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.overrides.iter().chain(BASE_RULES.iter())
    }

    pub fn is_simple(&self, name: &TypeName, resolver: &dyn TypeResolver) -> Result<bool, TypeError> {
        Ok(self.explain(name, resolver)?.simple)
    }

    /// Classify `name` and report which rule decided.
    ///
    /// Fails when the resolver does not know the type.
    pub fn explain(
        &self,
        name: &TypeName,
        resolver: &dyn TypeResolver,
    ) -> Result<Classification, TypeError> {
        let descriptor = resolver
            .resolve(name)
            .ok_or_else(|| TypeError::Unresolvable(name.clone()))?;

        let rule = self
            .rules()
            .find(|rule| self.matches(&rule.condition, &descriptor, resolver));
        let simple = rule.is_some_and(|rule| rule.verdict);

        match rule {
            Some(rule) => trace!("{name}: {rule}"),
            None => trace!("{name}: no rule matched => not simple"),
        }

        Ok(Classification {
            type_name: name.clone(),
            simple,
            rule: rule.cloned(),
        })
    }

    fn matches(
        &self,
        condition: &Condition,
        descriptor: &TypeDescriptor,
        resolver: &dyn TypeResolver,
    ) -> bool {
        match condition {
            Condition::Enum => descriptor.is_enum(),
            Condition::Exact(name) => &descriptor.name == name,
            Condition::Prefix(prefix) => descriptor.name.starts_with(prefix),
            Condition::Member => self.simple_types.contains(&descriptor.name),
            Condition::AssignableToMember => descriptor
                .ancestors(resolver)
                .iter()
                .any(|ancestor| self.simple_types.contains(ancestor)),
        }
    }
}

/// Collects simple types and override rules for a [`SimpleTypeHolder`].
///
/// Rules run in the order they were added. [`SimpleTypeHolderBuilder::extend`]
/// adds the parent's rules at the point where it is called.
#[derive(Debug, Clone)]
pub struct SimpleTypeHolderBuilder {
    simple_types: HashSet<TypeName>,
    overrides: Vec<Rule>,
    register_defaults: bool,
}

impl SimpleTypeHolderBuilder {
    /// Include the default simple types (primitives, wrappers, strings, ...). On by default.
    pub fn register_defaults(mut self, register_defaults: bool) -> Self {
        self.register_defaults = register_defaults;
        self
    }

    pub fn simple_type(mut self, name: TypeName) -> Self {
        self.simple_types.insert(name);
        self
    }

    pub fn simple_types(mut self, names: impl IntoIterator<Item = TypeName>) -> Self {
        self.simple_types.extend(names);
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.overrides.push(rule);
        self
    }

    /// Inherit the simple types and override rules of `parent`.
    pub fn extend(mut self, parent: &SimpleTypeHolder) -> Self {
        self.simple_types
            .extend(parent.simple_types.iter().cloned());
        self.overrides.extend(parent.overrides.iter().cloned());
        self
    }

    pub fn build(mut self) -> SimpleTypeHolder {
        if self.register_defaults {
            self.simple_types
                .extend(DEFAULT_SIMPLE_TYPES.iter().map(|name| TypeName::known(*name)));
        }
        SimpleTypeHolder {
            simple_types: self.simple_types,
            overrides: self.overrides,
        }
    }
}

#[cfg(test)]
pub(crate) fn default_simple_type_names() -> &'static [&'static str] {
    DEFAULT_SIMPLE_TYPES
}
