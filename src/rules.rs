// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::TypeName;
use core::fmt;
use std::sync::Arc;

/// What a rule looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The type is an enumeration.
    Enum,
    /// The type is exactly the named one.
    Exact(TypeName),
    /// The qualified name starts with the given text. Array types never match.
    Prefix(Arc<str>),
    /// The type is one of the holder's registered simple types.
    Member,
    /// The type extends or implements one of the holder's registered simple types.
    AssignableToMember,
}

/// A condition and the verdict returned when it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub condition: Condition,
    pub verdict: bool,
}

impl Rule {
    pub fn new(condition: Condition, verdict: bool) -> Self {
        Self { condition, verdict }
    }

    /// Every enumeration is simple.
    pub fn enums_are_simple() -> Self {
        Self::new(Condition::Enum, true)
    }

    /// Nothing whose name starts with `prefix` is simple.
    pub fn exclude_prefix(prefix: &str) -> Self {
        Self::new(Condition::Prefix(Arc::from(prefix)), false)
    }

    pub fn include_prefix(prefix: &str) -> Self {
        Self::new(Condition::Prefix(Arc::from(prefix)), true)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Enum => f.write_str("enum type"),
            Condition::Exact(name) => write!(f, "type is {name}"),
            Condition::Prefix(prefix) => write!(f, "name starts with `{prefix}`"),
            Condition::Member => f.write_str("registered simple type"),
            Condition::AssignableToMember => f.write_str("subtype of a registered simple type"),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.verdict { "simple" } else { "not simple" };
        write!(f, "{} => {verdict}", self.condition)
    }
}
