// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::TypeError;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const ARRAY_SUFFIX: &str = "[]";

/// Fully-qualified name of a mapped type, e.g. `org.bson.types.ObjectId`.
///
/// Array types carry one `[]` suffix per dimension (`byte[]`, `java.lang.String[][]`).
/// Cloning is cheap; the text is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(Arc<str>);

impl TypeName {
    /// Parse and validate a qualified type name.
    pub fn new(name: &str) -> Result<Self, TypeError> {
        validate(name)?;
        Ok(Self(Arc::from(name)))
    }

    /// Names from the built-in tables. Every one of them is covered by a validation test.
    pub(crate) fn known(name: &'static str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_array(&self) -> bool {
        self.0.ends_with(ARRAY_SUFFIX)
    }

    /// Element type of an array type, stripping a single dimension.
    pub fn element(&self) -> Option<TypeName> {
        self.0
            .strip_suffix(ARRAY_SUFFIX)
            .map(|element| Self(Arc::from(element)))
    }

    /// The innermost non-array type.
    pub fn component(&self) -> TypeName {
        let mut component: &str = &self.0;
        while let Some(stripped) = component.strip_suffix(ARRAY_SUFFIX) {
            component = stripped;
        }
        if component.len() == self.0.len() {
            self.clone()
        } else {
            Self(Arc::from(component))
        }
    }

    pub fn array_of(&self) -> TypeName {
        Self(Arc::from(format!("{}{ARRAY_SUFFIX}", self.0)))
    }

    /// Everything before the last `.`; `None` for unqualified names and arrays.
    pub fn namespace(&self) -> Option<&str> {
        if self.is_array() {
            return None;
        }
        self.0.rsplit_once('.').map(|(namespace, _)| namespace)
    }

    pub fn simple_name(&self) -> &str {
        let component = self.0.trim_end_matches(ARRAY_SUFFIX);
        match component.rsplit_once('.') {
            Some((_, simple)) => simple,
            None => component,
        }
    }

    /// Raw prefix test on the qualified name.
    ///
    /// This is a plain string prefix: `java.time` also matches `java.timezone.Foo`.
    /// Array types never match since their qualified name is not in any namespace.
    pub fn starts_with(&self, prefix: &str) -> bool {
        !self.is_array() && self.0.starts_with(prefix)
    }
}

fn validate(name: &str) -> Result<(), TypeError> {
    let invalid = |reason| {
        Err(TypeError::InvalidName {
            name: Arc::from(name),
            reason,
        })
    };

    if name.trim().is_empty() {
        return invalid("empty or whitespace-only names are not allowed");
    }

    let mut component = name;
    while let Some(stripped) = component.strip_suffix(ARRAY_SUFFIX) {
        component = stripped;
    }
    if component.is_empty() {
        return invalid("array suffix without an element type");
    }

    for segment in component.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return invalid("empty name segment"),
            Some(c) if c.is_ascii_digit() => return invalid("segment starts with a digit"),
            Some(c) if !is_name_char(c) => return invalid("unexpected character"),
            _ => {}
        }
        if !chars.all(is_name_char) {
            return invalid("unexpected character");
        }
    }

    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeName({})", self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl core::str::FromStr for TypeName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(Arc::from(value)))
    }
}

impl TryFrom<&str> for TypeName {
    type Error = TypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.0.as_ref().to_owned()
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
