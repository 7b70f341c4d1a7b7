// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::TypeName;
use std::sync::Arc;

/// Errors raised while naming, resolving or classifying types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The identifier is not a well-formed qualified type name.
    #[error("invalid type name `{name}`: {reason}")]
    InvalidName { name: Arc<str>, reason: &'static str },
    /// The identifier is well-formed but no such type is known.
    #[error("type `{0}` could not be resolved")]
    Unresolvable(TypeName),
}
