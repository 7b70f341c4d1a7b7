// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod config;
mod descriptor;
mod error;
mod holder;
mod type_name;

pub mod catalog;
pub mod mongo;
pub mod names;
pub mod registry;
pub mod rules;

pub use catalog::{add_types, register_type, remove_type, TypeCatalog, TypeResolver, TYPE_CATALOG};
pub use config::MappingConfig;
pub use descriptor::{TypeDescriptor, TypeKind};
pub use error::TypeError;
pub use holder::{Classification, SimpleTypeHolder, SimpleTypeHolderBuilder};
pub use mongo::{is_autogenerated_id_type, is_simple, AUTOGENERATED_ID_TYPES};
pub use type_name::TypeName;

#[cfg(test)]
mod tests;
