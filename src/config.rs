// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::catalog::{TypeCatalog, TypeResolver};
use crate::{mongo, SimpleTypeHolder, TypeDescriptor, TypeName};
use anyhow::{bail, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application mapping configuration.
///
/// ```json
/// {
///   "types": [
///     { "name": "com.acme.Status", "kind": "enum" },
///     { "name": "com.acme.Money", "supertypes": ["java.io.Serializable"] }
///   ],
///   "simpleTypes": ["com.acme.Money"]
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MappingConfig {
    /// Application types to declare in the catalog.
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,

    /// Additional types to store as leaf values, e.g. the targets of custom converters.
    #[serde(default)]
    pub simple_types: Vec<TypeName>,
}

impl MappingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse mapping configuration")
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("failed to parse mapping configuration")
    }

    /// Read a configuration file; `.json`, `.yaml` and `.yml` are understood.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Self::from_yaml_str(&contents),
            _ => bail!(
                "unsupported configuration file `{}`. Must be json or yaml.",
                path.display()
            ),
        }
    }

    /// Declare the configured types in `catalog` and build the store holder
    /// extended with the configured simple types.
    ///
    /// Every configured simple type must be resolvable once the types are declared.
    /// On failure the catalog is left as it was.
    pub fn apply(&self, catalog: &TypeCatalog) -> Result<SimpleTypeHolder> {
        let declared = catalog.register_all(self.types.iter().cloned())?;

        let unresolved = self
            .simple_types
            .iter()
            .find(|name| catalog.resolve(name).is_none());
        if let Some(name) = unresolved {
            let names: Vec<TypeName> = self.types.iter().map(|t| t.name.clone()).collect();
            catalog.remove_all(&names);
            bail!("simple type `{name}` is neither well known nor declared");
        }

        debug!("declared {declared} application types");

        Ok(self.holder())
    }

    /// Store holder extended with the configured simple types.
    pub fn holder(&self) -> SimpleTypeHolder {
        SimpleTypeHolder::builder()
            .extend(&mongo::HOLDER)
            .simple_types(self.simple_types.iter().cloned())
            .build()
    }
}
