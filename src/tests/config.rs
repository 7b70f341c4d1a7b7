// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::*;

const CONFIG_JSON: &str = r#"{
  "types": [
    { "name": "com.acme.Status", "kind": "enum" },
    { "name": "com.acme.Money", "supertypes": ["java.io.Serializable"] },
    { "name": "com.acme.Euro", "supertypes": ["com.acme.Money"] },
    { "name": "com.acme.Order" }
  ],
  "simpleTypes": ["com.acme.Money"]
}"#;

#[test]
fn parses_json() {
    let config = MappingConfig::from_json_str(CONFIG_JSON).unwrap();
    assert_eq!(config.types.len(), 4);
    assert_eq!(config.types[0].kind, TypeKind::Enum);
    assert_eq!(config.types[1].kind, TypeKind::Class);
    assert!(config.types[3].supertypes.is_empty());
    assert_eq!(config.simple_types, vec![TypeName::new("com.acme.Money").unwrap()]);
}

#[cfg(feature = "yaml")]
#[test]
fn parses_yaml() {
    let yaml = r#"
types:
  - name: com.acme.Status
    kind: enum
simpleTypes:
  - java.util.Currency
"#;
    let config = MappingConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.types.len(), 1);
    assert_eq!(config.simple_types.len(), 1);
}

#[test]
fn empty_config_is_valid() {
    let config = MappingConfig::from_json_str("{}").unwrap();
    assert_eq!(config, MappingConfig::default());
}

#[test]
fn rejects_unknown_fields_and_bad_names() {
    let unknown = MappingConfig::from_json_str(r#"{ "simpleTypez": [] }"#);
    assert!(unknown.is_err());

    let bad_name = MappingConfig::from_json_str(r#"{ "simpleTypes": ["com..acme"] }"#);
    let err = format!("{:#}", bad_name.unwrap_err());
    assert!(err.contains("empty name segment"), "{err}");

    let bad_kind = MappingConfig::from_json_str(r#"{ "types": [{ "name": "a.B", "kind": "record" }] }"#);
    assert!(bad_kind.is_err());
}

#[test]
fn apply_declares_types_and_extends_store_holder() {
    let catalog = TypeCatalog::new("test");
    let config = MappingConfig::from_json_str(CONFIG_JSON).unwrap();
    let holder = config.apply(&catalog).unwrap();

    let classify = |n: &str| holder.is_simple(&TypeName::new(n).unwrap(), &catalog);
    assert_eq!(classify("com.acme.Status"), Ok(true));
    assert_eq!(classify("com.acme.Money"), Ok(true));
    assert_eq!(classify("com.acme.Euro"), Ok(true));
    assert_eq!(classify("com.acme.Order"), Ok(false));
    assert_eq!(classify("org.bson.types.Decimal128"), Ok(true));
    assert_eq!(classify("java.time.Instant"), Ok(false));

    // The store holder itself is untouched.
    assert!(!mongo::HOLDER.contains("com.acme.Money"));
}

#[test]
fn apply_requires_resolvable_simple_types() {
    let catalog = TypeCatalog::new("test");
    let config =
        MappingConfig::from_json_str(r#"{ "simpleTypes": ["com.acme.Undeclared"] }"#).unwrap();

    let err = config.apply(&catalog).unwrap_err();
    assert!(err.to_string().contains("com.acme.Undeclared"), "{err}");
}

#[test]
fn failed_apply_leaves_catalog_untouched() {
    let catalog = TypeCatalog::new("test");
    let typo = MappingConfig::from_json_str(
        r#"{ "types": [{ "name": "com.acme.A" }], "simpleTypes": ["com.acme.Typo"] }"#,
    )
    .unwrap();
    assert!(typo.apply(&catalog).is_err());
    assert!(catalog.user_type_names().is_empty());

    let fixed = MappingConfig::from_json_str(
        r#"{ "types": [{ "name": "com.acme.A" }], "simpleTypes": ["com.acme.A"] }"#,
    )
    .unwrap();
    let holder = fixed.apply(&catalog).unwrap();
    let a = TypeName::new("com.acme.A").unwrap();
    assert_eq!(holder.is_simple(&a, &catalog), Ok(true));
}

#[test]
fn failed_declaration_rolls_back_earlier_types() {
    let catalog = TypeCatalog::new("test");
    let config = MappingConfig::from_json_str(
        r#"{ "types": [{ "name": "com.acme.A" }, { "name": "java.lang.String" }] }"#,
    )
    .unwrap();

    let err = config.apply(&catalog).unwrap_err();
    assert!(err.to_string().contains("java.lang.String"), "{err}");
    assert!(catalog.user_type_names().is_empty());
}

#[test]
fn apply_reports_duplicate_declarations() {
    let catalog = TypeCatalog::new("test");
    let config = MappingConfig::from_json_str(CONFIG_JSON).unwrap();

    config.apply(&catalog).unwrap();
    let err = config.apply(&catalog).unwrap_err();
    assert!(err.to_string().contains("already registered"), "{err}");
}

#[test]
fn add_types_uses_global_catalog() {
    let count = add_types(
        r#"[
            { "name": "com.acme.config.Level", "kind": "enum" },
            { "name": "com.acme.config.Settings", "kind": "class" }
        ]"#,
    )
    .unwrap();
    assert_eq!(count, 2);

    assert_eq!(is_simple("com.acme.config.Level"), Ok(true));
    assert_eq!(is_simple("com.acme.config.Settings"), Ok(false));

    assert!(add_types("not json").is_err());
}

#[test]
fn from_file_rejects_unknown_extensions() {
    let err = MappingConfig::from_file("mapping.toml").unwrap_err();
    assert!(err.to_string().contains("mapping.toml"), "{err}");
}
