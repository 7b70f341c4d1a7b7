// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use docmap::*;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use test_generator::test_resources;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct TestCase {
    note: String,
    #[serde(rename = "type")]
    type_name: String,
    want_simple: Option<bool>,
    want_rule: Option<String>,
    want_error: Option<String>,
    want_autogenerated_id: Option<bool>,
    skip: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct YamlTest {
    #[serde(default)]
    config: MappingConfig,
    cases: Vec<TestCase>,
}

fn yaml_test_impl(file: &str) -> Result<()> {
    let yaml_str = std::fs::read_to_string(file)?;
    let test: YamlTest = serde_yaml::from_str(&yaml_str)?;

    // Each file gets its own catalog so that files can run in parallel.
    let catalog = TypeCatalog::new(file);
    let holder = test.config.apply(&catalog)?;

    std::eprintln!("running {file}");

    for case in test.cases {
        std::eprint!("case {} ", case.note);
        if case.skip == Some(true) {
            std::eprintln!("skipped");
            continue;
        }

        if let Some(expected) = case.want_autogenerated_id {
            if is_autogenerated_id_type(&case.type_name) != expected {
                bail!(
                    "{}: autogenerated id for `{}` expected {expected}",
                    case.note,
                    case.type_name
                );
            }
        }

        let result = TypeName::new(&case.type_name).and_then(|name| holder.explain(&name, &catalog));
        match (case.want_simple, case.want_error, result) {
            (Some(expected), _, Ok(actual)) => {
                if actual.simple != expected {
                    bail!("{}: `{}` simple = {}, expected {expected}", case.note, case.type_name, actual.simple);
                }
                if let Some(rule) = &case.want_rule {
                    let actual_rule = actual
                        .rule
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "no rule".to_string());
                    if &actual_rule != rule {
                        bail!("{}: decided by `{actual_rule}`, expected `{rule}`", case.note);
                    }
                }
            }
            (_, Some(expected), Err(actual)) => {
                if !actual.to_string().contains(&expected) {
                    bail!("`{actual}` does not contain `{expected}`");
                }
            }
            (None, None, _) => {}
            (want_simple, want_error, actual) => {
                bail!(
                    "{}: want_simple = `{want_simple:?}` want_error = `{want_error:?}` actual = {actual:?}",
                    case.note
                );
            }
        }

        std::eprintln!("passed");
    }

    Ok(())
}

fn yaml_test(file: &str) -> Result<()> {
    match yaml_test_impl(file) {
        Ok(_) => Ok(()),
        Err(e) => {
            // If Err is returned, it doesn't always get printed by cargo test.
            // Therefore, panic with the error.
            panic!("{e}");
        }
    }
}

#[test_resources("tests/classification/*.yaml")]
fn run(path: &str) {
    yaml_test(path).unwrap()
}
