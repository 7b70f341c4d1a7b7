// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docmap::{MappingConfig, SimpleTypeHolder, TypeCatalog, TypeName, TYPE_CATALOG};

fn load_holder(types: Option<String>) -> Result<SimpleTypeHolder> {
    match types {
        Some(file) => {
            let config = MappingConfig::from_file(&file)?;
            config
                .apply(&TYPE_CATALOG)
                .with_context(|| format!("Failed to apply {file}"))
        }
        None => Ok(docmap::mongo::HOLDER.clone()),
    }
}

fn classify(holder: &SimpleTypeHolder, names: &[String], explain: bool) -> Result<()> {
    for name in names {
        let type_name = TypeName::new(name)?;
        let classification = holder.explain(&type_name, &*TYPE_CATALOG)?;
        let verdict = if classification.simple {
            "simple"
        } else {
            "mapped"
        };

        if explain {
            match &classification.rule {
                Some(rule) => println!("{name}: {verdict} ({rule})"),
                None => println!("{name}: {verdict} (no rule matched)"),
            }
        } else {
            println!("{name}: {verdict}");
        }
    }
    Ok(())
}

fn autogen_id(names: &[String]) -> Result<()> {
    for name in names {
        println!("{name}: {}", docmap::is_autogenerated_id_type(name));
    }
    Ok(())
}

fn list(holder: &SimpleTypeHolder) -> Result<()> {
    println!("rules:");
    for rule in holder.rules() {
        println!("  {rule}");
    }

    println!("simple types:");
    for name in holder.simple_types() {
        println!("  {name}");
    }

    println!("autogenerated id types:");
    let mut ids: Vec<&TypeName> = docmap::AUTOGENERATED_ID_TYPES.iter().collect();
    ids.sort();
    for name in ids {
        println!("  {name}");
    }

    println!("declared types:");
    for name in TYPE_CATALOG.user_type_names() {
        println!("  {name}");
    }
    println!("well known types: {}", TypeCatalog::well_known_names().len());
    Ok(())
}

#[derive(Subcommand)]
enum DocmapCommand {
    /// Classify types as simple or mapped.
    Classify {
        /// Fully-qualified type names.
        #[arg(required(true))]
        names: Vec<String>,
    },

    /// Classify types and show the rule that decided.
    Explain {
        /// Fully-qualified type names.
        #[arg(required(true))]
        names: Vec<String>,
    },

    /// Check whether types can receive generated identifiers.
    AutogenId {
        /// Fully-qualified type names.
        #[arg(required(true))]
        names: Vec<String>,
    },

    /// Show the rule chain and the registered types.
    List,
}

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Mapping configuration declaring application types. json or yaml.
    #[arg(long, short, value_name = "mapping.yaml")]
    types: Option<String>,

    #[command(subcommand)]
    command: DocmapCommand,
}

fn main() -> Result<()> {
    env_logger::init();

    // Parse and dispatch command.
    let cli = Cli::parse();
    let holder = load_holder(cli.types)?;
    match cli.command {
        DocmapCommand::Classify { names } => classify(&holder, &names, false),
        DocmapCommand::Explain { names } => classify(&holder, &names, true),
        DocmapCommand::AutogenId { names } => autogen_id(&names),
        DocmapCommand::List => list(&holder),
    }
}
