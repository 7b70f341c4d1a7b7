// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use docmap::*;

use anyhow::Result;
use std::thread;

#[test]
fn classification_from_many_threads() -> Result<()> {
    let handles: Vec<_> = (0..16)
        .map(|i| {
            thread::spawn(move || -> Result<()> {
                let status = format!("com.acme.threads.Status{i}");
                let order = format!("com.acme.threads.Order{i}");
                register_type(TypeDescriptor::new(TypeName::new(&status)?, TypeKind::Enum))?;
                register_type(TypeDescriptor::new(TypeName::new(&order)?, TypeKind::Class))?;

                for _ in 0..50 {
                    assert_eq!(is_simple(&status)?, true);
                    assert_eq!(is_simple(&order)?, false);
                    assert_eq!(is_simple("org.bson.types.ObjectId")?, true);
                    assert_eq!(is_simple("java.time.LocalDateTime")?, false);
                    assert!(AUTOGENERATED_ID_TYPES.contains("java.lang.String"));
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("classification thread panicked"))??;
    }

    Ok(())
}

#[test]
fn registration_races_have_one_winner() -> Result<()> {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                TypeName::new("com.acme.threads.Shared")
                    .map(|name| register_type(TypeDescriptor::new(name, TypeKind::Class)).is_ok())
                    .unwrap_or(false)
            })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        if handle
            .join()
            .map_err(|_| anyhow::anyhow!("registration thread panicked"))?
        {
            winners += 1;
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(is_simple("com.acme.threads.Shared")?, false);
    Ok(())
}
