use std::hint::black_box;

use docmap::{mongo, SimpleTypeHolder, TypeCatalog, TypeDescriptor, TypeKind, TypeName};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn names(list: &[&str]) -> Vec<TypeName> {
    list.iter().map(|n| TypeName::new(n).unwrap()).collect()
}

fn classify_store_types(c: &mut Criterion) {
    let catalog = TypeCatalog::new("bench");
    let cases = names(&[
        "org.bson.types.ObjectId",
        "java.lang.String",
        "java.time.LocalDateTime",
        "java.time.DayOfWeek",
        "com.mongodb.client.model.geojson.Point",
        "java.util.HashMap",
        "byte[]",
    ]);

    c.bench_function("classify well known types", |b| {
        b.iter(|| {
            for name in &cases {
                black_box(mongo::HOLDER.is_simple(black_box(name), &catalog).unwrap());
            }
        })
    });
}

fn classify_deep_hierarchies(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify deep hierarchy");

    for depth in [1usize, 8, 32, 128] {
        let catalog = TypeCatalog::new("bench");
        catalog
            .register(TypeDescriptor::new(
                TypeName::new("com.acme.Level0").unwrap(),
                TypeKind::Class,
            ))
            .unwrap();
        for level in 1..=depth {
            catalog
                .register(
                    TypeDescriptor::new(
                        TypeName::new(&format!("com.acme.Level{level}")).unwrap(),
                        TypeKind::Class,
                    )
                    .with_supertypes([
                        TypeName::new(&format!("com.acme.Level{}", level - 1)).unwrap()
                    ]),
                )
                .unwrap();
        }

        let holder = SimpleTypeHolder::builder()
            .extend(&mongo::HOLDER)
            .simple_type(TypeName::new("com.acme.Level0").unwrap())
            .build();
        let leaf = TypeName::new(&format!("com.acme.Level{depth}")).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(depth), &leaf, |b, leaf| {
            b.iter(|| assert!(holder.is_simple(black_box(leaf), &catalog).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, classify_store_types, classify_deep_hierarchies);
criterion_main!(benches);
