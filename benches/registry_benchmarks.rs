//! Benchmarks for registry lookup and construction.
//!
//! Measures the hot path of an already-populated registry: a hit (lookup,
//! construction, name stamp), a miss (pure lookup), and direct construction
//! through a factory handle, which skips the name lookup.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use fabriq::{Buildable, Factory, Tagged, TypeTag, buildable, delegate_tagged, variant_of};

trait Filter: Tagged {
    fn filter_int(&self, input: i64) -> i64;
}
buildable!(dyn Filter);

#[derive(Default)]
struct Identity {
    tag: TypeTag,
}
delegate_tagged!(Identity { tag });
impl Filter for Identity {
    fn filter_int(&self, input: i64) -> i64 {
        input
    }
}
variant_of!(dyn Filter: Identity);

fn bench_create(c: &mut Criterion) {
    let _factories: Vec<Factory<dyn Filter>> = (0..32)
        .map(|i| Factory::register::<Identity>(&format!("filter-{i}")).expect("unique names"))
        .collect();

    c.bench_function("create_hit", |b| {
        b.iter(|| black_box(<dyn Filter>::create(black_box("filter-7"))))
    });

    c.bench_function("create_miss", |b| {
        b.iter(|| black_box(<dyn Filter>::create(black_box("missing"))))
    });

    c.bench_function("factory_direct_create", |b| {
        let factory = Factory::<dyn Filter>::register::<Identity>("direct").expect("unique name");
        b.iter(|| black_box(factory.create()))
    });
}

criterion_group!(benches, bench_create);
criterion_main!(benches);
