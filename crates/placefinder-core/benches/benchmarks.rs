use criterion::{criterion_group, criterion_main, Criterion};
use placefinder_core::autocomplete::Dropdown;
use placefinder_core::prelude::*;
use std::hint::black_box;

fn bench_filter(c: &mut Criterion) {
    let catalog = Catalog::load().expect("embedded catalog");
    let large: Vec<String> = (0..5_000).map(|i| format!("Locality {i:04}")).collect();

    c.bench_function("city_filter_embedded", |b| {
        let mut d = Dropdown::new();
        b.iter(|| d.filter(catalog.cities(), black_box("b")))
    });

    c.bench_function("area_filter_5000", |b| {
        let mut d = Dropdown::new();
        b.iter(|| d.filter(&large, black_box("locality 49")))
    });

    c.bench_function("controller_keystrokes", |b| {
        b.iter(|| {
            let mut ac = AutocompleteController::new(catalog.clone());
            for q in ["b", "be", "ben"] {
                ac.on_query_changed(Field::City, black_box(q));
            }
            ac.on_key_navigate(Field::City, NavKey::ArrowDown);
            ac.on_key_navigate(Field::City, NavKey::Enter)
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
