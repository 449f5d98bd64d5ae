//! Micro-operation benchmarks for all strategy combinations.
//!
//! Run with: `cargo bench --bench ops`
//!
//! Measures per-operation latency for lookups at each workload depth,
//! interpolation, and storing, across all standard combinations under
//! identical conditions. Complements the fixed-N `runner` report with
//! criterion's statistics.

use std::hint::black_box;
use std::path::Path;

use bench_support::registry::{BackendCase, STANDARD_BACKENDS};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use translatekit::backend::TranslationStore;
use translatekit::dataset::Dataset;
use translatekit::traits::{Backend, TranslateOptions};

fn load_dataset() -> Dataset {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("benches/data/example.json");
    Dataset::load(path).expect("sample dataset must load")
}

fn seeded(case: &BackendCase, dataset: &Dataset) -> TranslationStore {
    let mut store = case.factory().expect("combination must build").create();
    let (locale, tree) = dataset.first_locale().expect("dataset has a locale");
    store.store_translations(locale, tree);
    store
}

// ============================================================================
// Lookup latency per depth
// ============================================================================

fn bench_lookups(c: &mut Criterion) {
    let dataset = load_dataset();
    let cases = [
        ("t_depth3", "activerecord.models.user"),
        ("t_depth5", "activerecord.attributes.admins.user.login"),
        (
            "t_depth7",
            "activerecord.errors.models.user.attributes.login.blank",
        ),
        ("t_link", "activemodel.errors.messages.blank"),
        ("t_subtree", "activerecord.errors.messages"),
    ];

    for (group_name, key) in cases {
        let mut group = c.benchmark_group(group_name);
        group.throughput(Throughput::Elements(1));

        for case in STANDARD_BACKENDS {
            let store = seeded(case, &dataset);
            let options = TranslateOptions::new();
            group.bench_function(case.id, |b| {
                b.iter(|| black_box(store.translate("en", key, &options)))
            });
        }

        group.finish();
    }
}

// ============================================================================
// Interpolation latency
// ============================================================================

fn bench_interpolation(c: &mut Criterion) {
    let dataset = load_dataset();
    let mut group = c.benchmark_group("t_interpolation");
    group.throughput(Throughput::Elements(1));

    for case in STANDARD_BACKENDS {
        let store = seeded(case, &dataset);
        let options = TranslateOptions::new()
            .with_value("model", "User")
            .with_value("attribute", "name");
        group.bench_function(case.id, |b| {
            b.iter(|| {
                black_box(store.translate("en", "activerecord.errors.models.user.blank", &options))
            })
        });
    }

    group.finish();
}

// ============================================================================
// Store latency
// ============================================================================

fn bench_store(c: &mut Criterion) {
    let dataset = load_dataset();
    let mut group = c.benchmark_group("store");

    for case in STANDARD_BACKENDS {
        let (locale, tree) = dataset.first_locale().expect("dataset has a locale");
        group.bench_function(case.id, |b| {
            let mut store = case.factory().expect("combination must build").create();
            b.iter(|| store.store_translations(black_box(locale), black_box(tree)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookups, bench_interpolation, bench_store);
criterion_main!(benches);
