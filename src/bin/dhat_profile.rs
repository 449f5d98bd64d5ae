//! DHAT heap profiler for translatekit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::hint::black_box;
use std::path::Path;

use translatekit::builder::{build, BASE_ID};
use translatekit::dataset::Dataset;
use translatekit::traits::{Backend, TranslateOptions};

const OPERATIONS: usize = 100_000;

/// Run a lookup mix across the depths the benchmark exercises.
fn lookup_mix<B: Backend>(store: &B, operations: usize) {
    let plain = TranslateOptions::new();
    for i in 0..operations {
        let key = match i % 4 {
            0 => "activerecord.models.user",
            1 => "activerecord.attributes.admins.user.login",
            2 => "activerecord.errors.models.user.attributes.login.blank",
            _ => "activemodel.errors.messages.blank",
        };
        black_box(store.translate("en", key, &plain).ok());
    }
}

/// Run interpolated lookups, the heaviest transient-allocation path.
fn interpolation_churn<B: Backend>(store: &B, operations: usize) {
    let options = TranslateOptions::new()
        .with_value("model", "User")
        .with_value("attribute", "name");
    for _ in 0..operations {
        black_box(
            store
                .translate("en", "activerecord.errors.models.user.blank", &options)
                .ok(),
        );
    }
}

/// Re-seed the same locale repeatedly, as the benchmark's store entry does.
fn store_churn<B: Backend>(store: &mut B, dataset: &Dataset, operations: usize) {
    let (locale, tree) = dataset.first_locale().expect("dataset has a locale");
    for _ in 0..operations {
        store.store_translations(locale, tree);
    }
}

fn profile_combination(overlays: &[&str], dataset: &Dataset) {
    let factory = build(BASE_ID, overlays).expect("combination must build");
    println!("=== Profiling {} ===", factory.display_name());

    let mut store = factory.create();
    let (locale, tree) = dataset.first_locale().expect("dataset has a locale");
    store.store_translations(locale, tree);

    lookup_mix(&store, OPERATIONS);
    interpolation_churn(&store, OPERATIONS / 2);
    store_churn(&mut store, dataset, OPERATIONS / 100);
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("translatekit DHAT Heap Profiling");
    println!("================================\n");

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("benches/data/example.json");
    let dataset = Dataset::load(path).expect("sample dataset must load");

    profile_combination(&[], &dataset);
    profile_combination(&["fast_lookup"], &dataset);
    profile_combination(&["interpolation_compiler"], &dataset);
    profile_combination(&["fast_lookup", "interpolation_compiler"], &dataset);

    println!("\n================================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
