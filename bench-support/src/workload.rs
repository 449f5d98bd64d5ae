//! The fixed workload catalogue.
//!
//! Eight named operations, defined once at process start and shared
//! read-only across every strategy combination. Labels, keys, and auxiliary
//! arguments are fixed; each operation performs exactly one semantic action
//! against the store and discards the result without asserting on it. Only
//! timing, allocation, and failure matter.
//!
//! The `store` entry is first in catalogue order and doubles as the seeding
//! step: on every repetition it re-stores the FIRST locale entry of the
//! dataset (store-overwrite throughput is part of the measured workload) and
//! then performs one `en:first` lookup.

use std::hint::black_box;

use translatekit::dataset::Dataset;
use translatekit::error::TranslateError;
use translatekit::traits::{Backend, TranslateOptions};

/// One named, fixed operation exercised repeatedly during measurement.
#[derive(Debug, Clone)]
pub struct WorkloadEntry {
    /// Report label, fixed across combinations.
    pub label: &'static str,
    op: Op,
}

#[derive(Debug, Clone)]
enum Op {
    /// Store the dataset's first locale tree, then look up `en:first`.
    Seed,
    /// One translate call with fixed arguments.
    Lookup {
        key: &'static str,
        options: TranslateOptions,
    },
}

impl WorkloadEntry {
    /// Runs one unit of work against `store`.
    ///
    /// Errors from the store propagate unchanged; the harness treats them as
    /// the failure of the current combination.
    pub fn apply<B: Backend>(
        &self,
        store: &mut B,
        dataset: &Dataset,
    ) -> Result<(), TranslateError> {
        match &self.op {
            Op::Seed => {
                if let Some((locale, tree)) = dataset.first_locale() {
                    store.store_translations(locale, tree);
                }
                black_box(store.translate("en", "first", &TranslateOptions::new())?);
                Ok(())
            },
            Op::Lookup { key, options } => {
                black_box(store.translate("en", key, options)?);
                Ok(())
            },
        }
    }

    /// Returns `true` for the seeding entry that must run first.
    pub fn is_seed(&self) -> bool {
        matches!(self.op, Op::Seed)
    }
}

/// Builds the catalogue, in the order entries must run.
///
/// Options are constructed once here and reused for every repetition of
/// every combination.
pub fn standard_workload() -> Vec<WorkloadEntry> {
    vec![
        WorkloadEntry {
            label: "store",
            op: Op::Seed,
        },
        WorkloadEntry {
            label: "t (depth=3)",
            op: Op::Lookup {
                key: "activerecord.models.user",
                options: TranslateOptions::new(),
            },
        },
        WorkloadEntry {
            label: "t (depth=5)",
            op: Op::Lookup {
                key: "activerecord.attributes.admins.user.login",
                options: TranslateOptions::new(),
            },
        },
        WorkloadEntry {
            label: "t (depth=7)",
            op: Op::Lookup {
                key: "activerecord.errors.models.user.attributes.login.blank",
                options: TranslateOptions::new(),
            },
        },
        WorkloadEntry {
            label: "t w/ default",
            op: Op::Lookup {
                key: "activerecord.models.another",
                options: TranslateOptions::new().with_default("Another"),
            },
        },
        WorkloadEntry {
            label: "t w/ interpolation",
            op: Op::Lookup {
                key: "activerecord.errors.models.user.blank",
                options: TranslateOptions::new()
                    .with_value("model", "User")
                    .with_value("attribute", "name"),
            },
        },
        WorkloadEntry {
            label: "t w/ link",
            op: Op::Lookup {
                key: "activemodel.errors.messages.blank",
                options: TranslateOptions::new(),
            },
        },
        WorkloadEntry {
            label: "t subtree",
            op: Op::Lookup {
                key: "activerecord.errors.messages",
                options: TranslateOptions::new(),
            },
        },
    ]
}
