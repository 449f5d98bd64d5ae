//! Central registry of benchmarked strategy combinations.
//!
//! This is the single source of truth for which combinations a benchmark run
//! covers and in what order. To add or reorder a combination, modify this
//! file only; drivers and reports pick up the change.

use translatekit::builder::{build, BackendFactory, BASE_ID};
use translatekit::error::ConfigError;

/// One strategy combination: a short id, the base capability, and the overlay
/// identifiers layered onto it, in application order.
#[derive(Debug, Clone, Copy)]
pub struct BackendCase {
    /// Short identifier (e.g. `"fast"`).
    pub id: &'static str,
    /// Base capability identifier.
    pub base: &'static str,
    /// Overlay capability identifiers, applied in order.
    pub overlays: &'static [&'static str],
}

impl BackendCase {
    /// Builds the factory for this combination.
    ///
    /// Fails with [`ConfigError`] if an identifier is unknown, before any
    /// store is constructed or any timing begins.
    pub fn factory(&self) -> Result<BackendFactory, ConfigError> {
        build(self.base, self.overlays)
    }
}

/// The standard combination suite, benchmarked in this order.
pub const STANDARD_BACKENDS: &[BackendCase] = &[
    BackendCase {
        id: "simple",
        base: BASE_ID,
        overlays: &[],
    },
    BackendCase {
        id: "fast",
        base: BASE_ID,
        overlays: &["fast_lookup"],
    },
    BackendCase {
        id: "interpolation",
        base: BASE_ID,
        overlays: &["interpolation_compiler"],
    },
    BackendCase {
        id: "fast_interpolation",
        base: BASE_ID,
        overlays: &["fast_lookup", "interpolation_compiler"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_standard_case_builds() {
        for case in STANDARD_BACKENDS {
            let factory = case.factory().unwrap();
            assert!(factory.display_name().ends_with("Backend"));
        }
    }

    #[test]
    fn standard_names_are_stable() {
        let names: Vec<String> = STANDARD_BACKENDS
            .iter()
            .map(|case| case.factory().unwrap().display_name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "SimpleBackend",
                "SimpleFastBackend",
                "SimpleInterpolationBackend",
                "SimpleFastInterpolationBackend",
            ]
        );
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in STANDARD_BACKENDS.iter().enumerate() {
            for b in &STANDARD_BACKENDS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
