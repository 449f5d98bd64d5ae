//! Strategy combination builder.
//!
//! Capabilities are an explicit tagged enum applied in a fixed assembly
//! pipeline: the base store always exists, `fast_lookup` swaps its tables for
//! flattened ones, `interpolation_compiler` swaps its interpolator for the
//! store-time compiling one. Unknown or duplicate identifiers fail here, at
//! build time, before any store is constructed.
//!
//! ## Example
//!
//! ```
//! use translatekit::builder::{build, BASE_ID};
//!
//! let factory = build(BASE_ID, &["fast_lookup", "interpolation_compiler"]).unwrap();
//! assert_eq!(factory.display_name(), "SimpleFastInterpolationBackend");
//!
//! let a = factory.create();
//! let b = factory.create();
//! // `a` and `b` are independent stores; seeding one leaves the other empty.
//! # let _ = (a, b);
//! ```

use crate::backend::flat::FlatTables;
use crate::backend::interpolate::TemplateCache;
use crate::backend::nested::NestedTables;
use crate::backend::{Interpolation, Lookup, TranslationStore};
use crate::error::ConfigError;

/// Identifier of the base capability every combination starts from.
pub const BASE_ID: &str = "simple";

/// Fixed display-name suffix for assembled combinations.
const NAME_QUALIFIER: &str = "Backend";

/// An optional capability layered onto the base store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Flattened single-probe lookup tables.
    FastLookup,
    /// Store-time compilation of interpolation templates.
    InterpolationCompiler,
}

impl Capability {
    /// Parses a capability identifier.
    pub fn parse(id: &str) -> Result<Self, ConfigError> {
        match id {
            "fast_lookup" => Ok(Capability::FastLookup),
            "interpolation_compiler" => Ok(Capability::InterpolationCompiler),
            other => Err(ConfigError::new(format!("unknown capability: {other}"))),
        }
    }

    /// The identifier this capability parses from.
    pub fn id(&self) -> &'static str {
        match self {
            Capability::FastLookup => "fast_lookup",
            Capability::InterpolationCompiler => "interpolation_compiler",
        }
    }

    /// The display-name fragment contributed to a combination's name.
    fn label(&self) -> &'static str {
        match self {
            Capability::FastLookup => "Fast",
            Capability::InterpolationCompiler => "Interpolation",
        }
    }
}

/// A named, reusable recipe for constructing stores of one combination.
///
/// Construction of actual stores is deferred to [`create`](Self::create);
/// building the factory has no other observable effect.
#[derive(Debug, Clone)]
pub struct BackendFactory {
    display_name: String,
    overlays: Vec<Capability>,
}

impl BackendFactory {
    /// The deterministic combination name: base label, overlay labels in the
    /// order given, then the fixed qualifier.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The overlays this factory applies, in application order.
    pub fn overlays(&self) -> &[Capability] {
        &self.overlays
    }

    /// Constructs a fresh, independently-owned store for this combination.
    pub fn create(&self) -> TranslationStore {
        let mut lookup = Lookup::Nested(NestedTables::new());
        let mut interpolation = Interpolation::Runtime;

        for overlay in &self.overlays {
            match overlay {
                Capability::FastLookup => lookup = Lookup::Flat(FlatTables::new()),
                Capability::InterpolationCompiler => {
                    interpolation = Interpolation::Compiling(TemplateCache::new());
                },
            }
        }

        TranslationStore::assemble(lookup, interpolation)
    }
}

/// Builds a store factory from one base capability plus `overlays`.
///
/// The base must be [`BASE_ID`]; overlay identifiers must be distinct members
/// of the known capability set. Anything else is a [`ConfigError`] raised
/// here, before any store exists.
pub fn build(base: &str, overlays: &[&str]) -> Result<BackendFactory, ConfigError> {
    if base != BASE_ID {
        return Err(ConfigError::new(format!("unknown base capability: {base}")));
    }

    let mut parsed = Vec::with_capacity(overlays.len());
    for id in overlays {
        let capability = Capability::parse(id)?;
        if parsed.contains(&capability) {
            return Err(ConfigError::new(format!("duplicate capability: {id}")));
        }
        parsed.push(capability);
    }

    let mut display_name = String::from("Simple");
    for capability in &parsed {
        display_name.push_str(capability.label());
    }
    display_name.push_str(NAME_QUALIFIER);

    Ok(BackendFactory {
        display_name,
        overlays: parsed,
    })
}
