//! Fast-lookup overlay: flattened single-level tables per locale.
//!
//! ## Architecture
//! - A shadow nested tree per locale keeps merge semantics identical to the
//!   base tables.
//! - After every store, the locale is re-flattened into one
//!   `FxHashMap<String, Value>` keyed by full dotted paths.
//! - Every intermediate tree node is flattened too (as a cloned subtree), so
//!   subtree lookups are a single hash probe like leaf lookups.
//!
//! ## Performance Trade-offs
//! - Lookups at any depth cost one hash probe instead of one probe per
//!   segment.
//! - Storing is strictly more expensive: deep merge plus a full re-flatten
//!   of the locale, and subtree clones roughly double resident size.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Per-locale flattened translation tables.
#[derive(Debug, Default)]
pub struct FlatTables {
    source: FxHashMap<String, Value>,
    flattened: FxHashMap<String, FxHashMap<String, Value>>,
}

impl FlatTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-merges `tree` into the locale, then re-flattens the locale.
    pub fn store(&mut self, locale: &str, tree: &Value) {
        let merged = self
            .source
            .entry(locale.to_string())
            .or_insert_with(Value::empty_tree);
        merged.deep_merge(tree);

        let mut entries = FxHashMap::default();
        flatten_into(&mut String::new(), merged, &mut entries);
        self.flattened.insert(locale.to_string(), entries);
    }

    /// Raw lookup: one probe on the full dotted key. Does not follow links.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&Value> {
        self.flattened.get(locale)?.get(key)
    }

    /// The locale's full merged tree, if the locale has been seeded.
    pub fn locale_tree(&self, locale: &str) -> Option<&Value> {
        self.source.get(locale)
    }
}

/// Records every node under `prefix` into `out`, keyed by dotted path.
fn flatten_into(prefix: &mut String, value: &Value, out: &mut FxHashMap<String, Value>) {
    if let Value::Tree(children) = value {
        for (segment, child) in children {
            let saved = prefix.len();
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(segment);
            out.insert(prefix.clone(), child.clone());
            flatten_into(prefix, child, out);
            prefix.truncate(saved);
        }
    }
}
