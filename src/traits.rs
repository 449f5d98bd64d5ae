//! # Backend Contract
//!
//! This module defines the seam between the benchmark harness and the
//! translation store under test. The harness drives every strategy
//! combination through this one trait and never inspects results beyond
//! success or failure.
//!
//! ## Contract Summary
//!
//! | Operation            | Purpose                                          |
//! |----------------------|--------------------------------------------------|
//! | `store_translations` | Seed (deep-merge) one locale's value tree        |
//! | `translate`          | Resolve a dotted key to a leaf string or subtree |
//!
//! `translate` must support: plain lookups at any depth, a fallback default
//! when the key is absent or a link dangles, `%{name}` interpolation of
//! supplied values, within-locale link following, and subtree results.
//!
//! ## Example
//!
//! ```
//! use translatekit::builder::{build, BASE_ID};
//! use translatekit::traits::{Backend, Resolved, TranslateOptions};
//! use translatekit::value::Value;
//!
//! let mut store = build(BASE_ID, &[]).unwrap().create();
//! let mut tree = Value::empty_tree();
//! tree.deep_merge(&Value::Tree(
//!     [("first".to_string(), Value::leaf("1st"))].into_iter().collect(),
//! ));
//! store.store_translations("en", &tree);
//!
//! match store.translate("en", "first", &TranslateOptions::new()).unwrap() {
//!     Resolved::Text(text) => assert_eq!(text, "1st"),
//!     Resolved::Tree(_) => unreachable!(),
//! }
//! ```

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::error::TranslateError;
use crate::value::Value;

/// Outcome of a successful lookup: a leaf string or an entire subtree.
///
/// Both variants borrow from the store where possible so that lookup cost,
/// not result copying, is what a benchmark measures. Interpolated strings
/// and defaults come back as owned `Cow::Owned` text.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// A resolved leaf string, interpolated if values were supplied.
    Text(Cow<'a, str>),
    /// A resolved subtree mapping, borrowed from the store's tables.
    Tree(&'a Value),
}

impl<'a> Resolved<'a> {
    /// Returns the text, if this resolution produced a leaf string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Resolved::Text(text) => Some(text.as_ref()),
            Resolved::Tree(_) => None,
        }
    }

    /// Returns the subtree, if this resolution produced a mapping.
    pub fn as_tree(&self) -> Option<&'a Value> {
        match self {
            Resolved::Text(_) => None,
            Resolved::Tree(tree) => Some(*tree),
        }
    }
}

/// Auxiliary arguments to [`Backend::translate`].
///
/// Carries an optional fallback default plus named interpolation values.
/// Interpolation runs only when at least one value is supplied, matching the
/// store contract's "options may carry" phrasing: an absent options field
/// changes nothing about plain lookups.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    default: Option<String>,
    values: FxHashMap<String, String>,
}

impl TranslateOptions {
    /// Empty options: no default, no interpolation values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback default used when the key is absent or unresolved.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Adds one named interpolation value.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns the fallback default, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Looks up one interpolation value by placeholder name.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns `true` if no interpolation values were supplied.
    pub fn values_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The store-under-test contract.
///
/// Implementations own their internal translation tables. The harness
/// constructs one instance per strategy combination, seeds it through
/// [`store_translations`](Self::store_translations), and then issues
/// [`translate`](Self::translate) calls exactly as the workload catalogue
/// dictates, without validating returned values.
pub trait Backend {
    /// Deep-merges one locale's value tree into the store.
    ///
    /// Storing the same locale again overwrites leaves and layers trees;
    /// repeated seeding is a legitimate workload, not an error.
    fn store_translations(&mut self, locale: &str, tree: &Value);

    /// Resolves `key` (dotted path) within `locale`.
    ///
    /// Follows `:`-links transitively, applies the supplied default when the
    /// key is absent or a link dangles, and interpolates `%{name}`
    /// placeholders when `options` carries values.
    fn translate<'a>(
        &'a self,
        locale: &str,
        key: &str,
        options: &TranslateOptions,
    ) -> Result<Resolved<'a>, TranslateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal contract double: a single-locale flat map, no links.
    struct MapBackend {
        locale: String,
        entries: FxHashMap<String, Value>,
    }

    impl Backend for MapBackend {
        fn store_translations(&mut self, locale: &str, tree: &Value) {
            self.locale = locale.to_string();
            if let Some(children) = tree.as_tree() {
                for (key, value) in children {
                    self.entries.insert(key.clone(), value.clone());
                }
            }
        }

        fn translate<'a>(
            &'a self,
            locale: &str,
            key: &str,
            options: &TranslateOptions,
        ) -> Result<Resolved<'a>, TranslateError> {
            if locale != self.locale {
                return Err(TranslateError::MissingTranslation {
                    locale: locale.to_string(),
                    key: key.to_string(),
                });
            }
            match self.entries.get(key) {
                Some(Value::Leaf(s)) => Ok(Resolved::Text(Cow::Borrowed(s))),
                Some(tree) => Ok(Resolved::Tree(tree)),
                None => match options.default_value() {
                    Some(default) => Ok(Resolved::Text(Cow::Owned(default.to_string()))),
                    None => Err(TranslateError::MissingTranslation {
                        locale: locale.to_string(),
                        key: key.to_string(),
                    }),
                },
            }
        }
    }

    #[test]
    fn contract_double_round_trips_through_trait() {
        let mut backend = MapBackend {
            locale: String::new(),
            entries: FxHashMap::default(),
        };
        let tree = Value::Tree(
            [("first".to_string(), Value::leaf("1st"))]
                .into_iter()
                .collect(),
        );

        backend.store_translations("en", &tree);

        let resolved = backend.translate("en", "first", &TranslateOptions::new()).unwrap();
        assert_eq!(resolved.as_text(), Some("1st"));
    }

    #[test]
    fn default_applies_through_options() {
        let backend = MapBackend {
            locale: "en".to_string(),
            entries: FxHashMap::default(),
        };
        let options = TranslateOptions::new().with_default("Another");

        let resolved = backend.translate("en", "missing", &options).unwrap();
        assert_eq!(resolved.as_text(), Some("Another"));
    }

    #[test]
    fn options_accessors() {
        let options = TranslateOptions::new()
            .with_default("d")
            .with_value("model", "User");

        assert_eq!(options.default_value(), Some("d"));
        assert_eq!(options.value("model"), Some("User"));
        assert_eq!(options.value("attribute"), None);
        assert!(!options.values_empty());
        assert!(TranslateOptions::new().values_empty());
    }
}
