//! Base lookup tables: one value tree per locale, walked per lookup.
//!
//! Every lookup splits the dotted key and descends the stored tree segment
//! by segment. Storage is a deep merge, so repeated seeding layers new
//! entries over old ones instead of discarding them.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Per-locale nested translation tables.
#[derive(Debug, Default)]
pub struct NestedTables {
    locales: FxHashMap<String, Value>,
}

impl NestedTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-merges `tree` into the locale's stored tree.
    pub fn store(&mut self, locale: &str, tree: &Value) {
        self.locales
            .entry(locale.to_string())
            .or_insert_with(Value::empty_tree)
            .deep_merge(tree);
    }

    /// Raw lookup: walks the dotted key. Does not follow links.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&Value> {
        self.locales.get(locale)?.walk(key)
    }

    /// The locale's full merged tree, if the locale has been seeded.
    pub fn locale_tree(&self, locale: &str) -> Option<&Value> {
        self.locales.get(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Value {
        let mut tree = Value::empty_tree();
        tree.deep_merge(&Value::Tree(
            [
                ("first".to_string(), Value::leaf("1st")),
                (
                    "nested".to_string(),
                    Value::Tree(
                        [(
                            "a".to_string(),
                            Value::Tree(
                                [("b".to_string(), Value::leaf("deep"))].into_iter().collect(),
                            ),
                        )]
                        .into_iter()
                        .collect(),
                    ),
                ),
            ]
            .into_iter()
            .collect(),
        ));
        tree
    }

    #[test]
    fn lookup_walks_dotted_keys() {
        let mut tables = NestedTables::new();
        tables.store("en", &sample_tree());

        assert_eq!(
            tables.lookup("en", "first").and_then(Value::as_leaf),
            Some("1st")
        );
        assert_eq!(
            tables.lookup("en", "nested.a.b").and_then(Value::as_leaf),
            Some("deep")
        );
        assert!(tables.lookup("en", "nested.a").unwrap().as_tree().is_some());
    }

    #[test]
    fn lookup_misses_unknown_locale_and_key() {
        let mut tables = NestedTables::new();
        tables.store("en", &sample_tree());

        assert!(tables.lookup("de", "first").is_none());
        assert!(tables.lookup("en", "nope").is_none());
    }

    #[test]
    fn restore_merges_instead_of_replacing() {
        let mut tables = NestedTables::new();
        tables.store("en", &sample_tree());

        let update = Value::Tree(
            [("second".to_string(), Value::leaf("2nd"))]
                .into_iter()
                .collect(),
        );
        tables.store("en", &update);

        assert_eq!(
            tables.lookup("en", "first").and_then(Value::as_leaf),
            Some("1st")
        );
        assert_eq!(
            tables.lookup("en", "second").and_then(Value::as_leaf),
            Some("2nd")
        );
    }
}
