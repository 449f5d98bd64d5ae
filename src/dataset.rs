//! Sample dataset loading.
//!
//! The dataset is a JSON object of locale names to nested objects of string
//! or object values, e.g.:
//!
//! ```json
//! { "en": { "first": "1st", "nested": { "a": { "b": { "c": "deep" } } } } }
//! ```
//!
//! Locales keep their file order (`serde_json` with `preserve_order`), which
//! matters because the benchmark's seeding operation stores only the FIRST
//! locale entry. Loaded once per process and shared read-only; nothing in the
//! harness or the stores mutates it.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::DatasetError;
use crate::value::Value;

/// An ordered set of locale trees parsed from the sample file.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    locales: Vec<(String, Value)>,
}

impl Dataset {
    /// Reads and parses the dataset file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path.as_ref()).map_err(|err| {
            DatasetError::new(format!(
                "failed to read dataset {}: {err}",
                path.as_ref().display()
            ))
        })?;
        Self::from_json_str(&text)
    }

    /// Parses a dataset from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let root: serde_json::Value = serde_json::from_str(text)?;
        let serde_json::Value::Object(entries) = root else {
            return Err(DatasetError::new(
                "dataset root must be an object of locales",
            ));
        };

        let mut locales = Vec::with_capacity(entries.len());
        for (locale, value) in entries {
            let tree = convert(&value)
                .map_err(|err| DatasetError::new(format!("locale {locale}: {err}")))?;
            if tree.as_tree().is_none() {
                return Err(DatasetError::new(format!(
                    "locale {locale}: value must be an object"
                )));
            }
            locales.push((locale, tree));
        }

        Ok(Self { locales })
    }

    /// The first locale entry in file order, which is the seeding target.
    pub fn first_locale(&self) -> Option<(&str, &Value)> {
        self.locales
            .first()
            .map(|(locale, tree)| (locale.as_str(), tree))
    }

    /// Iterates locale entries in file order.
    pub fn locales(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.locales
            .iter()
            .map(|(locale, tree)| (locale.as_str(), tree))
    }

    /// Fetches one locale's tree by name.
    pub fn get(&self, locale: &str) -> Option<&Value> {
        self.locales
            .iter()
            .find(|(name, _)| name == locale)
            .map(|(_, tree)| tree)
    }

    /// Number of locales in the dataset.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Converts parsed JSON into a translation tree.
///
/// Only strings and objects are representable; anything else (numbers,
/// arrays, booleans, nulls) is a dataset defect.
fn convert(value: &serde_json::Value) -> Result<Value, DatasetError> {
    match value {
        serde_json::Value::String(s) => Ok(Value::Leaf(s.clone())),
        serde_json::Value::Object(entries) => {
            let mut children = FxHashMap::default();
            for (key, child) in entries {
                children.insert(key.clone(), convert(child)?);
            }
            Ok(Value::Tree(children))
        },
        other => Err(DatasetError::new(format!(
            "unsupported value type: {other}"
        ))),
    }
}
