//! Translation value trees.
//!
//! A [`Value`] is either a leaf string or a nested tree of further values,
//! mirroring the hierarchical shape of a locale file. Leaf strings starting
//! with `:` are links to another dotted key within the same locale.

use rustc_hash::FxHashMap;

/// One node of a translation tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A translated string (or a `:`-prefixed link to another key).
    Leaf(String),
    /// A nested mapping of key segments to further values.
    Tree(FxHashMap<String, Value>),
}

impl Value {
    /// Convenience constructor for a leaf value.
    pub fn leaf(s: impl Into<String>) -> Self {
        Value::Leaf(s.into())
    }

    /// Returns an empty tree node.
    pub fn empty_tree() -> Self {
        Value::Tree(FxHashMap::default())
    }

    /// Returns the leaf string, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Value::Leaf(s) => Some(s),
            Value::Tree(_) => None,
        }
    }

    /// Returns the child map, if this node is a tree.
    pub fn as_tree(&self) -> Option<&FxHashMap<String, Value>> {
        match self {
            Value::Leaf(_) => None,
            Value::Tree(children) => Some(children),
        }
    }

    /// Returns the link target if this leaf uses the `:` link sigil.
    ///
    /// A bare `":"` is not a link; the target must be non-empty.
    pub fn link_target(&self) -> Option<&str> {
        match self {
            Value::Leaf(s) if s.len() > 1 && s.starts_with(':') => Some(&s[1..]),
            _ => None,
        }
    }

    /// Descends a dotted path (`"a.b.c"`) from this node.
    ///
    /// Returns `None` as soon as a segment is missing or a leaf is reached
    /// with path segments still left to consume.
    pub fn walk(&self, path: &str) -> Option<&Value> {
        let mut node = self;
        for segment in path.split('.') {
            node = node.as_tree()?.get(segment)?;
        }
        Some(node)
    }

    /// Deep-merges `other` into `self`.
    ///
    /// Tree nodes merge recursively; any other pairing replaces the existing
    /// node with a clone of `other`. Matches how locale files layer on top of
    /// already-stored translations.
    pub fn deep_merge(&mut self, other: &Value) {
        match (self, other) {
            (Value::Tree(existing), Value::Tree(incoming)) => {
                for (key, incoming_child) in incoming {
                    match existing.get_mut(key) {
                        Some(existing_child) => existing_child.deep_merge(incoming_child),
                        None => {
                            existing.insert(key.clone(), incoming_child.clone());
                        },
                    }
                }
            },
            (slot, other) => *slot = other.clone(),
        }
    }
}
