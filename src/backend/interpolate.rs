//! `%{name}` placeholder interpolation.
//!
//! Two strategies share one template representation:
//!
//! - The runtime path compiles and renders on every call: scan the string,
//!   split it into segments, substitute. All of that work lands inside the
//!   timed window, which is exactly what the base strategy should cost.
//! - The compiling path pre-parses every stored leaf containing `%` into a
//!   [`CompiledTemplate`] at store time, keyed by locale and full dotted key,
//!   so a translate call only renders.
//!
//! `%%{` escapes to a literal `%{`; a `%` not introducing a placeholder is
//! copied through unchanged.

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::error::TranslateError;
use crate::traits::TranslateOptions;
use crate::value::Value;

/// A parsed placeholder template.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTemplate {
    segments: Vec<Segment>,
    text_len: usize,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Placeholder(String),
}

impl CompiledTemplate {
    /// Parses `text` into literal and placeholder segments.
    pub fn compile(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut text_len = 0;
        let mut rest = text;

        while let Some(pos) = rest.find('%') {
            literal.push_str(&rest[..pos]);
            rest = &rest[pos..];

            if let Some(after) = rest.strip_prefix("%%{") {
                // Escaped placeholder opener.
                literal.push_str("%{");
                rest = after;
            } else if let Some(after) = rest.strip_prefix("%{") {
                match after.find('}') {
                    Some(end) => {
                        if !literal.is_empty() {
                            text_len += literal.len();
                            segments.push(Segment::Text(std::mem::take(&mut literal)));
                        }
                        segments.push(Segment::Placeholder(after[..end].to_string()));
                        rest = &after[end + 1..];
                    },
                    None => {
                        // Unterminated opener is copied through literally.
                        literal.push_str(rest);
                        rest = "";
                    },
                }
            } else {
                literal.push('%');
                rest = &rest[1..];
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            text_len += literal.len();
            segments.push(Segment::Text(literal));
        }

        Self { segments, text_len }
    }

    /// Returns `true` if rendering substitutes at least one value.
    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(_)))
    }

    /// Renders the template against the supplied values.
    pub fn render(&self, options: &TranslateOptions) -> Result<String, TranslateError> {
        let mut out = String::with_capacity(self.text_len + 16);
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(name) => match options.value(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(TranslateError::MissingInterpolationValue {
                            name: name.clone(),
                        });
                    },
                },
            }
        }
        Ok(out)
    }
}

/// Compile-and-render in one step; borrows the input when it needs no work.
pub fn interpolate<'a>(
    text: &'a str,
    options: &TranslateOptions,
) -> Result<Cow<'a, str>, TranslateError> {
    if !text.contains('%') {
        return Ok(Cow::Borrowed(text));
    }
    Ok(Cow::Owned(CompiledTemplate::compile(text).render(options)?))
}

// ---------------------------------------------------------------------------
// TemplateCache
// ---------------------------------------------------------------------------

/// Store-time template cache for the compiling interpolator.
///
/// Rebuilt per locale on every store, so the cache always reflects the
/// merged state of the tables it shadows.
#[derive(Debug, Default)]
pub struct TemplateCache {
    by_locale: FxHashMap<String, FxHashMap<String, CompiledTemplate>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompiles every `%`-bearing leaf of the locale's merged tree.
    pub fn rebuild_locale(&mut self, locale: &str, tree: &Value) {
        let templates = self.by_locale.entry(locale.to_string()).or_default();
        templates.clear();
        compile_into(&mut String::new(), tree, templates);
    }

    /// Fetches the pre-compiled template for a resolved key, if one exists.
    pub fn get(&self, locale: &str, key: &str) -> Option<&CompiledTemplate> {
        self.by_locale.get(locale)?.get(key)
    }
}

fn compile_into(prefix: &mut String, value: &Value, out: &mut FxHashMap<String, CompiledTemplate>) {
    match value {
        Value::Leaf(text) => {
            if text.contains('%') {
                out.insert(prefix.clone(), CompiledTemplate::compile(text));
            }
        },
        Value::Tree(children) => {
            for (segment, child) in children {
                let saved = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(segment);
                compile_into(prefix, child, out);
                prefix.truncate(saved);
            }
        },
    }
}
