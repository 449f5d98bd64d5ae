//! Translation store assembled from orthogonal strategy capabilities.
//!
//! [`TranslationStore`] is one concrete type whose behavior is selected at
//! construction: the lookup strategy (nested walk vs. flattened tables) and
//! the interpolation strategy (per-call vs. store-time compiled) are each an
//! enum dispatched per operation. Capability selection lives in
//! [`crate::builder`]; this module only executes whatever was assembled.

pub mod flat;
pub mod interpolate;
pub mod nested;

use std::borrow::Cow;

use crate::error::{TranslateError, MAX_LINK_HOPS};
use crate::traits::{Backend, Resolved, TranslateOptions};
use crate::value::Value;

use flat::FlatTables;
use interpolate::{interpolate, TemplateCache};
use nested::NestedTables;

/// Lookup strategy: how translation tables are stored and probed.
#[derive(Debug)]
pub enum Lookup {
    /// Per-locale value trees, walked segment by segment.
    Nested(NestedTables),
    /// Flattened dotted-key tables, one probe per lookup.
    Flat(FlatTables),
}

impl Lookup {
    fn store(&mut self, locale: &str, tree: &Value) {
        match self {
            Lookup::Nested(tables) => tables.store(locale, tree),
            Lookup::Flat(tables) => tables.store(locale, tree),
        }
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&Value> {
        match self {
            Lookup::Nested(tables) => tables.lookup(locale, key),
            Lookup::Flat(tables) => tables.lookup(locale, key),
        }
    }

    fn locale_tree(&self, locale: &str) -> Option<&Value> {
        match self {
            Lookup::Nested(tables) => tables.locale_tree(locale),
            Lookup::Flat(tables) => tables.locale_tree(locale),
        }
    }
}

/// Interpolation strategy: when placeholder templates are parsed.
#[derive(Debug)]
pub enum Interpolation {
    /// Scan and substitute on every call.
    Runtime,
    /// Templates pre-compiled at store time, rendered per call.
    Compiling(TemplateCache),
}

/// The store under test: one lookup strategy plus one interpolation strategy.
///
/// Constructed through [`BackendFactory::create`]; every instance owns its
/// tables outright and is independent of any other instance.
///
/// [`BackendFactory::create`]: crate::builder::BackendFactory::create
#[derive(Debug)]
pub struct TranslationStore {
    lookup: Lookup,
    interpolation: Interpolation,
}

impl TranslationStore {
    pub(crate) fn assemble(lookup: Lookup, interpolation: Interpolation) -> Self {
        Self {
            lookup,
            interpolation,
        }
    }

    /// Resolves `key`, following `:`-links until a non-link value is found.
    ///
    /// Returns the value plus the final key when a link was followed (the
    /// compiled-template cache is keyed by final keys).
    fn resolve<'a>(
        &'a self,
        locale: &str,
        key: &str,
    ) -> Result<(&'a Value, Option<&'a str>), TranslateError> {
        let mut current = key;
        let mut followed = None;
        let mut hops = 0;

        loop {
            let value = self.lookup.lookup(locale, current).ok_or_else(|| {
                TranslateError::MissingTranslation {
                    locale: locale.to_string(),
                    key: current.to_string(),
                }
            })?;

            match value.link_target() {
                Some(target) => {
                    hops += 1;
                    if hops > MAX_LINK_HOPS {
                        return Err(TranslateError::LinkDepthExceeded {
                            locale: locale.to_string(),
                            key: key.to_string(),
                        });
                    }
                    current = target;
                    followed = Some(target);
                },
                None => return Ok((value, followed)),
            }
        }
    }

    fn interpolate_resolved<'a>(
        &'a self,
        locale: &str,
        final_key: &str,
        text: &'a str,
        options: &TranslateOptions,
    ) -> Result<Cow<'a, str>, TranslateError> {
        match &self.interpolation {
            Interpolation::Runtime => interpolate(text, options),
            Interpolation::Compiling(cache) => match cache.get(locale, final_key) {
                Some(template) => Ok(Cow::Owned(template.render(options)?)),
                None => interpolate(text, options),
            },
        }
    }
}

impl Backend for TranslationStore {
    fn store_translations(&mut self, locale: &str, tree: &Value) {
        self.lookup.store(locale, tree);
        if let Interpolation::Compiling(cache) = &mut self.interpolation {
            if let Some(merged) = self.lookup.locale_tree(locale) {
                cache.rebuild_locale(locale, merged);
            }
        }
    }

    fn translate<'a>(
        &'a self,
        locale: &str,
        key: &str,
        options: &TranslateOptions,
    ) -> Result<Resolved<'a>, TranslateError> {
        match self.resolve(locale, key) {
            Ok((Value::Leaf(text), followed)) => {
                if options.values_empty() {
                    Ok(Resolved::Text(Cow::Borrowed(text.as_str())))
                } else {
                    let final_key = followed.unwrap_or(key);
                    Ok(Resolved::Text(self.interpolate_resolved(
                        locale, final_key, text, options,
                    )?))
                }
            },
            Ok((tree, _)) => Ok(Resolved::Tree(tree)),
            Err(err @ TranslateError::MissingTranslation { .. }) => {
                match options.default_value() {
                    Some(default) => {
                        if options.values_empty() {
                            Ok(Resolved::Text(Cow::Owned(default.to_string())))
                        } else {
                            let rendered = interpolate(default, options)?;
                            Ok(Resolved::Text(Cow::Owned(rendered.into_owned())))
                        }
                    },
                    None => Err(err),
                }
            },
            Err(err) => Err(err),
        }
    }
}
