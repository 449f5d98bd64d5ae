//! Error types for the translatekit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a backend combination names an unknown or
//!   duplicate capability. Raised at build time, before any store exists.
//! - [`DatasetError`]: Returned when the sample dataset file is missing or
//!   fails to parse. Fatal for a benchmark run.
//! - [`TranslateError`]: Returned by [`Backend::translate`] when a lookup
//!   cannot be resolved.
//!
//! [`Backend::translate`]: crate::traits::Backend::translate
//!
//! ## Example Usage
//!
//! ```
//! use translatekit::builder::{build, BASE_ID};
//! use translatekit::error::ConfigError;
//!
//! let err = build(BASE_ID, &["doesNotExist"]).unwrap_err();
//! assert!(err.to_string().contains("doesNotExist"));
//! ```

use std::fmt;
use std::io;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when a strategy combination is misconfigured.
///
/// Produced by [`build`](crate::builder::build) when an overlay identifier is
/// unknown or listed twice. Carries a human-readable description of which
/// identifier failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// DatasetError
// ---------------------------------------------------------------------------

/// Error returned when the sample dataset cannot be loaded.
///
/// Produced by [`Dataset::load`](crate::dataset::Dataset::load) for missing
/// files, malformed JSON, or value types the translation tree cannot hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetError(String);

impl DatasetError {
    /// Creates a new `DatasetError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(err: io::Error) -> Self {
        Self(format!("failed to read dataset: {err}"))
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        Self(format!("failed to parse dataset: {err}"))
    }
}

// ---------------------------------------------------------------------------
// TranslateError
// ---------------------------------------------------------------------------

/// Maximum number of link hops followed before resolution gives up.
pub const MAX_LINK_HOPS: usize = 8;

/// Error returned when a translation lookup fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// No entry exists for the key (or a link pointed at a missing key) and
    /// no default was supplied.
    MissingTranslation {
        /// Locale the lookup ran against.
        locale: String,
        /// Dotted key that failed to resolve.
        key: String,
    },
    /// Link resolution exceeded [`MAX_LINK_HOPS`], which indicates a link
    /// cycle in the stored data.
    LinkDepthExceeded {
        /// Locale the lookup ran against.
        locale: String,
        /// Key whose link chain did not terminate.
        key: String,
    },
    /// The resolved string contains a placeholder with no matching value in
    /// the supplied interpolation values.
    MissingInterpolationValue {
        /// Placeholder name with no supplied value.
        name: String,
    },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::MissingTranslation { locale, key } => {
                write!(f, "translation missing: {locale}:{key}")
            },
            TranslateError::LinkDepthExceeded { locale, key } => {
                write!(f, "link chain too deep resolving {locale}:{key}")
            },
            TranslateError::MissingInterpolationValue { name } => {
                write!(f, "missing interpolation value: {name}")
            },
        }
    }
}

impl std::error::Error for TranslateError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("unknown capability: bogus");
        assert_eq!(err.to_string(), "unknown capability: bogus");
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- DatasetError -----------------------------------------------------

    #[test]
    fn dataset_display_shows_message() {
        let err = DatasetError::new("no such file");
        assert_eq!(err.to_string(), "no such file");
    }

    #[test]
    fn dataset_from_io_error_mentions_read() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = DatasetError::from(io);
        assert!(err.message().contains("failed to read dataset"));
    }

    #[test]
    fn dataset_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<DatasetError>();
    }

    // -- TranslateError ---------------------------------------------------

    #[test]
    fn missing_translation_names_locale_and_key() {
        let err = TranslateError::MissingTranslation {
            locale: "en".to_string(),
            key: "activerecord.models.another".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "translation missing: en:activerecord.models.another"
        );
    }

    #[test]
    fn missing_interpolation_names_placeholder() {
        let err = TranslateError::MissingInterpolationValue {
            name: "model".to_string(),
        };
        assert!(err.to_string().contains("model"));
    }

    #[test]
    fn translate_clone_and_eq() {
        let a = TranslateError::LinkDepthExceeded {
            locale: "en".to_string(),
            key: "loop.a".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
