//! Error types for translation-resolution operations

use crate::locale::Locale;
use thiserror::Error;

/// Errors that can occur during translation-resolution operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to read a catalog source file
    #[error("failed to read translation source: {path}")]
    SourceRead {
        /// Path of the unreadable source
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a catalog source document
    #[error("failed to parse translation source {path}: {message}")]
    SourceParse {
        /// Path of the malformed source
        path: String,
        /// Parser diagnostic
        message: String,
    },

    /// No entry found for a key anywhere in the fallback chain
    ///
    /// Only surfaced when `raise_on_missing` is set; the default policy
    /// renders a marker string instead.
    #[error("translation missing: {key} (locale: {locale})")]
    MissingTranslation {
        /// The requested dotted key path
        key: String,
        /// The locale the lookup started from
        locale: Locale,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
