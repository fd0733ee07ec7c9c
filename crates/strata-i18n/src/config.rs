//! Engine configuration

use crate::interpolate::UnmatchedPlaceholders;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Callback invoked when a key resolves to nothing anywhere in the chain
///
/// Receives the requested key and the locale the lookup started from, and
/// returns the replacement text.
pub type MissingKeyHandler = Box<dyn Fn(&str, &Locale) -> String + Send + Sync>;

/// Configuration for a [`Translator`](crate::Translator) instance
///
/// Deserializable from YAML/JSON config files apart from the handler
/// callback, which can only be installed programmatically.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Ordered catalog source locations (files, or directories of files)
    ///
    /// Later entries override earlier ones key-for-key within the same
    /// locale. Missing entries are skipped.
    pub load_path: Vec<PathBuf>,
    /// Final fallback locale and the default for lookups with no override
    pub default_locale: Locale,
    /// Locales to load catalogs for; empty means all locales found
    pub available_locales: Vec<Locale>,
    /// Optional intermediate step in the fallback chain
    pub fallback_locale: Option<Locale>,
    /// Surface missing keys as errors instead of marker strings
    pub raise_on_missing: bool,
    /// Custom replacement for missing keys, consulted before raising
    #[serde(skip)]
    pub missing_key_handler: Option<MissingKeyHandler>,
    /// Template for the default missing-key marker
    ///
    /// `%{key}` and `%{locale}` are available as placeholders.
    pub missing_key_format: String,
    /// What to do with `%{name}` placeholders that have no argument
    pub unmatched_placeholders: UnmatchedPlaceholders,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            load_path: Vec::new(),
            default_locale: Locale::default(),
            available_locales: Vec::new(),
            fallback_locale: None,
            raise_on_missing: false,
            missing_key_handler: None,
            missing_key_format: "[missing: %{key}]".to_string(),
            unmatched_placeholders: UnmatchedPlaceholders::default(),
        }
    }
}

impl I18nConfig {
    /// Create a configuration with the given default locale
    pub fn new(default_locale: impl Into<Locale>) -> Self {
        Self {
            default_locale: default_locale.into(),
            ..Self::default()
        }
    }

    /// Set the ordered catalog source locations
    pub fn load_path<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.load_path = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict catalog loading to the given locales
    pub fn available_locales<I, L>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Locale>,
    {
        self.available_locales = locales.into_iter().map(Into::into).collect();
        self
    }

    /// Set the intermediate fallback locale
    pub fn fallback_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    /// Surface missing keys as errors
    pub fn raise_on_missing(mut self, raise: bool) -> Self {
        self.raise_on_missing = raise;
        self
    }

    /// Install a missing-key handler callback
    pub fn missing_key_handler(
        mut self,
        handler: impl Fn(&str, &Locale) -> String + Send + Sync + 'static,
    ) -> Self {
        self.missing_key_handler = Some(Box::new(handler));
        self
    }

    /// Override the missing-key marker template
    pub fn missing_key_format(mut self, format: impl Into<String>) -> Self {
        self.missing_key_format = format.into();
        self
    }

    /// Set the unmatched-placeholder policy
    pub fn unmatched_placeholders(mut self, policy: UnmatchedPlaceholders) -> Self {
        self.unmatched_placeholders = policy;
        self
    }
}

impl fmt::Debug for I18nConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18nConfig")
            .field("load_path", &self.load_path)
            .field("default_locale", &self.default_locale)
            .field("available_locales", &self.available_locales)
            .field("fallback_locale", &self.fallback_locale)
            .field("raise_on_missing", &self.raise_on_missing)
            .field(
                "missing_key_handler",
                &self.missing_key_handler.as_ref().map(|_| "<handler>"),
            )
            .field("missing_key_format", &self.missing_key_format)
            .field("unmatched_placeholders", &self.unmatched_placeholders)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = I18nConfig::default();
        assert_eq!(config.default_locale, "en");
        assert!(config.load_path.is_empty());
        assert!(!config.raise_on_missing);
        assert_eq!(config.missing_key_format, "[missing: %{key}]");
    }

    #[test]
    fn builder_chain() {
        let config = I18nConfig::new("es")
            .load_path(["a", "b"])
            .fallback_locale("en")
            .raise_on_missing(true);
        assert_eq!(config.default_locale, "es");
        assert_eq!(config.load_path.len(), 2);
        assert_eq!(config.fallback_locale, Some(Locale::new("en")));
        assert!(config.raise_on_missing);
    }

    #[test]
    fn deserializes_from_yaml() {
        let config: I18nConfig = serde_yaml::from_str(
            r#"
load_path: ["config/locales"]
default_locale: "de"
fallback_locale: "en"
unmatched_placeholders: warn
"#,
        )
        .unwrap();
        assert_eq!(config.default_locale, "de");
        assert_eq!(config.fallback_locale, Some(Locale::new("en")));
        assert_eq!(
            config.unmatched_placeholders,
            UnmatchedPlaceholders::Warn
        );
        assert!(config.missing_key_handler.is_none());
    }
}
