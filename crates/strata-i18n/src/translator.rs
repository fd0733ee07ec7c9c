//! Public translation API
//!
//! [`Translator`] is an owned service instance: the host application builds
//! one at startup from an [`I18nConfig`] and hands references (or an `Arc`)
//! to every consumer. There is no process-wide static, which keeps
//! per-tenant catalogs and test isolation possible.

use crate::catalog::TranslationEntry;
use crate::config::I18nConfig;
use crate::context::{self, LocaleGuard};
use crate::error::{I18nError, I18nResult};
use crate::format;
use crate::interpolate::{self, UnmatchedPlaceholders};
use crate::locale::Locale;
use crate::plural;
use crate::resolve;
use crate::store::{CatalogSet, CatalogStore};
use arc_swap::ArcSwap;
use chrono::{DateTime, TimeZone};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-call options for [`Translator::translate`]
///
/// A chainable builder carrying the locale override, the caller default,
/// the pluralization count, and named interpolation parameters.
#[derive(Debug, Clone, Default)]
pub struct TranslationRequest {
    locale: Option<Locale>,
    default: Option<String>,
    count: Option<i64>,
    params: HashMap<String, String>,
}

impl TranslationRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the lookup locale for this call only
    pub fn locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Text to use when the key resolves to nothing
    ///
    /// Takes precedence over every other missing-key policy and is itself
    /// interpolated.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Count used to select a pluralization category
    ///
    /// Also exposed to interpolation as `%{count}` in its decimal form.
    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Add a named interpolation parameter
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// The translation-resolution engine
///
/// All operations are bounded synchronous computations over in-memory data
/// once the catalogs are loaded; loading itself happens lazily on first
/// access and at most once regardless of concurrency.
#[derive(Debug)]
pub struct Translator {
    config: ArcSwap<I18nConfig>,
    store: CatalogStore,
}

impl Translator {
    /// Create an engine from a configuration
    ///
    /// Construction is cheap; catalogs load on first access.
    pub fn new(config: I18nConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
            store: CatalogStore::new(),
        }
    }

    /// Replace the configuration
    ///
    /// Catalogs are invalidated and rebuilt lazily on the next access.
    pub fn configure(&self, config: I18nConfig) {
        self.config.store(Arc::new(config));
        self.store.invalidate();
        debug!("translator reconfigured");
    }

    /// Resolve, pluralize, and interpolate a translation
    ///
    /// Returns `Err` only for a missing key under `raise_on_missing`; every
    /// other missing-key policy produces an `Ok` string.
    pub fn translate(&self, key: &str, request: &TranslationRequest) -> I18nResult<String> {
        let config = self.config.load_full();
        let set = self.store.ensure_loaded(&config);
        let locale = self.lookup_locale(request.locale.as_ref(), &config);

        let template = match resolve::resolve(&set, key, &locale, &config) {
            Some(TranslationEntry::Scalar(text)) => Some(text.as_str()),
            Some(TranslationEntry::Plural(forms)) => plural::select(forms, request.count),
            None => None,
        };

        match template {
            Some(template) => Ok(render(template, request, &config)),
            None => missing(key, &locale, request, &config),
        }
    }

    /// Whether the fallback chain defines an entry for `key`
    ///
    /// No pluralization or interpolation is performed.
    pub fn exists(&self, key: &str, locale: Option<&Locale>) -> bool {
        let config = self.config.load_full();
        let set = self.store.ensure_loaded(&config);
        let locale = self.lookup_locale(locale, &config);
        resolve::resolve(&set, key, &locale, &config).is_some()
    }

    /// Format a timestamp using a catalog-resolved format name
    ///
    /// The format name (e.g. `"date.long"`) resolves like any translation
    /// key; misses fall back to the fixed default-pattern table and finally
    /// to an ISO-8601 pattern. This path never fails.
    pub fn localize<Tz: TimeZone>(
        &self,
        value: &DateTime<Tz>,
        format_name: &str,
        locale: Option<&Locale>,
    ) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let config = self.config.load_full();
        let set = self.store.ensure_loaded(&config);
        let locale = self.lookup_locale(locale, &config);

        if let Some(TranslationEntry::Scalar(pattern)) =
            resolve::resolve(&set, format_name, &locale, &config)
        {
            if let Some(text) = format::format_timestamp(value, pattern) {
                return text;
            }
            warn!(
                format = format_name,
                locale = %locale,
                "catalog format pattern is invalid, falling back"
            );
        }

        if let Some(pattern) = format::default_pattern(format_name) {
            if let Some(text) = format::format_timestamp(value, pattern) {
                return text;
            }
        }

        format::format_timestamp(value, format::ISO_PATTERN)
            .unwrap_or_else(|| value.to_rfc3339())
    }

    /// Format a number using catalog-resolved separators
    ///
    /// `number.format.delimiter` groups the integer part (default `,`) and
    /// `number.format.separator` marks the decimal point (default `.`).
    pub fn format_number(&self, value: f64, precision: usize, locale: Option<&Locale>) -> String {
        let config = self.config.load_full();
        let set = self.store.ensure_loaded(&config);
        let locale = self.lookup_locale(locale, &config);

        let delimiter = scalar_or(&set, "number.format.delimiter", &locale, &config, ",");
        let separator = scalar_or(&set, "number.format.separator", &locale, &config, ".");
        format::format_number(value, precision, delimiter, separator)
    }

    /// Run `body` with a scoped locale override
    ///
    /// The prior locale is restored on every exit path, including panics.
    /// Overrides nest; the innermost wins.
    pub fn with_locale<T>(&self, locale: impl Into<Locale>, body: impl FnOnce() -> T) -> T {
        let _guard = LocaleGuard::new(locale);
        body()
    }

    /// The locale lookups use when no explicit override is given
    pub fn current_locale(&self) -> Locale {
        context::current_override()
            .unwrap_or_else(|| self.config.load().default_locale.clone())
    }

    /// Rebuild all catalogs from the current sources and swap them in
    ///
    /// Concurrent readers see either the old or the new catalogs, never a
    /// partially rebuilt set.
    pub fn reload(&self) {
        let config = self.config.load_full();
        self.store.reload(&config);
    }

    /// Drop all catalogs and configuration (test utility)
    pub fn reset(&self) {
        self.config.store(Arc::new(I18nConfig::default()));
        self.store.reset();
    }

    /// Number of full catalog builds performed by this instance
    pub fn load_count(&self) -> u64 {
        self.store.load_count()
    }

    fn lookup_locale(&self, explicit: Option<&Locale>, config: &I18nConfig) -> Locale {
        explicit
            .cloned()
            .or_else(context::current_override)
            .unwrap_or_else(|| config.default_locale.clone())
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(I18nConfig::default())
    }
}

/// Interpolate a selected template with the request's parameters
///
/// An explicit `count` param wins over the numeric count's decimal form.
fn render(template: &str, request: &TranslationRequest, config: &I18nConfig) -> String {
    interpolate::apply(
        template,
        |name| {
            if let Some(value) = request.params.get(name) {
                return Some(value.clone());
            }
            if name == "count" {
                if let Some(count) = request.count {
                    return Some(count.to_string());
                }
            }
            None
        },
        config.unmatched_placeholders,
    )
}

/// Apply the missing-key policy chain
///
/// Precedence: caller default, configured handler, raise, marker string.
fn missing(
    key: &str,
    locale: &Locale,
    request: &TranslationRequest,
    config: &I18nConfig,
) -> I18nResult<String> {
    if let Some(default) = &request.default {
        debug!(key = key, "using caller default for missing translation");
        return Ok(render(default, request, config));
    }
    if let Some(handler) = &config.missing_key_handler {
        return Ok(handler(key, locale));
    }
    if config.raise_on_missing {
        return Err(I18nError::MissingTranslation {
            key: key.to_string(),
            locale: locale.clone(),
        });
    }

    warn!(key = key, locale = %locale, "translation missing, rendering marker");
    Ok(interpolate::apply(
        &config.missing_key_format,
        |name| match name {
            "key" => Some(key.to_string()),
            "locale" => Some(locale.to_string()),
            _ => None,
        },
        UnmatchedPlaceholders::Keep,
    ))
}

fn scalar_or<'a>(
    set: &'a CatalogSet,
    key: &str,
    locale: &Locale,
    config: &I18nConfig,
    default: &'a str,
) -> &'a str {
    match resolve::resolve(set, key, locale, config) {
        Some(TranslationEntry::Scalar(text)) => text.as_str(),
        _ => default,
    }
}

/// Build a [`TranslationRequest`] from a terse key-value list
///
/// ```
/// use strata_i18n::translation_request;
///
/// let request = translation_request!(count: 3, "name" => "Ada");
/// ```
#[macro_export]
macro_rules! translation_request {
    () => {
        $crate::TranslationRequest::new()
    };
    (count: $count:expr) => {
        $crate::TranslationRequest::new().count($count)
    };
    (count: $count:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let mut request = $crate::TranslationRequest::new().count($count);
        $(
            request = request.param($key, $value);
        )+
        request
    }};
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut request = $crate::TranslationRequest::new();
        $(
            request = request.param($key, $value);
        )+
        request
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_accumulates() {
        let request = TranslationRequest::new()
            .locale("es")
            .count(2)
            .param("name", "Ada");
        assert_eq!(request.locale, Some(Locale::new("es")));
        assert_eq!(request.count, Some(2));
        assert_eq!(request.params.get("name").map(String::as_str), Some("Ada"));
    }

    #[test]
    fn macro_forms() {
        let request = translation_request!();
        assert!(request.params.is_empty());

        let request = translation_request!(count: 5);
        assert_eq!(request.count, Some(5));

        let request = translation_request!("a" => "1", "b" => "2");
        assert_eq!(request.params.len(), 2);

        let request = translation_request!(count: 1, "name" => "Ada");
        assert_eq!(request.count, Some(1));
        assert_eq!(request.params.len(), 1);
    }

    #[test]
    fn empty_engine_renders_marker() {
        let translator = Translator::new(I18nConfig::new("en"));
        let text = translator
            .translate("nope.nothing", &TranslationRequest::new())
            .unwrap();
        assert_eq!(text, "[missing: nope.nothing]");
    }

    #[test]
    fn explicit_count_param_wins_over_numeric_count() {
        let config = I18nConfig::new("en");
        let request = TranslationRequest::new()
            .count(4)
            .param("count", "four");
        assert_eq!(render("%{count}", &request, &config), "four");
    }
}
